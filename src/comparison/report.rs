/*!
 * Comparison results and their JSON shape.
 *
 * A report serializes as one object keyed by provider name plus the
 * recommended translation, which is the winning provider's forward text:
 *
 * ```json
 * {
 *   "google": { "translation": "Hello", "backTranslation": "こんにちは", "totalScore": 100.0 },
 *   "deepl":  { "translation": "Hi", "backTranslation": "やあ", "totalScore": 12.5 },
 *   "recommended": "Hello"
 * }
 * ```
 */

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::errors::TranslationError;

/// One provider's output for a single comparison
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationCandidate {
    pub provider_name: String,
    /// Text in the target language
    pub forward_text: String,
    /// Forward text translated back to the source language
    pub back_translated_text: String,
    /// Fidelity score in [0, 100]
    pub score: f64,
}

impl TranslationCandidate {
    pub fn new(
        provider_name: impl Into<String>,
        forward_text: impl Into<String>,
        back_translated_text: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            forward_text: forward_text.into(),
            back_translated_text: back_translated_text.into(),
            score,
        }
    }
}

/// Scored candidates and the recommended translation
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    primary: TranslationCandidate,
    secondary: TranslationCandidate,
    secondary_wins: bool,
}

impl ScoreReport {
    /// Build a report for two candidates.
    ///
    /// The secondary is recommended only with a strictly higher score.
    pub fn from_pair(primary: TranslationCandidate, secondary: TranslationCandidate) -> Self {
        let secondary_wins = secondary.score > primary.score;
        Self {
            primary,
            secondary,
            secondary_wins,
        }
    }

    /// Candidates in provider order, primary first
    pub fn candidates(&self) -> [&TranslationCandidate; 2] {
        [&self.primary, &self.secondary]
    }

    /// Forward text of the recommended candidate
    pub fn recommended(&self) -> &str {
        &self.recommended_candidate().forward_text
    }

    /// Name of the provider whose translation is recommended
    pub fn recommended_provider(&self) -> &str {
        &self.recommended_candidate().provider_name
    }

    /// Candidate produced by a given provider
    pub fn candidate(&self, provider_name: &str) -> Option<&TranslationCandidate> {
        self.candidates()
            .into_iter()
            .find(|c| c.provider_name == provider_name)
    }

    /// The candidate whose forward translation is recommended
    pub fn recommended_candidate(&self) -> &TranslationCandidate {
        if self.secondary_wins {
            &self.secondary
        } else {
            &self.primary
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderResult<'a> {
    translation: &'a str,
    back_translation: &'a str,
    total_score: f64,
}

impl Serialize for ScoreReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for candidate in self.candidates() {
            map.serialize_entry(
                &candidate.provider_name,
                &ProviderResult {
                    translation: &candidate.forward_text,
                    back_translation: &candidate.back_translated_text,
                    total_score: candidate.score,
                },
            )?;
        }
        map.serialize_entry("recommended", self.recommended())?;
        map.end()
    }
}

/// Caller-facing payload wrapping a comparison outcome
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ScoreReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparisonResponse {
    /// Create a successful response
    pub fn success(report: ScoreReport) -> Self {
        Self {
            success: true,
            results: Some(report),
            error: None,
        }
    }

    /// Create a failed response
    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<ScoreReport, TranslationError>> for ComparisonResponse {
    fn from(result: Result<ScoreReport, TranslationError>) -> Self {
        match result {
            Ok(report) => Self::success(report),
            Err(e) => Self::failure(&e.to_string()),
        }
    }
}
