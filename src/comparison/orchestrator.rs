/*!
 * Comparison orchestrator for evaluating two translation providers.
 *
 * A comparison moves through these phases:
 * 1. Preprocessed: dictionary terms substituted for the target language
 * 2. ForwardTranslated: both providers translate source -> target concurrently
 * 3. BackTranslated: both providers translate their output back concurrently
 * 4. Scored: each back-translation is scored against the original
 * 5. Done: the higher score is recommended, ties going to the primary
 *
 * Any failure moves the comparison to `Failed` and aborts it without a
 * partial report. Provider calls are never retried.
 */

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::app_config::Config;
use crate::dictionary::{DictionaryCache, post_process};
use crate::errors::{AppError, ProviderError, TranslationError, ValidationError};
use crate::evaluation::final_score;
use crate::language_utils::LanguageId;
use crate::providers::{DeepLProvider, GoogleScriptProvider, Provider};

use super::report::{ComparisonResponse, ScoreReport, TranslationCandidate};

/// Phases of a single comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonPhase {
    Idle,
    Preprocessed,
    ForwardTranslated,
    BackTranslated,
    Scored,
    Done,
    Failed,
}

impl ComparisonPhase {
    /// Phase that follows on success, `None` once terminal
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Preprocessed),
            Self::Preprocessed => Some(Self::ForwardTranslated),
            Self::ForwardTranslated => Some(Self::BackTranslated),
            Self::BackTranslated => Some(Self::Scored),
            Self::Scored => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Whether the comparison has finished
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether moving to `next` is a legal transition
    pub fn can_advance_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == Self::Failed || self.next() == Some(next)
    }
}

/// Result of a comparison together with the phases it went through
#[derive(Debug)]
pub struct ComparisonOutcome {
    pub result: Result<ScoreReport, TranslationError>,
    /// Every phase visited, starting with `Idle`
    pub phases: Vec<ComparisonPhase>,
    pub duration: Duration,
}

impl ComparisonOutcome {
    /// Final phase reached
    pub fn final_phase(&self) -> ComparisonPhase {
        self.phases.last().copied().unwrap_or(ComparisonPhase::Idle)
    }
}

/// Records phase transitions of one comparison
#[derive(Debug)]
struct PhaseTracker {
    phases: Vec<ComparisonPhase>,
}

impl PhaseTracker {
    fn new() -> Self {
        Self {
            phases: vec![ComparisonPhase::Idle],
        }
    }

    fn current(&self) -> ComparisonPhase {
        self.phases.last().copied().unwrap_or(ComparisonPhase::Idle)
    }

    fn advance(&mut self, next: ComparisonPhase) {
        let current = self.current();
        debug_assert!(current.can_advance_to(next), "illegal transition {:?} -> {:?}", current, next);
        debug!("Comparison phase {:?} -> {:?}", current, next);
        self.phases.push(next);
    }
}

/// Runs comparisons between a primary and a secondary provider
#[derive(Debug, Clone)]
pub struct ComparisonService {
    primary: Arc<dyn Provider>,
    secondary: Arc<dyn Provider>,
    dictionary: DictionaryCache,
}

impl ComparisonService {
    /// Create a service; fails if the providers share a name or the
    /// dictionary cannot be loaded
    pub fn new(
        primary: Arc<dyn Provider>,
        secondary: Arc<dyn Provider>,
        dictionary: DictionaryCache,
    ) -> Result<Self, TranslationError> {
        if primary.name() == secondary.name() {
            return Err(TranslationError::provider(
                secondary.name(),
                ProviderError::Configuration(format!(
                    "both providers are named '{}'",
                    primary.name()
                )),
            ));
        }

        let loaded = dictionary.get()?;
        debug!(
            "Comparison service ready: primary '{}', secondary '{}', {} dictionary terms",
            primary.name(),
            secondary.name(),
            loaded.len()
        );

        Ok(Self {
            primary,
            secondary,
            dictionary,
        })
    }

    /// Build the Google/DeepL service described by a configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let google = GoogleScriptProvider::new(
            config.providers.google.script_url.clone(),
            Duration::from_secs(config.providers.google.timeout_secs),
        )?;
        let deepl = DeepLProvider::new(
            config.providers.deepl.api_url.clone(),
            config.providers.deepl.api_key.clone(),
            Duration::from_secs(config.providers.deepl.timeout_secs),
        )?;
        let dictionary = DictionaryCache::from_file(&config.dictionary.path, config.dictionary_ttl());

        Ok(Self::new(Arc::new(google), Arc::new(deepl), dictionary)?)
    }

    /// Name of the provider that wins ties
    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    pub fn secondary_name(&self) -> &str {
        self.secondary.name()
    }

    /// Compare both providers on `text`, with backend language ids
    pub async fn compare(
        &self,
        text: &str,
        source_id: i64,
        target_id: i64,
    ) -> Result<ScoreReport, TranslationError> {
        self.compare_traced(text, source_id, target_id).await.result
    }

    /// Compare and wrap the outcome in the caller-facing payload
    pub async fn respond(&self, text: &str, source_id: i64, target_id: i64) -> ComparisonResponse {
        ComparisonResponse::from(self.compare(text, source_id, target_id).await)
    }

    /// Compare and also report the phases visited
    pub async fn compare_traced(&self, text: &str, source_id: i64, target_id: i64) -> ComparisonOutcome {
        let start_time = Instant::now();
        let mut tracker = PhaseTracker::new();

        let result = self.run(&mut tracker, text, source_id, target_id).await;

        match &result {
            Ok(report) => {
                tracker.advance(ComparisonPhase::Done);
                info!("Recommended provider: {}", report.recommended_provider());
            }
            Err(e) => {
                warn!("Comparison failed during {:?}: {}", tracker.current(), e);
                tracker.advance(ComparisonPhase::Failed);
            }
        }

        ComparisonOutcome {
            result,
            phases: tracker.phases,
            duration: start_time.elapsed(),
        }
    }

    async fn run(
        &self,
        tracker: &mut PhaseTracker,
        text: &str,
        source_id: i64,
        target_id: i64,
    ) -> Result<ScoreReport, TranslationError> {
        let source = LanguageId::from_id(source_id)?;
        let target = LanguageId::from_id(target_id)?;
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText.into());
        }

        // Phase 1: dictionary substitution
        let dictionary = self.dictionary.get()?;
        let preprocessed = dictionary.apply(text, target);
        tracker.advance(ComparisonPhase::Preprocessed);

        // Phase 2: forward translation
        let (primary_forward, secondary_forward) = tokio::try_join!(
            translate_with(self.primary.as_ref(), &preprocessed, source, target),
            translate_with(self.secondary.as_ref(), &preprocessed, source, target),
        )?;
        tracker.advance(ComparisonPhase::ForwardTranslated);

        // Phase 3: back translation
        let (primary_back, secondary_back) = tokio::try_join!(
            translate_with(self.primary.as_ref(), &primary_forward, target, source),
            translate_with(self.secondary.as_ref(), &secondary_forward, target, source),
        )?;
        tracker.advance(ComparisonPhase::BackTranslated);

        // Phase 4: scoring
        let primary_score = final_score(text, &primary_back, target);
        let secondary_score = final_score(text, &secondary_back, target);
        debug!(
            "Scores: {} = {:.2}, {} = {:.2}",
            self.primary.name(),
            primary_score,
            self.secondary.name(),
            secondary_score
        );
        tracker.advance(ComparisonPhase::Scored);

        Ok(ScoreReport::from_pair(
            TranslationCandidate::new(self.primary.name(), primary_forward, primary_back, primary_score),
            TranslationCandidate::new(self.secondary.name(), secondary_forward, secondary_back, secondary_score),
        ))
    }
}

/// Call one provider and post-process its output
async fn translate_with(
    provider: &dyn Provider,
    text: &str,
    source: LanguageId,
    target: LanguageId,
) -> Result<String, TranslationError> {
    provider
        .translate(text, source, target)
        .await
        .map(|translated| post_process(&translated))
        .map_err(|e| TranslationError::provider(provider.name(), e))
}
