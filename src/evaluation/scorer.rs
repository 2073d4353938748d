/*!
 * Aggregation of the similarity metrics into a 0-100 score.
 */

use serde::Serialize;

use crate::language_utils::LanguageId;

use super::metrics::{
    bleu_score, cosine_similarity, jaccard_similarity, korean_naturalness, levenshtein_similarity,
};
use super::weights::WeightProfile;

/// Raw metric values and the weights they were combined with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub levenshtein: f64,
    pub bleu: f64,
    pub jaccard: f64,
    pub cosine: f64,
    pub naturalness: f64,
    pub weights: WeightProfile,
    /// Weighted total on the 0-100 scale, rounded to two decimals
    pub total: f64,
}

impl ScoreBreakdown {
    /// Name of the metric with the lowest raw value among those weighted
    pub fn weakest_metric(&self) -> &'static str {
        let mut scores = vec![
            (self.levenshtein, "levenshtein"),
            (self.bleu, "bleu"),
            (self.jaccard, "jaccard"),
            (self.cosine, "cosine"),
        ];
        if self.weights.uses_naturalness() {
            scores.push((self.naturalness, "naturalness"));
        }

        scores
            .iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Score: {:.2} (levenshtein {:.3}, bleu {:.3}, jaccard {:.3}, cosine {:.3}, naturalness {:.3})",
            self.total, self.levenshtein, self.bleu, self.jaccard, self.cosine, self.naturalness
        )
    }
}

/// Compute every metric for a back-translation and combine them.
pub fn evaluate(original: &str, back_translated: &str, target: LanguageId) -> ScoreBreakdown {
    let weights = WeightProfile::for_language(target);

    let levenshtein = levenshtein_similarity(original, back_translated);
    let bleu = bleu_score(original, back_translated, target);
    let jaccard = jaccard_similarity(original, back_translated);
    let cosine = cosine_similarity(original, back_translated);
    let naturalness = if weights.uses_naturalness() {
        korean_naturalness(back_translated)
    } else {
        0.0
    };

    let weighted = levenshtein * weights.levenshtein
        + bleu * weights.bleu
        + jaccard * weights.jaccard
        + cosine * weights.cosine
        + naturalness * weights.naturalness;

    ScoreBreakdown {
        levenshtein,
        bleu,
        jaccard,
        cosine,
        naturalness,
        weights,
        total: round2((weighted * 100.0).clamp(0.0, 100.0)),
    }
}

/// Final fidelity score in [0, 100], rounded to two decimals.
pub fn final_score(original: &str, back_translated: &str, target: LanguageId) -> f64 {
    evaluate(original, back_translated, target).total
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
