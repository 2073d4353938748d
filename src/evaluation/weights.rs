/*!
 * Per-language metric weighting.
 *
 * Each target language weighs the metrics by what carries meaning in it:
 * - English: BLEU first, since word order and grammar dominate
 * - Chinese: BLEU and cosine, since character occurrence patterns matter
 * - Korean: BLEU and Jaccard for particle and ending accuracy, plus the
 *   naturalness heuristic
 * - Japanese (default): BLEU and cosine over characters
 *
 * Every profile sums to 1.0 so the weighted total stays in [0, 1].
 */

use serde::Serialize;

use crate::language_utils::LanguageId;

/// Weight given to each metric in the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightProfile {
    pub levenshtein: f64,
    pub bleu: f64,
    pub jaccard: f64,
    pub cosine: f64,
    /// Only non-zero for Korean
    pub naturalness: f64,
}

const ENGLISH: WeightProfile = WeightProfile {
    levenshtein: 0.15,
    bleu: 0.40,
    jaccard: 0.25,
    cosine: 0.20,
    naturalness: 0.0,
};

const CHINESE: WeightProfile = WeightProfile {
    levenshtein: 0.15,
    bleu: 0.35,
    jaccard: 0.20,
    cosine: 0.30,
    naturalness: 0.0,
};

const KOREAN: WeightProfile = WeightProfile {
    levenshtein: 0.10,
    bleu: 0.30,
    jaccard: 0.30,
    cosine: 0.15,
    naturalness: 0.15,
};

const DEFAULT: WeightProfile = WeightProfile {
    levenshtein: 0.10,
    bleu: 0.35,
    jaccard: 0.20,
    cosine: 0.35,
    naturalness: 0.0,
};

impl WeightProfile {
    /// Look up the profile for a target language
    pub fn for_language(target: LanguageId) -> Self {
        match target {
            LanguageId::English => ENGLISH,
            LanguageId::Chinese => CHINESE,
            LanguageId::Korean => KOREAN,
            LanguageId::Japanese => DEFAULT,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.levenshtein + self.bleu + self.jaccard + self.cosine + self.naturalness
    }

    /// Whether the naturalness metric takes part in the score
    pub fn uses_naturalness(&self) -> bool {
        self.naturalness > 0.0
    }
}

/// Shorthand for [`WeightProfile::for_language`]
pub fn weights_for(target: LanguageId) -> WeightProfile {
    WeightProfile::for_language(target)
}
