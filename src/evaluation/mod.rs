/*!
 * Back-translation fidelity evaluation.
 *
 * This module scores how faithfully a back-translation reproduces the
 * original text:
 * - **Tokenizer**: language-aware comparison units
 * - **N-grams**: contiguous token sequences for BLEU
 * - **Metrics**: Levenshtein, Jaccard, Cosine, BLEU and Korean naturalness
 * - **Weights**: per-language metric weighting
 * - **Scorer**: weighted aggregation into a 0-100 score
 */

pub mod metrics;
pub mod ngrams;
pub mod scorer;
pub mod tokenizer;
pub mod weights;

// Re-export main types
pub use metrics::{bleu_score, cosine_similarity, jaccard_similarity, korean_naturalness, levenshtein_similarity};
pub use ngrams::{max_order, ngrams};
pub use scorer::{evaluate, final_score, ScoreBreakdown};
pub use tokenizer::tokenize;
pub use weights::{weights_for, WeightProfile};
