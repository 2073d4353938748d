/*!
 * # Translation Judge
 *
 * A Rust library that picks the better of two machine translations by
 * back-translating each and scoring how faithfully it reproduces the source.
 *
 * ## Features
 *
 * - Japanese, English, Chinese and Korean, identified by backend ids 1 to 4
 * - Dictionary substitution of known menu terms before translation
 * - Google Apps Script and DeepL provider clients
 * - Levenshtein, Jaccard, Cosine and BLEU-like similarity metrics, plus a
 *   Korean naturalness heuristic
 * - Per-language metric weighting into a 0-100 score
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `evaluation`: Tokenizer, n-grams, metrics, weights and scorer
 * - `dictionary`: Term dictionary loading, caching and substitution
 * - `providers`: Client implementations for the translation services:
 *   - `providers::google`: Google Apps Script client
 *   - `providers::deepl`: DeepL API client
 *   - `providers::mock`: In-process provider for tests
 * - `comparison`: Comparison orchestrator and score reports
 * - `language_utils`: Supported languages and their codes
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod comparison;
pub mod dictionary;
pub mod errors;
pub mod evaluation;
pub mod language_utils;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use comparison::{ComparisonResponse, ComparisonService, ScoreReport, TranslationCandidate};
pub use dictionary::{Dictionary, DictionaryCache};
pub use errors::{AppError, ConfigError, ProviderError, TranslationError, ValidationError};
pub use evaluation::{evaluate, final_score, ScoreBreakdown};
pub use language_utils::LanguageId;
pub use providers::Provider;
