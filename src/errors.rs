/*!
 * Error types for the translation judge.
 *
 * This module contains custom error types for the different layers of the
 * comparison engine, using the thiserror crate for ergonomic error definitions.
 * Lower-level errors are never retried or suppressed: they are wrapped into a
 * `TranslationError` at the orchestrator boundary and abort the comparison.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before any provider is called
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Language id outside the supported set (1..=4)
    #[error("Unsupported language id: {0} (expected 1, 2, 3 or 4)")]
    UnsupportedLanguage(i64),

    /// Language code that does not name a supported language
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguageCode(String),

    /// Source text is empty or whitespace only
    #[error("Text to translate must not be empty")]
    EmptyText,
}

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Response parsed but lacks the fields carrying the translation
    #[error("Malformed response from {provider}: {detail}")]
    MalformedResponse {
        /// Provider that produced the response
        provider: String,
        /// What was missing or wrong
        detail: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider client could not be built from its settings
    #[error("Provider configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors raised while loading or validating the term dictionary
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Dictionary file could not be read
    #[error("Failed to read dictionary file {path:?}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Dictionary content is not valid JSON
    #[error("Invalid dictionary JSON: {0}")]
    InvalidJson(String),

    /// A required top-level category is absent
    #[error("Dictionary is missing required category '{0}'")]
    MissingCategory(&'static str),

    /// A category is present but not an object of terms
    #[error("Dictionary category '{category}' is malformed: {reason}")]
    InvalidCategory {
        /// Category name
        category: String,
        /// Why it was rejected
        reason: String,
    },

    /// A single term entry is malformed
    #[error("Dictionary entry '{term}' in '{category}' is malformed: {reason}")]
    InvalidEntry {
        /// Category name
        category: String,
        /// Source-language term
        term: String,
        /// Why it was rejected
        reason: String,
    },

    /// Any other invalid setting
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Errors surfaced to callers of a comparison
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Request rejected before any provider call
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A provider call failed
    #[error("Provider '{provider}' failed: {source}")]
    Provider {
        /// Name of the failing provider
        provider: String,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// The dictionary could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TranslationError {
    /// Wrap a provider error with the provider's name
    pub fn provider(provider: impl Into<String>, source: ProviderError) -> Self {
        Self::Provider {
            provider: provider.into(),
            source,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from configuration or dictionary loading
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a comparison
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
