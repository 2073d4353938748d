/*!
 * Provider implementations for the machine translation services.
 *
 * This module contains client implementations for the upstream services:
 * - Google: a Google Apps Script translation endpoint
 * - DeepL: the DeepL REST API
 * - Mock: configurable in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::language_utils::LanguageId;

/// Common trait for all translation providers
///
/// Implementations are interchangeable in the comparison service, which
/// calls each provider once forward and once backward per comparison.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Name used as the key in score reports
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target`
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source: LanguageId,
        target: LanguageId,
    ) -> Result<String, ProviderError>;
}

/// Keep at most `max_chars` characters of a response body for error messages
pub(crate) fn truncate_body(body: &str, max_chars: usize) -> String {
    if body.chars().count() > max_chars {
        format!("{}...", body.chars().take(max_chars).collect::<String>())
    } else {
        body.to_string()
    }
}

pub mod deepl;
pub mod google;
pub mod mock;

pub use deepl::DeepLProvider;
pub use google::GoogleScriptProvider;
pub use mock::{MockBehavior, MockProvider, MockRequest};
