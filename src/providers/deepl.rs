use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::language_utils::LanguageId;
use crate::providers::{Provider, truncate_body};

/// Provider name used in reports
pub const DEEPL_PROVIDER_NAME: &str = "deepl";

/// Default endpoint of the DeepL free API
pub const DEEPL_FREE_API_URL: &str = "https://api-free.deepl.com/v2/translate";

/// DeepL REST API client
#[derive(Debug, Clone)]
pub struct DeepLProvider {
    /// Translate endpoint URL
    api_url: String,
    /// Authentication key
    api_key: String,
    /// HTTP client for making requests
    client: Client,
}

/// Response body of the translate endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    detected_source_language: Option<String>,
}

impl DeepLProvider {
    /// Create a new client
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::Configuration("DeepL API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_url: api_url.into(),
            api_key,
            client,
        })
    }

    /// The endpoint requests are sent to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Extract the first translation from a response body
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let response: TranslateResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("{}: {}", e, truncate_body(body, 200))))?;

        let translation = response
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse {
                provider: DEEPL_PROVIDER_NAME.to_string(),
                detail: "no translations in response".to_string(),
            })?;

        translation.text.ok_or_else(|| ProviderError::MalformedResponse {
            provider: DEEPL_PROVIDER_NAME.to_string(),
            detail: "missing 'text' field".to_string(),
        })
    }
}

#[async_trait]
impl Provider for DeepLProvider {
    fn name(&self) -> &str {
        DEEPL_PROVIDER_NAME
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageId,
        target: LanguageId,
    ) -> Result<String, ProviderError> {
        debug!("DeepL request {} -> {} ({} chars)", source.deepl_code(), target.deepl_code(), text.chars().count());

        let params = [
            ("auth_key", self.api_key.as_str()),
            ("text", text),
            ("source_lang", source.deepl_code()),
            ("target_lang", target.deepl_code()),
        ];

        let response = self.client.post(&self.api_url).form(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("DeepL API error ({}): {}", status, truncate_body(&body, 500));
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: truncate_body(&body, 200),
            });
        }

        Self::parse_response(&body)
    }
}
