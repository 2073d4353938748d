use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::language_utils::LanguageId;
use crate::providers::{Provider, truncate_body};

/// Provider name used in reports
pub const GOOGLE_PROVIDER_NAME: &str = "google";

/// Google Apps Script translation endpoint client
///
/// The script is deployed as a web app that takes `text`, `source` and
/// `target` query parameters and answers with `{"code": 200, "text": "..."}`.
#[derive(Debug, Clone)]
pub struct GoogleScriptProvider {
    /// Deployed script URL
    script_url: String,
    /// HTTP client for making requests
    client: Client,
}

/// Response body of the translation script
#[derive(Debug, Deserialize)]
struct ScriptResponse {
    /// Status reported by the script itself
    #[serde(default)]
    code: Option<u16>,
    /// Translated text
    #[serde(default)]
    text: Option<String>,
}

impl GoogleScriptProvider {
    /// Create a new client for the given script URL
    pub fn new(script_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            script_url: script_url.into(),
            client,
        })
    }

    /// The script URL requests are sent to
    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    /// Extract the translated text from a script response body
    pub fn parse_response(body: &str) -> Result<String, ProviderError> {
        let response: ScriptResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(format!("{}: {}", e, truncate_body(body, 200))))?;

        if let Some(code) = response.code {
            if code != 200 {
                return Err(ProviderError::ApiError {
                    status_code: code,
                    message: "Translation script reported failure".to_string(),
                });
            }
        }

        response.text.ok_or_else(|| ProviderError::MalformedResponse {
            provider: GOOGLE_PROVIDER_NAME.to_string(),
            detail: "missing 'text' field".to_string(),
        })
    }
}

#[async_trait]
impl Provider for GoogleScriptProvider {
    fn name(&self) -> &str {
        GOOGLE_PROVIDER_NAME
    }

    async fn translate(
        &self,
        text: &str,
        source: LanguageId,
        target: LanguageId,
    ) -> Result<String, ProviderError> {
        debug!("Google script request {} -> {} ({} chars)", source, target, text.chars().count());

        let response = self
            .client
            .get(&self.script_url)
            .query(&[("text", text), ("source", source.code()), ("target", target.code())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Google script error ({}): {}", status, truncate_body(&body, 500));
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: truncate_body(&body, 200),
            });
        }

        Self::parse_response(&body)
    }
}
