/*!
 * Application configuration: loading, validating and saving settings.
 */

use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::providers::deepl::DEEPL_FREE_API_URL;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Term dictionary settings
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Upstream translation services
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Term dictionary configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DictionaryConfig {
    /// Path of the dictionary JSON file
    #[serde(default = "default_dictionary_path")]
    pub path: String,

    /// Seconds a loaded dictionary is reused before reloading
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub google: GoogleConfig,

    #[serde(default)]
    pub deepl: DeepLConfig,
}

/// Google Apps Script translation endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoogleConfig {
    /// Deployed script URL
    #[serde(default = "String::new")]
    pub script_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            script_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// DeepL API settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeepLConfig {
    /// Translate endpoint URL
    #[serde(default = "default_deepl_api_url")]
    pub api_url: String,

    /// Authentication key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DeepLConfig {
    fn default() -> Self {
        Self {
            api_url: default_deepl_api_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_dictionary_path() -> String {
    "config/dictionary.json".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    3600
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_deepl_api_url() -> String {
    DEEPL_FREE_API_URL.to_string()
}

impl Config {
    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load a configuration file, writing a default one first if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.dictionary.path.trim().is_empty() {
            return Err(anyhow!("Dictionary path must not be empty"));
        }
        if self.dictionary.cache_ttl_secs == 0 {
            return Err(anyhow!("Dictionary cache TTL must be greater than zero"));
        }

        validate_url("Google script URL", &self.providers.google.script_url)?;
        if self.providers.google.timeout_secs == 0 {
            return Err(anyhow!("Google timeout must be greater than zero"));
        }

        validate_url("DeepL API URL", &self.providers.deepl.api_url)?;
        if self.providers.deepl.api_key.trim().is_empty() {
            return Err(anyhow!("DeepL API key is required"));
        }
        if self.providers.deepl.timeout_secs == 0 {
            return Err(anyhow!("DeepL timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Dictionary cache lifetime
    pub fn dictionary_ttl(&self) -> Duration {
        Duration::from_secs(self.dictionary.cache_ttl_secs)
    }
}

fn validate_url(label: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} is required", label));
    }

    let url = Url::parse(value).context(format!("{} is not a valid URL: {}", label, value))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!("{} must use http or https, got '{}'", label, other)),
    }
}
