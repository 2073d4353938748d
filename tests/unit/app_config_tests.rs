/*!
 * Tests for application configuration functionality
 */

use log::LevelFilter;
use translation_judge::app_config::{Config, LogLevel};

use crate::common::{create_temp_dir, create_test_file};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.dictionary.path, "config/dictionary.json");
    assert_eq!(config.dictionary.cache_ttl_secs, 3600);
    assert!(config.providers.google.script_url.is_empty());
    assert_eq!(config.providers.google.timeout_secs, 30);
    assert_eq!(config.providers.deepl.api_url, "https://api-free.deepl.com/v2/translate");
    assert!(config.providers.deepl.api_key.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// A default config lacks credentials and must not validate
#[test]
fn test_validate_defaultConfig_shouldRequireCredentials() {
    let mut config = Config::default();
    assert!(config.validate().is_err());

    config.providers.google.script_url = "https://script.google.com/macros/s/abc/exec".to_string();
    assert!(config.validate().is_err());

    config.providers.deepl.api_key = "key".to_string();
    assert!(config.validate().is_ok());

    config.providers.google.script_url = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_load_invalidJson_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(dir.path(), "conf.json", "{ \"log_level\": ").unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_load_partialFile_shouldFillDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        dir.path(),
        "conf.json",
        r#"{ "providers": { "deepl": { "api_key": "abc" } }, "log_level": "warn" }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.providers.deepl.api_key, "abc");
    assert_eq!(config.providers.deepl.timeout_secs, 30);
    assert_eq!(config.log_level.to_level_filter(), LevelFilter::Warn);
}

#[test]
fn test_logLevel_serde_shouldBeLowercase() {
    assert_eq!(serde_json::to_string(&LogLevel::Debug).unwrap(), "\"debug\"");
}
