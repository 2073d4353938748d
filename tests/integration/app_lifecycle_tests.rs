/*!
 * Tests for the configuration to service lifecycle
 */

use translation_judge::app_config::Config;
use translation_judge::comparison::ComparisonService;
use translation_judge::errors::{AppError, ProviderError, TranslationError};

use crate::common::{create_temp_dir, create_test_dictionary};

fn config_with_dictionary(path: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.dictionary.path = path.to_string_lossy().to_string();
    config.providers.google.script_url = "https://script.google.com/macros/s/test/exec".to_string();
    config.providers.deepl.api_key = "test-key".to_string();
    config
}

#[test]
fn test_fromConfig_validConfig_shouldBuildGoogleAndDeepl() {
    let dir = create_temp_dir().unwrap();
    let dictionary = create_test_dictionary(dir.path()).unwrap();
    let config = config_with_dictionary(&dictionary);
    assert!(config.validate().is_ok());

    let service = ComparisonService::from_config(&config).unwrap();

    assert_eq!(service.primary_name(), "google");
    assert_eq!(service.secondary_name(), "deepl");
}

#[test]
fn test_fromConfig_missingDictionary_shouldReturnConfigError() {
    let dir = create_temp_dir().unwrap();
    let config = config_with_dictionary(&dir.path().join("missing.json"));

    let result = ComparisonService::from_config(&config);

    assert!(matches!(
        result,
        Err(AppError::Translation(TranslationError::Config(_)))
    ));
}

#[test]
fn test_fromConfig_emptyApiKey_shouldReturnProviderError() {
    let dir = create_temp_dir().unwrap();
    let dictionary = create_test_dictionary(dir.path()).unwrap();
    let mut config = config_with_dictionary(&dictionary);
    config.providers.deepl.api_key = String::new();

    let result = ComparisonService::from_config(&config);

    assert!(matches!(
        result,
        Err(AppError::Provider(ProviderError::Configuration(_)))
    ));
}

#[test]
fn test_loadOrCreate_missingFile_shouldWriteDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let created = Config::load_or_create(&path).unwrap();
    assert!(path.exists());

    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(created, reloaded);
    assert_eq!(reloaded, Config::default());
}

#[test]
fn test_saveAndLoad_shouldPreserveOverrides() {
    let dir = create_temp_dir().unwrap();
    let dictionary = create_test_dictionary(dir.path()).unwrap();
    let path = dir.path().join("conf.json");
    let mut config = config_with_dictionary(&dictionary);
    config.dictionary.cache_ttl_secs = 60;

    config.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}
