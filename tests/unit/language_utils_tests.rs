/*!
 * Tests for the supported language table
 */

use translation_judge::errors::ValidationError;
use translation_judge::language_utils::LanguageId;

#[test]
fn test_fromId_allIds_shouldMapToProviderCodes() {
    let expected = [(1, "ja", "JA"), (2, "en", "EN"), (3, "zh", "ZH"), (4, "ko", "KO")];
    for (id, google, deepl) in expected {
        let lang = LanguageId::from_id(id).unwrap();
        assert_eq!(lang.id(), id);
        assert_eq!(lang.code(), google);
        assert_eq!(lang.deepl_code(), deepl);
    }
}

#[test]
fn test_tryFrom_negativeId_shouldFail() {
    let result = LanguageId::try_from(-1);
    assert_eq!(result, Err(ValidationError::UnsupportedLanguage(-1)));
}

#[test]
fn test_fromCode_shouldIgnoreCaseAndWhitespace() {
    assert_eq!(LanguageId::from_code(" ZH ").unwrap(), LanguageId::Chinese);
    assert!(matches!(
        LanguageId::from_code("de"),
        Err(ValidationError::UnsupportedLanguageCode(_))
    ));
}

#[test]
fn test_display_shouldPrintCode() {
    assert_eq!(LanguageId::Korean.to_string(), "ko");
    assert_eq!(format!("{} -> {}", LanguageId::Japanese, LanguageId::English), "ja -> en");
}

#[test]
fn test_serde_shouldUseLowercaseNames() {
    assert_eq!(serde_json::to_string(&LanguageId::Korean).unwrap(), "\"korean\"");
    let lang: LanguageId = serde_json::from_str("\"chinese\"").unwrap();
    assert_eq!(lang, LanguageId::Chinese);
}

#[test]
fn test_name_allLanguages_shouldBeKnown() {
    let names: Vec<&str> = LanguageId::ALL.iter().map(|lang| lang.name()).collect();
    assert_eq!(names, vec!["Japanese", "English", "Chinese", "Korean"]);
}
