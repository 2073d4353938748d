/*!
 * Tests for provider implementations
 */

use std::sync::Arc;
use std::time::Duration;

use translation_judge::errors::ProviderError;
use translation_judge::language_utils::LanguageId;
use translation_judge::providers::deepl::DEEPL_FREE_API_URL;
use translation_judge::providers::{DeepLProvider, GoogleScriptProvider, MockProvider, Provider};

#[test]
fn test_googleParseResponse_shouldAcceptScriptPayload() {
    let text = GoogleScriptProvider::parse_response(r#"{"code":200,"text":"Soy Sauce Ramen"}"#).unwrap();
    assert_eq!(text, "Soy Sauce Ramen");
}

#[test]
fn test_googleParseResponse_failureCode_shouldBeApiError() {
    let result = GoogleScriptProvider::parse_response(r#"{"code":500,"text":"Exception"}"#);
    assert!(matches!(result, Err(ProviderError::ApiError { status_code: 500, .. })));
}

#[test]
fn test_deeplParseResponse_shouldTakeFirstTranslation() {
    let body = r#"{"translations":[{"detected_source_language":"JA","text":"Miso Ramen"}]}"#;
    assert_eq!(DeepLProvider::parse_response(body).unwrap(), "Miso Ramen");
}

#[test]
fn test_deeplParseResponse_missingTranslations_shouldBeMalformed() {
    let result = DeepLProvider::parse_response("{}");
    match result {
        Err(ProviderError::MalformedResponse { provider, .. }) => assert_eq!(provider, "deepl"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_providers_shouldReportNames() {
    let google = GoogleScriptProvider::new("https://script.google.com/macros/s/x/exec", Duration::from_secs(5)).unwrap();
    let deepl = DeepLProvider::new(DEEPL_FREE_API_URL, "key", Duration::from_secs(5)).unwrap();

    let providers: Vec<Arc<dyn Provider>> = vec![Arc::new(google), Arc::new(deepl)];
    let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["google", "deepl"]);
}

#[tokio::test]
async fn test_mockProvider_asTraitObject_shouldCountRequests() {
    let mock = MockProvider::echo().named("google");
    let handle = mock.clone();
    let provider: Arc<dyn Provider> = Arc::new(mock);

    let text = provider
        .translate("醤油ラーメン", LanguageId::Japanese, LanguageId::English)
        .await
        .unwrap();

    assert_eq!(text, "醤油ラーメン");
    assert_eq!(handle.request_count(), 1);
}

#[test]
fn test_mockProvider_blockingCall_shouldRejectWithFailure() {
    let provider = MockProvider::failing().named("deepl");
    let result = tokio_test::block_on(provider.translate("餃子", LanguageId::Japanese, LanguageId::Korean));
    assert!(matches!(result, Err(ProviderError::ApiError { status_code: 500, .. })));
}
