/*!
 * End-to-end comparison tests with mock providers.
 *
 * Each test drives a full comparison (dictionary substitution, forward and
 * back translation, scoring and recommendation) without network access.
 */

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use translation_judge::comparison::{ComparisonPhase, ComparisonService};
use translation_judge::dictionary::DictionaryCache;
use translation_judge::errors::{ProviderError, TranslationError, ValidationError};
use translation_judge::language_utils::LanguageId;
use translation_judge::providers::{MockProvider, MockRequest};

use crate::common::{create_service, create_temp_dir, create_test_file, sample_dictionary};

fn google() -> MockProvider {
    MockProvider::echo().named("google")
}

fn deepl() -> MockProvider {
    MockProvider::echo().named("deepl")
}

/// Translates back to Japanese as an unrelated phrase
fn lossy_back_translation(request: &MockRequest) -> String {
    if request.target == LanguageId::Japanese {
        "さようなら".to_string()
    } else {
        request.text.clone()
    }
}

#[tokio::test]
async fn test_compare_identicalEcho_shouldScoreHundredAndFavourPrimary() {
    let service = create_service(google(), deepl());

    let report = service.compare("こんにちは", 1, 2).await.unwrap();

    assert_eq!(report.recommended(), "こんにちは");
    assert_eq!(report.recommended_provider(), "google");
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value,
        json!({
            "google": { "translation": "こんにちは", "backTranslation": "こんにちは", "totalScore": 100.0 },
            "deepl": { "translation": "こんにちは", "backTranslation": "こんにちは", "totalScore": 100.0 },
            "recommended": "こんにちは"
        })
    );
}

#[tokio::test]
async fn test_compare_betterSecondary_shouldBeRecommended() {
    let primary = google().with_custom_response(lossy_back_translation);
    let service = create_service(primary, deepl());

    let report = service.compare("こんにちは", 1, 2).await.unwrap();

    assert_eq!(report.recommended_provider(), "deepl");
    assert_eq!(report.recommended(), report.candidate("deepl").unwrap().forward_text);
    let google = report.candidate("google").unwrap();
    assert_eq!(google.back_translated_text, "さようなら");
    assert_eq!(google.score, 0.0);
    assert_eq!(report.candidate("deepl").unwrap().score, 100.0);
}

/// Tags the forward text, then translates back to an unrelated phrase
fn google_tagged(request: &MockRequest) -> String {
    if request.target == LanguageId::English {
        format!("{} (g)", request.text)
    } else {
        "さようなら".to_string()
    }
}

/// Tags the forward text, then translates back to the original
fn deepl_tagged(request: &MockRequest) -> String {
    if request.target == LanguageId::English {
        format!("{} (d)", request.text)
    } else {
        "こんにちは".to_string()
    }
}

#[tokio::test]
async fn test_compare_winningSecondary_shouldRecommendItsForwardText() {
    let primary = google().with_custom_response(google_tagged);
    let secondary = deepl().with_custom_response(deepl_tagged);
    let service = create_service(primary, secondary);

    let report = service.compare("こんにちは", 1, 2).await.unwrap();

    assert_eq!(report.recommended(), "こんにちは (d)");
    assert_ne!(report.recommended(), report.candidate("google").unwrap().forward_text);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["recommended"], json!("こんにちは (d)"));
    assert_eq!(value["deepl"]["translation"], value["recommended"]);
}

#[tokio::test]
async fn test_compare_shouldApplyDictionaryBeforeForwardTranslation() {
    let service = create_service(google(), deepl());

    let report = service.compare("天ぷら定食", 1, 2).await.unwrap();

    let candidate = report.candidate("google").unwrap();
    assert_eq!(candidate.forward_text, "tempura定食");
    // Scored against the original, not the substituted text
    assert!(candidate.score < 100.0);
}

#[tokio::test]
async fn test_compare_shouldPostProcessProviderOutput() {
    let primary = google().with_custom_response(|request| format!("\"{}\"", request.text));
    let service = create_service(primary, deepl());

    let report = service.compare("こんにちは", 1, 2).await.unwrap();

    assert_eq!(report.candidate("google").unwrap().forward_text, "「こんにちは」");
}

#[tokio::test]
async fn test_compare_koreanTarget_shouldUseKoreanWeights() {
    let service = create_service(google(), deepl());

    let report = service.compare("こんにちは", 1, 4).await.unwrap();

    // Identical text without Korean endings scores everything but naturalness
    let score = report.candidate("google").unwrap().score;
    assert!((score - 85.0).abs() < 1e-9, "{}", score);
    assert_eq!(report.recommended_provider(), "google");
}

#[tokio::test]
async fn test_compare_failingSecondary_shouldAbortWithoutBackTranslation() {
    let primary = google();
    let primary_handle = primary.clone();
    let service = create_service(primary, MockProvider::failing().named("deepl"));

    let outcome = service.compare_traced("こんにちは", 1, 2).await;

    match &outcome.result {
        Err(TranslationError::Provider { provider, source }) => {
            assert_eq!(provider, "deepl");
            assert!(matches!(source, ProviderError::ApiError { status_code: 500, .. }));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(
        outcome.phases,
        vec![ComparisonPhase::Idle, ComparisonPhase::Preprocessed, ComparisonPhase::Failed]
    );
    assert!(primary_handle.request_count() <= 1);
}

#[tokio::test]
async fn test_compare_malformedPrimary_shouldNamePrimary() {
    let service = create_service(MockProvider::malformed().named("google"), deepl());

    let result = service.compare("こんにちは", 1, 3).await;

    match result {
        Err(TranslationError::Provider { provider, source }) => {
            assert_eq!(provider, "google");
            assert!(matches!(source, ProviderError::MalformedResponse { .. }));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_compare_backwardFailure_shouldFailAfterForwardPhase() {
    // Second call on the shared counter fails, which is the backward call
    let service = create_service(MockProvider::intermittent(2).named("google"), deepl());

    let outcome = service.compare_traced("こんにちは", 1, 2).await;

    assert!(outcome.result.is_err());
    assert_eq!(outcome.final_phase(), ComparisonPhase::Failed);
    assert!(outcome.phases.contains(&ComparisonPhase::ForwardTranslated));
    assert!(!outcome.phases.contains(&ComparisonPhase::BackTranslated));
}

#[tokio::test]
async fn test_compare_failure_shouldCancelSlowSibling() {
    let service = create_service(MockProvider::failing().named("google"), MockProvider::slow(10_000).named("deepl"));

    let result = tokio::time::timeout(Duration::from_secs(2), service.compare("こんにちは", 1, 2)).await;

    let result = result.expect("comparison should not wait for the slow provider");
    assert!(matches!(result, Err(TranslationError::Provider { .. })));
}

#[tokio::test]
async fn test_compare_invalidLanguage_shouldFailBeforeProviderCalls() {
    let primary = google();
    let primary_handle = primary.clone();
    let service = create_service(primary, deepl());

    let result = service.compare("こんにちは", 9, 2).await;
    assert!(matches!(
        result,
        Err(TranslationError::Validation(ValidationError::UnsupportedLanguage(9)))
    ));

    let result = service.compare("こんにちは", 1, 0).await;
    assert!(matches!(
        result,
        Err(TranslationError::Validation(ValidationError::UnsupportedLanguage(0)))
    ));

    assert_eq!(primary_handle.request_count(), 0);
}

#[tokio::test]
async fn test_compare_emptyText_shouldFailValidation() {
    let service = create_service(google(), deepl());

    let outcome = service.compare_traced("   ", 1, 2).await;

    assert!(matches!(
        outcome.result,
        Err(TranslationError::Validation(ValidationError::EmptyText))
    ));
    assert_eq!(outcome.phases, vec![ComparisonPhase::Idle, ComparisonPhase::Failed]);
}

#[tokio::test]
async fn test_compareTraced_success_shouldVisitEveryPhase() {
    let service = create_service(google(), deepl());

    let outcome = service.compare_traced("醤油ラーメン", 1, 4).await;

    assert!(outcome.result.is_ok());
    assert_eq!(
        outcome.phases,
        vec![
            ComparisonPhase::Idle,
            ComparisonPhase::Preprocessed,
            ComparisonPhase::ForwardTranslated,
            ComparisonPhase::BackTranslated,
            ComparisonPhase::Scored,
            ComparisonPhase::Done,
        ]
    );
}

#[tokio::test]
async fn test_respond_shouldWrapSuccessAndFailure() {
    let service = create_service(google(), deepl());

    let ok = serde_json::to_value(service.respond("こんにちは", 1, 2).await).unwrap();
    assert_eq!(ok["success"], json!(true));
    assert_eq!(ok["results"]["recommended"], json!("こんにちは"));

    let failed = serde_json::to_value(service.respond("こんにちは", 5, 2).await).unwrap();
    assert_eq!(failed["success"], json!(false));
    assert!(failed["error"].as_str().unwrap().contains('5'));
    assert!(failed.get("results").is_none());
}

#[tokio::test]
async fn test_new_invalidDictionaryFile_shouldFailAtStartup() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(dir.path(), "dictionary.json", r#"{ "toppings": {} }"#).unwrap();
    let cache = DictionaryCache::from_file(&path, Duration::from_secs(3600));

    let result = ComparisonService::new(Arc::new(google()), Arc::new(deepl()), cache);

    assert!(matches!(result, Err(TranslationError::Config(_))));
}

#[test]
fn test_new_duplicateProviderNames_shouldBeRejected() {
    let cache = DictionaryCache::from_dictionary(sample_dictionary(), Duration::from_secs(3600));

    let result = ComparisonService::new(Arc::new(google()), Arc::new(MockProvider::echo().named("google")), cache);

    match result {
        Err(TranslationError::Provider { provider, source }) => {
            assert_eq!(provider, "google");
            assert!(matches!(source, ProviderError::Configuration(_)));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
