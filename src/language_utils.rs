use isolang::Language;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Language utilities for the four supported languages
///
/// Each language is identified by the numeric id used by the menu backend
/// (1 = Japanese, 2 = English, 3 = Chinese, 4 = Korean) and carries the codes
/// the two upstream providers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Japanese,
    English,
    Chinese,
    Korean,
}

impl LanguageId {
    /// All supported languages in id order
    pub const ALL: [LanguageId; 4] = [Self::Japanese, Self::English, Self::Chinese, Self::Korean];

    /// Resolve a backend language id
    pub fn from_id(id: i64) -> Result<Self, ValidationError> {
        match id {
            1 => Ok(Self::Japanese),
            2 => Ok(Self::English),
            3 => Ok(Self::Chinese),
            4 => Ok(Self::Korean),
            other => Err(ValidationError::UnsupportedLanguage(other)),
        }
    }

    /// Resolve a two-letter code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let normalized = code.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == normalized)
            .ok_or(ValidationError::UnsupportedLanguageCode(code.to_string()))
    }

    /// Backend numeric id
    pub fn id(&self) -> i64 {
        match self {
            Self::Japanese => 1,
            Self::English => 2,
            Self::Chinese => 3,
            Self::Korean => 4,
        }
    }

    /// Lowercase ISO 639-1 code, also the Google Apps Script code and the
    /// key used in the term dictionary
    pub fn code(&self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
            Self::Chinese => "zh",
            Self::Korean => "ko",
        }
    }

    /// Uppercase code expected by DeepL
    pub fn deepl_code(&self) -> &'static str {
        match self {
            Self::Japanese => "JA",
            Self::English => "EN",
            Self::Chinese => "ZH",
            Self::Korean => "KO",
        }
    }

    /// English language name
    pub fn name(&self) -> &'static str {
        Language::from_639_1(self.code())
            .map(|lang| lang.to_name())
            .unwrap_or("Unknown")
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for LanguageId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) => Self::from_id(id),
            Err(_) => Self::from_code(s),
        }
    }
}

impl TryFrom<i64> for LanguageId {
    type Error = ValidationError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}
