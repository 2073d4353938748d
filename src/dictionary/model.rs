/*!
 * Term dictionary model and validation.
 *
 * The dictionary is a JSON document with four required top-level
 * categories:
 *
 * ```json
 * {
 *   "menu_categories": { "ramen": { "醤油ラーメン": { "en": "Soy Sauce Ramen" } } },
 *   "toppings":        { "チャーシュー": { "en": "Chashu", "ko": "차슈" } },
 *   "side_dishes":     { "餃子": { "en": "Gyoza" } },
 *   "special_items":   {}
 * }
 * ```
 *
 * `menu_categories` holds named groups of terms; the other three hold terms
 * directly. Every term maps language codes to translations. File order is
 * kept because it decides which of two overlapping terms is replaced first.
 */

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::errors::ConfigError;
use crate::language_utils::LanguageId;

const MENU_CATEGORIES: &str = "menu_categories";

/// Flat categories applied after the menu groups, in this order
const FLAT_CATEGORIES: [&str; 3] = ["toppings", "side_dishes", "special_items"];

/// A source-language term and its translations
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    /// Term as it appears in source text
    pub term: String,
    /// Translation per language code (`en`, `zh`, ...)
    pub translations: HashMap<String, String>,
}

impl DictionaryEntry {
    /// Create an entry from `(code, translation)` pairs
    pub fn new<I, K, V>(term: impl Into<String>, translations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            term: term.into(),
            translations: translations
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Translation for a target language, if the entry has one
    pub fn translation_for(&self, target: LanguageId) -> Option<&str> {
        self.translations.get(target.code()).map(String::as_str)
    }
}

/// An ordered group of entries
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryCategory {
    /// `toppings`, `side_dishes`, `special_items` or `menu_categories.<group>`
    pub name: String,
    pub entries: Vec<DictionaryEntry>,
}

impl DictionaryCategory {
    pub fn new(name: impl Into<String>, entries: Vec<DictionaryEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// Validated term dictionary, categories in application order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    categories: Vec<DictionaryCategory>,
}

impl Dictionary {
    /// Build a dictionary from categories already in application order
    pub fn from_categories(categories: Vec<DictionaryCategory>) -> Self {
        Self { categories }
    }

    /// Parse and validate dictionary JSON
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Validate an already parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let root = value
            .as_object()
            .ok_or_else(|| ConfigError::InvalidJson("top level must be an object".to_string()))?;

        let mut categories = Vec::new();

        let groups = required_object(root, MENU_CATEGORIES)?;
        for (group, terms) in groups {
            let name = format!("{}.{}", MENU_CATEGORIES, group);
            let terms = terms.as_object().ok_or_else(|| ConfigError::InvalidCategory {
                category: name.clone(),
                reason: "expected an object of terms".to_string(),
            })?;
            categories.push(parse_category(name, terms)?);
        }

        for category in FLAT_CATEGORIES {
            let terms = required_object(root, category)?;
            categories.push(parse_category(category.to_string(), terms)?);
        }

        Ok(Self { categories })
    }

    /// Categories in application order
    pub fn categories(&self) -> &[DictionaryCategory] {
        &self.categories
    }

    /// Total number of terms across categories
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Check if the dictionary holds no terms
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn required_object<'a>(
    root: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    let value = root.get(key).ok_or(ConfigError::MissingCategory(key))?;
    value.as_object().ok_or_else(|| ConfigError::InvalidCategory {
        category: key.to_string(),
        reason: "expected an object".to_string(),
    })
}

fn parse_category(name: String, terms: &Map<String, Value>) -> Result<DictionaryCategory, ConfigError> {
    let mut entries = Vec::with_capacity(terms.len());

    for (term, translations) in terms {
        let invalid = |reason: &str| ConfigError::InvalidEntry {
            category: name.clone(),
            term: term.clone(),
            reason: reason.to_string(),
        };

        if term.is_empty() {
            return Err(invalid("term must not be empty"));
        }

        let translations = translations
            .as_object()
            .ok_or_else(|| invalid("expected an object of translations"))?;

        let mut parsed = HashMap::with_capacity(translations.len());
        for (code, text) in translations {
            let text = text
                .as_str()
                .ok_or_else(|| invalid(&format!("translation for '{}' must be a string", code)))?;
            parsed.insert(code.to_lowercase(), text.to_string());
        }

        entries.push(DictionaryEntry {
            term: term.clone(),
            translations: parsed,
        });
    }

    Ok(DictionaryCategory::new(name, entries))
}
