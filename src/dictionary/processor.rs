/*!
 * Dictionary substitution before provider calls and punctuation repair after.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::language_utils::LanguageId;

use super::model::Dictionary;

/// Straight double quotes around a phrase
static STRAIGHT_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("valid quote pattern"));

/// Curly double quotes around a phrase
static CURLY_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"“([^”]+)”").expect("valid quote pattern"));

/// Opening bracket closed by another opening bracket
static MISNESTED_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"「([^」]+)「").expect("valid bracket pattern"));

impl Dictionary {
    /// Replace every known term in `text` with its translation for `target`.
    ///
    /// Categories apply in order and, within one, entries in file order; a
    /// term replaced earlier is no longer visible to later entries.
    pub fn apply(&self, text: &str, target: LanguageId) -> String {
        let mut result = text.to_string();

        for category in self.categories() {
            for entry in &category.entries {
                if let Some(translation) = entry.translation_for(target) {
                    if result.contains(&entry.term) {
                        result = result.replace(&entry.term, translation);
                    }
                }
            }
        }

        result
    }
}

/// Substitute dictionary terms for the target language.
pub fn apply_dictionary(dictionary: &Dictionary, text: &str, target: LanguageId) -> String {
    dictionary.apply(text, target)
}

/// Normalize quoting in provider output to Japanese brackets.
///
/// `"x"` and `“x”` become `「x」`, then `「x「` is repaired to `「x」`.
pub fn post_process(text: &str) -> String {
    let text = STRAIGHT_QUOTES.replace_all(text, "「${1}」");
    let text = CURLY_QUOTES.replace_all(&text, "「${1}」");
    MISNESTED_BRACKETS.replace_all(&text, "「${1}」").into_owned()
}
