/*!
 * Language-aware tokenization for n-gram comparison.
 *
 * The unit of comparison depends on the target language:
 * - English: whitespace-separated words
 * - Chinese: single characters
 * - Korean: runs of non-whitespace, with every whitespace character kept as
 *   its own token so spacing around particles stays comparable
 * - Japanese (default): single characters
 *
 * No case or width normalization happens here.
 */

use crate::language_utils::LanguageId;

/// Split text into comparison units for the given language.
pub fn tokenize(text: &str, target: LanguageId) -> Vec<String> {
    match target {
        LanguageId::English => text.split_whitespace().map(str::to_string).collect(),
        LanguageId::Korean => split_around_whitespace(text),
        LanguageId::Chinese | LanguageId::Japanese => split_chars(text),
    }
}

fn split_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

/// Break at every boundary adjacent to a whitespace character.
fn split_around_whitespace(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(c.to_string());
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
