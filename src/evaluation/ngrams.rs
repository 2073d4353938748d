/*!
 * N-gram extraction over token sequences.
 */

use std::collections::HashMap;

use crate::language_utils::LanguageId;

/// Contiguous n-grams of `tokens`, each the concatenation of its tokens.
///
/// Empty when there are fewer than `n` tokens or `n` is zero.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| window.iter().map(AsRef::as_ref).collect::<String>())
        .collect()
}

/// Count occurrences of each n-gram.
pub fn ngram_counts(grams: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::with_capacity(grams.len());
    for gram in grams {
        *counts.entry(gram.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Highest n-gram order used when comparing text in `target`.
///
/// English idioms tend to span 3-4 words; Chinese and Korean expressions
/// are usually carried by 2-3 characters.
pub fn max_order(target: LanguageId) -> usize {
    match target {
        LanguageId::English => 4,
        LanguageId::Chinese => 3,
        LanguageId::Korean => 3,
        LanguageId::Japanese => 4,
    }
}
