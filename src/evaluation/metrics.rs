/*!
 * Similarity metrics between an original text and its back-translation.
 *
 * Every metric returns a value in [0.0, 1.0] where 1.0 is maximal similarity:
 * - Levenshtein: normalized edit distance over characters
 * - Jaccard: overlap of the distinct character sets
 * - Cosine: angle between character-frequency vectors
 * - BLEU: clipped n-gram precision with a brevity penalty
 * - Korean naturalness: sentence endings, particles and punctuation
 *
 * Levenshtein, Jaccard and Cosine lower-case both texts first. Lengths are
 * always measured in Unicode scalar values so they agree with the edit
 * distance.
 */

use std::collections::{HashMap, HashSet};

use crate::language_utils::LanguageId;

use super::ngrams::{max_order, ngram_counts, ngrams};
use super::tokenizer::tokenize;

/// Normalized Levenshtein similarity.
pub fn levenshtein_similarity(original: &str, comparison: &str) -> f64 {
    let a: Vec<char> = original.to_lowercase().chars().collect();
    let b: Vec<char> = comparison.to_lowercase().chars().collect();

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(&a, &b);
    1.0 - distance as f64 / max_len as f64
}

/// Levenshtein distance between two character sequences
fn levenshtein_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr_row[0] = i;

        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Jaccard similarity of the distinct lower-cased characters.
pub fn jaccard_similarity(original: &str, comparison: &str) -> f64 {
    let a: HashSet<char> = original.to_lowercase().chars().collect();
    let b: HashSet<char> = comparison.to_lowercase().chars().collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 1.0;
    }

    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}

/// Cosine similarity of character-frequency vectors.
///
/// Two empty texts are identical (1.0); one empty text against a non-empty
/// one has no angle to measure and scores 0.0.
pub fn cosine_similarity(original: &str, comparison: &str) -> f64 {
    let a = char_frequencies(&original.to_lowercase());
    let b = char_frequencies(&comparison.to_lowercase());

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .map(|(c, &count)| count as f64 * b.get(c).copied().unwrap_or(0) as f64)
        .sum();
    let norm_a: f64 = a.values().map(|&v| (v * v) as f64).sum();
    let norm_b: f64 = b.values().map(|&v| (v * v) as f64).sum();

    (dot / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0)
}

fn char_frequencies(text: &str) -> HashMap<char, usize> {
    let mut vector = HashMap::new();
    for c in text.chars() {
        *vector.entry(c).or_insert(0) += 1;
    }
    vector
}

/// BLEU-like score of `candidate` against `reference`.
///
/// Orders run from 1 to the language's maximum. An order with candidate
/// n-grams but no match zeroes the whole score. Orders the candidate is too
/// short to produce are left out and the remaining orders share the weight.
pub fn bleu_score(reference: &str, candidate: &str, target: LanguageId) -> f64 {
    let reference_tokens = tokenize(reference, target);
    let candidate_tokens = tokenize(candidate, target);

    if candidate_tokens.is_empty() {
        return if reference_tokens.is_empty() { 1.0 } else { 0.0 };
    }

    let mut log_sum = 0.0;
    let mut orders = 0usize;

    for n in 1..=max_order(target) {
        let candidate_grams = ngrams(&candidate_tokens, n);
        if candidate_grams.is_empty() {
            break;
        }

        let reference_grams = ngrams(&reference_tokens, n);
        let reference_counts = ngram_counts(&reference_grams);
        let matches: usize = ngram_counts(&candidate_grams)
            .into_iter()
            .map(|(gram, count)| count.min(reference_counts.get(gram).copied().unwrap_or(0)))
            .sum();

        if matches == 0 {
            return 0.0;
        }

        log_sum += (matches as f64 / candidate_grams.len() as f64).ln();
        orders += 1;
    }

    let precision = (log_sum / orders as f64).exp();
    let brevity_penalty = (1.0 - reference_tokens.len() as f64 / candidate_tokens.len().max(1) as f64)
        .exp()
        .min(1.0);

    (brevity_penalty * precision).clamp(0.0, 1.0)
}

const FORMAL_ENDINGS: [&str; 3] = ["입니다", "습니다", "니다"];
const POLITE_ENDINGS: [&str; 2] = ["요", "세요"];
const PARTICLES: [&str; 6] = ["은", "는", "이", "가", "을", "를"];

/// Heuristic naturalness of Korean text.
pub fn korean_naturalness(text: &str) -> f64 {
    let mut score = 0.0;

    if FORMAL_ENDINGS.iter().any(|ending| text.ends_with(ending)) {
        score += 0.4;
    } else if POLITE_ENDINGS.iter().any(|ending| text.ends_with(ending)) {
        score += 0.3;
    }

    let particles = PARTICLES.iter().filter(|p| text.contains(*p)).count();
    score += (particles as f64 * 0.1).min(0.3);

    if text.contains(',') {
        score += 0.15;
    }
    if text.contains('.') {
        score += 0.15;
    }

    score.min(1.0)
}
