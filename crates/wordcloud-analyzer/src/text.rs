//! Tokenization and word counting

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

/// Word -> occurrence count
pub type WordFrequencies = BTreeMap<String, u64>;

/// English stopwords (alphabetic forms only, since tokens never contain
/// apostrophes)
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

pub fn is_stopword(word: &str) -> bool {
    stopwords().contains(word)
}

/// Lowercase `text`, split it into alphabetic runs and count every run that
/// is not a stopword and has at least `min_word_length` characters
pub fn analyze(text: &str, min_word_length: usize) -> WordFrequencies {
    let mut counts = WordFrequencies::new();
    let lowered = text.to_lowercase();
    for word in lowered.split(|c: char| !c.is_alphabetic()) {
        if word.is_empty() || word.chars().count() < min_word_length || is_stopword(word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Add `other` into `total`
pub fn merge(total: &mut WordFrequencies, other: WordFrequencies) {
    for (word, count) in other {
        *total.entry(word).or_insert(0) += count;
    }
}

/// One row of the most-common list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// The `limit` most frequent words, ties broken alphabetically
pub fn top_words(frequencies: &WordFrequencies, limit: usize) -> Vec<WordCount> {
    let mut words: Vec<(&String, &u64)> = frequencies.iter().collect();
    words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    words
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount {
            word: word.clone(),
            count: *count,
        })
        .collect()
}
