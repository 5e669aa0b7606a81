//! Reduction of a literal to the words that make up its label.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// Spanish articles and prepositions that carry no meaning in a label.
pub const STOPWORDS: &[&str] = &[
    "a", "al", "de", "del", "el", "en", "la", "las", "lo", "los", "un", "una", "unas", "uno",
    "unos",
];

/// Symbols spelled out before punctuation is stripped, so "100€" keeps its unit.
const SYMBOLS: &[(char, &str)] = &[
    ('€', "euros"),
    ('$', "dolares"),
    ('%', "porciento"),
    ('&', "y"),
    ('+', "mas"),
    ('º', "grados"),
    ('°', "grados"),
    ('#', "numero"),
];

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\W_]+").unwrap());

pub fn default_stopwords() -> HashSet<String> {
    STOPWORDS.iter().map(|word| word.to_string()).collect()
}

/// Split a literal into lowercase ASCII words, dropping stopwords and any word
/// left empty once symbols and punctuation are removed.
pub fn significant_words(literal: &str, stopwords: &HashSet<String>) -> Vec<String> {
    literal
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| !stopwords.contains(word))
        .map(|word| normalize_word(&word))
        .filter(|word| !word.is_empty())
        .collect()
}

fn normalize_word(word: &str) -> String {
    let spelled = spell_symbols(word);
    let stripped = NON_ALPHANUMERIC.replace_all(&spelled, "");
    deunicode::deunicode(&stripped)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn spell_symbols(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match SYMBOLS.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, spelled)) => out.push_str(spelled),
            None => out.push(c),
        }
    }
    out
}
