//! Label generation.
//!
//! A [`LabelSet`] turns literals into short, readable keys such as
//! `sales-resumen-ventas`. Literals that do not reduce to one to three
//! significant words get a content-derived code instead
//! (`sales-text-3f2a`). All state lives in the set, so every run owns its
//! own instance.

mod words;

use std::collections::{HashMap, HashSet};

use crc::{CRC_16_IBM_3740, Crc};

pub use words::{STOPWORDS, default_stopwords, significant_words};

const CHECKSUM: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Longest word list that still makes a word-based label.
const MAX_LABEL_WORDS: usize = 3;

/// Issues labels for one run, tracking every label and code handed out.
#[derive(Debug, Clone)]
pub struct LabelSet {
    prefix: String,
    stopwords: HashSet<String>,
    labels: HashSet<String>,
    codes: HashSet<u32>,
}

impl LabelSet {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            stopwords: default_stopwords(),
            labels: HashSet::new(),
            codes: HashSet::new(),
        }
    }

    /// Add stopwords on top of the built-in set.
    pub fn with_stopwords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(extra.into_iter().map(|word| word.as_ref().to_lowercase()));
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Generate a label for a literal, distinct from every label issued so far.
    pub fn label(&mut self, literal: &str) -> String {
        let words = significant_words(literal, &self.stopwords);

        let mut code = None;
        let mut label = if (1..=MAX_LABEL_WORDS).contains(&words.len()) {
            format!("{}-{}", self.prefix, words.join("-"))
        } else {
            let issued = self.code(literal);
            let label = format!("{}-text-{}", self.prefix, issued);
            code = Some(issued);
            label
        };

        if self.labels.contains(&label) {
            let base = label;
            let suffix = match code {
                Some(code) => code,
                None => self.code(literal),
            };
            label = format!("{}-{}", base, suffix);
            while self.labels.contains(&label) {
                label = format!("{}-{}", base, self.code(literal));
            }
        }

        self.labels.insert(label.clone());
        label
    }

    /// Issue a disambiguation code for a literal.
    ///
    /// The code starts at the CRC-16 of the literal's bytes and is incremented
    /// past every code already issued by this set. Codes above `ffff` render
    /// with more than four digits.
    pub fn code(&mut self, literal: &str) -> String {
        let mut code = u32::from(CHECKSUM.checksum(literal.as_bytes()));
        while !self.codes.insert(code) {
            code += 1;
        }
        format!("{:04x}", code)
    }

    /// Label every distinct literal, in order of first appearance.
    pub fn label_map<I, S>(&mut self, literals: I) -> LabelMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = LabelMap::default();
        for literal in literals {
            let literal = literal.as_ref();
            if map.get(literal).is_none() {
                let label = self.label(literal);
                map.insert(literal.to_string(), label);
            }
        }
        map
    }
}

/// Literal to label mapping that remembers assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LabelMap {
    pub fn get(&self, literal: &str) -> Option<&str> {
        self.index
            .get(literal)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// `(literal, label)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(literal, label)| (literal.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, literal: String, label: String) {
        self.index.insert(literal.clone(), self.entries.len());
        self.entries.push((literal, label));
    }
}
