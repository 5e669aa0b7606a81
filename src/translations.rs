//! The per-language translation table stored under a document's `i18n` field.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::labels::LabelMap;

pub const I18N_FIELD: &str = "i18n";

/// Language used by documents that do not say otherwise.
pub const DEFAULT_PRIMARY_LOCALE: &str = "es";

/// Label to translated text for one language.
pub type Bucket = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    languages: BTreeMap<String, Bucket>,
}

impl Translations {
    /// Read the table of a document.
    ///
    /// A missing or non-object `i18n` field yields an empty table. Buckets that
    /// are not objects are ignored.
    pub fn from_document(document: &Value) -> Self {
        let Some(table) = document.get(I18N_FIELD) else {
            return Self::default();
        };
        let Some(table) = table.as_object() else {
            warn!("Ignoring \"{}\": expected an object", I18N_FIELD);
            return Self::default();
        };

        let mut languages = BTreeMap::new();
        for (language, bucket) in table {
            match bucket.as_object() {
                Some(bucket) => {
                    languages.insert(language.clone(), bucket.clone());
                }
                None => warn!(
                    "Ignoring translations for \"{}\": expected an object",
                    language
                ),
            }
        }
        Self { languages }
    }

    pub fn bucket(&self, language: &str) -> Option<&Bucket> {
        self.languages.get(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.languages
            .iter()
            .map(|(language, bucket)| (language.as_str(), bucket))
    }

    pub fn insert(&mut self, language: impl Into<String>, bucket: Bucket) {
        self.languages.insert(language.into(), bucket);
    }

    /// The literal an existing label stands for in the given language.
    pub fn resolve(&self, language: &str, label: &str) -> Option<&str> {
        self.bucket(language)?.get(label)?.as_str()
    }

    pub fn into_value(self) -> Value {
        Value::Object(
            self.languages
                .into_iter()
                .map(|(language, bucket)| (language, Value::Object(bucket)))
                .collect(),
        )
    }
}

/// What to do with a translation whose label is unknown to the primary language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Drop the translation and report it.
    #[default]
    Drop,
    /// Abort the run.
    Fail,
}

/// Where an old label of a secondary language goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relabel<'a> {
    Moved(&'a str),
    /// The old label has no entry in the old primary bucket.
    Orphaned,
    /// The old label's literal no longer appears in the document.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Orphaned,
    Stale,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Orphaned => "no primary-language entry",
            DropReason::Stale => "literal no longer present",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedTranslation {
    pub language: String,
    pub label: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub translations: Translations,
    pub dropped: Vec<DroppedTranslation>,
}

/// Compose old label -> literal (through the old primary bucket) with
/// literal -> new label.
pub fn relabel<'a>(
    old_primary: Option<&'a Bucket>,
    labels: &'a LabelMap,
) -> impl Fn(&str) -> Relabel<'a> + 'a {
    move |old_label: &str| {
        let literal = old_primary
            .and_then(|bucket| bucket.get(old_label))
            .and_then(Value::as_str);
        match literal {
            None => Relabel::Orphaned,
            Some(literal) => labels.get(literal).map_or(Relabel::Stale, Relabel::Moved),
        }
    }
}

/// Build the new table from the freshly generated labels.
///
/// The primary bucket is the inverse of `labels`. Every other bucket is
/// re-keyed through [`relabel`]; entries that cannot be re-keyed are dropped,
/// unless `policy` is [`OrphanPolicy::Fail`] and the label is orphaned.
pub fn merge(
    old: &Translations,
    labels: &LabelMap,
    primary: &str,
    policy: OrphanPolicy,
) -> Result<Merged> {
    let mut translations = Translations::default();
    translations.insert(
        primary,
        labels
            .iter()
            .map(|(literal, label)| (label.to_string(), Value::String(literal.to_string())))
            .collect(),
    );

    let rekey = relabel(old.bucket(primary), labels);
    let mut dropped = Vec::new();

    for (language, bucket) in old.languages() {
        if language == primary {
            continue;
        }

        let mut rekeyed = Bucket::new();
        for (old_label, text) in bucket {
            let reason = match rekey(old_label.as_str()) {
                Relabel::Moved(new_label) => {
                    rekeyed.insert(new_label.to_string(), text.clone());
                    continue;
                }
                Relabel::Orphaned if policy == OrphanPolicy::Fail => bail!(
                    "Translation \"{}\" in language \"{}\" has no entry in primary language \"{}\"",
                    old_label,
                    language,
                    primary
                ),
                Relabel::Orphaned => DropReason::Orphaned,
                Relabel::Stale => DropReason::Stale,
            };
            dropped.push(DroppedTranslation {
                language: language.to_string(),
                label: old_label.clone(),
                reason,
            });
        }
        translations.insert(language, rekeyed);
    }

    Ok(Merged {
        translations,
        dropped,
    })
}
