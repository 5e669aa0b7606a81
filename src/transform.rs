//! The labelling pipeline: locate, label, merge, rewrite.

use anyhow::{Result, bail};
use log::{debug, warn};
use serde_json::Value;

use crate::{
    catalog::Catalog,
    labels::LabelSet,
    query::Location,
    translations::{
        DEFAULT_PRIMARY_LOCALE, DroppedTranslation, I18N_FIELD, OrphanPolicy, Translations,
        merge,
    },
};

pub const SLUG_FIELD: &str = "slug";

#[derive(Debug, Clone)]
pub struct Options {
    /// Prepended to every generated label.
    pub prefix: String,
    pub primary_locale: String,
    pub orphan_policy: OrphanPolicy,
    /// Stopwords added to the built-in set.
    pub stopwords: Vec<String>,
}

impl Options {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            primary_locale: DEFAULT_PRIMARY_LOCALE.to_string(),
            orphan_policy: OrphanPolicy::default(),
            stopwords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Locations rewritten with a label.
    pub matches: usize,
    /// Distinct labels in the primary bucket.
    pub labels: usize,
    /// Matched locations left alone because they do not hold a string.
    pub skipped: usize,
    pub dropped: Vec<DroppedTranslation>,
}

/// The label prefix of a document: its `slug`, or `fallback` when it has none.
pub fn document_prefix(document: &Value, fallback: &str) -> String {
    match document.get(SLUG_FIELD).and_then(Value::as_str) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => fallback.to_string(),
    }
}

/// Replace every literal addressed by `catalog` with a label and install the
/// resulting translation table.
///
/// Values that are already labels of the current primary bucket are first
/// resolved back to their literal, so running this on its own output changes
/// nothing.
pub fn transform(document: &mut Value, catalog: &Catalog, options: &Options) -> Result<Summary> {
    if !document.is_object() {
        bail!("Document root must be a JSON object");
    }

    let old = Translations::from_document(document);
    let primary = options.primary_locale.as_str();

    let mut skipped = 0;
    let mut located: Vec<(Location, String)> = Vec::new();
    for found in catalog.find_all(document) {
        match found.value {
            Value::String(text) => {
                let literal = match old.resolve(primary, &text) {
                    Some(literal) => literal.to_string(),
                    None => text,
                };
                located.push((found.location, literal));
            }
            other => {
                debug!("Skipping non-string value at {}: {}", found.location, other);
                skipped += 1;
            }
        }
    }

    let mut label_set = LabelSet::new(options.prefix.as_str()).with_stopwords(&options.stopwords);
    let labels = label_set.label_map(located.iter().map(|(_, literal)| literal));

    let merged = merge(&old, &labels, primary, options.orphan_policy)?;
    for dropped in &merged.dropped {
        warn!(
            "Dropped \"{}\" translation \"{}\": {}",
            dropped.language,
            dropped.label,
            dropped.reason.as_str()
        );
    }

    let mut rewritten = 0;
    for (location, literal) in &located {
        let Some(label) = labels.get(literal) else {
            continue;
        };
        debug!("{} = {:?} -> {}", location, literal, label);
        if location.replace(document, Value::String(label.to_string())) {
            rewritten += 1;
        }
    }

    if let Some(root) = document.as_object_mut() {
        root.insert(I18N_FIELD.to_string(), merged.translations.into_value());
    }

    Ok(Summary {
        matches: rewritten,
        labels: labels.len(),
        skipped,
        dropped: merged.dropped,
    })
}
