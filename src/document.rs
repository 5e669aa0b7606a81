//! Reading, rendering and writing dashboard documents.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    catalog::Catalog,
    config::Config,
    transform::{Options, Summary, document_prefix, transform},
};

/// Outcome of translating one file.
#[derive(Debug)]
pub struct TranslatedFile {
    /// Rendered document, without a trailing newline.
    pub content: String,
    pub prefix: String,
    pub summary: Summary,
}

pub fn load(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

/// Serialize with sorted keys and 2-space indentation.
///
/// Non-ASCII text is written as-is and no line ends with a space.
pub fn render(document: &Value) -> Result<String> {
    let content = serde_json::to_string_pretty(&sorted(document))
        .context("Failed to serialize JSON")?;
    Ok(content.replace(" \n", "\n"))
}

/// Write rendered content, adding the trailing newline.
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Label the literals of a dashboard file.
///
/// The label prefix is the document's slug, or the file stem when there is
/// none.
pub fn translate_file(path: &Path, config: &Config) -> Result<TranslatedFile> {
    let mut document = load(path)?;

    let catalog = Catalog::standard()?.with_extra_paths(&config.extra_paths)?;
    let prefix = document_prefix(&document, &file_stem(path));
    let options = Options {
        prefix: prefix.clone(),
        primary_locale: config.primary_locale.clone(),
        orphan_policy: config.orphan_policy,
        stopwords: config.stopwords.clone(),
    };

    let summary = transform(&mut document, &catalog, &options)
        .with_context(|| format!("Failed to translate {}", path.display()))?;

    Ok(TranslatedFile {
        content: render(&document)?,
        prefix,
        summary,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key.clone(), sorted(child)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}
