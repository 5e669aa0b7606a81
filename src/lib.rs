//! dashi18n - labels for dashboard literals
//!
//! dashi18n replaces the hardcoded display text of a dashboard configuration
//! document with generated labels, and keeps a per-language translation table
//! (`i18n`) in the same document. Running it again on its own output is a
//! no-op, and translations already present for other languages are carried
//! over to the new labels.
//!
//! ## Module Structure
//!
//! - `catalog`: the document locations that may hold display text
//! - `cli`: command-line interface layer
//! - `config`: configuration file loading and parsing
//! - `document`: reading, rendering and writing documents
//! - `labels`: label generation
//! - `query`: path expressions with write-back locations
//! - `transform`: the labelling pipeline
//! - `translations`: the translation table and its merge
//!
//! ## Example
//!
//! ```
//! use dashi18n::{catalog::Catalog, transform::{Options, transform}};
//! use serde_json::json;
//!
//! let mut doc = json!({
//!     "slug": "dash1",
//!     "widgets": [{"type": "table", "description": "Resumen de ventas"}]
//! });
//! transform(&mut doc, &Catalog::standard().unwrap(), &Options::new("dash1")).unwrap();
//!
//! assert_eq!(doc["widgets"][0]["description"], "dash1-resumen-ventas");
//! assert_eq!(doc["i18n"]["es"]["dash1-resumen-ventas"], "Resumen de ventas");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod document;
pub mod labels;
pub mod query;
pub mod transform;
pub mod translations;
