//! Declarative path queries over JSON documents.
//!
//! A [`PathExpr`] is parsed once from a JSONPath-like string and can then be
//! evaluated against any document. Evaluation yields [`Match`]es, each carrying
//! the matched value and the [`Location`] it was found at, so callers can write
//! a replacement back into the exact node even when several matches hold equal
//! values.
//!
//! ## Syntax
//!
//! - `$` - the document root (always first)
//! - `.name`, `['name']` - a child field
//! - `.*`, `[*]` - every element of a sequence or every value of a mapping
//! - `[3]` - a sequence element
//! - `[?(@.type == 'map')]` - the children whose field equals a literal
//!   (`!=` is also accepted)

mod engine;
mod location;
mod parser;

pub use engine::Match;
pub use location::{Location, Segment};
pub use parser::{Comparison, PathExpr, Predicate, Step};
