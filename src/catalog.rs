//! The locations of a dashboard document that may hold translatable text.

use anyhow::Result;
use serde_json::Value;

use crate::query::{Match, PathExpr};

/// Every place a dashboard may carry a display literal, in evaluation order.
///
/// Entries for widget types absent from a document simply match nothing.
pub const LABEL_PATHS: &[&str] = &[
    "$.name",
    "$.widgets[*].description",
    "$.widgets[*].title",
    "$.widgets[*].conf.description",
    "$.widgets[*].conf.title",
    "$.widgets[*].conf.noDataMsg",
    // map
    "$.widgets[?(@.type=='map')].conf.layers[*].legend.data[*].label",
    "$.widgets[?(@.type=='map')].conf.layers[*].interactivity.click.popup.rows[*].properties[*].label",
    "$.widgets[?(@.type=='map')].conf.layers[*].interactivity.click.popup.title.properties[*].label",
    // horizontal bar
    "$.widgets[?(@.type=='horizontal-bar')].conf.categories[*].label",
    // scatter
    "$.widgets[?(@.type=='scatter')].conf.thresholds[*].label",
    // table
    "$.widgets[?(@.type=='table')].conf.columns[*].name",
    "$.widgets[?(@.type=='table')].conf.columns[*].textTransform.labels[*]",
    // timeseries
    "$.widgets[?(@.type=='timeseries')].conf.lines[*].label",
];

/// An ordered set of parsed path expressions.
#[derive(Debug, Clone)]
pub struct Catalog {
    paths: Vec<PathExpr>,
}

impl Catalog {
    /// The built-in dashboard catalog.
    pub fn standard() -> Result<Self> {
        Self::from_sources(LABEL_PATHS.iter().copied())
    }

    pub fn from_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let paths = sources
            .into_iter()
            .map(PathExpr::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { paths })
    }

    /// Append expressions after the existing ones.
    pub fn with_extra_paths(mut self, extra: &[String]) -> Result<Self> {
        for source in extra {
            self.paths.push(PathExpr::parse(source)?);
        }
        Ok(self)
    }

    pub fn paths(&self) -> &[PathExpr] {
        &self.paths
    }

    /// Collect the matches of every expression, in catalog order.
    pub fn find_all(&self, document: &Value) -> Vec<Match> {
        self.paths
            .iter()
            .flat_map(|path| path.find(document))
            .collect()
    }
}
