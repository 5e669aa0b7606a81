use serde_json::Value;

use super::{Location, PathExpr, Segment, Step};

/// A node addressed by a path expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub location: Location,
    pub value: Value,
}

impl PathExpr {
    /// Evaluate the expression against a document.
    ///
    /// Matches are returned in document order. Missing fields, type mismatches
    /// and scalar nodes simply contribute no matches.
    pub fn find(&self, root: &Value) -> Vec<Match> {
        let mut frontier = vec![(Location::root(), root)];

        for step in self.steps() {
            frontier = frontier
                .into_iter()
                .flat_map(|(location, node)| descend(step, &location, node))
                .collect();
            if frontier.is_empty() {
                break;
            }
        }

        frontier
            .into_iter()
            .map(|(location, node)| Match {
                location,
                value: node.clone(),
            })
            .collect()
    }
}

fn descend<'a>(step: &Step, location: &Location, node: &'a Value) -> Vec<(Location, &'a Value)> {
    match step {
        Step::Field(key) => node
            .as_object()
            .and_then(|map| map.get(key))
            .map(|child| (location.child(Segment::Key(key.clone())), child))
            .into_iter()
            .collect(),
        Step::Index(index) => node
            .as_array()
            .and_then(|items| items.get(*index))
            .map(|child| (location.child(Segment::Index(*index)), child))
            .into_iter()
            .collect(),
        Step::Wildcard => children(location, node),
        Step::Filter(predicate) => children(location, node)
            .into_iter()
            .filter(|(_, child)| predicate.matches(child))
            .collect(),
    }
}

fn children<'a>(location: &Location, node: &'a Value) -> Vec<(Location, &'a Value)> {
    match node {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, child)| (location.child(Segment::Index(index)), child))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| (location.child(Segment::Key(key.clone())), child))
            .collect(),
        _ => Vec::new(),
    }
}
