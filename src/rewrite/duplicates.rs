//! Duplicate key detection and removal
//!
//! Keys are tracked per map: the same key in two different maps is fine.
//! Within a map the first occurrence of a key always wins.

use std::collections::HashSet;
use std::fmt;

use crate::rewrite::{RewriteDocument, RewriteMap};

/// A later occurrence of a key already present earlier in the same map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub map: String,
    pub key: String,
    pub value: String,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate key found: \"{}\" in map \"{}\"", self.key, self.map)
    }
}

/// List every duplicate entry in document order
pub fn find_duplicates(document: &RewriteDocument) -> Vec<Duplicate> {
    document.maps.iter().flat_map(map_duplicates).collect()
}

fn map_duplicates(map: &RewriteMap) -> Vec<Duplicate> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in &map.entries {
        if !seen.insert(entry.from.as_str()) {
            duplicates.push(Duplicate {
                map: map.name.clone(),
                key: entry.from.clone(),
                value: entry.to.clone(),
            });
        }
    }
    duplicates
}

/// Drop every occurrence after the first of each key, per map.
///
/// Returns the number of entries removed.
pub fn remove_duplicates(document: &mut RewriteDocument) -> usize {
    document
        .maps
        .iter_mut()
        .map(|map| {
            let before = map.entries.len();
            let mut seen = HashSet::new();
            map.entries.retain(|entry| seen.insert(entry.from.clone()));
            before - map.entries.len()
        })
        .sum()
}
