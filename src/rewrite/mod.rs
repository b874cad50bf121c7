//! Rewrite map model and the stages that produce and consume it
//!
//! - [`reader`]: CSV / delimited text to redirect pairs
//! - [`normalize`]: optional scheme/host stripping for pairs
//! - [`writer`]: renders a document as IIS rewrite-map XML
//! - [`loader`]: parses an existing rewrite-map XML file
//! - [`duplicates`]: finds and removes repeated keys per map

pub mod duplicates;
pub mod loader;
pub mod normalize;
pub mod reader;
pub mod writer;

use std::fmt;

/// One rewrite rule: requests for `from` are mapped to `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPair {
    pub from: String,
    pub to: String,
}

impl RedirectPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for RedirectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", writer::render_entry(self))
    }
}

/// A named `<rewriteMap>` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteMap {
    pub name: String,
    pub entries: Vec<RedirectPair>,
}

impl RewriteMap {
    pub fn new(name: impl Into<String>, entries: Vec<RedirectPair>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// The `<rewriteMaps>` root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteDocument {
    pub maps: Vec<RewriteMap>,
}

impl RewriteDocument {
    /// Document holding a single map, as produced by `generate`
    pub fn single(map: RewriteMap) -> Self {
        Self { maps: vec![map] }
    }

    /// Total number of entries across all maps
    pub fn entry_count(&self) -> usize {
        self.maps.iter().map(|map| map.entries.len()).sum()
    }
}
