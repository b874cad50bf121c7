//! Loads existing `<rewriteMaps>` documents
//!
//! Map order and entry order are preserved exactly as they appear in the
//! file. Repeated keys are kept; finding them is the job of the duplicate
//! scanner. Other children of `<rewriteMap>` such as `<remove>` or `<clear>`
//! are ignored, even when they sit between `<add>` entries.

use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use crate::error::{self, Result, RewriteError};
use crate::rewrite::{RedirectPair, RewriteDocument, RewriteMap};

#[derive(Debug, Deserialize)]
#[serde(rename = "rewriteMaps")]
struct RewriteMapsXml {
    #[serde(rename = "rewriteMap", default)]
    maps: Vec<RewriteMapXml>,
}

#[derive(Debug, Deserialize)]
struct RewriteMapXml {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "add", default)]
    entries: Vec<AddXml>,
}

#[derive(Debug, Deserialize)]
struct AddXml {
    #[serde(rename = "@key", default)]
    key: String,
    #[serde(rename = "@value", default)]
    value: String,
}

impl From<RewriteMapsXml> for RewriteDocument {
    fn from(xml: RewriteMapsXml) -> Self {
        RewriteDocument {
            maps: xml
                .maps
                .into_iter()
                .map(|map| {
                    RewriteMap::new(
                        map.name,
                        map.entries
                            .into_iter()
                            .map(|add| RedirectPair::new(add.key, add.value))
                            .collect(),
                    )
                })
                .collect(),
        }
    }
}

const ROOT_ELEMENT: &str = "rewriteMaps";

/// Parse a rewrite-map document from a string
///
/// The deserializer does not look at the root element's name, so it is
/// checked up front: a `web.config` must not load as an empty document.
pub fn parse_document(xml: &str) -> Result<RewriteDocument> {
    let root = root_element(xml)?;
    if root != ROOT_ELEMENT {
        return Err(error::parse::xml_failed(
            "unknown",
            format!("expected root element <{ROOT_ELEMENT}>, found <{root}>"),
        ));
    }

    let parsed: RewriteMapsXml = quick_xml::de::from_str(xml)?;
    Ok(parsed.into())
}

fn root_element(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start) | Event::Empty(start)) => {
                return Ok(String::from_utf8_lossy(start.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(error::parse::xml_failed("unknown", "document has no root element"));
            }
            Ok(_) => {}
            Err(err) => return Err(error::parse::xml_failed("unknown", err)),
        }
    }
}

/// Read and parse the rewrite-map document at `path`
pub fn load_document(path: &Path) -> Result<RewriteDocument> {
    let contents = std::fs::read_to_string(path).map_err(|e| error::fs::from_read(path, &e))?;
    parse_document(&contents).map_err(|e| match e {
        RewriteError::XmlParseFailed { reason, .. } => error::parse::xml_failed(path, reason),
        other => other,
    })
}
