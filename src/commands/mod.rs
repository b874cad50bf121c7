//! Command implementations for iis-rewrite CLI

pub mod check;
pub mod completions;
pub mod generate;
pub mod version;
