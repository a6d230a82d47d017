//! Core data types for risk lists, manifests, and scan findings.
//!
//! - [`RiskEntry`] / [`RiskList`] - the curated list of dangerous libraries
//! - [`Manifest`] - a parsed `package.json`
//! - [`DependencyReport`] - one declared dependency, flagged or not
//! - [`SourceMatch`] - a watched name imported from a source file
//!
//! # Example
//!
//! ```
//! use depsentry::{RiskEntry, RiskList};
//!
//! let list = RiskList::new(vec![RiskEntry::new("event-stream", "compromised in 2018")]);
//! assert_eq!(list.watched_names(), vec!["event-stream"]);
//! ```

mod manifest;
mod risk;

pub use manifest::*;
pub use risk::*;

use std::path::PathBuf;

/// A declared dependency together with the risk entry it matched, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    pub name: String,
    pub risk: Option<RiskEntry>,
}

impl DependencyReport {
    pub fn is_flagged(&self) -> bool {
        self.risk.is_some()
    }
}

/// A watched library name imported by a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMatch {
    pub path: PathBuf,
    pub name: String,
}

impl SourceMatch {
    /// File name component of the path, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
