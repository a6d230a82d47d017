//! Loading the curated risk list.
//!
//! The list is a JSON document with a single field, `potentiallyDangerousLibraries`,
//! holding `{ "name": ..., "risk": ... }` objects in priority order.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::RiskList;

/// File name searched for when no explicit location is given.
pub const RISK_LIST_FILE: &str = "potentially-dangerous-libraries.json";

/// Reads and parses a risk list from `path`.
pub fn load(path: &Path) -> Result<RiskList> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let list: RiskList = serde_json::from_str(&content).map_err(|source| Error::RiskListParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), entries = list.len(), "loaded risk list");
    Ok(list)
}

/// Candidate locations, in lookup order.
///
/// An explicit path wins outright. Otherwise the working directory is tried
/// first, then the directory containing the running executable.
pub fn candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut candidates = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(RISK_LIST_FILE));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let path = exe_dir.join(RISK_LIST_FILE);
        if !candidates.contains(&path) {
            candidates.push(path);
        }
    }
    candidates
}

/// Loads the first existing candidate.
///
/// # Errors
///
/// [`Error::RiskListNotFound`] when no candidate exists; parse and read
/// errors from the chosen file are returned as-is.
pub fn resolve(explicit: Option<&Path>) -> Result<RiskList> {
    let tried = candidates(explicit);
    match tried.iter().find(|p| p.is_file()) {
        Some(path) => load(path),
        None => Err(Error::RiskListNotFound { tried }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_list(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(RISK_LIST_FILE);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = write_list(
            dir.path(),
            r#"{"potentiallyDangerousLibraries":[
                {"name":"event-stream","risk":"known supply-chain compromise"},
                {"name":"ua-parser-js","risk":"hijacked release"}
            ]}"#,
        );

        let list = load(&path).unwrap();
        assert_eq!(list.watched_names(), vec!["event-stream", "ua-parser-js"]);
    }

    #[test]
    fn test_malformed_list_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_list(dir.path(), r#"{"potentiallyDangerousLibraries": [{"name": 1}]}"#);
        assert!(matches!(load(&path), Err(Error::RiskListParse { .. })));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_list(dir.path(), r#"{"libraries": []}"#);
        assert!(matches!(load(&path), Err(Error::RiskListParse { .. })));
    }

    #[test]
    fn test_explicit_path_is_the_only_candidate() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");

        assert_eq!(candidates(Some(&missing)), vec![missing.clone()]);
        match resolve(Some(&missing)) {
            Err(Error::RiskListNotFound { tried }) => assert_eq!(tried, vec![missing]),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_explicit_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = write_list(
            dir.path(),
            r#"{"potentiallyDangerousLibraries":[{"name":"x","risk":"y"}]}"#,
        );
        assert_eq!(resolve(Some(&path)).unwrap().len(), 1);
    }
}
