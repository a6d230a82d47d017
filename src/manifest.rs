//! Locating and parsing `package.json` manifests.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::model::Manifest;

/// Suffix a file name must end with to count as a manifest.
///
/// Suffix rather than equality, so `my-package.json` is picked up too.
pub const MANIFEST_SUFFIX: &str = "package.json";

/// Recursively collects every file under `root` whose name ends with [`MANIFEST_SUFFIX`].
///
/// Nothing is excluded (`node_modules` included). Symlinked files count;
/// symlinked directories are not descended into.
/// Results come back in traversal order.
pub fn find_manifests(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !is_file_entry(&entry) {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(MANIFEST_SUFFIX) {
            found.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = found.len(), "located manifests");
    found
}

/// Regular files, plus symlinks that resolve to a file. Directory links are never followed.
pub(crate) fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Reads and parses one manifest.
///
/// The document must be a JSON object; arrays and scalars are rejected.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: serde_json::Error| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    };
    let object: Map<String, Value> = serde_json::from_str(&content).map_err(parse_err)?;
    let mut manifest: Manifest =
        serde_json::from_value(Value::Object(object)).map_err(parse_err)?;
    manifest.path = path.to_path_buf();
    Ok(manifest)
}
