//! Static scan of project sources for imports of watched libraries.
//!
//! Every file whose name ends with one of [`SOURCE_EXTENSIONS`] is read in
//! full and its import/require targets are compared, uppercased, against the
//! watched names. Only whole-specifier equality counts: `lodash/get` does not
//! match `lodash`.
//!
//! # Example
//!
//! ```no_run
//! use depsentry::scanner::scan_sources;
//! use std::path::Path;
//!
//! for m in scan_sources(Path::new("./my-app"), &["event-stream"]) {
//!     println!("{} imports {}", m.path.display(), m.name);
//! }
//! ```

mod imports;

pub use imports::extract_imports;

use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::manifest::is_file_entry;
use crate::model::SourceMatch;

/// File-name suffixes treated as JavaScript-family sources.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".js",
    ".jsx",
    ".cjs",
    ".mjs",
    ".iced",
    ".liticed",
    ".iced.md",
    ".cs",
    ".coffee",
    ".litcoffee",
    ".coffee.md",
    ".ts",
    ".tsx",
    ".ls",
    ".es6",
    ".es",
    ".sjs",
    ".eg",
];

pub fn is_source_file(file_name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Matches within a single file's content, in watched-name order.
pub fn scan_content<S: AsRef<str>>(path: &Path, content: &str, watched: &[S]) -> Vec<SourceMatch> {
    let imports = extract_imports(content);
    if imports.is_empty() {
        return Vec::new();
    }

    watched
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| imports.contains(&name.to_uppercase()))
        .map(|name| SourceMatch {
            path: path.to_path_buf(),
            name: name.to_string(),
        })
        .collect()
}

/// Walks `root` and returns one match per (file, watched name).
///
/// Unreadable or non-UTF-8 files are logged and skipped.
pub fn scan_sources<S: AsRef<str>>(root: &Path, watched: &[S]) -> Vec<SourceMatch> {
    let mut matches = Vec::new();
    let mut scanned = 0usize;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !is_file_entry(&entry) || !is_source_file(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                continue;
            }
        };

        scanned += 1;
        matches.extend(scan_content(path, &content, watched));
    }

    debug!(root = %root.display(), scanned, matches = matches.len(), "source scan finished");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &[u8]) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_recognized_extensions() {
        assert!(is_source_file("index.js"));
        assert!(is_source_file("App.tsx"));
        assert!(is_source_file("README.coffee.md"));
        assert!(is_source_file("legacy.es6"));
        assert!(!is_source_file("README.md"));
        assert!(!is_source_file("package.json"));
        assert!(!is_source_file("style.css"));
    }

    #[test]
    fn test_exact_match_ignoring_case() {
        let matches = scan_content(
            Path::new("a.js"),
            "const es = require('Event-Stream');",
            &["event-stream", "flatmap-stream"],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "event-stream");
    }

    #[test]
    fn test_sub_path_import_does_not_match() {
        let matches = scan_content(
            Path::new("a.js"),
            "const x = require('lodash/get');",
            &["lodash"],
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_one_line_per_file() {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "src/a.js", b"require('colors'); require('colors');");
        let b = write(dir.path(), "lib/deep/b.ts", b"import c from 'colors';");
        write(dir.path(), "notes.txt", b"require('colors')");
        write(dir.path(), "empty/readme.md", b"require('colors')");

        let mut found: Vec<PathBuf> = scan_sources(dir.path(), &["colors"])
            .into_iter()
            .map(|m| m.path)
            .collect();
        found.sort();

        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_every_watched_name_reported() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "index.mjs",
            b"import a from 'ua-parser-js';\nimport b from 'coa';",
        );

        let names: Vec<String> = scan_sources(dir.path(), &["coa", "ua-parser-js", "rc"])
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["coa", "ua-parser-js"]);
    }

    #[test]
    fn test_non_utf8_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bad.js", &[0xff, 0xfe, 0x00, 0x80]);
        write(dir.path(), "good.js", b"require('rc')");

        let matches = scan_sources(dir.path(), &["rc"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].file_name(), "good.js");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_source_file_is_scanned() {
        let dir = TempDir::new().unwrap();
        let target = write(dir.path(), "vendor/colors.txt", b"const c = require('colors');");
        let link = dir.path().join("index.js");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let matches = scan_sources(dir.path(), &["colors"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].path, link);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(scan_sources(&dir.path().join("absent"), &["rc"]).is_empty());
    }
}
