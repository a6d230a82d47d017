use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading inputs or running checks.
#[derive(Debug, Error)]
pub enum Error {
    #[error("risk list not found (tried: {})", display_paths(.tried))]
    RiskListNotFound { tried: Vec<PathBuf> },

    #[error("failed to parse risk list {}", .path.display())]
    RiskListParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse manifest {}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to execute {program}")]
    AuditSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_every_candidate() {
        let err = Error::RiskListNotFound {
            tried: vec![PathBuf::from("a.json"), PathBuf::from("b/a.json")],
        };
        assert_eq!(err.to_string(), "risk list not found (tried: a.json, b/a.json)");
    }
}
