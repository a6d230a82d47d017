use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// The subset of a `package.json` that the scanner cares about.
///
/// Key order follows the file (serde_json `preserve_order`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(default)]
    pub dependencies: Option<Map<String, Value>>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Option<Map<String, Value>>,
    #[serde(default)]
    pub scripts: Option<Value>,
}

impl Manifest {
    /// Declared dependency names: `dependencies` first, then `devDependencies`.
    pub fn dependency_names(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .chain(self.dev_dependencies.iter())
            .flat_map(|deps| deps.keys().map(String::as_str))
            .collect()
    }

    /// Scripts block, if declared and not `null`.
    pub fn scripts(&self) -> Option<&Value> {
        self.scripts.as_ref().filter(|v| !v.is_null())
    }
}
