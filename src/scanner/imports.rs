use regex::Regex;
use std::sync::LazyLock;

// Best-effort: catches `import .. from 'x'`, `require('x')`, `define('x'` and `import('x')`.
// `import * as ns from` and bare `import 'x'` fall outside the pattern.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b(?:import\s*[\w{},\s]*\s*from|require\s*\(|define\s*\(\s*|\bimport\s*\(|\brequire\s*\()\s*['"]([^'"]+)['"]"#,
    )
    .expect("import pattern is valid")
});

/// Every module specifier referenced by an import-like statement, uppercased.
pub fn extract_imports(content: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
        .collect()
}
