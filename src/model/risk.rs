use serde::{Deserialize, Serialize};

/// A library considered potentially dangerous, with a free-text reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub name: String,
    pub risk: String,
}

impl RiskEntry {
    pub fn new(name: impl Into<String>, risk: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            risk: risk.into(),
        }
    }

    /// Case-insensitive comparison against a dependency name.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_uppercase() == name.to_uppercase()
    }
}

/// Ordered risk list. Duplicates are kept; lookups return the first hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskList {
    #[serde(rename = "potentiallyDangerousLibraries")]
    entries: Vec<RiskEntry>,
}

impl RiskList {
    pub fn new(entries: Vec<RiskEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RiskEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose name equals `name` ignoring case.
    pub fn find(&self, name: &str) -> Option<&RiskEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    /// Entry names in list order, used as source-scan targets.
    pub fn watched_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        let list = RiskList::new(vec![RiskEntry::new("event-stream", "compromised")]);
        assert_eq!(list.find("Event-Stream").map(|e| e.risk.as_str()), Some("compromised"));
        assert!(list.find("event-streams").is_none());
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let list = RiskList::new(vec![
            RiskEntry::new("colors", "first"),
            RiskEntry::new("COLORS", "second"),
        ]);
        assert_eq!(list.find("colors").unwrap().risk, "first");
    }

    #[test]
    fn test_deserialize_document() {
        let json = r#"{"potentiallyDangerousLibraries":[
            {"name":"a","risk":"x"},
            {"name":"b","risk":"y"}
        ]}"#;
        let list: RiskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.watched_names(), vec!["a", "b"]);
    }
}
