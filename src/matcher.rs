//! Flagging declared dependencies against the risk list.

use crate::model::{DependencyReport, RiskList};

/// Checks each name against `risk_list`, keeping input order.
///
/// Comparison ignores case and only the first matching entry is attached.
///
/// # Example
///
/// ```
/// use depsentry::{matcher::check_dependencies, RiskEntry, RiskList};
///
/// let list = RiskList::new(vec![RiskEntry::new("event-stream", "known supply-chain compromise")]);
/// let reports = check_dependencies(["Event-Stream", "express"], &list);
///
/// assert!(reports[0].is_flagged());
/// assert!(!reports[1].is_flagged());
/// ```
pub fn check_dependencies<'a, I>(names: I, risk_list: &RiskList) -> Vec<DependencyReport>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| DependencyReport {
            name: name.to_string(),
            risk: risk_list.find(name).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskEntry;

    fn list() -> RiskList {
        RiskList::new(vec![
            RiskEntry::new("event-stream", "known supply-chain compromise"),
            RiskEntry::new("EVENT-STREAM", "duplicate entry"),
            RiskEntry::new("colors", "protestware"),
        ])
    }

    #[test]
    fn test_case_insensitive_match_carries_risk() {
        let reports = check_dependencies(["Event-Stream"], &list());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "Event-Stream");
        assert_eq!(
            reports[0].risk.as_ref().map(|r| r.risk.as_str()),
            Some("known supply-chain compromise")
        );
    }

    #[test]
    fn test_unmatched_names_have_no_risk() {
        let reports = check_dependencies(["express", "colors-extra"], &list());
        assert!(reports.iter().all(|r| !r.is_flagged()));
    }

    #[test]
    fn test_order_is_preserved() {
        let reports = check_dependencies(["b", "colors", "a"], &list());
        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "colors", "a"]);
        assert!(reports[1].is_flagged());
    }

    #[test]
    fn test_empty_risk_list_flags_nothing() {
        let reports = check_dependencies(["event-stream"], &RiskList::default());
        assert!(!reports[0].is_flagged());
    }
}
