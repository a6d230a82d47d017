use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

use super::json::to_string_indent1;
use crate::audit::AuditOutcome;
use crate::model::{DependencyReport, SourceMatch};

/// A flagged dependency, remembered for the end-of-listing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedDependency {
    pub manifest: PathBuf,
    pub name: String,
    pub risk: String,
}

#[derive(Tabled)]
struct FlaggedRow {
    #[tabled(rename = "Manifest")]
    manifest: String,
    #[tabled(rename = "Dependency")]
    name: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

pub fn write_manifest_count(w: &mut dyn Write, count: usize) -> io::Result<()> {
    writeln!(w, "\nFound {} package.json in folder\n", count)
}

pub fn write_manifest_header(w: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(w, "{}", format!("{};", path.display()).bright_yellow())
}

/// One line per dependency; flagged names are followed by their risk.
pub fn write_dependency_reports(w: &mut dyn Write, reports: &[DependencyReport]) -> io::Result<()> {
    for report in reports {
        match &report.risk {
            Some(entry) => writeln!(
                w,
                "{} - {}",
                report.name.bright_red(),
                entry.risk.bright_yellow()
            )?,
            None => writeln!(w, "{}", report.name)?,
        }
    }
    Ok(())
}

pub fn write_scripts(w: &mut dyn Write, scripts: &Value) -> io::Result<()> {
    let body = to_string_indent1(scripts).map_err(io::Error::other)?;
    writeln!(w, "\nScript tag in package json; \n\n{}", body)
}

pub fn write_manifest_footer(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "\n- - - - - - - - -\n")
}

/// Table of every flagged dependency across all manifests. Prints nothing when empty.
pub fn write_flagged_summary(w: &mut dyn Write, flagged: &[FlaggedDependency]) -> io::Result<()> {
    if flagged.is_empty() {
        return Ok(());
    }

    let rows: Vec<FlaggedRow> = flagged
        .iter()
        .map(|f| FlaggedRow {
            manifest: truncate(&f.manifest.display().to_string(), 60),
            name: f.name.clone(),
            risk: truncate(&f.risk, 60),
        })
        .collect();

    writeln!(w, "Flagged {} potentially dangerous dependencies:", flagged.len())?;
    writeln!(w)?;
    writeln!(w, "{}", Table::new(rows).with(Style::rounded()))
}

pub fn write_source_match(w: &mut dyn Write, m: &SourceMatch) -> io::Result<()> {
    writeln!(
        w,
        "\n{} : {} found! \n file path : {}",
        m.file_name().bright_yellow(),
        format!("'{}'", m.name).bright_red(),
        m.path.display()
    )
}

/// Passed audits echo stdout verbatim; failed ones print a summary then stderr.
pub fn write_audit_outcome(
    w: &mut dyn Write,
    command: &str,
    outcome: &AuditOutcome,
) -> io::Result<()> {
    match outcome {
        AuditOutcome::Passed { stdout } => writeln!(w, "{}", stdout),
        AuditOutcome::Failed { status, stderr } => {
            writeln!(w, "Error running {}: command returned non-zero {}", command, status)?;
            writeln!(w, "{}", stderr)
        }
    }
}

pub fn write_audit_spawn_error(
    w: &mut dyn Write,
    command: &str,
    error: &dyn std::error::Error,
) -> io::Result<()> {
    let cause = error
        .source()
        .map(|s| format!("{}: {}", error, s))
        .unwrap_or_else(|| error.to_string());
    writeln!(w, "Error running {}: {}", command, cause)
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
