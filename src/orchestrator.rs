//! Sequencing of the checks for one invocation.
//!
//! With `scan_code` and/or `audit` set, only those checks run (scan first)
//! and the run ends. Otherwise every manifest is listed with its flagged
//! dependencies and scripts, then the user is asked whether to audit and
//! whether to scan sources.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::audit::Auditor;
use crate::manifest::{find_manifests, read_manifest};
use crate::matcher::check_dependencies;
use crate::model::RiskList;
use crate::output::{self, FlaggedDependency};
use crate::prompt::{is_yes, Prompt};
use crate::scanner::scan_sources;

pub const AUDIT_QUESTION: &str = "\nDo you want to run npm audit? (Y/N): ";
pub const SCAN_QUESTION: &str = "\nDo you want to scan the code for dangerous libraries? (Y/N): ";

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub project_folder: PathBuf,
    pub scan_code: bool,
    pub audit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run the flagged checks, then stop.
    Checks { scan_code: bool, audit: bool },
    /// List manifests, then ask about follow-up checks.
    Interactive,
}

impl ScanOptions {
    pub fn mode(&self) -> Mode {
        if self.scan_code || self.audit {
            Mode::Checks {
                scan_code: self.scan_code,
                audit: self.audit,
            }
        } else {
            Mode::Interactive
        }
    }
}

/// Runs checks against one project, writing the report to `out`.
pub struct Orchestrator<'a> {
    risk_list: &'a RiskList,
    auditor: &'a dyn Auditor,
    prompt: &'a mut dyn Prompt,
    out: &'a mut dyn Write,
    show_spinner: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        risk_list: &'a RiskList,
        auditor: &'a dyn Auditor,
        prompt: &'a mut dyn Prompt,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            risk_list,
            auditor,
            prompt,
            out,
            show_spinner: false,
        }
    }

    /// Shows a spinner on stderr while the audit runs.
    pub fn with_spinner(mut self, enabled: bool) -> Self {
        self.show_spinner = enabled;
        self
    }

    pub fn run(&mut self, options: &ScanOptions) -> Result<()> {
        let root = options.project_folder.as_path();

        match options.mode() {
            Mode::Checks { scan_code, audit } => {
                if scan_code {
                    self.scan_code(root)?;
                }
                if audit {
                    self.audit(root)?;
                }
            }
            Mode::Interactive => {
                self.list_manifests(root)?;

                if self.confirm(AUDIT_QUESTION)? {
                    self.audit(root)?;
                }
                if self.confirm(SCAN_QUESTION)? {
                    self.scan_code(root)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Prints every manifest with its dependencies, returning what was flagged.
    ///
    /// A manifest that fails to parse aborts the listing.
    pub fn list_manifests(&mut self, root: &Path) -> Result<Vec<FlaggedDependency>> {
        let manifests = find_manifests(root);
        output::write_manifest_count(self.out, manifests.len())?;

        let mut flagged = Vec::new();
        for path in &manifests {
            output::write_manifest_header(self.out, path)?;

            let manifest = read_manifest(path)?;
            let reports = check_dependencies(manifest.dependency_names(), self.risk_list);
            output::write_dependency_reports(self.out, &reports)?;

            if let Some(scripts) = manifest.scripts() {
                output::write_scripts(self.out, scripts)?;
            }
            output::write_manifest_footer(self.out)?;

            flagged.extend(reports.into_iter().filter_map(|report| {
                let entry = report.risk?;
                Some(FlaggedDependency {
                    manifest: path.clone(),
                    name: report.name,
                    risk: entry.risk,
                })
            }));
        }

        info!(manifests = manifests.len(), flagged = flagged.len(), "manifest listing finished");
        output::write_flagged_summary(self.out, &flagged)?;
        Ok(flagged)
    }

    /// Scans sources for every watched name and prints each match.
    pub fn scan_code(&mut self, root: &Path) -> Result<usize> {
        let watched = self.risk_list.watched_names();
        let matches = scan_sources(root, &watched);
        for m in &matches {
            output::write_source_match(self.out, m)?;
        }
        Ok(matches.len())
    }

    /// Runs the audit once. Failures are reported, never propagated.
    pub fn audit(&mut self, root: &Path) -> Result<bool> {
        let command = self.auditor.describe();
        let spinner = self.show_spinner.then(|| audit_spinner(&command));

        let result = self.auditor.run(root);

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match result {
            Ok(outcome) => {
                output::write_audit_outcome(self.out, &command, &outcome)?;
                Ok(outcome.is_success())
            }
            Err(e) => {
                output::write_audit_spawn_error(self.out, &command, &e)?;
                Ok(false)
            }
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        let answer = self
            .prompt
            .read_answer()
            .context("failed to read answer from console")?;
        Ok(answer.as_deref().is_some_and(is_yes))
    }
}

fn audit_spinner(command: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Running {}...", command));
    pb
}
