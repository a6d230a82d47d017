//! Console rendering of scan reports.
//!
//! Every writer takes `&mut dyn Write` so reports can be captured in tests;
//! the binary passes a locked stdout. Colors come from `colored` and respect
//! `NO_COLOR` / `--no-color`.

mod cli;
mod json;

pub use cli::{
    write_audit_outcome, write_audit_spawn_error, write_dependency_reports, write_flagged_summary,
    write_manifest_count, write_manifest_footer, write_manifest_header, write_scripts,
    write_source_match, FlaggedDependency,
};
pub use json::to_string_indent1;

/// Globally enables or disables ANSI colors.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}
