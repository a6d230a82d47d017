pub mod audit;
pub mod config;
pub mod error;
pub mod manifest;
pub mod matcher;
pub mod model;
pub mod orchestrator;
pub mod output;
pub mod prompt;
pub mod risk_list;
pub mod scanner;

pub use audit::{AuditOutcome, Auditor, CommandAuditor};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{DependencyReport, Manifest, RiskEntry, RiskList, SourceMatch};
pub use orchestrator::{Orchestrator, ScanOptions};
pub use prompt::{ConsolePrompt, Prompt};
