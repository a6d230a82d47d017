use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use depsentry::{
    output, risk_list, CommandAuditor, Config, ConsolePrompt, Orchestrator, ScanOptions,
};
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod exit_codes {
    pub const ERROR: u8 = 1;
}

#[derive(Parser, Debug)]
#[command(name = "depsentry")]
#[command(
    author,
    version,
    about = "Scan project dependencies for potentially dangerous libraries"
)]
struct Cli {
    /// Path to the project folder (for package.json)
    #[arg(
        short = 'p',
        long = "project_folder",
        visible_alias = "project-folder",
        required_unless_present_any = ["init_config", "show_config"]
    )]
    project_folder: Option<PathBuf>,

    /// Search for malicious libraries in the project code (also `-sc`)
    #[arg(short = 's', long = "scan_code", visible_alias = "scan-code")]
    scan_code: bool,

    /// Run npm audit
    #[arg(short = 'a', long)]
    audit: bool,

    /// Risk list JSON to use instead of the default lookup
    #[arg(long, value_name = "PATH")]
    risk_list: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write a default config file and exit
    #[arg(long, conflicts_with = "show_config")]
    init_config: bool,

    /// Show the config file path and contents, then exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    if cli.no_color {
        output::set_color(false);
    }

    if cli.init_config || cli.show_config {
        return handle_config(cli.init_config);
    }

    let config = Config::load().context("failed to load configuration")?;

    let risk_path = cli.risk_list.or_else(|| config.risk_list.clone());
    let risk_list =
        risk_list::resolve(risk_path.as_deref()).context("cannot continue without a risk list")?;

    let auditor = CommandAuditor::from_command_line(&config.audit_command)
        .context("audit_command in config is empty")?;

    let options = ScanOptions {
        project_folder: cli
            .project_folder
            .context("--project_folder is required")?,
        scan_code: cli.scan_code,
        audit: cli.audit,
    };

    let mut prompt = ConsolePrompt;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    Orchestrator::new(&risk_list, &auditor, &mut prompt, &mut out)
        .with_spinner(io::stderr().is_terminal())
        .run(&options)
}

/// Rewrites the two-letter `-sc` short flag, which clap cannot express.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg.to_str() == Some("-sc") {
                OsString::from("--scan_code")
            } else {
                arg
            }
        })
        .collect()
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_config(init: bool) -> Result<()> {
    let config_path = Config::config_path();

    if init {
        if config_path.exists() {
            println!("Config file already exists at: {}", config_path.display());
            return Ok(());
        }

        Config::default().save()?;
        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Default configuration:");
        println!("{}", Config::generate_default_config());
        return Ok(());
    }

    println!("Config file: {}", config_path.display());
    println!();
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        println!("{}", content);
    } else {
        println!("No config file found; using defaults.");
        println!("Run 'depsentry --init-config' to create one.");
        println!();
        println!("{}", Config::generate_default_config());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["depsentry", "-p", "app", "-sc", "-a"]).unwrap();
        assert_eq!(cli.project_folder, Some(PathBuf::from("app")));
        assert!(cli.scan_code);
        assert!(cli.audit);
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&["depsentry", "--project_folder", "app", "--scan_code"]).unwrap();
        assert!(cli.scan_code);
        assert!(!cli.audit);

        let cli = parse(&["depsentry", "--project-folder", "app", "--scan-code"]).unwrap();
        assert!(cli.scan_code);
    }

    #[test]
    fn test_project_folder_required() {
        assert!(parse(&["depsentry", "-a"]).is_err());
        assert!(parse(&["depsentry", "--show-config"]).is_ok());
    }

    #[test]
    fn test_only_exact_sc_is_rewritten() {
        let args = normalize_args(["x", "-sc", "-s", "--sc"].map(OsString::from));
        assert_eq!(args, ["x", "--scan_code", "-s", "--sc"].map(OsString::from));
    }
}
