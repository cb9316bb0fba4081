use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use schedule_extractor::{extract, WeeklyAvailability};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI definition ──────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "agenda",
    version,
    about = "Extract weekly availability from Portuguese text",
    long_about = "Reads phrases like \"de segunda a quarta das 20h às 23h\" and prints \
                  the days and time slots they describe as JSON."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print only the days mentioned in TEXT.
    Parse {
        /// Availability text. Reads stdin when omitted or "-".
        text: Option<String>,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Merge the days mentioned in TEXT onto a stored week and print the result.
    Merge {
        /// JSON file holding the full week to merge onto.
        #[arg(long)]
        base: PathBuf,

        /// Availability text. Reads stdin when omitted or "-".
        text: Option<String>,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Report slots with a missing side, an end not after the start, or an invalid time.
    Check {
        /// JSON file holding the full week.
        file: PathBuf,
    },
}

// ── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Parse { text, pretty } => cmd_parse(text, pretty),
        Command::Merge { base, text, pretty } => cmd_merge(&base, text, pretty),
        Command::Check { file } => cmd_check(&file),
    }
}

fn cmd_parse(text: Option<String>, pretty: bool) -> Result<ExitCode> {
    let text = read_text(text)?;
    let partial = extract(&text);
    debug!(days = partial.len(), "extracted");
    print_json(&partial, pretty)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_merge(base: &Path, text: Option<String>, pretty: bool) -> Result<ExitCode> {
    let mut week = load_week(base)?;
    let text = read_text(text)?;
    let partial = extract(&text);
    debug!(days = partial.len(), base = %base.display(), "merging");
    week.merge(&partial);
    print_json(&week, pretty)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(file: &Path) -> Result<ExitCode> {
    let week = load_week(file)?;
    let issues = week.validate();
    if issues.is_empty() {
        println!("ok");
        return Ok(ExitCode::SUCCESS);
    }
    for issue in &issues {
        println!("{issue}");
    }
    Ok(ExitCode::FAILURE)
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

fn load_week(path: &Path) -> Result<WeeklyAvailability> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid week JSON in {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
