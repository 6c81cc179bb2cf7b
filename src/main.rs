//! Mousetrap CLI
//!
//! Runs an event script through the mouse trap state machine.

use anyhow::{bail, Context, Result};
use clap::Parser;
use mousetrap::script::{RunOptions, Script, ScriptRunner};
use mousetrap::{new_trap, Console, MouseAction, RunReport, StateHistory, TrapState};
use serde::Serialize;
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mousetrap")]
#[command(version, about = "Drive the mouse trap state machine from an event script", long_about = None)]
struct Cli {
    /// Script file; the third field of each line is an event code 0-5
    #[arg(default_value = "MouseMoves.txt")]
    script: PathBuf,

    /// Log and skip malformed lines instead of stopping
    #[arg(long)]
    skip_malformed: bool,

    /// Validate the script and report every malformed line without running it
    #[arg(long, conflicts_with = "skip_malformed")]
    check: bool,

    /// Print the run report and history as JSON after the run
    #[arg(long, conflicts_with = "check")]
    report_json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let script = Script::from_path(&cli.script)
        .with_context(|| format!("Failed to load script {}", cli.script.display()))?;

    if cli.check {
        return check_script(&script, &cli.script);
    }

    let options = if cli.skip_malformed {
        RunOptions::default().skip_malformed()
    } else {
        RunOptions::default()
    };

    let mut trap = new_trap(Console);
    let report = ScriptRunner::new(options)
        .run(&mut trap, &script)
        .with_context(|| format!("Script {} aborted", cli.script.display()))?;

    if cli.report_json {
        print_report(&report, trap.history())?;
    }

    Ok(())
}

fn check_script(script: &Script, path: &Path) -> Result<()> {
    match script.validate::<MouseAction>() {
        Validation::Success(events) => {
            info!(events = events.len(), "script is valid");
            println!("{}: {} events, no errors", path.display(), events.len());
            Ok(())
        }
        Validation::Failure(errors) => {
            for error in errors.iter() {
                eprintln!("{error}");
            }
            bail!("{}: {} malformed line(s)", path.display(), errors.len());
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a RunReport<TrapState>,
    history: &'a StateHistory<TrapState>,
}

fn print_report(report: &RunReport<TrapState>, history: &StateHistory<TrapState>) -> Result<()> {
    let output = JsonOutput { report, history };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
