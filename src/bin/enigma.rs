//! `enigma`: encrypt and decrypt messages with a configured rotor machine.
//!
//! **Usage:**
//! ```text
//! enigma [-v...] [--strict] <CONFIG> [INPUT] [OUTPUT]
//! ```
//!
//! `CONFIG` is a text description, or JSON when it ends in `.json`. Input
//! defaults to standard input and output to standard output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use enigma::config::{load_config, MachineSpec};
use enigma::enforcement::{EnforcementBuilder, ViolationStrategy};
use enigma::machine::Machine;
use enigma::session::Session;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Process settings lines and messages with a rotor cipher machine.
#[derive(Parser)]
#[command(name = "enigma", version, about)]
struct Args {
    /// Machine description (text format, or JSON for `.json` files).
    config: PathBuf,

    /// Messages to process. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Where to write results. Writes standard output when omitted.
    output: Option<PathBuf>,

    /// Reject rotor layouts a real machine could not have, instead of
    /// only warning about them.
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let machine = read_machine(&args.config)?;

    let strategy = if args.strict {
        ViolationStrategy::Abort
    } else {
        ViolationStrategy::IgnoreAndLog
    };
    let rules = EnforcementBuilder::standard().on_violation(strategy).build();
    let mut session = Session::new(machine).with_rules(rules);

    let input = match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("could not open {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("could not read standard input")?;
            text
        }
    };

    let output = session.process(&input)?;

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("could not write {}", path.display()))?,
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("could not write standard output")?,
    }
    Ok(())
}

fn read_machine(path: &Path) -> Result<Machine> {
    let text =
        fs::read_to_string(path).with_context(|| format!("could not open {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let machine = if is_json {
        MachineSpec::from_json(&text)?.build()?
    } else {
        load_config(&text)?
    };
    tracing::debug!(config = %path.display(), rotors = machine.catalog().len(), "loaded machine");
    Ok(machine)
}
