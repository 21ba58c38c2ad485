#![deny(warnings)]

//! Standalone CLI for the bookstore and bill breakdown calculators.

use anyhow::Result;
use calc_core::{CalcConfig, ValidationError};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// Exit status for rejected input.
const EXIT_INVALID_INPUT: u8 = 2;

/// Bookstore cost and bill breakdown calculators
#[derive(Parser, Debug)]
#[command(name = "calc", version = VERSION, long_about = None)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wholesale cost and profit for an order of books
    Bookstore {
        /// Cover price of one book
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
        /// Number of copies ordered
        #[arg(allow_negative_numbers = true)]
        copies: i64,
    },
    /// Fewest bills for a whole-dollar amount
    Bills {
        /// Dollar amount
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Run both calculators with configured inputs
    Run {
        /// YAML config file (defaults are used when omitted)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

/// Lines destined for stdout and stderr.
#[derive(Debug, Default)]
struct Output {
    stdout: Vec<String>,
    stderr: Vec<String>,
}

impl Output {
    fn reject(&mut self, err: ValidationError) {
        self.stderr.push(calc_report::error_line(&err));
    }

    fn failed(&self) -> bool {
        !self.stderr.is_empty()
    }
}

fn bookstore_output(price: Decimal, copies: i64, format: Format, out: &mut Output) -> Result<()> {
    match bookstore::compute(price, copies) {
        Ok(r) => match format {
            Format::Text => out.stdout.extend(calc_report::bookstore_lines(&r)),
            Format::Json => out.stdout.push(calc_report::to_json(&r)?),
        },
        Err(e) => out.reject(e),
    }
    Ok(())
}

fn bills_output(amount: i64, format: Format, out: &mut Output) -> Result<()> {
    match bills::compute(amount) {
        Ok(outcome) => match format {
            Format::Text => out.stdout.extend(calc_report::bill_lines(&outcome)),
            Format::Json => out.stdout.push(calc_report::to_json(&outcome)?),
        },
        Err(e) => out.reject(e),
    }
    Ok(())
}

fn execute(command: Commands, format: Format) -> Result<Output> {
    let mut out = Output::default();
    match command {
        Commands::Bookstore { price, copies } => bookstore_output(price, copies, format, &mut out)?,
        Commands::Bills { amount } => bills_output(amount, format, &mut out)?,
        Commands::Run { config } => {
            let cfg = match config {
                Some(path) => CalcConfig::load(path)?,
                None => CalcConfig::default(),
            };
            debug!(?cfg, "running configured calculators");
            bookstore_output(
                cfg.bookstore.cover_price,
                cfg.bookstore.number_of_copies,
                format,
                &mut out,
            )?;
            bills_output(cfg.bills.dollar_amount, format, &mut out)?;
        }
    }
    Ok(out)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logging setup
    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!(command = ?cli.command, "starting calc");

    let out = execute(cli.command, cli.format)?;

    let mut stdout = std::io::stdout().lock();
    for line in &out.stdout {
        writeln!(stdout, "{line}")?;
    }
    let mut stderr = std::io::stderr().lock();
    for line in &out.stderr {
        writeln!(stderr, "{line}")?;
    }

    if out.failed() {
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
