//! # print-math-refs
//!
//! Prints the reference listing to stdout. Diagnostics go to stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};
use math_refs::{values, Overrides, Report};

#[derive(Parser, Debug)]
#[command(name = "print-math-refs", version, about = "Prints reference values of standard math functions", long_about = None)]
struct Cli {
    /// Override default inputs: e.g. 'sin=0,0.5 cos=0,1.0'
    #[arg(long, value_name = "ENTRIES", value_parser = values::parse)]
    values: Option<Overrides>,

    /// Log each nan substitution to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::builder()
        .filter_level(log_level)
        .parse_default_env()
        .init();

    let overrides = cli.values.unwrap_or_default();
    for name in overrides.unknown_names() {
        warn!("--values names unknown function {name:?}; its inputs are ignored");
    }

    match write_report(&overrides) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("failed to write report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn write_report(overrides: &Overrides) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Report::new(overrides).write_to(&mut out)?;
    out.flush()
}
