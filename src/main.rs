//! SolveSquare - finds the real roots of `Ax^2 + Bx + C = 0`.
//!
//! Coefficients come from the command line or, when omitted, from an
//! interactive prompt on stdin. Logging goes to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use solve_square::{
    models::algebra::quadratic::{Coefficients, QuadraticEquation},
    support::{
        prompt::{Prompt, PromptConfig},
        report::{Banner, Report},
    },
};
use twine_core::Model;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "solve-square",
    version,
    about = "Find the real roots of Ax^2 + Bx + C = 0"
)]
struct Cli {
    /// Coefficients A, B and C; prompted for when omitted
    #[arg(
        num_args = 3,
        value_names = ["A", "B", "C"],
        allow_negative_numbers = true
    )]
    coefficients: Option<Vec<f64>>,

    /// Tries allowed for each prompted coefficient
    #[arg(long, env = "SOLVE_SQUARE_TRIES", default_value_t = 3)]
    tries: usize,

    /// Do not print the banner
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity
    #[arg(long, env = "SOLVE_SQUARE_LOG", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(cli.log_level.into())
        .init();

    info!("SolveSquare v{VERSION} starting");
    debug!("{cli:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.quiet {
        writeln!(out, "{}", Banner::new(VERSION))?;
    }

    let coefficients = match cli.coefficients.as_deref() {
        Some(&[a, b, c]) => {
            Coefficients::new(a, b, c).context("invalid coefficient on the command line")?
        }
        Some(values) => bail!("expected three coefficients, got {}", values.len()),
        None => {
            let config = PromptConfig::new(cli.tries).context("--tries must be at least 1")?;
            let stdin = io::stdin();
            let mut prompt = Prompt::new(stdin.lock(), &mut out, config);
            prompt
                .read_coefficients()
                .context("failed to read coefficients")?
        }
    };

    let roots = QuadraticEquation::<f64>::new().call(&coefficients)?;
    debug!("{coefficients:?} -> {roots}");

    writeln!(out, "{}", Report::new(&roots))?;
    Ok(())
}
