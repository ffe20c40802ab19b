//! arith: small arithmetic utility CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use arith::calculator;
use arith::config;
use arith::constants;
use arith::env;
use arith::logging;
use arith::models;
use arith::output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, NumberArgs, OperandArgs};
use config::Config;
use env::Env;
use models::{Evaluation, Number, Operation};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let working_dir = std::env::current_dir().ok();
    let mut config = Config::load(cli.config.as_deref(), working_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;

    // Layer 1: CLI flags
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    let filter = logging::resolve_filter(cli.verbose, &config.log.level);
    let installed = if let Err(logging::LoggingError::InvalidFilter { directive, .. }) =
        logging::build_filter(&filter)
    {
        eprintln!(
            "Warning: ignoring invalid log level '{directive}', using '{}'",
            constants::DEFAULT_LOG_LEVEL
        );
        config.log.level = constants::DEFAULT_LOG_LEVEL.to_string();
        logging::init(constants::DEFAULT_LOG_LEVEL, config.output.color)
    } else {
        logging::init(&filter, config.output.color)
    };
    installed.context("failed to initialise logging")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Add(args) => run_add(args, &config),
        Command::Compute(args) => {
            run_numeric(Operation::Compute, calculator::compute, args, &config)
        }
        Command::Combine(args) => {
            run_numeric(Operation::Combine, calculator::combine, args, &config)
        }
        Command::Config => run_config(&config),
        Command::Version => run_version(),
    }
}

/// Validate and add two integer operands.
fn run_add(args: OperandArgs, config: &Config) -> Result<()> {
    let OperandArgs { a, b } = args;
    let sum = calculator::add(a.clone(), b.clone())?;
    print!(
        "{}",
        output::render(config.output.format, &Evaluation::new(Operation::Add, a, b, sum))
    );
    Ok(())
}

/// Evaluate `compute` or `combine` on two numbers.
fn run_numeric(
    operation: Operation,
    eval: fn(Number, Number) -> Number,
    args: NumberArgs,
    config: &Config,
) -> Result<()> {
    let NumberArgs { a, b } = args;
    let result = eval(a, b);
    tracing::debug!(%operation, %result, "evaluated");
    print!(
        "{}",
        output::render(config.output.format, &Evaluation::new(operation, a, b, result))
    );
    Ok(())
}

/// Print the effective configuration.
fn run_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("failed to serialise configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
