//! Clap argument types.

use clap::{ArgAction, Parser};
use std::convert::Infallible;
use std::path::PathBuf;

use arith::models::{Number, Operand, OutputFormat};

/// Small arithmetic utility.
#[derive(Parser, Debug)]
#[command(name = "arith", version = arith::constants::VERSION)]
pub struct Cli {
    /// Output format (overrides config and ARITH_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Read configuration from this file instead of ./.arith.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add two integers.
    Add(OperandArgs),

    /// Add two numbers.
    Compute(NumberArgs),

    /// Multiply two numbers (after computing their sum).
    Combine(NumberArgs),

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Two operands of any type. Validation happens in `add`.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct OperandArgs {
    #[arg(value_parser = parse_operand)]
    pub a: Operand,
    #[arg(value_parser = parse_operand)]
    pub b: Operand,
}

/// Route through `Operand`'s integer-first `FromStr`; clap would otherwise
/// pick `From<String>` and turn every argument into text.
fn parse_operand(s: &str) -> Result<Operand, Infallible> {
    s.parse()
}

/// Two numeric operands.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct NumberArgs {
    pub a: Number,
    pub b: Number,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_with_integers() {
        let cli = Cli::try_parse_from(["arith", "add", "5", "3"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.a, Operand::Int(5));
                assert_eq!(args.b, Operand::Int(3));
            }
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn parse_add_accepts_text() {
        let cli = Cli::try_parse_from(["arith", "add", "cascsa", "9"]).unwrap();
        match cli.command {
            Command::Add(args) => assert_eq!(args.a, Operand::Text("cascsa".into())),
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn parsed_add_operands_reach_calculator_as_integers() {
        let cli = Cli::try_parse_from(["arith", "add", "5", "3"]).unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert_eq!(arith::calculator::add(args.a, args.b).unwrap(), 8);
    }

    #[test]
    fn parsed_text_operand_is_rejected_by_calculator() {
        let cli = Cli::try_parse_from(["arith", "add", "cascsa", "9"]).unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert!(matches!(
            arith::calculator::add(args.a, args.b),
            Err(arith::CalcError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn parse_add_with_float_operand() {
        let cli = Cli::try_parse_from(["arith", "add", "2.5", "-1"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.a, Operand::Float(2.5));
                assert_eq!(args.b, Operand::Int(-1));
            }
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn parse_negative_operands() {
        let cli = Cli::try_parse_from(["arith", "combine", "-2", "3"]).unwrap();
        match cli.command {
            Command::Combine(args) => {
                assert_eq!(args.a, Number::Int(-2));
                assert_eq!(args.b, Number::Int(3));
            }
            _ => panic!("expected Combine command"),
        }
    }

    #[test]
    fn compute_rejects_non_numeric() {
        let result = Cli::try_parse_from(["arith", "compute", "abc", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_operand_is_an_error() {
        assert!(Cli::try_parse_from(["arith", "add", "1"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "arith", "compute", "1", "2", "--format", "json", "--no-color", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["arith", "version"]).unwrap();
        assert!(cli.format.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Command::Version));
    }
}
