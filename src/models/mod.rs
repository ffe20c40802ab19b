//! Shared types used across all modules.
//!
//! Operands, numbers and evaluation records live here so that the
//! calculator, config and output modules don't reach into each other.

pub mod evaluation;
pub mod operand;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use evaluation::{Evaluation, Operation};
pub use operand::{Number, Operand, ParseNumberError};

/// How evaluation results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable line.
    #[default]
    Terminal,
    /// A single JSON object.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}
