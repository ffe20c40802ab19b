//! arith: small arithmetic utility (library crate).
//!
//! The operations live in [`calculator`]; the remaining modules back the
//! `arith` binary and are public for integration tests.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;

pub use calculator::{CalcError, add, combine, compute};
pub use models::{Number, Operand};
