//! The record of a single evaluated operation.

use serde::Serialize;
use strum::Display;

use super::{Number, Operand};

/// Which operation produced an [`Evaluation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Compute,
    Combine,
}

/// One operation, its two operands and its result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: [Operand; 2],
    pub result: Number,
}

impl Evaluation {
    pub fn new(
        operation: Operation,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
        result: impl Into<Number>,
    ) -> Self {
        Self {
            operation,
            operands: [a.into(), b.into()],
            result: result.into(),
        }
    }
}
