//! Operand and number types.
//!
//! [`Operand`] is dynamically typed so that the integer constraint of
//! [`crate::calculator::add`] can be checked at runtime. [`Number`] is the
//! narrower numeric type used by `compute` and `combine`.

use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, Mul};

use serde::Serialize;
use thiserror::Error;

/// A single input to an arithmetic operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Operand {
    /// Returns the integer value, or `None` for floats and text.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Operand::Int(v) => Some(*v),
            Operand::Float(_) | Operand::Text(_) => None,
        }
    }

    /// Human-readable name of the operand's type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Text(_) => "str",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(v) => write!(f, "{v}"),
            Operand::Float(v) => write!(f, "{v:?}"),
            Operand::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Lenient parsing: integers first, then finite floats, otherwise text.
impl std::str::FromStr for Operand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Operand::Int(v));
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Operand::Float(v)),
            _ => Ok(Operand::Text(s.to_string())),
        }
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Int(i64::from(v))
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Float(v)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(v) => Operand::Int(v),
            Number::Float(v) => Operand::Float(v),
        }
    }
}

/// Error returned when a string is not a finite number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a number")]
pub struct ParseNumberError {
    pub input: String,
}

/// A numeric value.
///
/// Integer arithmetic that leaves the `i64` range is promoted to float
/// rather than wrapping or panicking. Mixed int/float arithmetic yields
/// a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    fn combine_with(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Number::Int)
                .unwrap_or_else(|| Number::Float(float_op(self.as_f64(), rhs.as_f64()))),
            _ => Number::Float(float_op(self.as_f64(), rhs.as_f64())),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.combine_with(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.combine_with(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Operand::from(*self), f)
    }
}

impl std::str::FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Operand>() {
            Ok(Operand::Int(v)) => Ok(Number::Int(v)),
            Ok(Operand::Float(v)) => Ok(Number::Float(v)),
            _ => Err(ParseNumberError {
                input: s.to_string(),
            }),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_parse_prefers_integers() {
        assert_eq!("42".parse::<Operand>().unwrap(), Operand::Int(42));
        assert_eq!("-7".parse::<Operand>().unwrap(), Operand::Int(-7));
        assert_eq!("2.5".parse::<Operand>().unwrap(), Operand::Float(2.5));
        assert_eq!(
            "cascsa".parse::<Operand>().unwrap(),
            Operand::Text("cascsa".into())
        );
    }

    #[test]
    fn operand_parse_non_finite_is_text() {
        assert_eq!("inf".parse::<Operand>().unwrap(), Operand::Text("inf".into()));
        assert_eq!("NaN".parse::<Operand>().unwrap(), Operand::Text("NaN".into()));
    }

    #[test]
    fn operand_display() {
        assert_eq!(Operand::Int(5).to_string(), "5");
        assert_eq!(Operand::Float(2.0).to_string(), "2.0");
        assert_eq!(Operand::Text("abc".into()).to_string(), "abc");
    }

    #[test]
    fn operand_type_names() {
        assert_eq!(Operand::Int(1).type_name(), "int");
        assert_eq!(Operand::Float(1.5).type_name(), "float");
        assert_eq!(Operand::from("x").type_name(), "str");
    }

    #[test]
    fn operand_serializes_untagged() {
        let json = serde_json::to_value([Operand::Int(1), Operand::from("a")]).unwrap();
        assert_eq!(json, serde_json::json!([1, "a"]));
    }

    #[test]
    fn number_parse_rejects_text() {
        let err = "abc".parse::<Number>().unwrap_err();
        assert_eq!(err.input, "abc");
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn number_int_arithmetic_stays_int() {
        assert_eq!(Number::Int(2) + Number::Int(3), Number::Int(5));
        assert_eq!(Number::Int(2) * Number::Int(3), Number::Int(6));
    }

    #[test]
    fn number_mixed_arithmetic_is_float() {
        assert_eq!(Number::Int(2) + Number::Float(0.5), Number::Float(2.5));
        assert_eq!(Number::Float(1.5) * Number::Int(2), Number::Float(3.0));
    }

    #[test]
    fn number_overflow_promotes_to_float() {
        let sum = Number::Int(i64::MAX) + Number::Int(1);
        assert!(matches!(sum, Number::Float(v) if v > 9.0e18));

        let product = Number::Int(i64::MAX) * Number::Int(2);
        assert!(matches!(product, Number::Float(_)));
    }
}
