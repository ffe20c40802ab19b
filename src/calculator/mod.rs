//! Core arithmetic operations.
//!
//! [`add`] validates that both operands are integers. [`compute`] and
//! [`combine`] are generic and return no errors; `combine` only needs the
//! sum for logging, so it takes it through [`CheckedSum`] and cannot
//! overflow on it.

use std::fmt::Debug;
use std::ops::{Add, Mul};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Number, Operand};

/// Errors returned by [`add`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Arguments must be integers. Received {a} ({}) and {b} ({})", .a.type_name(), .b.type_name())]
    InvalidArgumentType { a: Operand, b: Operand },

    #[error("integer overflow: {a} + {b} does not fit in 64 bits")]
    Overflow { a: i64, b: i64 },
}

/// Add two integer operands.
///
/// Both operands must be [`Operand::Int`]. Otherwise a diagnostic line
/// naming both values is written to stdout and
/// [`CalcError::InvalidArgumentType`] is returned.
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<i64, CalcError> {
    let (a, b) = (a.into(), b.into());

    let (Some(x), Some(y)) = (a.as_int(), b.as_int()) else {
        println!("Arguments must be integers. Received {a} and {b}");
        warn!(%a, %b, "rejected non-integer operands");
        return Err(CalcError::InvalidArgumentType { a, b });
    };

    let sum = [x, y]
        .into_iter()
        .try_fold(0i64, i64::checked_add)
        .ok_or(CalcError::Overflow { a: x, b: y })?;
    debug!(a = x, b = y, sum, "add");
    Ok(sum)
}

/// Return `a + b`.
pub fn compute<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Addition that reports an unrepresentable result instead of panicking.
pub trait CheckedSum: Sized {
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_sum_int {
    ($($t:ty),*) => {
        $(
            impl CheckedSum for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

checked_sum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CheckedSum for f32 {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl CheckedSum for f64 {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl CheckedSum for Number {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        Some(compute(self, rhs))
    }
}

/// Return `a * b`.
///
/// The sum of `a` and `b` is still evaluated first but only reaches the
/// debug log. An out-of-range sum is logged as such; the product is
/// returned regardless.
pub fn combine<T>(a: T, b: T) -> T
where
    T: CheckedSum + Mul<Output = T> + Clone + Debug,
{
    match a.clone().checked_sum(b.clone()) {
        Some(sum) => debug!(?sum, "combine: intermediate sum"),
        None => debug!(?a, ?b, "combine: intermediate sum out of range"),
    }
    a * b
}
