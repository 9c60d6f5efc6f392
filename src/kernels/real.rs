//! This module contains the fixed-point arbitrary-precision arithmetic the
//! assembly and digit-extraction stages run on.
//!
//! A `Real` is a big-integer mantissa scaled by `2^-precision`, where the
//! precision is the run's working bit count. The surface is deliberately
//! minimal: exactly the primitives the pipeline needs (integer multiply and
//! subtract, exact-truncating divide, square root, truncation, fractional
//! part), so the underlying bignum provider can be swapped without touching
//! the algorithm.
//!
//! Multiplying by an integer and subtracting an integer are *exact* in this
//! representation; only `div` and `sqrt` truncate, each contributing at most
//! one unit in the last place. The precision estimator's guard bits absorb
//! that accumulation.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::PiError;

/// A working-precision binary fixed-point value: `mantissa · 2^-precision`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Real {
    mantissa: BigInt,
    precision: u64,
}

impl Real {
    /// Lifts an integer into the working precision. Exact.
    pub fn from_bigint(value: BigInt, precision: u64) -> Self {
        Real {
            mantissa: value << precision,
            precision,
        }
    }

    /// The square root of a small non-negative integer, truncated to the
    /// working precision: `sqrt(n·2^2p) = sqrt(n)·2^p`.
    pub fn sqrt_of_u64(n: u64, precision: u64) -> Self {
        let scaled = BigInt::from(n) << (2 * precision);
        Real {
            mantissa: scaled.sqrt(),
            precision,
        }
    }

    /// The working precision this value carries, in bits.
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Multiplies by an exact integer. No rounding: the scale is untouched.
    pub fn mul_bigint(&self, n: &BigInt) -> Real {
        Real {
            mantissa: &self.mantissa * n,
            precision: self.precision,
        }
    }

    /// Subtracts an exact integer. No rounding.
    pub fn sub_bigint(&self, n: &BigInt) -> Real {
        Real {
            mantissa: &self.mantissa - (n << self.precision),
            precision: self.precision,
        }
    }

    /// Divides by an exact nonzero integer, truncating to the working
    /// precision.
    pub fn div_bigint(&self, n: &BigInt) -> Result<Real, PiError> {
        if n.is_zero() {
            return Err(PiError::ZeroDenominator);
        }
        Ok(Real {
            mantissa: &self.mantissa / n,
            precision: self.precision,
        })
    }

    /// Truncates toward zero to an integer.
    ///
    /// The pipeline only truncates non-negative values; for those the shift
    /// is exact truncation.
    pub fn trunc(&self) -> BigInt {
        debug_assert!(
            !self.mantissa.is_negative(),
            "trunc invariant violated: pipeline values must be non-negative"
        );
        &self.mantissa >> self.precision
    }

    /// The fractional part, `self − trunc(self)`. Exact.
    pub fn fract(&self) -> Real {
        let whole = self.trunc();
        Real {
            mantissa: &self.mantissa - (whole << self.precision),
            precision: self.precision,
        }
    }

    /// Whether the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }
}
