//! Final assembly of Pi from the merged series state.
//!
//! `pi ≈ (Q · 426880 · √10005) / T`, evaluated at the working precision. `P`
//! is not part of the closed form; it only exists to drive the combine
//! algebra. A zero `T` means zero valid terms were combined, which is a
//! configuration error upstream and fatal here.

use num_bigint::BigInt;

use crate::error::PiError;
use crate::kernels::pqt::Pqt;
use crate::kernels::real::Real;

/// Scalar factor of the Chudnovsky closed form (`426880 = sqrt(C³/10005)`).
pub const NUMERATOR_FACTOR: u64 = 426_880;

/// Radicand of the closed form's square root.
pub const SQRT_ARG: u64 = 10_005;

/// Converts the final `(P, Q, T)` into a working-precision approximation of
/// Pi.
///
/// `Q · 426880` is exact integer arithmetic; the square root and the final
/// division each truncate at the working precision, which the precision
/// estimator's guard bits account for.
pub fn assemble_pi(result: &Pqt, precision: u64) -> Result<Real, PiError> {
    let root = Real::sqrt_of_u64(SQRT_ARG, precision);
    let numerator = root.mul_bigint(&(&result.q * BigInt::from(NUMERATOR_FACTOR)));
    numerator.div_bigint(&result.t)
}
