//! Working-precision sizing for the assembly and extraction stages.
//!
//! The precision must cover two independent requirements: the bits needed to
//! represent the requested decimal digits, and the bit-length of the
//! intermediate integers `Q` and `T`. The second term is input-dependent and
//! can exceed the digit-derived estimate for large digit counts, so this must
//! run *after* the split phase. Omitting it silently truncates the
//! rational-to-fixed-point conversion; this is a correctness parameter, not a
//! performance one.

use crate::kernels::pqt::Pqt;

/// Fixed safety margin absorbing the truncation of the later division and
/// square-root operations.
pub const GUARD_BITS: u64 = 128;

/// Bits per decimal digit: log2(10).
pub const LOG2_10: f64 = 3.321928094887362;

/// Computes the working bit-precision for one run. Valid for the whole run;
/// never recomputed or mutated afterward.
pub fn working_precision(digits: u64, result: &Pqt) -> u64 {
    let digit_bits = (digits as f64 * LOG2_10).ceil() as u64;
    let integer_bits = result.q.bits().max(result.t.bits());
    digit_bits.max(integer_bits) + GUARD_BITS
}
