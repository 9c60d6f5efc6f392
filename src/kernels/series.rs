//! This module contains the pure kernels tying the binary-splitting state to
//! the Chudnovsky series: the series constants, the exact closed form of a
//! single term, and the digit-to-term-count sizing.

use num_bigint::BigInt;

use crate::kernels::pqt::Pqt;

/// Constant term of the linear coefficient: `a(k) = A + B·k`.
pub const A: u64 = 13_591_409;
/// Linear factor of the coefficient.
pub const B: u64 = 545_140_134;
/// The series base; `C³/24` enters every leaf's Q value.
pub const C: u64 = 640_320;

/// Decimal digits contributed by each series term.
pub const DIGITS_PER_TERM: f64 = 14.181647462725477;

/// Computes the shared `C³/24` constant. The division is exact
/// (`640320³ = 262537412640768000` is a multiple of 24). Computed once per
/// run and shared read-only across all split-phase threads.
pub fn c3_over_24() -> BigInt {
    BigInt::from(C).pow(3) / 24
}

/// Number of series terms needed for `digits` decimal digits, with a floor of
/// one term so a degenerate request still produces a valid series.
pub fn terms_for_digits(digits: u64) -> u64 {
    let terms = (digits as f64 / DIGITS_PER_TERM).ceil() as u64;
    terms.max(1)
}

/// The exact closed-form `(P, Q, T)` of the k-th series term.
///
/// For k = 0 the rising factorials are empty products, giving `P = Q = 1` and
/// `T = A`. For k > 0:
///   `p(k) = (6k−5)(2k−1)(6k−1)`
///   `q(k) = k³ · C³/24`
///   `t(k) = (−1)^k · p(k) · (A + B·k)`
///
/// The factors are built up in `BigInt` space; `p(k)` alone overflows 64-bit
/// arithmetic for term indices in the hundreds of millions.
pub fn term(k: u64, c3_over_24: &BigInt) -> Pqt {
    if k == 0 {
        return Pqt::unit(A);
    }

    let kk = BigInt::from(k);

    let mut pk = BigInt::from(6 * k - 5);
    pk *= BigInt::from(2 * k - 1);
    pk *= BigInt::from(6 * k - 1);

    let qk = kk.pow(3) * c3_over_24;

    let ak = BigInt::from(A) + BigInt::from(B) * &kk;

    let mut tk = &pk * ak;
    if k & 1 == 1 {
        tk = -tk;
    }

    Pqt {
        p: pk,
        q: qk,
        t: tk,
    }
}
