//! The digit-extraction producer.
//!
//! Starting from the fractional part of the assembled Pi value, each
//! iteration scales the remainder by `10^take`, truncates toward zero into a
//! block integer, and subtracts it back out to form the next remainder. Both
//! the scale step and the subtraction are exact in the fixed-point
//! representation, so extraction introduces no error of its own; block
//! boundaries fall wherever `take` says, and the remainder carries the rest.
//!
//! This stage is inherently sequential (each block's remainder depends on the
//! previous block's) and is the pipeline bottleneck; it overlaps with the
//! writer through the handoff queue, not with itself.

use num_bigint::BigInt;

use crate::digit_pipeline::block::DigitBlock;
use crate::digit_pipeline::queue::BlockSender;
use crate::kernels::real::Real;

/// `10^exponent` as an exact integer.
pub(crate) fn pow10(exponent: usize) -> BigInt {
    BigInt::from(10u32).pow(exponent as u32)
}

/// Streams `digits` decimal digits of `pi`'s fractional part into the queue
/// as blocks of at most `block_size` digits, then signals completion.
///
/// `10^block_size` is computed once and reused for every full-size block; the
/// final short block, if any, computes its own smaller power.
pub fn stream_digits(pi: &Real, digits: u64, block_size: usize, sender: BlockSender) {
    let block_size = block_size.max(1);
    let mut remainder = pi.fract();
    debug_assert!(
        !remainder.is_negative(),
        "extraction invariant violated: fractional remainder must be non-negative"
    );

    let pow10_block = pow10(block_size);

    let mut remaining = digits;
    while remaining > 0 {
        let take = if remaining >= block_size as u64 {
            block_size
        } else {
            remaining as usize
        };

        let scaled = if take == block_size {
            remainder.mul_bigint(&pow10_block)
        } else {
            remainder.mul_bigint(&pow10(take))
        };

        let block_value = scaled.trunc();
        debug_assert!(
            block_value >= BigInt::from(0),
            "extraction invariant violated: block value must be non-negative"
        );
        remainder = scaled.sub_bigint(&block_value);

        sender.push(DigitBlock {
            digits: block_value.to_string(),
            expected_len: take,
        });

        remaining -= take as u64;
    }

    sender.finish();
}
