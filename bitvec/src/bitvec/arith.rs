//! Unsigned addition and subtraction over vectors of any length.
//!
//! Vectors are interpreted as unsigned integers, with bit 0 as the least significant bit. Both
//! operations ripple a single carry (or borrow) bit through the blocks, least significant first.
//!
//! The result of [add] is as long as the longer operand, while the result of [sub] is always as
//! long as the minuend. In both cases, bits that don't fit in the result set the returned
//! carry/borrow flag, including bits that only overflow the (partial) last block of the result.

use super::{BitVec, Block, EMPTY_BLOCK};
use tracing::trace;

/// Adds `a`, `b`, and the `carry` bit, returning the sum and the carry out.
#[inline(always)]
fn add_with_carry(a: Block, b: Block, carry: bool) -> (Block, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry as Block);
    (sum, c1 | c2)
}

/// Subtracts `b` and the `borrow` bit from `a`, returning the difference and the borrow out.
#[inline(always)]
fn sub_with_borrow(a: Block, b: Block, borrow: bool) -> (Block, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow as Block);
    (diff, b1 | b2)
}

/// Returns `x + y + carry` and whether the sum overflowed.
///
/// The result is as long as the longer of `x` and `y` (operands are reordered so that the longer
/// one determines the length). The returned flag is true if the sum does not fit in that many bits.
/// If both operands are empty, `carry` is returned as-is.
pub fn add(x: &BitVec, y: &BitVec, carry: bool) -> (BitVec, bool) {
    let (short, long) = if x.num_bits < y.num_bits {
        (x, y)
    } else {
        (y, x)
    };

    let mut result = BitVec::zeroes(long.num_bits);
    let mut carry = carry;
    for (i, (r, &a)) in result.storage.iter_mut().zip(long.storage.iter()).enumerate() {
        let b = short.storage.get(i).copied().unwrap_or(EMPTY_BLOCK);
        (*r, carry) = add_with_carry(a, b, carry);
    }

    // The last block may have overflowed into bits past the end of the result
    if result.clear_trailing_bits() {
        trace!(len = result.num_bits, "carry out of partial block");
        carry = true;
    }
    (result, carry)
}

/// Returns `x - y - borrow` (modulo `2^x.len()`) and whether the subtraction borrowed.
///
/// The result is always as long as `x`, even when `y` is longer. The returned flag is true if
/// `x < y + borrow`. Blocks of `y` past the end of `x` do not contribute to the result, but do
/// contribute to the borrow.
pub fn sub(x: &BitVec, y: &BitVec, borrow: bool) -> (BitVec, bool) {
    let mut result = BitVec::zeroes(x.num_bits);
    let mut borrow = borrow;
    let blocks = x.storage.len().max(y.storage.len());
    for i in 0..blocks {
        let a = x.storage.get(i).copied().unwrap_or(EMPTY_BLOCK);
        let b = y.storage.get(i).copied().unwrap_or(EMPTY_BLOCK);
        let (diff, next) = sub_with_borrow(a, b, borrow);
        if let Some(r) = result.storage.get_mut(i) {
            *r = diff;
        }
        borrow = next;
    }

    // A wrapped difference leaves 1s past the end of the result
    if result.clear_trailing_bits() {
        trace!(len = result.num_bits, "borrow out of partial block");
        borrow = true;
    }
    (result, borrow)
}
