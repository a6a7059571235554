//! Bitwise logic over vectors of (possibly) different lengths.
//!
//! Binary operations behave as if the shorter operand were padded with zeroes up to the length of
//! the longer one, and always return a vector as long as the longer operand.

use super::{BitVec, Block, EMPTY_BLOCK};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::{BitAnd, BitOr, BitXor, Not};

/// Orders two vectors by length, shortest first.
#[inline]
fn by_len<'a>(a: &'a BitVec, b: &'a BitVec) -> (&'a BitVec, &'a BitVec) {
    if a.num_bits > b.num_bits {
        (b, a)
    } else {
        (a, b)
    }
}

/// Combines the blocks of `short` and `long` with `op`, copying the blocks of `long` that `short`
/// does not cover.
///
/// Only valid for operations where `op(0, x) == x`, since the zeroed trailing bits of `short`'s
/// last block are combined with `long`'s bits.
fn combine<F: Fn(Block, Block) -> Block>(short: &BitVec, long: &BitVec, op: F) -> BitVec {
    let covered = short.storage.len();
    let storage: Vec<Block> = short
        .storage
        .iter()
        .zip(long.storage.iter())
        .map(|(&a, &b)| op(a, b))
        .chain(long.storage[covered..].iter().copied())
        .collect();
    let mut result = BitVec {
        storage,
        num_bits: long.num_bits,
    };
    result.clear_trailing_bits();
    result
}

/// Returns the bitwise AND of `a` and `b`.
///
/// The result is as long as the longer operand. Positions past the end of the shorter operand are
/// always 0.
pub fn and(a: &BitVec, b: &BitVec) -> BitVec {
    let (short, long) = by_len(a, b);
    let mut result = BitVec::zeroes(long.num_bits);
    for (r, (&x, &y)) in result
        .storage
        .iter_mut()
        .zip(short.storage.iter().zip(long.storage.iter()))
    {
        *r = x & y;
    }

    // Nothing past the end of `short` survives
    let boundary = BitVec::bit_offset(short.num_bits);
    if boundary != 0 {
        let last = short.storage.len() - 1;
        result.storage[last] &= BitVec::mask_over_first_n_bits(boundary);
    }
    result.clear_trailing_bits();
    result
}

/// Returns the bitwise OR of `a` and `b`.
///
/// The result is as long as the longer operand. Positions past the end of the shorter operand
/// hold the bits of the longer operand.
pub fn or(a: &BitVec, b: &BitVec) -> BitVec {
    let (short, long) = by_len(a, b);
    combine(short, long, |x, y| x | y)
}

/// Returns the bitwise XOR of `a` and `b`.
///
/// The result is as long as the longer operand. Positions past the end of the shorter operand
/// hold the bits of the longer operand.
pub fn xor(a: &BitVec, b: &BitVec) -> BitVec {
    let (short, long) = by_len(a, b);
    combine(short, long, |x, y| x ^ y)
}

impl BitVec {
    /// Returns a copy with every bit flipped (1s become 0s and vice versa).
    pub fn not(&self) -> BitVec {
        let mut result = BitVec {
            storage: self.storage.iter().map(|block| !block).collect(),
            num_bits: self.num_bits,
        };
        result.clear_trailing_bits();
        result
    }

    /// Returns the bits of `other` that are not set in `self` (`other AND NOT self`).
    ///
    /// The result is as long as `self`: `other` is truncated, or extended with zeroes, to that
    /// length first.
    pub fn and_not(&self, other: &BitVec) -> BitVec {
        let mut result = BitVec::zeroes(self.num_bits);
        for (i, (r, &mask)) in result.storage.iter_mut().zip(self.storage.iter()).enumerate() {
            let bits = other.storage.get(i).copied().unwrap_or(EMPTY_BLOCK);
            *r = bits & !mask;
        }
        result.clear_trailing_bits();
        result
    }
}

impl Not for &BitVec {
    type Output = BitVec;

    fn not(self) -> Self::Output {
        BitVec::not(self)
    }
}

impl BitAnd for &BitVec {
    type Output = BitVec;

    fn bitand(self, rhs: Self) -> Self::Output {
        and(self, rhs)
    }
}

impl BitOr for &BitVec {
    type Output = BitVec;

    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, rhs)
    }
}

impl BitXor for &BitVec {
    type Output = BitVec;

    fn bitxor(self, rhs: Self) -> Self::Output {
        xor(self, rhs)
    }
}
