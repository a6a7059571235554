//! Shifts by an arbitrary number of bits.
//!
//! Shifting left moves bits towards higher indices and grows the vector so no bit is lost.
//! Shifting right moves bits towards index 0 and keeps the length, discarding the lowest bits.

use super::{BitVec, Block, BITS_PER_BLOCK, EMPTY_BLOCK};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::{Shl, Shr};

impl BitVec {
    /// Returns a copy with every bit moved `n` positions up, growing the length by `n`.
    ///
    /// The lowest `n` bits of the result are 0.
    ///
    /// # Panics
    ///
    /// Panics if the resulting length overflows `usize`.
    pub fn shift_left(&self, n: usize) -> BitVec {
        if n == 0 {
            return self.clone();
        }
        let num_bits = self
            .num_bits
            .checked_add(n)
            .expect("BitVec length overflow");
        let mut result = BitVec::zeroes(num_bits);
        Self::or_shifted(&mut result.storage, &self.storage, n);
        result.clear_trailing_bits();
        result
    }

    /// Returns a copy with every bit moved `n` positions down, keeping the same length.
    ///
    /// The lowest `n` bits are discarded and the highest `n` bits of the result are 0.
    pub fn shift_right(&self, n: usize) -> BitVec {
        if n == 0 {
            return self.clone();
        }
        if n >= self.num_bits {
            return BitVec::zeroes(self.num_bits);
        }

        let div = Self::block_index(n);
        let rem = Self::bit_offset(n) as u32;
        let len = self.storage.len();
        let storage: Vec<Block> = (0..len)
            .map(|i| {
                let src = i + div;
                if src >= len {
                    return EMPTY_BLOCK;
                }
                let mut block = self.storage[src] >> rem;
                if rem != 0 && src + 1 < len {
                    block |= self.storage[src + 1] << (BITS_PER_BLOCK as u32 - rem);
                }
                block
            })
            .collect();

        let mut result = BitVec {
            storage,
            num_bits: self.num_bits,
        };
        result.clear_trailing_bits();
        result
    }

    /// Shifts left by `n` if `n` is non-negative, otherwise shifts right by `-n`.
    ///
    /// See [BitVec::shift_left] and [BitVec::shift_right].
    pub fn shift(&self, n: isize) -> BitVec {
        if n < 0 {
            self.shift_right(n.unsigned_abs())
        } else {
            self.shift_left(n as usize)
        }
    }

    /// ORs `src`, moved up by `offset` bits, into `dst`.
    ///
    /// Each destination block takes the low bits of one source block and the carried-out high bits
    /// of the source block below it. Bits moved past the end of `dst` are dropped.
    pub(super) fn or_shifted(dst: &mut [Block], src: &[Block], offset: usize) {
        let div = Self::block_index(offset);
        let rem = Self::bit_offset(offset) as u32;
        for (i, &block) in src.iter().enumerate() {
            let Some(low) = dst.get_mut(i + div) else {
                break;
            };
            *low |= block << rem;
            if rem == 0 {
                continue;
            }
            if let Some(high) = dst.get_mut(i + div + 1) {
                *high |= block >> (BITS_PER_BLOCK as u32 - rem);
            }
        }
    }
}

impl Shl<usize> for &BitVec {
    type Output = BitVec;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl Shr<usize> for &BitVec {
    type Output = BitVec;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shift_right(rhs)
    }
}
