//! Slicing, concatenation, reversal, and bit counting.

use super::{BitVec, Block, BITS_PER_BLOCK, EMPTY_BLOCK};
use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use tracing::debug;

impl BitVec {
    /// Returns the bits in `[start, end)` as a new vector of `end - start` bits.
    ///
    /// Positions before 0 or at/after the end of `self` are read as 0, so the range may extend
    /// past either end of the vector.
    ///
    /// Returns [Error::InvalidRange] if `end < start`.
    pub fn slice(&self, start: isize, end: isize) -> Result<BitVec, Error> {
        if end < start {
            debug!(start, end, "rejected slice range");
            return Err(Error::InvalidRange { start, end });
        }

        let mut result = BitVec::zeroes(end.abs_diff(start));
        let mut offset = start as i128;
        for block in result.storage.iter_mut() {
            *block = self.block_at(offset);
            offset += BITS_PER_BLOCK as i128;
        }
        result.clear_trailing_bits();
        Ok(result)
    }

    /// Returns a new vector holding the bits of `self` followed by the bits of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the combined length overflows `usize`.
    pub fn append(&self, other: &BitVec) -> BitVec {
        let num_bits = self
            .num_bits
            .checked_add(other.num_bits)
            .expect("BitVec length overflow");
        let num_blocks = Self::num_blocks(num_bits);

        let mut storage = Vec::with_capacity(num_blocks);
        storage.extend_from_slice(&self.storage);
        storage.resize(num_blocks, EMPTY_BLOCK);
        Self::or_shifted(&mut storage, &other.storage, self.num_bits);

        let mut result = BitVec { storage, num_bits };
        result.clear_trailing_bits();
        result
    }

    /// Returns a copy with the order of the bits reversed (bit `i` moves to `len - 1 - i`).
    pub fn reverse(&self) -> BitVec {
        // Reversing every block and the block order reverses the padded vector, which leaves the
        // unused bits of the last block at the bottom.
        let padded_bits = self.storage.len() * BITS_PER_BLOCK;
        let padded = BitVec {
            storage: self
                .storage
                .iter()
                .rev()
                .map(|block| block.reverse_bits())
                .collect(),
            num_bits: padded_bits,
        };

        let mut result = padded.shift_right(padded_bits - self.num_bits);
        result.num_bits = self.num_bits;
        result.clear_trailing_bits();
        result
    }

    /// Returns the number of bits set to 1.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.storage
            .iter()
            .map(|block| block.count_ones() as usize)
            .sum()
    }

    /// Returns the number of bits set to 0.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.num_bits - self.count_ones()
    }

    /// Returns the number of 0 bits before the first 1 bit, or the length if no bit is set.
    pub fn trailing_zeros(&self) -> usize {
        for (i, &block) in self.storage.iter().enumerate() {
            if block != EMPTY_BLOCK {
                return i * BITS_PER_BLOCK + block.trailing_zeros() as usize;
            }
        }
        self.num_bits
    }

    /// Returns the block of bits starting at bit `offset`, reading positions outside of the vector
    /// as 0.
    fn block_at(&self, offset: i128) -> Block {
        if self.storage.is_empty()
            || offset <= -(BITS_PER_BLOCK as i128)
            || offset >= self.num_bits as i128
        {
            return EMPTY_BLOCK;
        }
        if offset < 0 {
            return self.storage[0] << (-offset) as u32;
        }

        let offset = offset as usize;
        let div = Self::block_index(offset);
        let rem = Self::bit_offset(offset) as u32;
        let mut block = self.storage[div] >> rem;
        if rem != 0 {
            if let Some(&next) = self.storage.get(div + 1) {
                block |= next << (BITS_PER_BLOCK as u32 - rem);
            }
        }
        block
    }
}
