//! Bit-vector implementation
//!
//! The bit-vector is a compact representation of a sequence of bits, using [u64] "blocks" for a
//! more-efficient memory layout than doing a [`Vec<bool>`]. Thus, if the length of the bit-vector
//! is not a multiple of 64, the last block will contain some bits that are not part of the vector.
//! An invariant of the implementation is that any bits in the last block that are not part of the
//! vector are set to 0.
//!
//! Operations that combine whole blocks (logic, shifts, arithmetic) may produce non-zero bits past
//! the end of the vector, so every operation that produces a vector finishes with
//! `clear_trailing_bits`.

use crate::Error;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::{
    fmt::{self, Formatter, Write as _},
    ops::Index,
};

mod arith;
pub use arith::{add, sub};
mod logic;
pub use logic::{and, or, xor};
mod shift;
mod structure;

/// Type alias for the underlying block type.
type Block = u64;

/// Number of bits in a [Block].
const BITS_PER_BLOCK: usize = Block::BITS as usize;

/// Empty block of bits (all bits set to 0).
const EMPTY_BLOCK: Block = 0;

/// Full block of bits (all bits set to 1).
const FULL_BLOCK: Block = Block::MAX;

/// Represents a vector of bits.
///
/// Stores bits using [u64] blocks for efficient storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    /// The underlying storage for the bits.
    storage: Vec<Block>,
    /// The total number of bits
    num_bits: usize,
}

impl BitVec {
    /// Creates a new, empty `BitVec`.
    #[inline]
    pub fn new() -> Self {
        BitVec {
            storage: Vec::new(),
            num_bits: 0,
        }
    }

    /// Creates a new `BitVec` with the specified capacity in bits.
    #[inline]
    pub fn with_capacity(size: usize) -> Self {
        BitVec {
            storage: Vec::with_capacity(Self::num_blocks(size)),
            num_bits: 0,
        }
    }

    /// Creates a new `BitVec` with `size` bits, all initialized to zero.
    #[inline]
    pub fn zeroes(size: usize) -> Self {
        BitVec {
            storage: vec![EMPTY_BLOCK; Self::num_blocks(size)],
            num_bits: size,
        }
    }

    /// Creates a new `BitVec` with `size` bits, all initialized to one.
    #[inline]
    pub fn ones(size: usize) -> Self {
        let mut result = Self {
            storage: vec![FULL_BLOCK; Self::num_blocks(size)],
            num_bits: size,
        };
        result.clear_trailing_bits();
        result
    }

    /// Returns the number of bits in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Returns true if the vector contains no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Appends a bit to the end of the vector.
    #[inline]
    pub fn push(&mut self, value: bool) {
        // Increment the number of bits and get the index for the new bit
        let index = self.num_bits;
        self.num_bits += 1;

        // Ensure the storage has enough blocks to hold the new bit
        if Self::block_index(index) >= self.storage.len() {
            self.storage.push(EMPTY_BLOCK);
        }

        if value {
            self.set_bit_unchecked(index);
        }
    }

    /// Removes the last bit from the vector and returns it.
    ///
    /// Returns `None` if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }

        self.num_bits -= 1;
        let index = self.num_bits;
        let value = self.get_bit_unchecked(index);

        // If that was the last bit in the block, drop the block;
        // otherwise, if the bit was 1, we need to clear it
        if Self::bit_offset(index) == 0 {
            self.storage.pop();
        } else if value {
            self.clear_bit_unchecked(index);
        }

        Some(value)
    }

    /// Gets the value of the bit at `index` (true if 1, false if 0).
    #[inline]
    pub fn get(&self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.get_bit_unchecked(index))
    }

    /// Sets the bit at `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        self.set_bit_unchecked(index);
        Ok(())
    }

    /// Sets the bit at `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        self.clear_bit_unchecked(index);
        Ok(())
    }

    /// Flips the bit at `index`.
    #[inline]
    pub fn toggle(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        self.toggle_bit_unchecked(index);
        Ok(())
    }

    /// Sets the bit at `index` to the specified `value`.
    #[inline]
    pub fn set_to(&mut self, index: usize, value: bool) -> Result<(), Error> {
        self.check_index(index)?;
        if value {
            self.set_bit_unchecked(index);
        } else {
            self.clear_bit_unchecked(index);
        }
        Ok(())
    }

    /// Sets all bits to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.storage.fill(EMPTY_BLOCK);
    }

    /// Sets all bits to 1.
    #[inline]
    pub fn set_all(&mut self) {
        self.storage.fill(FULL_BLOCK);
        self.clear_trailing_bits();
    }

    /// Creates an iterator over the bits.
    pub fn iter(&self) -> BitIterator<'_> {
        BitIterator { vec: self, pos: 0 }
    }

    // ---------- Helper Functions ----------

    /// Calculates the block index for a given bit index.
    #[inline(always)]
    fn block_index(index: usize) -> usize {
        index / BITS_PER_BLOCK
    }

    /// Calculates the bit offset within a block.
    #[inline(always)]
    fn bit_offset(index: usize) -> usize {
        index % BITS_PER_BLOCK
    }

    /// Calculates the number of blocks needed to store `num_bits`.
    #[inline(always)]
    fn num_blocks(num_bits: usize) -> usize {
        num_bits.div_ceil(BITS_PER_BLOCK)
    }

    /// Creates a mask with the first `num_bits` bits set to 1.
    #[inline(always)]
    fn mask_over_first_n_bits(num_bits: usize) -> Block {
        match num_bits {
            0 => EMPTY_BLOCK,
            n if n < BITS_PER_BLOCK => FULL_BLOCK >> (BITS_PER_BLOCK - n),
            _ => FULL_BLOCK,
        }
    }

    #[inline(always)]
    fn get_bit_unchecked(&self, index: usize) -> bool {
        let block_index = Self::block_index(index);
        let bit_index = Self::bit_offset(index);
        (self.storage[block_index] & (1 << bit_index)) != 0
    }

    #[inline(always)]
    fn set_bit_unchecked(&mut self, index: usize) {
        let block_index = Self::block_index(index);
        let bit_index = Self::bit_offset(index);
        self.storage[block_index] |= 1 << bit_index;
    }

    #[inline(always)]
    fn clear_bit_unchecked(&mut self, index: usize) {
        let block_index = Self::block_index(index);
        let bit_index = Self::bit_offset(index);
        self.storage[block_index] &= !(1 << bit_index);
    }

    #[inline(always)]
    fn toggle_bit_unchecked(&mut self, index: usize) {
        let block_index = Self::block_index(index);
        let bit_index = Self::bit_offset(index);
        self.storage[block_index] ^= 1 << bit_index;
    }

    /// Returns an error if the index is out of bounds.
    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.num_bits {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.num_bits,
            });
        }
        Ok(())
    }

    /// Clears any bits in storage beyond the last valid bit. Returns true if any bits were cleared.
    #[inline]
    fn clear_trailing_bits(&mut self) -> bool {
        let bit_offset = Self::bit_offset(self.num_bits);
        if bit_offset == 0 {
            // No extra bits to clear
            return false;
        }

        // Storage is never empty when the length is not block-aligned
        let Some(block) = self.storage.last_mut() else {
            return false;
        };
        let old_block = *block;
        *block &= Self::mask_over_first_n_bits(bit_offset);

        // Check if the last block was modified
        *block != old_block
    }
}

// ---------- Constructors ----------

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsRef<[bool]>> From<T> for BitVec {
    fn from(t: T) -> Self {
        let bools = t.as_ref();
        let mut bv = Self::with_capacity(bools.len());
        for &b in bools {
            bv.push(b);
        }
        bv
    }
}

// ---------- Converters ----------

impl From<BitVec> for Vec<bool> {
    fn from(bv: BitVec) -> Self {
        bv.iter().collect()
    }
}

// ---------- Debug ----------

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        // For very large BitVecs, only show a preview
        const MAX_DISPLAY: usize = 64;
        const HALF_DISPLAY: usize = MAX_DISPLAY / 2;

        let write_bit = |formatter: &mut Formatter<'_>, index: usize| -> core::fmt::Result {
            formatter.write_char(if self.get_bit_unchecked(index) {
                '1'
            } else {
                '0'
            })
        };

        f.write_str("BitVec[")?;
        if self.num_bits <= MAX_DISPLAY {
            for i in 0..self.num_bits {
                write_bit(f, i)?;
            }
        } else {
            for i in 0..HALF_DISPLAY {
                write_bit(f, i)?;
            }

            f.write_str("...")?;

            for i in (self.num_bits - HALF_DISPLAY)..self.num_bits {
                write_bit(f, i)?;
            }
        }
        f.write_str("]")
    }
}

// ---------- Operations ----------

impl Index<usize> for BitVec {
    type Output = bool;

    /// Allows accessing bits using the `[]` operator.
    ///
    /// Panics if out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < self.num_bits, "Index out of bounds");
        if self.get_bit_unchecked(index) {
            &true
        } else {
            &false
        }
    }
}

// ---------- Iterator ----------

/// Iterator over bits in a BitVec
pub struct BitIterator<'a> {
    /// Reference to the BitVec being iterated over
    vec: &'a BitVec,

    /// Current position in the BitVec (0-indexed)
    pos: usize,
}

impl Iterator for BitIterator<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.vec.len() {
            return None;
        }

        let bit = self.vec.get_bit_unchecked(self.pos);
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = BitIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        // Test new()
        let bv = BitVec::new();
        assert_eq!(bv.len(), 0);
        assert!(bv.is_empty());
        assert_eq!(bv.storage.len(), 0);

        // Test with_capacity()
        let bv = BitVec::with_capacity(100);
        assert_eq!(bv.len(), 0);
        assert!(bv.is_empty());
        assert!(bv.storage.capacity() >= BitVec::num_blocks(100));

        // Test zeroes()
        let bv = BitVec::zeroes(100);
        assert_eq!(bv.len(), 100);
        assert_eq!(bv.storage.len(), 2);
        assert_eq!(bv.count_zeros(), 100);
        for i in 0..100 {
            assert_eq!(bv.get(i), Ok(false));
        }

        // Test ones()
        let bv = BitVec::ones(100);
        assert_eq!(bv.len(), 100);
        assert_eq!(bv.count_ones(), 100);
        assert_eq!(bv.storage[1], (1u64 << 36) - 1);

        // Zero-length vectors have no blocks
        assert!(BitVec::zeroes(0).storage.is_empty());
        assert!(BitVec::ones(0).storage.is_empty());
        assert_eq!(BitVec::zeroes(64).storage.len(), 1);
        assert_eq!(BitVec::zeroes(65).storage.len(), 2);

        // Test From()
        let bv = BitVec::from([true, false, true, false, true]);
        assert_eq!(bv.len(), 5);
        assert_eq!(bv.count_ones(), 3);

        let bv: BitVec = vec![true, false, true].into();
        assert_eq!(bv.len(), 3);
        assert_eq!(bv.count_ones(), 2);

        // Test Default trait
        let bv: BitVec = Default::default();
        assert!(bv.is_empty());
    }

    #[test]
    fn test_basic_operations() {
        let mut bv = BitVec::zeroes(130);

        // Test set
        bv.set(0).unwrap();
        bv.set(50).unwrap();
        bv.set(63).unwrap(); // Last bit in first block
        bv.set(64).unwrap(); // First bit in second block
        bv.set(129).unwrap(); // Last bit

        assert_eq!(bv.get(0), Ok(true));
        assert_eq!(bv.get(50), Ok(true));
        assert_eq!(bv.get(63), Ok(true));
        assert_eq!(bv.get(64), Ok(true));
        assert_eq!(bv.get(129), Ok(true));
        assert_eq!(bv.get(30), Ok(false));

        // Test clear
        bv.clear(0).unwrap();
        bv.clear(50).unwrap();
        bv.clear(64).unwrap();

        assert_eq!(bv.get(0), Ok(false));
        assert_eq!(bv.get(50), Ok(false));
        assert_eq!(bv.get(63), Ok(true));
        assert_eq!(bv.get(64), Ok(false));
        assert_eq!(bv.get(129), Ok(true));

        // Test toggle
        bv.toggle(0).unwrap();
        bv.toggle(63).unwrap();
        assert_eq!(bv.get(0), Ok(true));
        assert_eq!(bv.get(63), Ok(false));

        // Test set_to
        bv.set_to(10, true).unwrap();
        bv.set_to(11, false).unwrap();
        assert_eq!(bv.get(10), Ok(true));
        assert_eq!(bv.get(11), Ok(false));

        // Test push and pop
        bv.push(true);
        assert_eq!(bv.len(), 131);
        assert_eq!(bv.get(130), Ok(true));
        bv.push(false);
        assert_eq!(bv.len(), 132);
        assert_eq!(bv.pop(), Some(false));
        assert_eq!(bv.pop(), Some(true));
        assert_eq!(bv.len(), 130);
        assert_eq!(bv.storage.len(), 3);
    }

    #[test]
    fn test_set_get_clear_every_index() {
        for len in [1, 7, 63, 64, 65, 200] {
            let mut bv = BitVec::zeroes(len);
            for i in 0..len {
                assert_eq!(bv.get(i), Ok(false));
                bv.set(i).unwrap();
                assert_eq!(bv.get(i), Ok(true));
                bv.clear(i).unwrap();
                assert_eq!(bv.get(i), Ok(false));
                bv.set(i).unwrap();
            }
            assert_eq!(bv.count_ones(), len);

            bv.reset();
            assert_eq!(bv.len(), len);
            for i in 0..len {
                assert_eq!(bv.get(i), Ok(false));
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mut bv = BitVec::zeroes(10);
        let err = Error::IndexOutOfRange { index: 10, len: 10 };
        assert_eq!(bv.get(10), Err(err.clone()));
        assert_eq!(bv.set(10), Err(err.clone()));
        assert_eq!(bv.clear(10), Err(err.clone()));
        assert_eq!(bv.toggle(10), Err(err.clone()));
        assert_eq!(bv.set_to(10, true), Err(err));

        // Failed writes leave the vector untouched
        assert_eq!(bv, BitVec::zeroes(10));
        assert_eq!(bv.storage, vec![0]);

        // Indices inside the last block but past the length are rejected too
        assert!(bv.set(63).is_err());
        assert_eq!(bv.storage, vec![0]);

        let empty = BitVec::new();
        assert_eq!(
            empty.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn test_index_out_of_bounds() {
        let bv = BitVec::zeroes(10);
        let _ = bv[10];
    }

    #[test]
    fn test_index_operator() {
        let bv = BitVec::from([false, true]);
        assert!(!bv[0]);
        assert!(bv[1]);
    }

    #[test]
    fn test_conversions() {
        let original = vec![true, false, true];
        let bv: BitVec = original.clone().into();
        let converted: Vec<bool> = bv.into();
        assert_eq!(converted, original);
    }

    #[test]
    fn test_set_all_and_reset() {
        let mut bv = BitVec::zeroes(70);
        bv.set_all();
        assert_eq!(bv.count_ones(), 70);
        assert_eq!(bv.storage[1], (1u64 << 6) - 1);
        bv.reset();
        assert_eq!(bv.count_ones(), 0);
        assert_eq!(bv.len(), 70);
    }

    #[test]
    fn test_mask_over_first_n_bits() {
        assert_eq!(BitVec::mask_over_first_n_bits(0), 0);
        assert_eq!(BitVec::mask_over_first_n_bits(1), 0b1);
        assert_eq!(BitVec::mask_over_first_n_bits(10), 0x3ff);
        assert_eq!(BitVec::mask_over_first_n_bits(63), FULL_BLOCK >> 1);
        assert_eq!(BitVec::mask_over_first_n_bits(64), FULL_BLOCK);
    }

    #[test]
    fn test_clear_trailing_bits() {
        let mut bv = BitVec::zeroes(10);
        assert!(!bv.clear_trailing_bits());

        bv.storage[0] = FULL_BLOCK;
        assert!(bv.clear_trailing_bits());
        assert_eq!(bv.storage[0], 0x3ff);
        assert!(!bv.clear_trailing_bits());

        // Aligned lengths have no trailing bits
        let mut bv = BitVec::ones(64);
        assert!(!bv.clear_trailing_bits());
        assert_eq!(bv.storage[0], FULL_BLOCK);
    }

    #[test]
    fn test_iterator() {
        let bools = [true, false, false, true, true];
        let bv = BitVec::from(bools);
        let mut iter = bv.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        let collected: Vec<bool> = (&bv).into_iter().collect();
        assert_eq!(collected, bools);
    }

    #[test]
    fn test_debug() {
        let bv = BitVec::from([true, false, true]);
        assert_eq!(format!("{bv:?}"), "BitVec[101]");

        let mut bv = BitVec::zeroes(100);
        bv.set(0).unwrap();
        bv.set(99).unwrap();
        let expected = format!("BitVec[1{}...{}1]", "0".repeat(31), "0".repeat(31));
        assert_eq!(format!("{bv:?}"), expected);
    }
}
