//! Pack a sequence of bits into 64-bit blocks.
//!
//! # Overview
//!
//! [BitVec] stores a `bool` sequence in [u64] blocks for a more-efficient memory layout than a
//! [`Vec<bool>`]. Beyond indexed access, it supports:
//! - Bitwise logic between vectors of differing lengths ([and], [or], [xor], [BitVec::and_not])
//! - Shifting by an arbitrary number of bits ([BitVec::shift_left], [BitVec::shift_right])
//! - Bit reversal, population counts, and trailing-zero counts
//! - Slicing and concatenation ([BitVec::slice], [BitVec::append])
//! - Arbitrary-length unsigned addition and subtraction with carry/borrow ([add], [sub])
//!
//! Bit `0` is the least significant bit of block `0`. When a vector is interpreted as an integer,
//! bit `0` is the least significant bit of that integer.
//!
//! # Example
//!
//! ```
//! use commonware_bitvec::{add, BitVec};
//!
//! // 0b0111 + 0b0001 = 0b1000
//! let x = BitVec::from([true, true, true, false]);
//! let y = BitVec::from([true, false, false, false]);
//! let (sum, carry) = add(&x, &y, false);
//! assert_eq!(sum, BitVec::from([false, false, false, true]));
//! assert!(!carry);
//!
//! // Growing on shift-left keeps every bit
//! let shifted = sum.shift_left(3);
//! assert_eq!(shifted.len(), 7);
//! assert_eq!(shifted.trailing_zeros(), 6);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bitvec;
pub use bitvec::{add, and, or, sub, xor, BitIterator, BitVec};
mod error;
pub use error::Error;
