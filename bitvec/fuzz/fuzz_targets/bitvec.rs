#![no_main]

use arbitrary::Arbitrary;
use commonware_bitvec::{and, or, xor, BitVec};
use libfuzzer_sys::fuzz_target;

const MAX_SHIFT: usize = 10_000;

#[derive(Arbitrary, Debug)]
enum BitVecOperation {
    Zeroes(u16),
    Ones(u16),
    Get(Vec<bool>, usize),
    Set(Vec<bool>, usize),
    Clear(Vec<bool>, usize),
    Toggle(Vec<bool>, usize),
    Reset(Vec<bool>),
    Not(Vec<bool>),
    And(Vec<bool>, Vec<bool>),
    Or(Vec<bool>, Vec<bool>),
    Xor(Vec<bool>, Vec<bool>),
    AndNot(Vec<bool>, Vec<bool>),
    ShiftLeft(Vec<bool>, usize),
    ShiftRight(Vec<bool>, usize),
    Slice(Vec<bool>, i16, u16),
    Append(Vec<bool>, Vec<bool>),
    Reverse(Vec<bool>),
    Counts(Vec<bool>),
}

fn bit(bools: &[bool], i: usize) -> bool {
    bools.get(i).copied().unwrap_or(false)
}

fn check_binary(a: &[bool], b: &[bool], result: &BitVec, op: fn(bool, bool) -> bool) {
    let len = a.len().max(b.len());
    assert_eq!(result.len(), len);
    for i in 0..len {
        assert_eq!(result.get(i), Ok(op(bit(a, i), bit(b, i))));
    }
}

fn fuzz(ops: Vec<BitVecOperation>) {
    for op in ops {
        match op {
            BitVecOperation::Zeroes(size) => {
                let v = BitVec::zeroes(size as usize);
                assert_eq!(v.len(), size as usize);
                assert_eq!(v.count_ones(), 0);
                assert_eq!(v.trailing_zeros(), size as usize);
            }

            BitVecOperation::Ones(size) => {
                let v = BitVec::ones(size as usize);
                assert_eq!(v.count_ones(), size as usize);
                assert_eq!(v.not(), BitVec::zeroes(size as usize));
            }

            BitVecOperation::Get(bools, index) => {
                let v = BitVec::from(&bools);
                match v.get(index) {
                    Ok(value) => assert_eq!(value, bools[index]),
                    Err(_) => assert!(index >= bools.len()),
                }
            }

            BitVecOperation::Set(bools, index) => {
                let mut v = BitVec::from(&bools);
                if v.set(index).is_ok() {
                    assert_eq!(v.get(index), Ok(true));
                } else {
                    assert_eq!(v, BitVec::from(&bools));
                }
            }

            BitVecOperation::Clear(bools, index) => {
                let mut v = BitVec::from(&bools);
                if v.clear(index).is_ok() {
                    assert_eq!(v.get(index), Ok(false));
                } else {
                    assert_eq!(v, BitVec::from(&bools));
                }
            }

            BitVecOperation::Toggle(bools, index) => {
                let mut v = BitVec::from(&bools);
                if v.toggle(index).is_ok() {
                    assert_eq!(v.get(index), Ok(!bools[index]));
                }
            }

            BitVecOperation::Reset(bools) => {
                let mut v = BitVec::from(&bools);
                v.reset();
                assert_eq!(v, BitVec::zeroes(bools.len()));
            }

            BitVecOperation::Not(bools) => {
                let v = BitVec::from(&bools);
                let inverted = v.not();
                assert_eq!(inverted.count_ones(), v.count_zeros());
                assert_eq!(inverted.not(), v);
            }

            BitVecOperation::And(a, b) => {
                let result = and(&BitVec::from(&a), &BitVec::from(&b));
                let short = a.len().min(b.len());
                check_binary(&a, &b, &result, |x, y| x && y);
                let tail = result.slice(short as isize, result.len() as isize).unwrap();
                assert_eq!(tail.count_ones(), 0);
            }

            BitVecOperation::Or(a, b) => {
                let result = or(&BitVec::from(&a), &BitVec::from(&b));
                check_binary(&a, &b, &result, |x, y| x || y);
            }

            BitVecOperation::Xor(a, b) => {
                let result = xor(&BitVec::from(&a), &BitVec::from(&b));
                check_binary(&a, &b, &result, |x, y| x ^ y);
            }

            BitVecOperation::AndNot(a, b) => {
                let result = BitVec::from(&a).and_not(&BitVec::from(&b));
                assert_eq!(result.len(), a.len());
                for (i, &x) in a.iter().enumerate() {
                    assert_eq!(result.get(i), Ok(!x && bit(&b, i)));
                }
            }

            BitVecOperation::ShiftLeft(bools, n) => {
                let n = n % MAX_SHIFT;
                let shifted = BitVec::from(&bools).shift_left(n);
                assert_eq!(shifted.len(), bools.len() + n);
                assert!(shifted.trailing_zeros() >= n);
                for (i, &b) in bools.iter().enumerate() {
                    assert_eq!(shifted.get(i + n), Ok(b));
                }
            }

            BitVecOperation::ShiftRight(bools, n) => {
                let shifted = BitVec::from(&bools).shift_right(n);
                assert_eq!(shifted.len(), bools.len());
                for i in 0..bools.len() {
                    let expected = i.checked_add(n).is_some_and(|j| bit(&bools, j));
                    assert_eq!(shifted.get(i), Ok(expected));
                }
            }

            BitVecOperation::Slice(bools, start, len) => {
                let v = BitVec::from(&bools);
                let start = start as isize;
                let end = start + len as isize;
                let slice = v.slice(start, end).unwrap();
                assert_eq!(slice.len(), len as usize);
                for (i, pos) in (start..end).enumerate() {
                    let expected = pos >= 0 && bit(&bools, pos as usize);
                    assert_eq!(slice.get(i), Ok(expected));
                }
                assert!(v.slice(end, start).is_err() || len == 0);
            }

            BitVecOperation::Append(a, b) => {
                let joined = BitVec::from(&a).append(&BitVec::from(&b));
                let expected: Vec<bool> = a.iter().chain(b.iter()).copied().collect();
                assert_eq!(Vec::<bool>::from(joined), expected);
            }

            BitVecOperation::Reverse(bools) => {
                let v = BitVec::from(&bools);
                let reversed = v.reverse();
                let expected: Vec<bool> = bools.iter().rev().copied().collect();
                assert_eq!(reversed, BitVec::from(&expected));
                assert_eq!(reversed.reverse(), v);
            }

            BitVecOperation::Counts(bools) => {
                let v = BitVec::from(&bools);
                assert_eq!(v.count_ones(), bools.iter().filter(|b| **b).count());
                assert_eq!(
                    v.trailing_zeros(),
                    bools.iter().position(|b| *b).unwrap_or(bools.len())
                );
            }
        }
    }
}

fuzz_target!(|ops: Vec<BitVecOperation>| {
    fuzz(ops);
});
