#![no_main]

use arbitrary::Arbitrary;
use commonware_bitvec::{add, sub, BitVec};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    x: Vec<bool>,
    y: Vec<bool>,
    carry: bool,
}

/// Bit-by-bit ripple-carry adder over the longer operand's length.
fn ripple_add(x: &[bool], y: &[bool], carry: bool) -> (Vec<bool>, bool) {
    let len = x.len().max(y.len());
    let mut carry = carry;
    let mut sum = Vec::with_capacity(len);
    for i in 0..len {
        let a = x.get(i).copied().unwrap_or(false);
        let b = y.get(i).copied().unwrap_or(false);
        sum.push(a ^ b ^ carry);
        carry = (a & b) | (carry & (a ^ b));
    }
    (sum, carry)
}

/// Bit-by-bit ripple-borrow subtractor, keeping the minuend's length.
fn ripple_sub(x: &[bool], y: &[bool], borrow: bool) -> (Vec<bool>, bool) {
    let mut borrow = borrow;
    let mut diff = Vec::with_capacity(x.len());
    for i in 0..x.len().max(y.len()) {
        let a = x.get(i).copied().unwrap_or(false);
        let b = y.get(i).copied().unwrap_or(false);
        if i < x.len() {
            diff.push(a ^ b ^ borrow);
        }
        borrow = (!a & b) | (borrow & !(a ^ b));
    }
    (diff, borrow)
}

fn fuzz(input: Input) {
    let x = BitVec::from(&input.x);
    let y = BitVec::from(&input.y);

    let (sum, carry) = add(&x, &y, input.carry);
    let (expected, expected_carry) = ripple_add(&input.x, &input.y, input.carry);
    assert_eq!(Vec::<bool>::from(sum), expected);
    assert_eq!(carry, expected_carry);

    let (diff, borrow) = sub(&x, &y, input.carry);
    let (expected, expected_borrow) = ripple_sub(&input.x, &input.y, input.carry);
    assert_eq!(Vec::<bool>::from(diff), expected);
    assert_eq!(borrow, expected_borrow);
}

fuzz_target!(|input: Input| {
    fuzz(input);
});
