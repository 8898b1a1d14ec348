//!
//! Fibonacci numbers by 2x2 matrix exponentiation
//!
//! The characteristic matrix `[[1,1],[1,0]]` raised to the n-th power
//! carries `F(n+1)`, `F(n)`, `F(n-1)` in its entries, so the n-th term
//! costs O(log n) big-integer multiplications.
//!

use crate::*;
use crate::arithmetic::{addition, multiplication};
use crate::stdlib::cmp::Ordering;


type Matrix = [[BigInteger; 2]; 2];

/// 2x2 matrix product over big integers
fn matrix_mul(a: &Matrix, b: &Matrix) -> Result<Matrix, BigIntegerError> {
    let mut out: Matrix = [
        [Zero::zero(), Zero::zero()],
        [Zero::zero(), Zero::zero()],
    ];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                let term = multiplication::mul_integers(&a[i][k], &b[k][j])?;
                let sum = addition::add_integers(&out[i][j], &term)?;
                out[i][j] = sum;
            }
        }
    }
    Ok(out)
}

/// `F(n)` for a non-negative index
///
/// For `n >= 2`, squares the base matrix while walking the bits of
/// `n - 2` low to high, folding it into the accumulator on set bits;
/// the answer is the accumulator's top row sum. Smaller indices are
/// their own Fibonacci numbers.
pub(crate) fn nth_fibonacci_integer(n: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    if n.negative {
        return Err(BigIntegerError::Domain);
    }
    let two = BigInteger::from(2u8);
    if n.cmp(&two) == Ordering::Less {
        return Ok(n.clone());
    }

    let mut base: Matrix = [
        [One::one(), One::one()],
        [One::one(), Zero::zero()],
    ];
    let mut acc: Matrix = [
        [One::one(), Zero::zero()],
        [Zero::zero(), One::one()],
    ];

    let mut count = n.clone();
    count.decrement()?;
    count.decrement()?;
    while !count.is_zero() {
        if count.is_odd() {
            acc = matrix_mul(&acc, &base)?;
        }
        base = matrix_mul(&base, &base)?;
        limb::divide_small_in_place(&mut count.digits, 2);
    }

    addition::add_integers(&acc[0][0], &acc[0][1])
}
