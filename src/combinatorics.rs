//!
//! Factorials, permutations, and combinations
//!

use crate::*;
use crate::arithmetic::{division, multiplication};
use crate::stdlib::cmp::Ordering;


/// `n!` as an iterative descending product
///
/// The counter decrements in place rather than allocating a full
/// subtraction per step.
pub(crate) fn factorial_integer(n: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    if n.negative {
        return Err(BigIntegerError::Domain);
    }
    if n.is_zero() {
        return Ok(One::one());
    }

    let mut product = n.clone();
    let mut counter = n.clone();
    counter.decrement()?;
    while !counter.is_zero() {
        product = multiplication::mul_integers(&product, &counter)?;
        counter.decrement()?;
    }
    Ok(product)
}

/// nPk: the product of `k` consecutive descending factors starting at `n`
pub(crate) fn permutation_integers(n: &BigInteger, k: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    if n.negative || k.negative || n.cmp(k) == Ordering::Less {
        return Err(BigIntegerError::Domain);
    }
    if k.is_zero() {
        return Ok(One::one());
    }

    let mut product = n.clone();
    let mut factor = n.clone();
    factor.decrement()?;
    let mut remaining = k.clone();
    remaining.decrement()?;
    while !remaining.is_zero() {
        product = multiplication::mul_integers(&product, &factor)?;
        factor.decrement()?;
        remaining.decrement()?;
    }
    Ok(product)
}

/// nCk as `nPk / k!`
///
/// The division is exact; a nonzero remainder cannot occur.
pub(crate) fn combination_integers(n: &BigInteger, k: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    let numerator = permutation_integers(n, k)?;
    let denominator = factorial_integer(k)?;
    let (quotient, remainder) = division::div_rem_integers(&numerator, &denominator)?;
    debug_assert!(remainder.is_zero());
    Ok(quotient)
}
