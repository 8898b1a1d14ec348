//! integer logarithm implementation

use crate::*;
use crate::arithmetic::{addition, compare_magnitudes, pow, subtraction};
use crate::stdlib::cmp::Ordering;


/// Floor of `log_base(x)`, by binary search over the exponent
///
/// Requires `base >= 2` and `x >= 1`. An upper bound on the exponent
/// is found first by doubling; the search interval then halves while
/// comparing `base ^ mid` against `x`, with an exact power
/// short-circuiting.
pub(crate) fn ilog_integer(base: &BigInteger, x: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    let two = BigInteger::from(2u8);
    if base.negative || compare_magnitudes(base, &two) == Ordering::Less {
        return Err(BigIntegerError::Domain);
    }
    if x.negative || x.is_zero() {
        return Err(BigIntegerError::Domain);
    }

    let one: BigInteger = One::one();

    // double the candidate exponent until base^high exceeds x
    let mut low: BigInteger = Zero::zero();
    let mut high = one.clone();
    loop {
        let power = pow::pow_integers(base, &high)?;
        match power.cmp(x) {
            Ordering::Equal => return Ok(high),
            Ordering::Greater => break,
            Ordering::Less => {
                low = high.clone();
                high = addition::add_integers(&high, &high)?;
            }
        }
    }

    // invariant: base^low <= x < base^high
    loop {
        let gap = subtraction::sub_integers(&high, &low)?;
        if compare_magnitudes(&gap, &one) != Ordering::Greater {
            break;
        }
        let mut mid = addition::add_integers(&low, &high)?;
        limb::divide_small_in_place(&mut mid.digits, 2);
        let power = pow::pow_integers(base, &mid)?;
        match power.cmp(x) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => low = mid,
            Ordering::Greater => high = mid,
        }
    }
    Ok(low)
}
