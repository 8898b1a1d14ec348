//!
//! Subtraction of signed limb integers
//!

use crate::*;
use crate::arithmetic::{addition, compare_limb_slices, compare_magnitudes};
use crate::limb::LimbInt;
use crate::stdlib::cmp::Ordering;


/// Limb-wise difference of two magnitudes, ignoring signs
///
/// The caller guarantees `|a| >= |b|`; the borrow pass then always
/// resolves inside the buffer.
pub(crate) fn magnitude_diff(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    debug_assert!(compare_magnitudes(a, b) != Ordering::Less);
    let top = a.significant_index().max(b.significant_index());
    let mut diff = BigInteger::zeroed(top + 2);
    for idx in 0..=top {
        diff.digits[idx] = a.limb(idx) - b.limb(idx);
    }
    limb::propagate_carry(&mut diff.digits)?;
    Ok(diff)
}

/// In-place `a -= b` over raw magnitude slices
///
/// Used by the long-division loop, which repeatedly absorbs the scaled
/// divisor; the caller guarantees `a >= b`.
pub(crate) fn sub_assign_magnitude(a: &mut [LimbInt], b: &[LimbInt]) -> Result<(), BigIntegerError> {
    debug_assert!(compare_limb_slices(a, b) != Ordering::Less);
    let top = limb::significant_index(b);
    for idx in 0..=top {
        a[idx] -= b[idx];
    }
    limb::propagate_carry(a)
}

/// `a - b` with full sign dispatch
///
/// Non-negative operands order themselves by magnitude so the limb
/// loop never underflows; a negative operand on either side folds into
/// an addition of magnitudes. Mutually recursive with
/// [`addition::add_integers`], depth at most two.
pub(crate) fn sub_integers(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    match (a.negative, b.negative) {
        (false, false) => match compare_magnitudes(a, b) {
            Ordering::Less => {
                let mut diff = magnitude_diff(b, a)?;
                diff.negative = !diff.is_zero();
                Ok(diff)
            }
            _ => magnitude_diff(a, b),
        },
        (true, true) => sub_integers(&b.abs(), &a.abs()),
        (false, true) => addition::add_integers(a, &b.abs()),
        (true, false) => {
            let mut sum = addition::add_integers(&a.abs(), b)?;
            sum.negative = !sum.is_zero();
            Ok(sum)
        }
    }
}
