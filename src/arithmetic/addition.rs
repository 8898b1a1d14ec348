//!
//! Addition of signed limb integers
//!

use crate::*;
use crate::arithmetic::subtraction;


/// Limb-wise sum of two magnitudes, ignoring signs
///
/// The result is sized one limb past the longer operand, so the final
/// carry always fits.
pub(crate) fn magnitude_sum(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    let top = a.significant_index().max(b.significant_index());
    let mut sum = BigInteger::zeroed(top + 2);
    for idx in 0..=top {
        sum.digits[idx] = a.limb(idx) + b.limb(idx);
    }
    limb::propagate_carry(&mut sum.digits)?;
    Ok(sum)
}

/// `a + b` with full sign dispatch
///
/// Same-sign operands sum their magnitudes and keep the sign;
/// opposite-sign operands fold into a subtraction of magnitudes. The
/// mutual recursion with [`subtraction::sub_integers`] closes the six
/// sign/magnitude cases with a depth of at most two.
pub(crate) fn add_integers(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    match (a.negative, b.negative) {
        (false, false) => magnitude_sum(a, b),
        (true, true) => {
            let mut sum = magnitude_sum(a, b)?;
            sum.negative = !sum.is_zero();
            Ok(sum)
        }
        (true, false) => subtraction::sub_integers(b, &a.abs()),
        (false, true) => subtraction::sub_integers(a, &b.abs()),
    }
}
