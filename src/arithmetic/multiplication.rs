//!
//! Schoolbook multiplication over limb integers
//!

use crate::*;


/// `a * b` by schoolbook long multiplication
///
/// Every limb pair accumulates into result position `i + j`; the carry
/// pass after each outer step keeps the accumulators below the product
/// bound of the 32-bit limb type. The result sign is the XOR of the
/// operand signs.
pub(crate) fn mul_integers(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    let top_a = a.significant_index();
    let top_b = b.significant_index();
    let mut product = BigInteger::zeroed(top_a + top_b + 3);
    for i in 0..=top_a {
        let digit_a = a.digits[i];
        if digit_a == 0 {
            continue;
        }
        for j in 0..=top_b {
            product.digits[i + j] += digit_a * b.digits[j];
        }
        limb::propagate_carry(&mut product.digits)?;
    }
    product.negative = (a.negative ^ b.negative) && !product.is_zero();
    Ok(product)
}
