//!
//! Long division by decimal digit estimation
//!

use crate::*;
use crate::arithmetic::{compare_magnitudes, subtraction};
use crate::stdlib::cmp::Ordering;
use crate::stdlib::vec::Vec;


/// `a / b` returning quotient and remainder together
///
/// The divisor magnitude is first scaled up by powers of ten until its
/// leading digit sits next to the dividend's. Each output position
/// then counts how many times the scaled divisor still fits by
/// repeated subtraction (at most nine per position) before the divisor
/// shifts down a decimal place. The collected digit string becomes the
/// quotient, what is left of the dividend the remainder.
///
/// Signs follow truncating division: the quotient is the XOR of the
/// operand signs, the remainder keeps the dividend's sign, and
/// `a == q * b + r` holds for every combination.
pub(crate) fn div_rem_integers(a: &BigInteger, b: &BigInteger) -> Result<(BigInteger, BigInteger), BigIntegerError> {
    if b.is_zero() {
        return Err(BigIntegerError::DivisionByZero);
    }
    match compare_magnitudes(a, b) {
        Ordering::Less => return Ok((Zero::zero(), a.clone())),
        Ordering::Equal => {
            let mut quotient: BigInteger = One::one();
            quotient.negative = a.negative ^ b.negative;
            return Ok((quotient, Zero::zero()));
        }
        Ordering::Greater => {}
    }

    let top = a.significant_index();
    let mut remainder = BigInteger::zeroed(top + 3);
    remainder.digits[..=top].copy_from_slice(&a.digits[..=top]);

    let divisor = b.abs();
    let mut scaled = BigInteger::zeroed(top + 3);
    let divisor_top = b.significant_index();
    scaled.digits[..=divisor_top].copy_from_slice(&b.digits[..=divisor_top]);

    // align the scaled divisor's leading digit with the dividend's
    let mut steps = 0usize;
    loop {
        let rem_top = remainder.significant_index();
        let scaled_top = scaled.significant_index();
        if scaled_top >= rem_top && scaled.digits[scaled_top] * 10 > remainder.digits[rem_top] {
            break;
        }
        limb::mul_small_in_place(&mut scaled.digits, 10)?;
        steps += 1;
    }

    // one decimal quotient digit per position, most significant first
    let mut decimal = Vec::new();
    decimal.resize(steps + 1, 0u8);
    let mut position = 0usize;
    while compare_magnitudes(&scaled, &divisor) != Ordering::Less {
        match compare_magnitudes(&remainder, &scaled) {
            Ordering::Greater => {
                decimal[position] += 1;
                subtraction::sub_assign_magnitude(&mut remainder.digits, &scaled.digits)?;
            }
            Ordering::Equal => {
                decimal[position] += 1;
                remainder.set_zero();
            }
            Ordering::Less => {
                limb::divide_by_ten_in_place(&mut scaled.digits);
                position += 1;
            }
        }
    }

    let first_digit = decimal.iter().position(|&d| d != 0).unwrap_or(decimal.len() - 1);
    let decimal = &decimal[first_digit..];
    let mut quotient = BigInteger::zeroed(decimal.len() / limb::DIGITS_PER_LIMB + 1);
    crate::parsing::collect_decimal_digits(&mut quotient.digits, decimal)?;

    quotient.negative = (a.negative ^ b.negative) && !quotient.is_zero();
    remainder.negative = a.negative && !remainder.is_zero();
    Ok((quotient, remainder))
}
