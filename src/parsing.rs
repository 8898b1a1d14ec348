//! Routines for parsing digit strings into BigIntegers
//!

use crate::*;
use crate::limb::{DIGITS_PER_LIMB, LimbInt};


/// Bucket raw decimal digit values (most significant first) into limbs
///
/// Four decimal digits fill one limb, least significant group in limb
/// zero. Fails with `Overflow` when the destination has too few limbs.
/// Shared by decimal string parsing and the quotient assembly in long
/// division.
pub(crate) fn collect_decimal_digits(dst: &mut [LimbInt], decimal: &[u8]) -> Result<(), BigIntegerError> {
    let count = decimal.len();
    for (idx, &digit) in decimal.iter().enumerate() {
        debug_assert!(digit < 10);
        let bucket = (count - 1 - idx) / DIGITS_PER_LIMB;
        if bucket >= dst.len() {
            return Err(BigIntegerError::Overflow);
        }
        dst[bucket] = dst[bucket] * 10 + digit as LimbInt;
    }
    Ok(())
}

/// Limb capacity comfortably holding `count` digits of the given radix
pub(crate) fn limbs_for_digits(count: usize, radix: u32) -> usize {
    if radix == 10 {
        count / DIGITS_PER_LIMB + 1
    } else {
        // radix^count <= 16^count, which spans fewer than 1.21*count
        // decimal digits
        count / 3 + 2
    }
}

/// Parse `text` in the given radix into `target`, capacity unchanged
///
/// Decimal input buckets four characters per limb directly; any other
/// radix accumulates multiply-by-radix-and-add with a carry pass per
/// character. Upper- and lower-case digits are both accepted. On error
/// the target's value is unspecified (but normalized).
pub(crate) fn assign_radix(target: &mut BigInteger, text: &str, radix: u32) -> Result<(), BigIntegerError> {
    assert!(2 <= radix && radix <= 16, "radix must be within 2..=16");

    target.set_zero();
    let mut bytes = text.as_bytes();
    let negative = match bytes.first() {
        Some(b'-') => {
            bytes = &bytes[1..];
            true
        }
        _ => false,
    };
    if bytes.is_empty() {
        return Err(BigIntegerError::MalformedInput);
    }

    if radix == 10 {
        let count = bytes.len();
        for (idx, &ch) in bytes.iter().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(BigIntegerError::MalformedInput);
            }
            let bucket = (count - 1 - idx) / DIGITS_PER_LIMB;
            if bucket >= target.digits.len() {
                return Err(BigIntegerError::Overflow);
            }
            target.digits[bucket] = target.digits[bucket] * 10 + (ch - b'0') as LimbInt;
        }
    } else {
        for &ch in bytes.iter() {
            let digit = (ch as char)
                .to_digit(radix)
                .ok_or(BigIntegerError::MalformedInput)?;
            limb::mul_small_in_place(&mut target.digits, radix as LimbInt)?;
            target.digits[0] += digit as LimbInt;
            limb::propagate_carry(&mut target.digits)?;
        }
    }

    target.negative = negative && !target.is_zero();
    Ok(())
}
