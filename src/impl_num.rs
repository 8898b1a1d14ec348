//! Code for num_traits
//!

use crate::*;
use crate::limb::LIMB_RADIX;


impl Zero for BigInteger {
    #[inline]
    fn zero() -> BigInteger {
        BigInteger::zeroed(1)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.iter().all(|&limb| limb == 0)
    }
}

impl One for BigInteger {
    #[inline]
    fn one() -> BigInteger {
        BigInteger::from(1u8)
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = BigIntegerError;

    /// Creates and initializes a BigInteger from a digit string.
    ///
    /// # Panics
    ///
    /// Panics when `radix` is outside `2..=16`.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInteger, BigIntegerError> {
        let mut value = BigInteger::zeroed(crate::parsing::limbs_for_digits(s.len().max(1), radix));
        crate::parsing::assign_radix(&mut value, s, radix)?;
        Ok(value)
    }
}

impl Signed for BigInteger {
    /// Absolute value, as a fresh copy
    #[inline]
    fn abs(&self) -> BigInteger {
        let mut out = self.clone();
        out.negative = false;
        out
    }

    /// `max(self - other, 0)`
    fn abs_sub(&self, other: &BigInteger) -> BigInteger {
        let diff = self.try_sub(other).expect("subtraction overflow");
        if diff.negative {
            Zero::zero()
        } else {
            diff
        }
    }

    fn signum(&self) -> BigInteger {
        if self.is_zero() {
            Zero::zero()
        } else if self.negative {
            -BigInteger::from(1u8)
        } else {
            BigInteger::from(1u8)
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.negative
    }
}


/// Magnitude folded into a u128, or None past its range
fn magnitude_u128(n: &BigInteger) -> Option<u128> {
    let mut acc: u128 = 0;
    for idx in (0..=n.significant_index()).rev() {
        acc = acc
            .checked_mul(LIMB_RADIX as u128)?
            .checked_add(n.digits[idx] as u128)?;
    }
    Some(acc)
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|value| {
            if value >= i64::MIN as i128 && value <= i64::MAX as i128 {
                Some(value as i64)
            } else {
                None
            }
        })
    }

    fn to_i128(&self) -> Option<i128> {
        let mag = magnitude_u128(self)?;
        if self.negative {
            if mag > i128::MAX as u128 + 1 {
                None
            } else {
                Some(mag.wrapping_neg() as i128)
            }
        } else {
            if mag <= i128::MAX as u128 {
                Some(mag as i128)
            } else {
                None
            }
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|value| {
            if value <= u64::MAX as u128 {
                Some(value as u64)
            } else {
                None
            }
        })
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        magnitude_u128(self)
    }
}

impl FromPrimitive for BigInteger {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }
}
