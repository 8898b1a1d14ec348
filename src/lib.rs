// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Big Integer
//!
//! `BigInteger` stores a signed integer of (practically) unbounded
//! magnitude as a little-endian vector of base-10000 limbs plus a sign
//! flag. On top of that representation the crate implements the
//! classic arithmetic set (addition, subtraction, schoolbook
//! multiplication, digit-estimation long division, binary
//! exponentiation), base-2..16 parsing and formatting, and a family of
//! derived algorithms: GCD/LCM, primality testing, integer square
//! root, integer logarithm, factorials, permutations, combinations,
//! and Fibonacci numbers via matrix exponentiation.
//!
//! Values carry an explicit limb capacity, fixed at construction: the
//! in-place mutation helpers (string assignment, increment, decrement)
//! never grow it and report `Overflow` when a result stops fitting,
//! while whole-result operations allocate fresh right-sized buffers.
//!
//! # Example
//!
//! ```
//! use biginteger::BigInteger;
//! use std::str::FromStr;
//!
//! let n = BigInteger::from_str("999999999999999999999").unwrap();
//! let sum = n.try_add(&BigInteger::from(1u8)).unwrap();
//!
//! assert_eq!(sum.to_string(), "1000000000000000000000");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


extern crate num_integer;
extern crate num_traits;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::vec::Vec;

pub use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};


// const DEFAULT_BIT_WIDTH: u32 = ${RUST_BIGINTEGER_DEFAULT_BIT_WIDTH} or 512;
include!(concat!(env!("OUT_DIR"), "/default_bit_width.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

pub mod limb;
use limb::{LimbInt, LIMB_RADIX};

// algorithm families over the limb representation
mod arithmetic;
mod combinatorics;
mod fibonacci;
mod parsing;

// PartialEq, Ord, Hash
mod impl_cmp;
// From<T> impls
mod impl_convert;
// Display, Debug, Binary, Octal, LowerHex, UpperHex & radix strings
mod impl_fmt;
// Implementations of num_traits
mod impl_num;
// Add<T>, Sub<T>, etc...
mod impl_ops;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;


/// Number of limbs allocated for a requested bit width
///
/// Rounds up to whole 32-bit words, four limbs apiece, with a one-word
/// minimum so every value owns at least one limb.
fn limbs_for_bit_width(bits: u32) -> usize {
    ((bits / 32).max(1) as usize) * 4
}


/// The error reported by fallible `BigInteger` operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntegerError {
    /// Limb storage could not be allocated
    Allocation,
    /// The true magnitude of a value exceeds its fixed limb capacity
    Overflow,
    /// Empty or otherwise invalid digit string
    MalformedInput,
    /// Division or remainder by zero
    DivisionByZero,
    /// Operand outside the domain of the operation
    Domain,
}

impl fmt::Display for BigIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BigIntegerError::*;

        match *self {
            Allocation => "limb storage could not be allocated".fmt(f),
            Overflow => "value exceeds its allocated limb capacity".fmt(f),
            MalformedInput => "malformed digit string".fmt(f),
            DivisionByZero => "division by zero".fmt(f),
            Domain => "operand outside the domain of the operation".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BigIntegerError {}


/// A big integer type.
///
#[derive(Clone)]
pub struct BigInteger {
    // little-endian limbs; the vector length is the fixed capacity,
    // which may exceed the significant length by any number of zeros
    digits: Vec<LimbInt>,
    // canonical zero is never negative
    negative: bool,
}

impl BigInteger {
    /// Create a zero with capacity for the requested bit width
    ///
    /// The capacity never changes afterwards except through
    /// [`BigInteger::assign`].
    ///
    /// # Examples
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let mut n = BigInteger::with_bit_width(128).unwrap();
    /// n.assign_str_radix("170141183460469231731687303715884105727", 10).unwrap();
    /// ```
    pub fn with_bit_width(bits: u32) -> Result<BigInteger, BigIntegerError> {
        BigInteger::with_limb_capacity(limbs_for_bit_width(bits))
    }

    /// Create a zero with an explicit limb capacity (at least one limb)
    pub fn with_limb_capacity(limbs: usize) -> Result<BigInteger, BigIntegerError> {
        let limbs = limbs.max(1);
        let mut digits = Vec::new();
        if digits.try_reserve_exact(limbs).is_err() {
            return Err(BigIntegerError::Allocation);
        }
        digits.resize(limbs, 0);
        Ok(BigInteger {
            digits: digits,
            negative: false,
        })
    }

    /// Creates and initializes a `BigInteger`.
    ///
    /// Decodes using `str::from_utf8` and forwards to `from_str_radix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use biginteger::{BigInteger, Zero};
    ///
    /// assert_eq!(BigInteger::parse_bytes(b"0", 10).unwrap(), BigInteger::zero());
    /// assert_eq!(BigInteger::parse_bytes(b"ff", 16).unwrap(), BigInteger::from(255u8));
    /// ```
    #[inline]
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigInteger> {
        stdlib::str::from_utf8(buf)
                    .ok()
                    .and_then(|s| Num::from_str_radix(s, radix).ok())
    }

    /// Internal right-sized zero; infallible counterpart of
    /// `with_limb_capacity` used by whole-result constructors.
    pub(crate) fn zeroed(limbs: usize) -> BigInteger {
        let limbs = limbs.max(1);
        let mut digits = Vec::with_capacity(limbs);
        digits.resize(limbs, 0);
        BigInteger {
            digits: digits,
            negative: false,
        }
    }

    /// Small value spread over an explicit capacity, for loop counters
    /// that must grow as far as the quantity they count toward.
    pub(crate) fn from_u64_with_capacity(value: u64, limbs: usize) -> BigInteger {
        let mut out = BigInteger::zeroed(limbs);
        let mut rest = value;
        let mut idx = 0;
        while rest > 0 && idx < out.digits.len() {
            out.digits[idx] = (rest % LIMB_RADIX as u64) as LimbInt;
            rest /= LIMB_RADIX as u64;
            idx += 1;
        }
        debug_assert_eq!(rest, 0);
        out
    }

    /// Decompose an unsigned magnitude into right-sized limbs
    pub(crate) fn from_magnitude(value: u128, negative: bool) -> BigInteger {
        let mut digits = Vec::new();
        let mut rest = value;
        if rest == 0 {
            digits.push(0);
        }
        while rest > 0 {
            digits.push((rest % LIMB_RADIX as u128) as LimbInt);
            rest /= LIMB_RADIX as u128;
        }
        let negative = negative && value != 0;
        BigInteger {
            digits: digits,
            negative: negative,
        }
    }

    /// Allocated limb capacity; stable across in-place mutation
    #[inline]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Index of the highest nonzero limb (0 for zero)
    #[inline]
    pub fn significant_index(&self) -> usize {
        limb::significant_index(&self.digits)
    }

    /// Limb at `idx`, reading past the capacity as zero
    #[inline]
    pub(crate) fn limb(&self, idx: usize) -> LimbInt {
        self.digits.get(idx).copied().unwrap_or(0)
    }

    /// Parity of the value (the radix is even, so limb 0 decides)
    #[inline]
    pub(crate) fn is_odd(&self) -> bool {
        self.digits[0] & 1 == 1
    }

    /// Reset to zero, keeping the capacity
    pub fn set_zero(&mut self) {
        for limb in self.digits.iter_mut() {
            *limb = 0;
        }
        self.negative = false;
    }

    /// Copy `src` into `self`, growing the capacity to the larger of
    /// the two
    ///
    /// This is the duplication primitive every algorithm uses when it
    /// needs a scratch copy; operations never alias an input buffer as
    /// their output.
    pub fn assign(&mut self, src: &BigInteger) {
        if self.digits.len() < src.digits.len() {
            self.digits.resize(src.digits.len(), 0);
        }
        let top = src.significant_index();
        self.digits[..=top].copy_from_slice(&src.digits[..=top]);
        for limb in self.digits[top + 1..].iter_mut() {
            *limb = 0;
        }
        self.negative = src.negative;
    }

    /// Add one in place; the capacity does not change
    ///
    /// Fails with `Overflow` when the incremented magnitude no longer
    /// fits.
    pub fn increment(&mut self) -> Result<(), BigIntegerError> {
        if self.negative {
            limb::decrement_magnitude(&mut self.digits)?;
            self.negative = !self.is_zero();
        } else {
            limb::increment_magnitude(&mut self.digits)?;
        }
        Ok(())
    }

    /// Subtract one in place; the capacity does not change
    pub fn decrement(&mut self) -> Result<(), BigIntegerError> {
        if self.negative {
            limb::increment_magnitude(&mut self.digits)?;
        } else if self.is_zero() {
            self.digits[0] = 1;
            self.negative = true;
        } else {
            limb::decrement_magnitude(&mut self.digits)?;
        }
        Ok(())
    }

    /// Sum of `self` and `rhs` as a fresh, right-sized value
    ///
    /// # Examples
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let a: BigInteger = "999999999999999999999".parse().unwrap();
    /// let b = BigInteger::from(1u8);
    ///
    /// assert_eq!(a.try_add(&b).unwrap().to_string(), "1000000000000000000000");
    /// ```
    #[inline]
    pub fn try_add(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::addition::add_integers(self, rhs)
    }

    /// Difference of `self` and `rhs` as a fresh, right-sized value
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let a = BigInteger::from(3u8);
    /// let b = BigInteger::from(5u8);
    ///
    /// assert_eq!(a.try_sub(&b).unwrap().to_string(), "-2");
    /// ```
    #[inline]
    pub fn try_sub(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::subtraction::sub_integers(self, rhs)
    }

    /// Product of `self` and `rhs` as a fresh, right-sized value
    #[inline]
    pub fn try_mul(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::multiplication::mul_integers(self, rhs)
    }

    /// Truncating division, returning quotient and remainder together
    ///
    /// The quotient is signed by the XOR of the operand signs and the
    /// remainder keeps the dividend's sign, so
    /// `self == quotient * rhs + remainder` always holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let (q, r) = BigInteger::from(100u8).div_rem(&BigInteger::from(7u8)).unwrap();
    ///
    /// assert_eq!(q, BigInteger::from(14u8));
    /// assert_eq!(r, BigInteger::from(2u8));
    /// ```
    #[inline]
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger), BigIntegerError> {
        arithmetic::division::div_rem_integers(self, rhs)
    }

    /// Raise `self` to a non-negative big-integer power
    ///
    /// Square-and-multiply over the exponent's bits. `pow(0, 0)` is
    /// one, following the accumulator's initial value.
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let two = BigInteger::from(2u8);
    /// let ten = BigInteger::from(10u8);
    ///
    /// assert_eq!(two.pow(&ten).unwrap(), BigInteger::from(1024u32));
    /// ```
    #[inline]
    pub fn pow(&self, exponent: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::pow::pow_integers(self, exponent)
    }

    /// Greatest common divisor of two strictly positive integers
    #[inline]
    pub fn gcd(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::gcd::gcd_integers(self, rhs)
    }

    /// Least common multiple of two strictly positive integers
    #[inline]
    pub fn lcm(&self, rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::gcd::lcm_integers(self, rhs)
    }

    /// Floor of the square root of a non-negative integer
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(99u8).sqrt().unwrap(), BigInteger::from(9u8));
    /// ```
    #[inline]
    pub fn sqrt(&self) -> Result<BigInteger, BigIntegerError> {
        arithmetic::sqrt::sqrt_integer(self)
    }

    /// Floor of the base-`base` logarithm of `self`
    ///
    /// Requires `base >= 2` and `self >= 1`.
    #[inline]
    pub fn ilog(&self, base: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        arithmetic::log::ilog_integer(base, self)
    }

    /// Primality by trial division up to the floor square root
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// assert!(BigInteger::from(97u8).is_prime().unwrap());
    /// assert!(!BigInteger::from(100u8).is_prime().unwrap());
    /// ```
    #[inline]
    pub fn is_prime(&self) -> Result<bool, BigIntegerError> {
        arithmetic::primality::is_prime_integer(self)
    }

    /// Factorial of a non-negative integer
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let f = BigInteger::from(20u8).factorial().unwrap();
    ///
    /// assert_eq!(f.to_string(), "2432902008176640000");
    /// ```
    #[inline]
    pub fn factorial(&self) -> Result<BigInteger, BigIntegerError> {
        combinatorics::factorial_integer(self)
    }

    /// Number of `k`-permutations of `self` items (nPk)
    #[inline]
    pub fn permutation(&self, k: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        combinatorics::permutation_integers(self, k)
    }

    /// Number of `k`-combinations of `self` items (nCk)
    #[inline]
    pub fn combination(&self, k: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        combinatorics::combination_integers(self, k)
    }

    /// The `n`-th Fibonacci number, by 2x2 matrix exponentiation
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let f = BigInteger::nth_fibonacci(&BigInteger::from(50u8)).unwrap();
    ///
    /// assert_eq!(f.to_string(), "12586269025");
    /// ```
    #[inline]
    pub fn nth_fibonacci(n: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        fibonacci::nth_fibonacci_integer(n)
    }

    /// True when the decimal digits of the magnitude read the same in
    /// both directions; the sign is ignored
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// assert!(BigInteger::from(12321u32).is_palindrome());
    /// assert!(!BigInteger::from(12345u32).is_palindrome());
    /// ```
    pub fn is_palindrome(&self) -> bool {
        let digits = self.magnitude_decimal();
        let bytes = digits.as_bytes();
        let len = bytes.len();
        (0..len / 2).all(|idx| bytes[idx] == bytes[len - 1 - idx])
    }

    /// Re-parse `text` into this value without changing its capacity
    ///
    /// The value is cleared first; a leading `-` marks a negative
    /// number. Radix 10 buckets four characters per limb directly,
    /// other radices (2 through 16) accumulate by
    /// multiply-and-add. Fails with `MalformedInput` on an empty or
    /// invalid string and `Overflow` when the fixed capacity cannot
    /// hold the value, in which case the value is unspecified.
    ///
    /// # Panics
    ///
    /// Panics when `radix` is outside `2..=16`.
    #[inline]
    pub fn assign_str_radix(&mut self, text: &str, radix: u32) -> Result<(), BigIntegerError> {
        parsing::assign_radix(self, text, radix)
    }
}

impl Default for BigInteger {
    #[inline]
    fn default() -> BigInteger {
        BigInteger::zeroed(limbs_for_bit_width(DEFAULT_BIT_WIDTH))
    }
}



#[cfg(all(test, property_tests))]
extern crate proptest;
