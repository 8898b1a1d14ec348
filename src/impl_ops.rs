//! Operator trait implementations
//!
//! Operator sugar over the checked API. Addition, subtraction, and
//! multiplication allocate right-sized results and cannot overflow;
//! `Div` and `Rem` panic on a zero divisor the way native integers do.
//! Callers who want a reported error use `try_add`/`try_sub`/
//! `try_mul`/`div_rem` directly.
//!

use crate::*;
use crate::stdlib::ops::{Add, Div, Mul, Neg, Rem, Sub};


impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.clone().neg()
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        self.negative = !self.negative && !self.is_zero();
        self
    }
}


impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn add(self, rhs: &BigInteger) -> BigInteger {
        self.try_add(rhs).expect("addition overflow")
    }
}

impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn sub(self, rhs: &BigInteger) -> BigInteger {
        self.try_sub(rhs).expect("subtraction overflow")
    }
}

impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn mul(self, rhs: &BigInteger) -> BigInteger {
        self.try_mul(rhs).expect("multiplication overflow")
    }
}

impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn div(self, rhs: &BigInteger) -> BigInteger {
        self.div_rem(rhs).expect("attempt to divide by zero").0
    }
}

impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn rem(self, rhs: &BigInteger) -> BigInteger {
        self.div_rem(rhs).expect("attempt to calculate the remainder with a divisor of zero").1
    }
}

forward_binop_to_ref_ref!(impl Add for BigInteger, add);
forward_binop_to_ref_ref!(impl Sub for BigInteger, sub);
forward_binop_to_ref_ref!(impl Mul for BigInteger, mul);
forward_binop_to_ref_ref!(impl Div for BigInteger, div);
forward_binop_to_ref_ref!(impl Rem for BigInteger, rem);


#[cfg(test)]
mod test_operators {
    use crate::*;

    #[test]
    fn test_owned_and_borrowed_combinations() {
        let a: BigInteger = "1000".parse().unwrap();
        let b: BigInteger = "24".parse().unwrap();

        let expected: BigInteger = "1024".parse().unwrap();
        assert_eq!(&a + &b, expected);
        assert_eq!(a.clone() + &b, expected);
        assert_eq!(&a + b.clone(), expected);
        assert_eq!(a.clone() + b.clone(), expected);
    }

    #[test]
    fn test_sub_mul_div_rem() {
        let a: BigInteger = "100".parse().unwrap();
        let b: BigInteger = "7".parse().unwrap();

        assert_eq!((&a - &b), "93".parse().unwrap());
        assert_eq!((&a * &b), "700".parse().unwrap());
        assert_eq!((&a / &b), "14".parse().unwrap());
        assert_eq!((&a % &b), "2".parse().unwrap());
    }

    #[test]
    fn test_neg() {
        let a: BigInteger = "5".parse().unwrap();
        assert_eq!((-&a), "-5".parse().unwrap());
        assert_eq!(-(-&a), a);

        let zero: BigInteger = Zero::zero();
        assert!(!(-zero).is_negative());
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_div_by_zero_panics() {
        let a: BigInteger = "5".parse().unwrap();
        let zero: BigInteger = Zero::zero();
        let _ = &a / &zero;
    }
}
