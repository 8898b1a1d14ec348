//! greatest common divisor and least common multiple

use crate::*;
use crate::arithmetic::{division, multiplication};


/// Euclidean GCD over strictly positive integers
pub(crate) fn gcd_integers(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    if a.negative || b.negative || a.is_zero() || b.is_zero() {
        return Err(BigIntegerError::Domain);
    }
    let mut x = a.clone();
    let mut y = b.clone();
    while !y.is_zero() {
        let (_, rem) = division::div_rem_integers(&x, &y)?;
        x = y;
        y = rem;
    }
    Ok(x)
}

/// `lcm(a, b) == (a / g) * (b / g) * g`, sharing GCD's preconditions
pub(crate) fn lcm_integers(a: &BigInteger, b: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    let g = gcd_integers(a, b)?;
    let (a_reduced, _) = division::div_rem_integers(a, &g)?;
    let (b_reduced, _) = division::div_rem_integers(b, &g)?;
    let product = multiplication::mul_integers(&a_reduced, &b_reduced)?;
    multiplication::mul_integers(&product, &g)
}


#[cfg(test)]
mod test_gcd_lcm {
    use crate::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $a:literal, $b:literal => gcd $gcd:literal, lcm $lcm:literal) => {
            #[test]
            fn $name() {
                let a: BigInteger = $a.parse().unwrap();
                let b: BigInteger = $b.parse().unwrap();

                assert_eq!(a.gcd(&b).unwrap().to_string(), $gcd);
                assert_eq!(b.gcd(&a).unwrap().to_string(), $gcd);
                assert_eq!(a.lcm(&b).unwrap().to_string(), $lcm);
            }
        };
    }

    impl_case!(case_48_18: "48", "18" => gcd "6", lcm "144");
    impl_case!(case_17_5: "17", "5" => gcd "1", lcm "85");
    impl_case!(case_1_1: "1", "1" => gcd "1", lcm "1");
    impl_case!(case_100_10: "100", "10" => gcd "10", lcm "100");
    impl_case!(case_large_coprime:
        "123456789012345678901", "9876543210"
        => gcd "1", lcm "1219326311248285321122511812210");

    #[test]
    fn test_gcd_times_lcm_is_product() {
        let a: BigInteger = "987654321987654321".parse().unwrap();
        let b: BigInteger = "123456789123456789".parse().unwrap();

        let g = a.gcd(&b).unwrap();
        let l = a.lcm(&b).unwrap();
        assert_eq!(g.try_mul(&l).unwrap(), a.try_mul(&b).unwrap());
    }

    #[test]
    fn test_non_positive_operands_are_domain_errors() {
        let five = BigInteger::from(5u8);
        let zero: BigInteger = Zero::zero();
        let minus = BigInteger::from(-5i8);

        assert_eq!(five.gcd(&zero), Err(BigIntegerError::Domain));
        assert_eq!(zero.gcd(&five), Err(BigIntegerError::Domain));
        assert_eq!(five.gcd(&minus), Err(BigIntegerError::Domain));
        assert_eq!(minus.lcm(&five), Err(BigIntegerError::Domain));
    }
}
