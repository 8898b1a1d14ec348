//! pow implementation

use crate::*;
use crate::arithmetic::multiplication;


/// `base ** exponent` by binary exponentiation
///
/// Walks the exponent's bits least significant first, obtained by
/// repeated halving, multiplying the accumulator by the running square
/// on every set bit. A zero exponent yields one before the base is
/// inspected, so `0 ** 0 == 1`; a negative exponent is outside the
/// integer domain.
pub(crate) fn pow_integers(base: &BigInteger, exponent: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    if exponent.negative {
        return Err(BigIntegerError::Domain);
    }
    if exponent.is_zero() {
        return Ok(One::one());
    }
    if base.is_zero() {
        return Ok(Zero::zero());
    }

    let mut result: BigInteger = One::one();
    let mut square = base.clone();
    let mut bits = exponent.clone();
    while !bits.is_zero() {
        if bits.is_odd() {
            result = multiplication::mul_integers(&result, &square)?;
        }
        square = multiplication::mul_integers(&square, &square)?;
        limb::divide_small_in_place(&mut bits.digits, 2);
    }
    Ok(result)
}


#[cfg(test)]
mod test_pow_integers {
    use crate::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $base:literal ^ $exp:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let base: BigInteger = $base.parse().unwrap();
                let exp: BigInteger = $exp.parse().unwrap();

                let power = base.pow(&exp).unwrap();
                assert_eq!(power.to_string(), $expected);
            }
        };
    }

    impl_case!(case_2_10: "2" ^ "10" => "1024");
    impl_case!(case_2_100: "2" ^ "100" => "1267650600228229401496703205376");
    impl_case!(case_10_20: "10" ^ "20" => "100000000000000000000");
    impl_case!(case_0_0: "0" ^ "0" => "1");
    impl_case!(case_0_5: "0" ^ "5" => "0");
    impl_case!(case_7_0: "7" ^ "0" => "1");
    impl_case!(case_7_1: "7" ^ "1" => "7");
    impl_case!(case_n2_3: "-2" ^ "3" => "-8");
    impl_case!(case_n2_4: "-2" ^ "4" => "16");
    impl_case!(case_9999_3: "9999" ^ "3" => "999700029999");

    #[test]
    fn test_negative_exponent_is_domain_error() {
        let base = BigInteger::from(2u8);
        let exp = BigInteger::from(-1i8);
        assert_eq!(base.pow(&exp), Err(BigIntegerError::Domain));
    }
}
