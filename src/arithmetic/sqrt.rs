//! integer square root implementation

use crate::*;
use crate::arithmetic::{addition, compare_magnitudes, multiplication, subtraction};
use crate::stdlib::cmp::Ordering;


/// Floor of the square root, by binary search over `[1, n]`
///
/// The midpoint's square narrows the interval until it is one wide;
/// an exact square short-circuits immediately. Zero and one are their
/// own roots.
pub(crate) fn sqrt_integer(n: &BigInteger) -> Result<BigInteger, BigIntegerError> {
    if n.negative {
        return Err(BigIntegerError::Domain);
    }
    let one: BigInteger = One::one();
    if compare_magnitudes(n, &one) != Ordering::Greater {
        return Ok(n.clone());
    }

    // invariant: low^2 <= n < (high + 1)^2
    let mut low = one.clone();
    let mut high = n.clone();
    loop {
        let gap = subtraction::sub_integers(&high, &low)?;
        if compare_magnitudes(&gap, &one) != Ordering::Greater {
            break;
        }
        let mut mid = addition::add_integers(&low, &high)?;
        limb::divide_small_in_place(&mut mid.digits, 2);
        let square = multiplication::mul_integers(&mid, &mid)?;
        match square.cmp(n) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => low = mid,
            Ordering::Greater => high = mid,
        }
    }
    Ok(low)
}


#[cfg(test)]
mod test_sqrt_integer {
    use crate::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $n:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigInteger = $n.parse().unwrap();
                let root = n.sqrt().unwrap();
                assert_eq!(root.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_1: "1" => "1");
    impl_case!(case_2: "2" => "1");
    impl_case!(case_3: "3" => "1");
    impl_case!(case_4: "4" => "2");
    impl_case!(case_8: "8" => "2");
    impl_case!(case_9: "9" => "3");
    impl_case!(case_99: "99" => "9");
    impl_case!(case_100: "100" => "10");
    impl_case!(case_10_18: "1000000000000000000" => "1000000000");
    impl_case!(case_2_10_18: "2000000000000000000" => "1414213562");
    impl_case!(case_below_perfect: "999999999999999999" => "999999999");
    impl_case!(case_perfect_square_large:
        "152415787532388367501905199875019052100" => "12345678901234567890");

    #[test]
    fn test_negative_is_domain_error() {
        let n = BigInteger::from(-4i8);
        assert_eq!(n.sqrt(), Err(BigIntegerError::Domain));
    }

    #[test]
    fn test_floor_property() {
        for value in 0u32..200 {
            let n = BigInteger::from(value);
            let root = n.sqrt().unwrap();
            let squared = root.try_mul(&root).unwrap();
            assert!(squared.cmp(&n) != crate::stdlib::cmp::Ordering::Greater);

            let mut next = root.clone();
            next.increment().unwrap();
            let next_squared = next.try_mul(&next).unwrap();
            assert!(next_squared.cmp(&n) == crate::stdlib::cmp::Ordering::Greater);
        }
    }
}
