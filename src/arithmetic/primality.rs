//! primality by trial division

use crate::*;
use crate::arithmetic::{division, sqrt};
use crate::stdlib::cmp::Ordering;


/// Trial division by every odd candidate up to the floor square root
///
/// Values below two are composite by convention; two is the only even
/// prime. Any zero remainder along the way decides compositeness.
pub(crate) fn is_prime_integer(n: &BigInteger) -> Result<bool, BigIntegerError> {
    let two = BigInteger::from(2u8);
    match n.cmp(&two) {
        Ordering::Less => return Ok(false),
        Ordering::Equal => return Ok(true),
        Ordering::Greater => {}
    }
    if !n.is_odd() {
        return Ok(false);
    }

    let root = sqrt::sqrt_integer(n)?;
    // the candidate counts up to the root, so it shares its capacity
    let mut candidate = BigInteger::from_u64_with_capacity(3, root.capacity());
    while candidate.cmp(&root) != Ordering::Greater {
        let (_, rem) = division::div_rem_integers(n, &candidate)?;
        if rem.is_zero() {
            return Ok(false);
        }
        candidate.increment()?;
        candidate.increment()?;
    }
    Ok(true)
}


#[cfg(test)]
mod test_is_prime_integer {
    use crate::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigInteger = $n.parse().unwrap();
                assert_eq!(n.is_prime().unwrap(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => false);
    impl_case!(case_1: "1" => false);
    impl_case!(case_2: "2" => true);
    impl_case!(case_3: "3" => true);
    impl_case!(case_4: "4" => false);
    impl_case!(case_9: "9" => false);
    impl_case!(case_97: "97" => true);
    impl_case!(case_100: "100" => false);
    impl_case!(case_7919: "7919" => true);
    impl_case!(case_7921: "7921" => false); // 89 * 89
    impl_case!(case_104729: "104729" => true);
    impl_case!(case_negative: "-7" => false);

    #[test]
    fn test_small_primes() {
        let primes = [2u32, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        for value in 2u32..50 {
            let expected = primes.contains(&value);
            let n = BigInteger::from(value);
            assert_eq!(n.is_prime().unwrap(), expected, "value {}", value);
        }
    }
}
