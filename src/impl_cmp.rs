//! Implementation of comparison operations
//!
//! Equality and ordering ignore trailing zero limbs, so values of
//! different capacities holding the same integer compare equal, and
//! hashing follows suit.
//!

use crate::*;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::hash::{Hash, Hasher};


impl PartialEq for BigInteger {
    #[inline]
    fn eq(&self, rhs: &BigInteger) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &BigInteger) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => arithmetic::compare_magnitudes(self, other),
            // both negative: the greater magnitude is the smaller number
            (true, true) => arithmetic::compare_magnitudes(other, self),
        }
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let top = self.significant_index();
        self.digits[..=top].hash(state);
        self.negative.hash(state);
    }
}


#[cfg(test)]
mod test_ordering {
    use crate::*;
    use crate::stdlib::cmp::Ordering::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal, $b:literal => $expected:ident) => {
            #[test]
            fn $name() {
                let a: BigInteger = $a.parse().unwrap();
                let b: BigInteger = $b.parse().unwrap();
                assert_eq!(a.cmp(&b), $expected);
            }
        };
    }

    impl_case!(case_0_0: "0", "0" => Equal);
    impl_case!(case_0_n0: "0", "-0" => Equal);
    impl_case!(case_1_2: "1", "2" => Less);
    impl_case!(case_9999_10000: "9999", "10000" => Less);
    impl_case!(case_sign_beats_magnitude: "-50000", "3" => Less);
    impl_case!(case_both_negative_length: "-3", "-50000" => Greater);
    impl_case!(case_both_negative_limbs: "-100", "-99" => Less);
    impl_case!(case_equal_negatives: "-42", "-42" => Equal);
    impl_case!(case_long_equal:
        "123456789012345678901234567890", "123456789012345678901234567890" => Equal);
    impl_case!(case_high_limb_decides: "50000001", "49999999" => Greater);

    #[test]
    fn test_capacity_does_not_affect_equality() {
        let small: BigInteger = "12345678".parse().unwrap();
        let mut roomy = BigInteger::with_limb_capacity(64).unwrap();
        roomy.assign_str_radix("12345678", 10).unwrap();

        assert_eq!(small, roomy);
        assert_eq!(small.cmp(&roomy), crate::stdlib::cmp::Ordering::Equal);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hash_ignores_capacity() {
        use crate::stdlib::hash::{Hash, Hasher};
        use crate::stdlib::DefaultHasher;

        fn hash_of(value: &BigInteger) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let small: BigInteger = "987654321".parse().unwrap();
        let mut roomy = BigInteger::with_limb_capacity(32).unwrap();
        roomy.assign_str_radix("987654321", 10).unwrap();

        assert_eq!(hash_of(&small), hash_of(&roomy));
    }
}
