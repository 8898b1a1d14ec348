// tests to be included by lib.rs

mod construction {
    use super::*;

    #[test]
    fn test_bit_width_rounds_up_to_limb_groups() {
        let n = BigInteger::with_bit_width(32).unwrap();
        assert_eq!(n.capacity(), 4);

        let wide = BigInteger::with_bit_width(512).unwrap();
        assert_eq!(wide.capacity(), 64);

        // tiny requests still get one 32-bit group
        let tiny = BigInteger::with_bit_width(1).unwrap();
        assert_eq!(tiny.capacity(), 4);
    }

    #[test]
    fn test_new_value_is_canonical_zero() {
        let n = BigInteger::with_bit_width(128).unwrap();
        assert!(n.is_zero());
        assert!(!n.is_negative());
        assert_eq!(n.significant_index(), 0);
    }

    #[test]
    fn test_default_uses_configured_bit_width() {
        let n = BigInteger::default();
        assert!(n.is_zero());
        assert_eq!(n.capacity(), BigInteger::with_bit_width(crate::DEFAULT_BIT_WIDTH).unwrap().capacity());
    }

    #[test]
    fn test_capacity_is_stable_across_mutation() {
        let mut n = BigInteger::with_limb_capacity(16).unwrap();
        n.assign_str_radix("123", 10).unwrap();
        assert_eq!(n.capacity(), 16);
        n.increment().unwrap();
        assert_eq!(n.capacity(), 16);
        n.set_zero();
        assert_eq!(n.capacity(), 16);
    }
}

mod assignment {
    use super::*;

    #[test]
    fn test_assign_copies_value_and_sign() {
        let src: BigInteger = "-987654321".parse().unwrap();
        let mut dst = BigInteger::with_limb_capacity(8).unwrap();
        dst.assign(&src);
        assert_eq!(dst, src);
        assert!(dst.is_negative());
    }

    #[test]
    fn test_assign_grows_to_larger_capacity() {
        let src = BigInteger::with_limb_capacity(32).unwrap();
        let mut dst = BigInteger::with_limb_capacity(2).unwrap();
        dst.assign(&src);
        assert_eq!(dst.capacity(), 32);
    }

    #[test]
    fn test_assign_clears_stale_high_limbs() {
        let mut dst: BigInteger = "99999999999999999999".parse().unwrap();
        let src: BigInteger = "5".parse().unwrap();
        dst.assign(&src);
        assert_eq!(dst, src);
    }
}

mod increment_decrement {
    use super::*;

    #[test]
    fn test_increment_carries_across_limbs() {
        let mut n: BigInteger = "9999".parse().unwrap();
        // one extra limb available
        let mut wide = BigInteger::with_limb_capacity(4).unwrap();
        wide.assign(&n);
        wide.increment().unwrap();
        assert_eq!(wide.to_string(), "10000");

        n.decrement().unwrap();
        assert_eq!(n.to_string(), "9998");
    }

    #[test]
    fn test_decrement_through_zero_goes_negative() {
        let mut n: BigInteger = "1".parse().unwrap();
        n.decrement().unwrap();
        assert!(n.is_zero());
        n.decrement().unwrap();
        assert_eq!(n.to_string(), "-1");
        n.increment().unwrap();
        assert!(n.is_zero());
        assert!(!n.is_negative());
    }

    #[test]
    fn test_increment_overflow_at_capacity() {
        let mut n = BigInteger::with_limb_capacity(1).unwrap();
        n.assign_str_radix("9999", 10).unwrap();
        assert_eq!(n.increment(), Err(BigIntegerError::Overflow));
    }
}

mod scenarios {
    use super::*;

    // the canonical end-to-end walks, chained through parse,
    // arithmetic, and formatting

    #[test]
    fn test_carry_ripple_sum() {
        let a = BigInteger::from_str("999999999999999999999").unwrap();
        let one = BigInteger::from_str("1").unwrap();
        assert_eq!(a.try_add(&one).unwrap().to_string(), "1000000000000000000000");
    }

    #[test]
    fn test_small_negative_difference() {
        let five = BigInteger::from_str("5").unwrap();
        let seven = BigInteger::from_str("7").unwrap();
        assert_eq!(five.try_sub(&seven).unwrap().to_string(), "-2");
    }

    #[test]
    fn test_factorial_of_twenty() {
        let n = BigInteger::from_str("20").unwrap();
        assert_eq!(n.factorial().unwrap().to_string(), "2432902008176640000");
    }

    #[test]
    fn test_prime_checks() {
        assert!(BigInteger::from_str("97").unwrap().is_prime().unwrap());
        assert!(!BigInteger::from_str("100").unwrap().is_prime().unwrap());
    }

    #[test]
    fn test_fiftieth_fibonacci() {
        let n = BigInteger::from_str("50").unwrap();
        assert_eq!(BigInteger::nth_fibonacci(&n).unwrap().to_string(), "12586269025");
    }

    #[test]
    fn test_radix_rendering() {
        let n = BigInteger::from_str("255").unwrap();
        assert_eq!(n.to_str_radix(16), "FF");
        assert_eq!(n.to_str_radix(2), "11111111");
    }

    #[test]
    fn test_palindromes() {
        assert!(BigInteger::from_str("12321").unwrap().is_palindrome());
        assert!(!BigInteger::from_str("12345").unwrap().is_palindrome());
        assert!(BigInteger::from_str("0").unwrap().is_palindrome());
        assert!(BigInteger::from_str("-121").unwrap().is_palindrome());
        assert!(!BigInteger::from_str("10").unwrap().is_palindrome());
        assert!(BigInteger::from_str("7").unwrap().is_palindrome());
    }
}

mod algebraic_laws {
    use super::*;

    fn samples() -> Vec<BigInteger> {
        [
            "0", "1", "-1", "9999", "10000", "-10000",
            "123456789", "-987654321",
            "99999999999999999999", "-31415926535897932384626433",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
    }

    #[test]
    fn test_addition_commutes() {
        let values = samples();
        for a in values.iter() {
            for b in values.iter() {
                assert_eq!(a.try_add(b).unwrap(), b.try_add(a).unwrap());
            }
        }
    }

    #[test]
    fn test_multiplication_commutes() {
        let values = samples();
        for a in values.iter() {
            for b in values.iter() {
                assert_eq!(a.try_mul(b).unwrap(), b.try_mul(a).unwrap());
            }
        }
    }

    #[test]
    fn test_addition_associates() {
        let values = samples();
        for a in values.iter() {
            for b in values.iter() {
                for c in values.iter() {
                    let left = a.try_add(b).unwrap().try_add(c).unwrap();
                    let right = a.try_add(&b.try_add(c).unwrap()).unwrap();
                    assert_eq!(left, right);
                }
            }
        }
    }

    #[test]
    fn test_division_law_over_sample_grid() {
        let values = samples();
        for a in values.iter() {
            for b in values.iter() {
                if b.is_zero() {
                    continue;
                }
                let (q, r) = a.div_rem(b).unwrap();
                let recombined = q.try_mul(b).unwrap().try_add(&r).unwrap();
                assert_eq!(recombined, *a, "{} / {}", a, b);

                // |r| < |b|
                assert_eq!(
                    crate::arithmetic::compare_magnitudes(&r, b),
                    crate::stdlib::cmp::Ordering::Less
                );
            }
        }
    }

    #[test]
    fn test_sub_is_add_of_negation() {
        let values = samples();
        for a in values.iter() {
            for b in values.iter() {
                assert_eq!(a.try_sub(b).unwrap(), a.try_add(&-b).unwrap());
            }
        }
    }

    #[test]
    fn test_gcd_lcm_product_identity() {
        let pairs = [("48", "18"), ("17", "5"), ("252", "105"), ("1000000", "8192")];
        for (a_str, b_str) in pairs.iter() {
            let a: BigInteger = a_str.parse().unwrap();
            let b: BigInteger = b_str.parse().unwrap();
            let g = a.gcd(&b).unwrap();
            let l = a.lcm(&b).unwrap();
            assert_eq!(g.try_mul(&l).unwrap(), a.try_mul(&b).unwrap());
        }
    }

    #[test]
    fn test_power_round_trips_through_log_and_root() {
        let two = BigInteger::from(2u8);
        let exp = BigInteger::from(64u8);
        let n = two.pow(&exp).unwrap();

        assert_eq!(n.ilog(&two).unwrap(), exp);

        let thirty_two = BigInteger::from(32u8);
        assert_eq!(n.sqrt().unwrap(), two.pow(&thirty_two).unwrap());
    }
}

mod error_paths {
    use super::*;
    use paste::paste;

    macro_rules! impl_domain_case {
        ($name:ident: $call:expr) => {
            paste! {
                #[test]
                fn [< test_domain_ $name >]() {
                    assert_eq!($call, Err(BigIntegerError::Domain));
                }
            }
        };
    }

    impl_domain_case!(factorial_negative: BigInteger::from(-2i8).factorial());
    impl_domain_case!(permutation_k_exceeds_n:
        BigInteger::from(2u8).permutation(&BigInteger::from(3u8)));
    impl_domain_case!(gcd_zero: BigInteger::from(4u8).gcd(&Zero::zero()));
    impl_domain_case!(lcm_negative: BigInteger::from(-4i8).lcm(&BigInteger::from(2u8)));
    impl_domain_case!(sqrt_negative: BigInteger::from(-9i8).sqrt());
    impl_domain_case!(pow_negative_exponent:
        BigInteger::from(2u8).pow(&BigInteger::from(-2i8)));
    impl_domain_case!(fibonacci_negative:
        BigInteger::nth_fibonacci(&BigInteger::from(-1i8)));

    #[test]
    fn test_errors_display() {
        assert_eq!(BigIntegerError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            BigIntegerError::Overflow.to_string(),
            "value exceeds its allocated limb capacity"
        );
    }
}
