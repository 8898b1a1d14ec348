// Property tests to be included by lib.rs (if enabled)


proptest! {
    #[test]
    fn prop_decimal_round_trip(n: i128) {
        let big = BigInteger::from(n);
        let parsed: BigInteger = big.to_string().parse().unwrap();
        prop_assert_eq!(parsed, big);
    }

    #[test]
    fn prop_add_commutes(a: i128, b: i128) {
        let x = BigInteger::from(a);
        let y = BigInteger::from(b);
        prop_assert_eq!(x.try_add(&y).unwrap(), y.try_add(&x).unwrap());
    }

    #[test]
    fn prop_add_matches_native(a: i64, b: i64) {
        let sum = BigInteger::from(a).try_add(&BigInteger::from(b)).unwrap();
        prop_assert_eq!(sum, BigInteger::from(a as i128 + b as i128));
    }

    #[test]
    fn prop_mul_matches_native(a: i64, b: i64) {
        let product = BigInteger::from(a).try_mul(&BigInteger::from(b)).unwrap();
        prop_assert_eq!(product, BigInteger::from(a as i128 * b as i128));
    }

    #[test]
    fn prop_division_law(a: i128, b: i128) {
        prop_assume!(b != 0);
        let x = BigInteger::from(a);
        let y = BigInteger::from(b);
        let (q, r) = x.div_rem(&y).unwrap();
        prop_assert_eq!(q.try_mul(&y).unwrap().try_add(&r).unwrap(), x);
    }

    #[test]
    fn prop_cmp_matches_native(a: i128, b: i128) {
        let x = BigInteger::from(a);
        let y = BigInteger::from(b);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}
