use crate::*;
use crate::stdlib::str::FromStr;

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInteger, BigIntegerError> {
        // implemented in impl_num.rs
        BigInteger::from_str_radix(s, 10)
    }
}




#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                BigInteger::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty: "" => "MalformedInput");
    impl_case!(case_bad_string_only_minus: "-" => "MalformedInput");
    impl_case!(case_bad_string_hello: "hello" => "MalformedInput");
    impl_case!(case_bad_string_decimal_point: "1.23" => "MalformedInput");
    impl_case!(case_bad_string_hex_prefix: "0xCafeBeef" => "MalformedInput");
    impl_case!(case_bad_string_whitespace: " 12" => "MalformedInput");
}
