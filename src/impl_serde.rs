//!
//! Support for serde implementations
//!
use crate::*;
use crate::stdlib::fmt;
use serde::{de, ser};


impl ser::Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigInteger
struct BigIntegerVisitor;

impl<'de> de::Visitor<'de> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        use crate::stdlib::str::FromStr;
        BigInteger::from_str(value).map_err(|err| E::custom(err))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }
}

impl<'de> de::Deserialize<'de> for BigInteger {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigIntegerVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens,
    };

    #[test]
    fn test_serde_roundtrip_string() {
        let n: BigInteger = "-123456789012345678901234567890".parse().unwrap();
        assert_tokens(&n, &[Token::Str("-123456789012345678901234567890")]);
    }

    #[test]
    fn test_serde_zero() {
        let zero: BigInteger = Zero::zero();
        assert_tokens(&zero, &[Token::Str("0")]);
    }

    #[test]
    fn test_deserialize_from_integers() {
        assert_de_tokens(&BigInteger::from(1234u32), &[Token::U64(1234)]);
        assert_de_tokens(&BigInteger::from(-1234i32), &[Token::I64(-1234)]);
    }
}
