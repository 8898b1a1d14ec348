//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use crate::arithmetic::{compare_limb_slices, subtraction};
use crate::limb::{DIGITS_PER_LIMB, LimbInt};
use crate::stdlib::cmp::Ordering;
use crate::stdlib::string::String;
use crate::stdlib::vec::Vec;


impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // decimal fast path: limbs print directly, no division needed
        let buf = self.magnitude_decimal();
        f.pad_integral(!self.negative, "", &buf)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInteger(\"{}\")", self)
    }
}

impl fmt::Binary for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        self.write_radix_magnitude(&mut buf, 2)?;
        f.pad_integral(!self.negative, "0b", &buf)
    }
}

impl fmt::Octal for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        self.write_radix_magnitude(&mut buf, 8)?;
        f.pad_integral(!self.negative, "0o", &buf)
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        self.write_radix_magnitude(&mut buf, 16)?;
        buf.make_ascii_lowercase();
        f.pad_integral(!self.negative, "0x", &buf)
    }
}

impl fmt::UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        self.write_radix_magnitude(&mut buf, 16)?;
        f.pad_integral(!self.negative, "0x", &buf)
    }
}


impl BigInteger {
    /// Render the value in the given radix
    ///
    /// Digits above nine render as `'A'..'F'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let n = BigInteger::from(255u8);
    ///
    /// assert_eq!(n.to_str_radix(16), "FF");
    /// assert_eq!(n.to_str_radix(2), "11111111");
    /// assert_eq!(n.to_str_radix(10), "255");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `radix` is outside `2..=16`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let mut out = String::new();
        self.write_radix(&mut out, radix)
            .expect("writing to a String cannot fail");
        out
    }

    /// Write the value in the given radix to a caller-provided sink
    ///
    /// The sink is any `fmt::Write` collaborator: a `String`, a
    /// formatter, an I/O adapter. A leading `-` is emitted for
    /// negative values.
    ///
    /// # Panics
    ///
    /// Panics when `radix` is outside `2..=16`.
    pub fn write_radix<W: fmt::Write>(&self, sink: &mut W, radix: u32) -> fmt::Result {
        if self.negative {
            sink.write_char('-')?;
        }
        self.write_radix_magnitude(sink, radix)
    }

    /// Digit-by-digit rendering of the magnitude
    ///
    /// Builds the largest power of the radix not exceeding the value,
    /// then emits one digit per position by counting how many times
    /// that power still fits (repeated subtraction, at most radix-1
    /// rounds) before dividing the power back down.
    fn write_radix_magnitude<W: fmt::Write>(&self, sink: &mut W, radix: u32) -> fmt::Result {
        assert!(2 <= radix && radix <= 16, "radix must be within 2..=16");

        if radix == 10 {
            return sink.write_str(&self.magnitude_decimal());
        }

        // working copies with room for one scaled power limb
        let cap = self.digits.len() + 2;
        let top = self.significant_index();
        let mut value: Vec<LimbInt> = Vec::new();
        value.resize(cap, 0);
        value[..=top].copy_from_slice(&self.digits[..=top]);

        let mut power: Vec<LimbInt> = Vec::new();
        power.resize(cap, 0);
        power[0] = 1;
        let mut previous = power.clone();

        let mut places = 0usize;
        while compare_limb_slices(&power, &value) != Ordering::Greater {
            previous.copy_from_slice(&power);
            if limb::mul_small_in_place(&mut power, radix as LimbInt).is_err() {
                return Err(fmt::Error);
            }
            places += 1;
        }
        if places > 0 {
            power.copy_from_slice(&previous);
        }

        for _ in 0..places.max(1) {
            let mut digit = 0u32;
            while compare_limb_slices(&power, &value) != Ordering::Greater {
                if subtraction::sub_assign_magnitude(&mut value, &power).is_err() {
                    return Err(fmt::Error);
                }
                digit += 1;
            }
            let ch = if digit < 10 {
                (b'0' + digit as u8) as char
            } else {
                (b'A' + (digit - 10) as u8) as char
            };
            sink.write_char(ch)?;
            limb::divide_small_in_place(&mut power, radix as LimbInt);
        }
        Ok(())
    }

    /// Decimal digits of the magnitude: top limb unpadded, the rest
    /// zero-padded to the limb width
    pub(crate) fn magnitude_decimal(&self) -> String {
        let top = self.significant_index();
        let mut buf = String::with_capacity((top + 1) * DIGITS_PER_LIMB);
        push_limb_digits(&mut buf, self.digits[top], false);
        for idx in (0..top).rev() {
            push_limb_digits(&mut buf, self.digits[idx], true);
        }
        buf
    }
}

/// Append one limb's decimal digits, optionally left-padded with zeros
fn push_limb_digits(buf: &mut String, limb: LimbInt, padded: bool) {
    let digits = [
        (limb / 1000 % 10) as u8,
        (limb / 100 % 10) as u8,
        (limb / 10 % 10) as u8,
        (limb % 10) as u8,
    ];
    let mut skipping = !padded;
    for (pos, &digit) in digits.iter().enumerate() {
        if skipping && digit == 0 && pos < digits.len() - 1 {
            continue;
        }
        skipping = false;
        buf.push((b'0' + digit) as char);
    }
}


#[cfg(test)]
mod test_display {
    use crate::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigInteger = $input.parse().unwrap();
                assert_eq!(n.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_n0: "-0" => "0");
    impl_case!(case_42: "42" => "42");
    impl_case!(case_n42: "-42" => "-42");
    impl_case!(case_limb_boundary: "10000" => "10000");
    impl_case!(case_inner_limb_padding: "100000001" => "100000001");
    impl_case!(case_long: "123456789012345678901234567890" => "123456789012345678901234567890");

    #[test]
    fn test_display_ignores_extra_capacity() {
        let mut n = BigInteger::with_limb_capacity(64).unwrap();
        n.assign_str_radix("-271828", 10).unwrap();
        assert_eq!(n.to_string(), "-271828");
    }

    #[test]
    fn test_width_and_sign_formatting() {
        let n: BigInteger = "-42".parse().unwrap();
        assert_eq!(format!("{:>8}", n), "     -42");
        assert_eq!(format!("{:08}", n), "-0000042");
    }

    #[test]
    fn test_debug() {
        let n: BigInteger = "-12345".parse().unwrap();
        assert_eq!(format!("{:?}", n), "BigInteger(\"-12345\")");
    }
}

#[cfg(test)]
mod test_radix_formatting {
    use crate::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal, $radix:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigInteger = $input.parse().unwrap();
                assert_eq!(n.to_str_radix($radix), $expected);
            }
        };
    }

    impl_case!(case_255_16: "255", 16 => "FF");
    impl_case!(case_255_2: "255", 2 => "11111111");
    impl_case!(case_256_16: "256", 16 => "100");
    impl_case!(case_0_2: "0", 2 => "0");
    impl_case!(case_0_16: "0", 16 => "0");
    impl_case!(case_8_8: "8", 8 => "10");
    impl_case!(case_100_7: "100", 7 => "202");
    impl_case!(case_48879_16: "48879", 16 => "BEEF");
    impl_case!(case_n255_16: "-255", 16 => "-FF");
    impl_case!(case_large_16:
        "1461501637330902918203684832716283019655932542975", 16
        => "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
    impl_case!(case_1024_2: "1024", 2 => "10000000000");

    #[test]
    fn test_fmt_trait_impls() {
        let n: BigInteger = "255".parse().unwrap();
        assert_eq!(format!("{:x}", n), "ff");
        assert_eq!(format!("{:X}", n), "FF");
        assert_eq!(format!("{:b}", n), "11111111");
        assert_eq!(format!("{:o}", n), "377");
        assert_eq!(format!("{:#x}", n), "0xff");
    }

    #[test]
    fn test_negative_hex_fmt() {
        let n: BigInteger = "-255".parse().unwrap();
        assert_eq!(format!("{:x}", n), "-ff");
    }

    #[test]
    fn test_write_radix_into_sink() {
        use crate::stdlib::fmt::Write;

        struct CountingSink {
            buf: crate::stdlib::string::String,
            chars: usize,
        }

        impl Write for CountingSink {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.chars += s.chars().count();
                self.buf.push_str(s);
                Ok(())
            }
        }

        let n: BigInteger = "-48879".parse().unwrap();
        let mut sink = CountingSink { buf: Default::default(), chars: 0 };
        n.write_radix(&mut sink, 16).unwrap();
        assert_eq!(sink.buf, "-BEEF");
        assert_eq!(sink.chars, 5);
    }
}
