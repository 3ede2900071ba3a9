use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Identifier of a digital world listing as the backend actor receives it.
///
/// Held as a double so that text which does not coerce to a number still
/// travels to the backend (as not-a-number) instead of being rejected here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalWorldId(f64);

impl DigitalWorldId {
    /// Coerces raw input text to a number. Never fails: anything that is not a
    /// numeric literal becomes not-a-number, and blank text becomes zero.
    pub fn from_input(input: &str) -> Self {
        Self(coerce_number(input))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// The identifier as a whole number, when it is one that fits in `i64`.
    pub fn as_whole_number(self) -> Option<i64> {
        let value = self.0;
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Some(value as i64)
        } else {
            None
        }
    }
}

impl From<u64> for DigitalWorldId {
    fn from(value: u64) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for DigitalWorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("NaN");
        }
        if self.0.is_infinite() {
            return f.write_str(if self.0 > 0.0 { "Infinity" } else { "-Infinity" });
        }
        match self.as_whole_number() {
            Some(whole) => write!(f, "{whole}"),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for DigitalWorldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Non-finite values end up as JSON null.
        match self.as_whole_number() {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for DigitalWorldId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(Self(value.unwrap_or(f64::NAN)))
    }
}

/// Arbitrary-precision, non-negative quantity offered for a purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigUint);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {input:?} to an integer amount")]
pub struct AmountParseError {
    pub input: String,
}

impl Amount {
    /// Parses an integer literal of any length. Surrounding whitespace is
    /// ignored, blank text is zero, and `0x`/`0o`/`0b` prefixes select the
    /// radix. Signs, fractions and exponents are rejected.
    pub fn parse(input: &str) -> Result<Self, AmountParseError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(Self::default());
        }

        let (radix, digits) = split_radix_prefix(text).unwrap_or((10, text));
        let invalid = || AmountParseError {
            input: input.to_string(),
        };
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
            return Err(invalid());
        }

        BigUint::parse_bytes(digits.as_bytes(), radix)
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn coerce_number(input: &str) -> f64 {
    let text = input.trim();
    if text.is_empty() {
        return 0.0;
    }

    if let Some((radix, digits)) = split_radix_prefix(text) {
        return fold_digits(digits, radix);
    }

    match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if is_decimal_literal(text) => text.parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let rest = text.strip_prefix('0')?;
    let mut chars = rest.chars();
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    Some((radix, chars.as_str()))
}

fn fold_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0_f64;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            return f64::NAN;
        };
        value = value * f64::from(radix) + f64::from(digit);
    }
    value
}

/// `[+-] (digits [. digits] | . digits) [(e|E) [+-] digits]`
fn is_decimal_literal(text: &str) -> bool {
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mantissa_ok = all_digits(int_part)
        && all_digits(frac_part)
        && !(int_part.is_empty() && frac_part.is_empty());
    let exponent_ok = exponent.map_or(true, |exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}
