use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EncodingError, Error};

/// Number of fractional digits carried by a token amount.
pub const DECIMALS: usize = 8;

const SCALE: u128 = 100_000_000;

/// A decimal fixed-point token amount, held as a count of 10^-8 units.
///
/// Units are 128 bits wide: the largest amount probed by fixture generators,
/// `184467440737.9551615`, already exceeds `u64::MAX` units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount {
    units: u128,
}

impl TokenAmount {
    pub const ZERO: Self = Self { units: 0 };

    pub const fn from_units(units: u128) -> Self {
        Self { units }
    }

    pub const fn units(&self) -> u128 {
        self.units
    }
}

fn malformed(input: &str, reason: &'static str) -> Error {
    Error::MalformedAmount {
        input: input.to_string(),
        reason,
    }
}

fn parse_digits(digits: &str) -> Result<u128, EncodingError> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(b - b'0')))
            .ok_or(EncodingError::IntegerOutOfRange {
                field: "amount",
                bits: 128,
            })
    })
}

impl FromStr for TokenAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int, frac) = match s.split_once('.') {
            Some((int, frac)) => {
                if frac.is_empty() {
                    return Err(malformed(s, "empty fractional part"));
                }
                (int, frac)
            }
            None => (s, ""),
        };

        if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(s, "integer part must be decimal digits"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(s, "fractional part must be decimal digits"));
        }
        if frac.len() > DECIMALS {
            return Err(malformed(s, "more than 8 fractional digits"));
        }

        let whole = parse_digits(int)?;
        let frac_units = parse_digits(&format!("{frac:0<width$}", width = DECIMALS))?;
        let units = whole
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_units))
            .ok_or(EncodingError::IntegerOutOfRange {
                field: "amount",
                bits: 128,
            })?;

        Ok(Self { units })
    }
}

impl fmt::Display for TokenAmount {
    /// Canonical text: trailing fractional zeros trimmed, at least one
    /// fractional digit kept (`0.0`, `12.5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.units / SCALE;
        let frac = format!("{:0width$}", self.units % SCALE, width = DECIMALS);
        let trimmed = frac.trim_end_matches('0');
        if trimmed.is_empty() {
            write!(f, "{whole}.0")
        } else {
            write!(f, "{whole}.{trimmed}")
        }
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
