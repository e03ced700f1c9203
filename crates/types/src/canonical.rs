//! Scalar canonicalization shared by the typed model and the loose input
//! records: hex text to fixed-width byte arrays, and JSON numbers to
//! integers of a declared width.

use serde_json::Number;
use thiserror::Error;

use crate::error::EncodingError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    #[error(transparent)]
    Invalid(#[from] hex::FromHexError),

    #[error("decodes to {len} bytes, wider than {max}")]
    TooLong { len: usize, max: usize },
}

pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode hex text, accepting an optional `0x` prefix. Odd-length input is
/// read as if it carried one leading `0`.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, HexError> {
    let s = strip_hex_prefix(s);
    let bytes = if s.len() % 2 == 1 {
        hex::decode(format!("0{s}"))?
    } else {
        hex::decode(s)?
    };
    Ok(bytes)
}

/// Decode hex text into exactly `N` bytes, left-padding with zeros.
pub fn decode_hex_padded<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let bytes = decode_hex(s)?;
    if bytes.len() > N {
        return Err(HexError::TooLong {
            len: bytes.len(),
            max: N,
        });
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

fn narrow_u64(field: &'static str, n: &Number, bits: u32) -> Result<u64, EncodingError> {
    if let Some(v) = n.as_u64() {
        return Ok(v);
    }
    if n.as_i64().is_some() {
        // as_u64 already failed, so this is a negative integer
        return Err(EncodingError::NegativeInteger { field });
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 || !f.is_finite() => Err(EncodingError::NotAnInteger { field }),
        Some(f) if f < 0.0 => Err(EncodingError::NegativeInteger { field }),
        Some(_) => Err(EncodingError::IntegerOutOfRange { field, bits }),
        None => Err(EncodingError::NotAnInteger { field }),
    }
}

/// Narrow a JSON number to an unsigned integer of `T`'s width. Only the
/// declared bit width is checked, never the meaning of the value.
pub fn narrow<T>(field: &'static str, n: &Number) -> Result<T, EncodingError>
where
    T: TryFrom<u64>,
{
    let bits = (std::mem::size_of::<T>() * 8) as u32;
    let v = narrow_u64(field, n, bits)?;
    T::try_from(v).map_err(|_| EncodingError::IntegerOutOfRange { field, bits })
}
