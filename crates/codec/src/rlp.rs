//! Recursive-length-prefix encoding.
//!
//! Three shapes: unsigned integers (minimal big-endian, zero is the empty
//! string), byte strings, and lists of already-encoded items. Output is
//! appended to a caller-owned buffer.

use flow_tx_types::EncodingError;

const STRING_OFFSET: u8 = 0x80;
const LONG_STRING_OFFSET: u8 = 0xb7;
const LIST_OFFSET: u8 = 0xc0;
const LONG_LIST_OFFSET: u8 = 0xf7;

/// Longest payload that fits in a single prefix byte.
const SHORT_MAX: usize = 55;

fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn write_header(out: &mut Vec<u8>, offset: u8, long_offset: u8, len: usize) -> Result<(), EncodingError> {
    if len <= SHORT_MAX {
        out.push(offset + len as u8);
        return Ok(());
    }
    let len_u64: u64 = len.try_into().map_err(|_| EncodingError::LengthOverflow(len))?;
    let be = len_u64.to_be_bytes();
    let len_bytes = trim_leading_zeros(&be);
    out.push(long_offset + len_bytes.len() as u8);
    out.extend_from_slice(len_bytes);
    Ok(())
}

/// Append a byte string. A single byte below `0x80` is its own encoding.
pub fn write_bytes(out: &mut Vec<u8>, b: &[u8]) -> Result<(), EncodingError> {
    if let [single] = b {
        if *single < STRING_OFFSET {
            out.push(*single);
            return Ok(());
        }
    }
    write_header(out, STRING_OFFSET, LONG_STRING_OFFSET, b.len())?;
    out.extend_from_slice(b);
    Ok(())
}

/// Append an unsigned integer as its minimal big-endian byte string.
pub fn write_uint(out: &mut Vec<u8>, v: impl Into<u128>) -> Result<(), EncodingError> {
    let v: u128 = v.into();
    let be = v.to_be_bytes();
    write_bytes(out, trim_leading_zeros(&be))
}

/// Append a list whose members are already encoded and concatenated in
/// `payload`.
pub fn write_list(out: &mut Vec<u8>, payload: &[u8]) -> Result<(), EncodingError> {
    write_header(out, LIST_OFFSET, LONG_LIST_OFFSET, payload.len())?;
    out.extend_from_slice(payload);
    Ok(())
}

pub fn encode_bytes(b: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::with_capacity(b.len() + 9);
    write_bytes(&mut out, b)?;
    Ok(out)
}

pub fn encode_uint(v: impl Into<u128>) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::with_capacity(17);
    write_uint(&mut out, v)?;
    Ok(out)
}

/// Encode a list from individually encoded items, in the order given.
pub fn encode_list<I: AsRef<[u8]>>(items: &[I]) -> Result<Vec<u8>, EncodingError> {
    let payload = items.iter().flat_map(|i| i.as_ref().iter().copied()).collect::<Vec<u8>>();
    let mut out = Vec::with_capacity(payload.len() + 9);
    write_list(&mut out, &payload)?;
    Ok(out)
}
