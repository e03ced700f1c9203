//! Domain scalars in their primitive encodings.
//!
//! Addresses and identifiers are fixed-width byte strings (leading zeros
//! kept); amounts go through the integer rule.

use flow_tx_types::{Address, EncodingError, Identifier, TokenAmount};

use crate::rlp;

pub fn write_address(out: &mut Vec<u8>, address: &Address) -> Result<(), EncodingError> {
    rlp::write_bytes(out, address.as_bytes())
}

pub fn write_identifier(out: &mut Vec<u8>, id: &Identifier) -> Result<(), EncodingError> {
    rlp::write_bytes(out, id.as_bytes())
}

pub fn write_amount(out: &mut Vec<u8>, amount: &TokenAmount) -> Result<(), EncodingError> {
    rlp::write_uint(out, amount.units())
}

/// An amount as the integer count of its smallest units.
pub fn encode_amount(amount: &TokenAmount) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::with_capacity(17);
    write_amount(&mut out, amount)?;
    Ok(out)
}
