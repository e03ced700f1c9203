use flow_tx_types::{AccountKey, Argument, EncodingError};

use crate::rlp;

/// Canonical encoding of an account key:
/// `[public_key, sign_algorithm, hash_algorithm, weight]`.
///
/// Algorithm codes and weight are encoded as given; whether they are
/// acceptable is for the protocol to decide.
pub fn encode_account_key(key: &AccountKey) -> Result<Vec<u8>, EncodingError> {
    let mut body = Vec::with_capacity(key.public_key.len() + 12);
    rlp::write_bytes(&mut body, &key.public_key)?;
    rlp::write_uint(&mut body, key.sign_algorithm)?;
    rlp::write_uint(&mut body, key.hash_algorithm)?;
    rlp::write_uint(&mut body, key.weight)?;

    let mut out = Vec::with_capacity(body.len() + 9);
    rlp::write_list(&mut out, &body)?;
    Ok(out)
}

pub fn encode_account_key_hex(key: &AccountKey) -> Result<String, EncodingError> {
    encode_account_key(key).map(hex::encode)
}

/// The key as a `String` argument, for scripts that take hex-encoded keys
/// (adding a key, creating an account).
pub fn account_key_argument(key: &AccountKey) -> Result<Argument, EncodingError> {
    encode_account_key_hex(key).map(Argument::String)
}
