use thiserror::Error;

/// Structural failures raised by the primitive encoder and by integer
/// canonicalization. Never raised for semantic reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("`{field}` is negative")]
    NegativeInteger { field: &'static str },

    #[error("`{field}` does not fit in {bits} bits")]
    IntegerOutOfRange { field: &'static str, bits: u32 },

    #[error("`{field}` is not an integer")]
    NotAnInteger { field: &'static str },

    #[error("length {0} does not fit in a 64-bit length prefix")]
    LengthOverflow(usize),
}

/// Errors returned while building or encoding a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed address {input:?}: {reason}")]
    MalformedAddress { input: String, reason: String },

    #[error("malformed hex in `{field}`: {reason}")]
    MalformedHex { field: &'static str, reason: String },

    #[error("malformed token amount {input:?}: {reason}")]
    MalformedAmount { input: String, reason: &'static str },

    #[error("failed to serialize argument: {0}")]
    Argument(String),

    #[error("failed to parse transaction input: {0}")]
    Json(String),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
