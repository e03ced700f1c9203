//! Data model for Flow transactions and account keys, plus the scalar
//! canonicalization that turns loose caller input into it.

pub mod address;
pub mod amount;
pub mod argument;
pub mod canonical;
pub mod error;
pub mod input;
pub mod transaction;

pub use address::{Address, Identifier};
pub use amount::TokenAmount;
pub use argument::{Argument, EncodedArgument};
pub use error::{EncodingError, Error, Result};
pub use input::{AccountKeyInput, PayloadSignatureInput, ProposalKeyInput, TransactionInput};
pub use transaction::{
    AccountKey, PayloadSignature, ProposalKey, Transaction, HASH_ALGO_SHA2_256,
    HASH_ALGO_SHA3_256, HASH_ALGO_UNKNOWN, SIGN_ALGO_ECDSA_P256, SIGN_ALGO_ECDSA_SECP256K1,
    SIGN_ALGO_UNKNOWN, WEIGHT_THRESHOLD,
};
