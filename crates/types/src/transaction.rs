use crate::address::{Address, Identifier};
use crate::argument::EncodedArgument;

// Well-known algorithm codes. Naming aids only: any u8 value is encodable.
pub const SIGN_ALGO_UNKNOWN: u8 = 0;
pub const SIGN_ALGO_ECDSA_P256: u8 = 2;
pub const SIGN_ALGO_ECDSA_SECP256K1: u8 = 3;
pub const HASH_ALGO_UNKNOWN: u8 = 0;
pub const HASH_ALGO_SHA2_256: u8 = 1;
pub const HASH_ALGO_SHA3_256: u8 = 3;

/// Weight at which a single key can authorize on its own.
pub const WEIGHT_THRESHOLD: u16 = 1000;

/// The key whose sequence number orders this transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProposalKey {
    pub address: Address,
    pub key_id: u64,
    pub sequence_number: u64,
}

/// A signature over the payload encoding, collected before sealing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayloadSignature {
    pub address: Address,
    pub key_id: u64,
    pub signature: Vec<u8>,
}

/// A public key record that can be attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey {
    pub public_key: Vec<u8>,
    pub sign_algorithm: u8,
    pub hash_algorithm: u8,
    pub weight: u16,
}

/// A fully-typed transaction.
///
/// `payload_signatures` is empty when only the payload encoding is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transaction {
    pub script: String,
    pub arguments: Vec<EncodedArgument>,
    pub reference_block_id: Identifier,
    pub gas_limit: u64,
    pub proposal_key: ProposalKey,
    pub payer: Address,
    pub authorizers: Vec<Address>,
    pub payload_signatures: Vec<PayloadSignature>,
}
