//! Canonical encoding of Flow transactions and account keys.
//!
//! Payload and envelope encodings are domain-tagged RLP. Every function is
//! pure: identical input gives byte-identical output, and any failure aborts
//! the call without partial output.

pub mod account_key;
pub mod canonical;
pub mod config;
pub mod domain;
pub mod error;
pub mod rlp;
pub mod transaction;

pub use account_key::{account_key_argument, encode_account_key, encode_account_key_hex};
pub use canonical::encode_amount;
pub use config::{load_config, load_config_from_str, validate_config, EncoderConfig};
pub use domain::{
    DomainTag, DomainTags, EnvelopeMessage, PayloadMessage, DEFAULT_ENVELOPE_TAG,
    DEFAULT_PAYLOAD_TAG, DOMAIN_TAG_LEN,
};
pub use error::ConfigError;
pub use transaction::TransactionEncoder;

use flow_tx_types::{Result, Transaction};

/// Payload encoding under the default domain tags.
pub fn encode_payload(tx: &Transaction) -> Result<PayloadMessage> {
    TransactionEncoder::default().encode_payload(tx)
}

/// Envelope encoding under the default domain tags.
pub fn encode_envelope(tx: &Transaction) -> Result<EnvelopeMessage> {
    TransactionEncoder::default().encode_envelope(tx)
}
