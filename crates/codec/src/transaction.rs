use flow_tx_types::{PayloadSignature, Result, Transaction};

use crate::canonical::{write_address, write_identifier};
use crate::config::EncoderConfig;
use crate::domain::{DomainTags, EnvelopeMessage, PayloadMessage};
use crate::error::ConfigError;
use crate::rlp;

/// RLP list of the payload fields. Field order is CONSENSUS-RELEVANT.
///
/// Both encodings call this; the envelope never reuses a payload result.
fn payload_list(tx: &Transaction) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(tx.script.len() + 256);
    rlp::write_bytes(&mut body, tx.script.as_bytes())?;

    let mut arguments = Vec::new();
    for argument in &tx.arguments {
        rlp::write_bytes(&mut arguments, argument.as_bytes())?;
    }
    rlp::write_list(&mut body, &arguments)?;

    write_identifier(&mut body, &tx.reference_block_id)?;
    rlp::write_uint(&mut body, tx.gas_limit)?;
    write_address(&mut body, &tx.proposal_key.address)?;
    rlp::write_uint(&mut body, tx.proposal_key.key_id)?;
    rlp::write_uint(&mut body, tx.proposal_key.sequence_number)?;
    write_address(&mut body, &tx.payer)?;

    let mut authorizers = Vec::with_capacity(tx.authorizers.len() * 9);
    for authorizer in &tx.authorizers {
        write_address(&mut authorizers, authorizer)?;
    }
    rlp::write_list(&mut body, &authorizers)?;

    let mut out = Vec::with_capacity(body.len() + 9);
    rlp::write_list(&mut out, &body)?;
    Ok(out)
}

/// RLP list of `[address, key_id, signature]` entries in the order given.
fn signature_list(signatures: &[PayloadSignature]) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    for sig in signatures {
        let mut entry = Vec::with_capacity(sig.signature.len() + 20);
        write_address(&mut entry, &sig.address)?;
        rlp::write_uint(&mut entry, sig.key_id)?;
        rlp::write_bytes(&mut entry, &sig.signature)?;
        rlp::write_list(&mut body, &entry)?;
    }

    let mut out = Vec::with_capacity(body.len() + 9);
    rlp::write_list(&mut out, &body)?;
    Ok(out)
}

/// Encodes transactions under a fixed pair of domain tags.
///
/// Holds no state between calls and can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionEncoder {
    tags: DomainTags,
}

impl TransactionEncoder {
    pub fn new(tags: DomainTags) -> Self {
        Self { tags }
    }

    pub fn from_config(config: &EncoderConfig) -> std::result::Result<Self, ConfigError> {
        config.domain_tags().map(Self::new)
    }

    pub fn tags(&self) -> &DomainTags {
        &self.tags
    }

    /// Payload tag followed by
    /// `[script, [arguments], reference_block_id, gas_limit, proposal address,
    /// proposal key id, sequence number, payer, [authorizers]]`.
    ///
    /// Script text is never inspected.
    pub fn encode_payload(&self, tx: &Transaction) -> Result<PayloadMessage> {
        let encoded = payload_list(tx)?;
        let message = PayloadMessage::new(self.tags.payload(), &encoded);

        tracing::debug!(
            script_len = tx.script.len(),
            arguments = tx.arguments.len(),
            authorizers = tx.authorizers.len(),
            encoded_len = message.as_bytes().len(),
            "encoded transaction payload"
        );
        Ok(message)
    }

    /// Envelope tag followed by `[payload_list, [signatures]]`.
    ///
    /// Signatures keep the caller's order; no sorting or deduplication.
    pub fn encode_envelope(&self, tx: &Transaction) -> Result<EnvelopeMessage> {
        let mut body = payload_list(tx)?;
        body.extend_from_slice(&signature_list(&tx.payload_signatures)?);

        let mut encoded = Vec::with_capacity(body.len() + 9);
        rlp::write_list(&mut encoded, &body)?;
        let message = EnvelopeMessage::new(self.tags.envelope(), &encoded);

        tracing::debug!(
            script_len = tx.script.len(),
            arguments = tx.arguments.len(),
            authorizers = tx.authorizers.len(),
            signatures = tx.payload_signatures.len(),
            encoded_len = message.as_bytes().len(),
            "encoded transaction envelope"
        );
        Ok(message)
    }
}
