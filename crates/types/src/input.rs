//! Loosely-typed input records, in the field names fixture generators use.
//!
//! Every field is optional at parse time. Converting a record into the typed
//! model is the only place where presence is checked and scalars are
//! canonicalized; nothing is defaulted except `payloadSignatures`, which may
//! be omitted for payload-only use.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::address::{Address, Identifier};
use crate::argument::EncodedArgument;
use crate::canonical::{decode_hex, narrow};
use crate::error::{Error, Result};
use crate::transaction::{AccountKey, PayloadSignature, ProposalKey, Transaction};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalKeyInput {
    pub address: Option<String>,
    pub key_id: Option<Number>,
    #[serde(alias = "sequenceNum")]
    pub sequence_number: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSignatureInput {
    pub address: Option<String>,
    pub key_id: Option<Number>,
    #[serde(alias = "sig")]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub script: Option<String>,
    /// JSON-Cadence values, passed through byte for byte once validated.
    pub arguments: Option<Vec<Value>>,
    #[serde(alias = "refBlock")]
    pub reference_block_id: Option<String>,
    pub gas_limit: Option<Number>,
    pub proposal_key: Option<ProposalKeyInput>,
    pub payer: Option<String>,
    pub authorizers: Option<Vec<String>>,
    #[serde(alias = "payloadSigs")]
    pub payload_signatures: Option<Vec<PayloadSignatureInput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountKeyInput {
    pub public_key: Option<String>,
    pub sign_algorithm: Option<Number>,
    pub hash_algorithm: Option<Number>,
    pub weight: Option<Number>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField(field))
}

fn hex_field(field: &'static str, s: &str) -> Result<Vec<u8>> {
    decode_hex(s).map_err(|e| Error::MalformedHex {
        field,
        reason: e.to_string(),
    })
}

impl TransactionInput {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Json(e.to_string()))
    }
}

impl TryFrom<ProposalKeyInput> for ProposalKey {
    type Error = Error;

    fn try_from(input: ProposalKeyInput) -> Result<Self> {
        let address: Address = required(input.address, "proposalKey.address")?.parse()?;
        let key_id = narrow("proposalKey.keyId", &required(input.key_id, "proposalKey.keyId")?)?;
        let sequence_number = narrow(
            "proposalKey.sequenceNumber",
            &required(input.sequence_number, "proposalKey.sequenceNumber")?,
        )?;
        Ok(Self {
            address,
            key_id,
            sequence_number,
        })
    }
}

impl TryFrom<PayloadSignatureInput> for PayloadSignature {
    type Error = Error;

    fn try_from(input: PayloadSignatureInput) -> Result<Self> {
        let address: Address = required(input.address, "payloadSignatures.address")?.parse()?;
        let key_id = narrow(
            "payloadSignatures.keyId",
            &required(input.key_id, "payloadSignatures.keyId")?,
        )?;
        let signature = hex_field(
            "payloadSignatures.signature",
            &required(input.signature, "payloadSignatures.signature")?,
        )?;
        Ok(Self {
            address,
            key_id,
            signature,
        })
    }
}

impl TryFrom<TransactionInput> for Transaction {
    type Error = Error;

    fn try_from(input: TransactionInput) -> Result<Self> {
        let script = required(input.script, "script")?;
        let arguments = required(input.arguments, "arguments")?
            .iter()
            .map(EncodedArgument::from_json_value)
            .collect::<Result<Vec<_>>>()?;
        let reference_block_id: Identifier =
            required(input.reference_block_id, "referenceBlockId")?.parse()?;
        let gas_limit = narrow("gasLimit", &required(input.gas_limit, "gasLimit")?)?;
        let proposal_key = required(input.proposal_key, "proposalKey")?.try_into()?;
        let payer: Address = required(input.payer, "payer")?.parse()?;
        let authorizers = required(input.authorizers, "authorizers")?
            .iter()
            .map(|a| a.parse())
            .collect::<Result<Vec<Address>>>()?;
        let payload_signatures = input
            .payload_signatures
            .unwrap_or_default()
            .into_iter()
            .map(PayloadSignature::try_from)
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(
            arguments = arguments.len(),
            authorizers = authorizers.len(),
            signatures = payload_signatures.len(),
            "built transaction from input record"
        );

        Ok(Self {
            script,
            arguments,
            reference_block_id,
            gas_limit,
            proposal_key,
            payer,
            authorizers,
            payload_signatures,
        })
    }
}

impl TryFrom<AccountKeyInput> for AccountKey {
    type Error = Error;

    fn try_from(input: AccountKeyInput) -> Result<Self> {
        let public_key = hex_field("publicKey", &required(input.public_key, "publicKey")?)?;
        let sign_algorithm = narrow(
            "signAlgorithm",
            &required(input.sign_algorithm, "signAlgorithm")?,
        )?;
        let hash_algorithm = narrow(
            "hashAlgorithm",
            &required(input.hash_algorithm, "hashAlgorithm")?,
        )?;
        let weight = narrow("weight", &required(input.weight, "weight")?)?;
        Ok(Self {
            public_key,
            sign_algorithm,
            hash_algorithm,
            weight,
        })
    }
}
