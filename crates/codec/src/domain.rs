//! Domain-separation tags and the two typed signable messages.
//!
//! A payload message and an envelope message are different types, and each
//! starts with its own 32-byte tag, so bytes signed in one context are never
//! valid in the other.

use std::fmt;

use crate::error::ConfigError;

pub const DOMAIN_TAG_LEN: usize = 32;

pub const DEFAULT_PAYLOAD_TAG: &str = "FLOW-V0.0-transaction";
pub const DEFAULT_ENVELOPE_TAG: &str = "FLOW-V0.0-envelope";

const fn right_padded(label: &[u8]) -> [u8; DOMAIN_TAG_LEN] {
    let mut out = [0u8; DOMAIN_TAG_LEN];
    let mut i = 0;
    while i < label.len() {
        out[i] = label[i];
        i += 1;
    }
    out
}

/// A UTF-8 label right-padded with zero bytes to 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainTag([u8; DOMAIN_TAG_LEN]);

impl DomainTag {
    pub fn new(label: &str) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();
        check_label("domain tag", label, &mut errors);
        if !errors.is_empty() {
            return Err(ConfigError::ValidationFailed(errors));
        }
        Ok(Self(right_padded(label.as_bytes())))
    }

    pub fn as_bytes(&self) -> &[u8; DOMAIN_TAG_LEN] {
        &self.0
    }

    /// The label without its zero padding.
    pub fn label(&self) -> &str {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        std::str::from_utf8(&self.0[..end]).unwrap_or_default()
    }
}

impl fmt::Debug for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainTag({:?})", self.label())
    }
}

pub(crate) fn check_label(name: &str, label: &str, errors: &mut Vec<String>) {
    if label.is_empty() {
        errors.push(format!("{name} cannot be empty"));
    }
    if label.len() > DOMAIN_TAG_LEN {
        errors.push(format!(
            "{name} is {} bytes, longer than {DOMAIN_TAG_LEN}",
            label.len()
        ));
    }
    if label.as_bytes().contains(&0) {
        errors.push(format!("{name} cannot contain NUL bytes"));
    }
}

/// The pair of tags an encoder applies. The two are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainTags {
    payload: DomainTag,
    envelope: DomainTag,
}

impl DomainTags {
    pub fn new(payload: &str, envelope: &str) -> Result<Self, ConfigError> {
        let mut errors = Vec::new();
        check_label("payload domain tag", payload, &mut errors);
        check_label("envelope domain tag", envelope, &mut errors);
        if payload == envelope {
            errors.push("payload and envelope domain tags must differ".to_string());
        }
        if !errors.is_empty() {
            return Err(ConfigError::ValidationFailed(errors));
        }

        tracing::trace!(payload, envelope, "domain tags configured");
        Ok(Self {
            payload: DomainTag(right_padded(payload.as_bytes())),
            envelope: DomainTag(right_padded(envelope.as_bytes())),
        })
    }

    pub fn payload(&self) -> &DomainTag {
        &self.payload
    }

    pub fn envelope(&self) -> &DomainTag {
        &self.envelope
    }
}

impl Default for DomainTags {
    fn default() -> Self {
        Self {
            payload: DomainTag(right_padded(DEFAULT_PAYLOAD_TAG.as_bytes())),
            envelope: DomainTag(right_padded(DEFAULT_ENVELOPE_TAG.as_bytes())),
        }
    }
}

macro_rules! signable_message {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(Vec<u8>);

        impl $name {
            pub(crate) fn new(tag: &DomainTag, rlp: &[u8]) -> Self {
                let mut bytes = Vec::with_capacity(DOMAIN_TAG_LEN + rlp.len());
                bytes.extend_from_slice(tag.as_bytes());
                bytes.extend_from_slice(rlp);
                Self(bytes)
            }

            /// Tag followed by the RLP body: the exact bytes to sign.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn into_bytes(self) -> Vec<u8> {
                self.0
            }

            pub fn domain_tag(&self) -> &[u8] {
                &self.0[..DOMAIN_TAG_LEN]
            }

            /// The RLP body without the domain tag.
            pub fn body(&self) -> &[u8] {
                &self.0[DOMAIN_TAG_LEN..]
            }

            /// Lowercase hex, no prefix.
            pub fn to_hex(&self) -> String {
                hex::encode(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.to_hex())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

signable_message!(
    /// Bytes signed by proposer, authorizers and (first) the payer.
    PayloadMessage
);

signable_message!(
    /// Bytes signed by the payer to seal the transaction.
    EnvelopeMessage
);
