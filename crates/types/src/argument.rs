use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::Address;
use crate::amount::TokenAmount;
use crate::error::{Error, Result};

/// A transaction argument in JSON-Cadence form.
///
/// Serializes to compact `{"type":..,"value":..}` JSON with `type` first.
/// Integer kinds carry their value as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Argument {
    String(String),
    Bool(bool),
    #[serde(with = "decimal_string")]
    UInt8(u8),
    #[serde(with = "decimal_string")]
    UInt16(u16),
    #[serde(with = "decimal_string")]
    UInt32(u32),
    #[serde(with = "decimal_string")]
    UInt64(u64),
    UFix64(TokenAmount),
    Address(Address),
    Optional(Option<Box<Argument>>),
    Array(Vec<Argument>),
}

impl Argument {
    /// Serialize to the opaque byte form the transaction encoder consumes.
    pub fn encode(&self) -> Result<EncodedArgument> {
        serde_json::to_vec(self)
            .map(EncodedArgument)
            .map_err(|e| Error::Argument(e.to_string()))
    }
}

/// The pre-serialized byte form of one argument.
///
/// The transaction encoder treats these bytes as opaque; they may come from
/// [`Argument::encode`] or from any external serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedArgument(Vec<u8>);

impl EncodedArgument {
    pub fn from_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Check that `value` is a well-formed JSON-Cadence argument, then keep
    /// it as the caller wrote it: compact, keys in their original order,
    /// scalar text untouched (`"1.00000000"` stays as is).
    pub fn from_json_value(value: &Value) -> Result<Self> {
        Argument::deserialize(value).map_err(|e| Error::Argument(e.to_string()))?;
        serde_json::to_vec(value)
            .map(Self)
            .map_err(|e| Error::Argument(e.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl TryFrom<&Argument> for EncodedArgument {
    type Error = Error;

    fn try_from(argument: &Argument) -> Result<Self> {
        argument.encode()
    }
}

mod decimal_string {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
