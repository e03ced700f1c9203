//! Encoder configuration, loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{check_label, DomainTags, DEFAULT_ENVELOPE_TAG, DEFAULT_PAYLOAD_TAG};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EncoderConfig {
    /// Label prepended (zero-padded to 32 bytes) to payload messages.
    pub payload_domain_tag: String,
    /// Label prepended (zero-padded to 32 bytes) to envelope messages.
    pub envelope_domain_tag: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            payload_domain_tag: DEFAULT_PAYLOAD_TAG.to_string(),
            envelope_domain_tag: DEFAULT_ENVELOPE_TAG.to_string(),
        }
    }
}

impl EncoderConfig {
    pub fn domain_tags(&self) -> Result<DomainTags, ConfigError> {
        DomainTags::new(&self.payload_domain_tag, &self.envelope_domain_tag)
    }
}

/// Validate the configuration, collecting every problem before failing.
pub fn validate_config(config: &EncoderConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    check_label("payload_domain_tag", &config.payload_domain_tag, &mut errors);
    check_label("envelope_domain_tag", &config.envelope_domain_tag, &mut errors);
    if config.payload_domain_tag == config.envelope_domain_tag {
        errors.push("payload_domain_tag and envelope_domain_tag must differ".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed(errors))
    }
}

/// Load and validate configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EncoderConfig, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    load_config_from_str(&content, &path_str)
}

/// Load and validate configuration from YAML text.
pub fn load_config_from_str(content: &str, source_name: &str) -> Result<EncoderConfig, ConfigError> {
    let config: EncoderConfig = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        path: source_name.to_string(),
        source: e,
    })?;

    validate_config(&config)?;
    tracing::trace!(
        source = source_name,
        payload_domain_tag = %config.payload_domain_tag,
        envelope_domain_tag = %config.envelope_domain_tag,
        "loaded encoder config"
    );

    Ok(config)
}
