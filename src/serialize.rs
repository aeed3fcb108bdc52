//! [`Config`] → YAML serialization.

use crate::error::SerializeError;
use crate::types::Config;

/// Serialize a configuration to a YAML string.
///
/// Fields and rules are emitted in declaration order, so the output parses
/// back into an equivalent configuration.
pub fn serialize_config(config: &Config) -> Result<String, SerializeError> {
    serde_saphyr::to_string(config.source()).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}
