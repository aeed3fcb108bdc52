use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Produced when a configuration value cannot be turned into a rule set.
///
/// Field validation failures are never reported through this type; they are
/// ordinary output collected in an [`ErrorMap`](crate::types::ErrorMap).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field names a rule outside the supported set.
    #[error("field '{field}': unsupported rule '{rule}'")]
    UnsupportedRule { field: String, rule: String },

    /// A known rule carries a parameter of the wrong shape.
    #[error("field '{field}': invalid parameter for '{rule}': {message}")]
    InvalidParameter {
        field: String,
        rule: String,
        message: String,
    },

    /// The configuration document itself is not shaped as expected.
    #[error("invalid configuration at '{path}': {message}")]
    InvalidShape { path: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid_parameter(field: &str, rule: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            field: field.to_string(),
            rule: rule.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_shape(path: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidShape {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    Config,
}

/// Produced by [`parse_config`](crate::parse::parse_config) when the input is
/// not a usable configuration document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[source]
    pub config: Option<ConfigError>,
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError {
            kind: ParseErrorKind::Config,
            message: err.to_string(),
            config: Some(err),
        }
    }
}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SerializeError {
    pub message: String,
}
