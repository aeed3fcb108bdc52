use crate::error::{ParseError, ParseErrorKind};
use crate::types::Config;

/// Parse a YAML (or JSON) configuration document into a [`Config`].
///
/// The document must be a single mapping with a `rules` key and an optional
/// `messages` key. Rule names and parameters are checked here, so a returned
/// `Config` is always usable by the engine.
pub fn parse_config(input: &str) -> Result<Config, ParseError> {
    if input.trim().is_empty() {
        return Err(syntax_error("empty input"));
    }

    check_multi_document(input)?;

    let value: serde_json::Value =
        serde_saphyr::from_str(input).map_err(|e| syntax_error(&e.to_string()))?;

    if !value.is_object() {
        return Err(syntax_error("configuration root must be a mapping"));
    }

    Ok(Config::from_value(value)?)
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0 to avoid false positives inside block scalars.
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for line in input.lines() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(syntax_error("multi-document YAML is not supported"));
            }
        }
    }
    Ok(())
}

fn syntax_error(message: &str) -> ParseError {
    ParseError {
        kind: ParseErrorKind::Syntax,
        message: message.to_string(),
        config: None,
    }
}
