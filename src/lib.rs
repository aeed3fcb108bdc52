//! Declarative field validation for form-like state objects.
//!
//! A configuration maps field names to ordered rule sets. The engine reads
//! each field's value from a host state by dot-path, stops at the first rule
//! that fails, records that rule in its error map, and writes a rendered
//! message back into the host state:
//!
//! ```text
//! parse_config(yaml) → Config → Validator::new(config, host)
//!     validate(fields) → Option<ErrorMap>   (+ messages written to host)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use fieldrules::{JsonState, StateReader};
//! use serde_json::json;
//!
//! let yaml = r#"
//! rules:
//!   age:
//!     required: true
//!     min: 18
//!     errorState: errors.age
//! "#;
//!
//! let host = JsonState::new(json!({ "age": 15 }));
//! let mut validator = fieldrules::load(yaml, host).expect("valid config");
//!
//! let errors = validator.validate(&["age"]).expect("age is too low");
//! assert_eq!(errors["age"], fieldrules::RuleKind::Min);
//! assert_eq!(
//!     validator.host().read("errors.age"),
//!     Some(json!("Please enter a value greater than or equal to 18."))
//! );
//! ```

pub mod enums;
pub mod error;
pub mod evaluate;
pub mod messages;
pub mod parse;
pub mod primitives;
pub mod serialize;
pub mod state;
pub mod types;
pub mod validate;

pub use enums::RuleKind;
pub use error::*;
pub use evaluate::{StateReader, StateWriter};
pub use state::JsonState;
pub use types::*;
pub use validate::Validator;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse_config;
pub use serialize::serialize_config;

/// Convenience entry point: parse a YAML configuration and build a
/// [`Validator`] over `host`.
///
/// # Errors
///
/// Returns `Err(ParseError)` if the document is not valid YAML or names an
/// unsupported rule or a malformed parameter.
pub fn load<H>(input: &str, host: H) -> Result<Validator<H>, ParseError>
where
    H: StateReader + StateWriter,
{
    let config = parse::parse_config(input)?;
    Ok(Validator::new(config, host))
}
