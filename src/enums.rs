//! Closed enumerations used throughout the rule model.
//!
//! Rule names are a closed set: a configuration naming anything outside
//! [`RuleKind`] is rejected when it is parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every rule the evaluator knows how to apply.
///
/// Serialized with the camelCase names used in configuration documents
/// (`minLength`, `equalTo`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    Integer,
    EqualTo,
    Url,
    Email,
    Phone,
    Uuid,
    Pattern,
    Min,
    Max,
    Range,
    MinLength,
    MaxLength,
    RangeLength,
    MinDate,
    MaxDate,
    Or,
}

impl RuleKind {
    pub const ALL: [RuleKind; 17] = [
        RuleKind::Required,
        RuleKind::Integer,
        RuleKind::EqualTo,
        RuleKind::Url,
        RuleKind::Email,
        RuleKind::Phone,
        RuleKind::Uuid,
        RuleKind::Pattern,
        RuleKind::Min,
        RuleKind::Max,
        RuleKind::Range,
        RuleKind::MinLength,
        RuleKind::MaxLength,
        RuleKind::RangeLength,
        RuleKind::MinDate,
        RuleKind::MaxDate,
        RuleKind::Or,
    ];

    /// The configuration name of this rule.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Integer => "integer",
            RuleKind::EqualTo => "equalTo",
            RuleKind::Url => "url",
            RuleKind::Email => "email",
            RuleKind::Phone => "phone",
            RuleKind::Uuid => "uuid",
            RuleKind::Pattern => "pattern",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Range => "range",
            RuleKind::MinLength => "minLength",
            RuleKind::MaxLength => "maxLength",
            RuleKind::RangeLength => "rangeLength",
            RuleKind::MinDate => "minDate",
            RuleKind::MaxDate => "maxDate",
            RuleKind::Or => "or",
        }
    }

    /// Looks up a rule by its configuration name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<RuleKind> {
        RuleKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys inside a field's rule mapping that configure the field rather than
/// validate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservedKey {
    /// Path that receives the rendered error text.
    ErrorState,
    /// Field whose `false` value switches validation of this field off.
    Depend,
}

impl ReservedKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservedKey::ErrorState => "errorState",
            ReservedKey::Depend => "depend",
        }
    }

    pub fn from_name(name: &str) -> Option<ReservedKey> {
        match name {
            "errorState" => Some(ReservedKey::ErrorState),
            "depend" => Some(ReservedKey::Depend),
            _ => None,
        }
    }
}
