//! Built-in message table and message selection.
//!
//! The engine renders messages from typed [`Rule`]s through
//! [`render_message`]. Hosts that only hold a rule's configuration name, such
//! as one taken from a serialized [`ErrorMap`](crate::types::ErrorMap) or a
//! form definition, use [`lookup_default`] and [`render_named`] instead. Those
//! accept any name and fall back to [`FALLBACK_MESSAGE`] for names that are not
//! rules.

use crate::enums::RuleKind;
use crate::primitives::format_message;
use crate::types::{Config, Rule};

/// Returned by [`render_named`] when neither a custom override nor a default
/// exists for a rule name.
pub const FALLBACK_MESSAGE: &str = "Invalid input";

/// Default message template for a rule.
pub fn default_message(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::Required => "This field is required.",
        RuleKind::Email => "Please enter a valid email address.",
        RuleKind::Url => "Please enter a valid URL.",
        RuleKind::EqualTo => "Please enter the same value again.",
        RuleKind::MinLength => "Please enter at least {0} characters.",
        RuleKind::MaxLength => "Please enter no more than {0} characters.",
        RuleKind::RangeLength => "Please enter a value between {0} and {1} characters long.",
        RuleKind::Min => "Please enter a value greater than or equal to {0}.",
        RuleKind::Max => "Please enter a value less than or equal to {0}.",
        RuleKind::Range => "Please enter a value between {0} and {1}.",
        RuleKind::Integer => "Please enter a integer.",
        RuleKind::Phone => "Please enter phone number",
        RuleKind::Or => "You didn't match any format",
        RuleKind::Uuid => "Please enter a valid UUID",
        RuleKind::Pattern => "Please enter a valid data",
        RuleKind::MinDate | RuleKind::MaxDate => "Date is invalid",
    }
}

/// Default template looked up by configuration name, `None` for names that
/// are not rules.
pub fn lookup_default(rule_name: &str) -> Option<&'static str> {
    RuleKind::from_name(rule_name).map(default_message)
}

/// Renders the message for `rule` failing on `field`.
///
/// Precedence: the field's custom override, then the built-in default.
pub fn render_message(config: &Config, field: &str, rule: &Rule) -> String {
    let kind = rule.kind();
    let template = config
        .custom_message(field, kind)
        .unwrap_or_else(|| default_message(kind));
    format_message(template, &rule.parameter())
}

/// Renders a message for a rule given only by name.
///
/// A custom override under `rule_name` wins even when the name is not a
/// rule. Otherwise the built-in default is used, filled with the field's
/// configured parameter when the field declares that rule. Unknown names
/// without an override render [`FALLBACK_MESSAGE`].
pub fn render_named(config: &Config, field: &str, rule_name: &str) -> String {
    let parameter = config
        .field(field)
        .and_then(|rules| RuleKind::from_name(rule_name).and_then(|kind| rules.rule(kind)))
        .map(Rule::parameter);

    let custom = config
        .messages()
        .get(field)
        .and_then(|per_rule| per_rule.get(rule_name))
        .map(String::as_str);

    match custom.or_else(|| lookup_default(rule_name)) {
        Some(template) => match parameter {
            Some(parameter) => format_message(template, &parameter),
            None => template.to_string(),
        },
        None => FALLBACK_MESSAGE.to_string(),
    }
}
