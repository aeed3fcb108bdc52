//! Rule evaluation.
//!
//! Evaluation is pure: it reads other fields through a [`StateReader`] and
//! returns a plain boolean. Nothing here can record errors or write state.

use crate::primitives::{
    coerce_to_string, compare_values, is_email, is_empty_value, is_phone, is_url, is_uuid,
    resolve_path, strict_equals, to_number, value_length,
};
use crate::types::{DateBound, Rule};
use serde_json::Value;
use std::cmp::Ordering;

// ─── Host capabilities ──────────────────────────────────────────────────────

/// Read access to the host state.
pub trait StateReader {
    /// Returns the value at a dot-path, or `None` if it does not resolve.
    fn read(&self, path: &str) -> Option<Value>;
}

/// Write access to the host state.
///
/// Implementations must publish every write to the state's owner before
/// returning.
pub trait StateWriter {
    fn write(&mut self, path: &str, value: Value);
}

impl StateReader for Value {
    fn read(&self, path: &str) -> Option<Value> {
        resolve_path(path, self)
    }
}

impl<T: StateReader + ?Sized> StateReader for &T {
    fn read(&self, path: &str) -> Option<Value> {
        (**self).read(path)
    }
}

// ─── evaluate_rule ──────────────────────────────────────────────────────────

/// Decides whether `value` satisfies `rule`.
///
/// `value` is `None` when the field is absent from the state. Comparisons that
/// cannot be made (absent bound, non-numeric operand, value without a length)
/// fail the rule.
pub fn evaluate_rule(rule: &Rule, value: Option<&Value>, state: &dyn StateReader) -> bool {
    match rule {
        Rule::Required(flag) => !(*flag && is_empty_value(value)),

        Rule::Integer(_) => {
            let n = to_number(value);
            n.is_finite() && n.fract() == 0.0
        }

        Rule::EqualTo(other) => strict_equals(state.read(other).as_ref(), value),

        Rule::Url(flag) => !*flag || is_url(&coerce_to_string(value)),
        Rule::Email(flag) => !*flag || is_email(&coerce_to_string(value)),
        Rule::Phone(flag) => !*flag || is_phone(&coerce_to_string(value)),
        Rule::Uuid(flag) => !*flag || is_uuid(&coerce_to_string(value)),

        // The matcher's answer is the rule's answer.
        Rule::Pattern(pattern) => pattern.is_match(&coerce_to_string(value)),

        Rule::Min(bound) => at_least(value, Some(bound)),
        Rule::Max(bound) => at_most(value, Some(bound)),
        Rule::Range(lo, hi) => at_least(value, Some(lo)) && at_most(value, Some(hi)),

        Rule::MinLength(min) => value_length(value).is_some_and(|len| len >= *min),
        Rule::MaxLength(max) => value_length(value).is_some_and(|len| len <= *max),
        Rule::RangeLength(min, max) => {
            value_length(value).is_some_and(|len| len >= *min && len <= *max)
        }

        Rule::MinDate(bound) => at_least(value, resolve_bound(bound, state).as_ref()),
        Rule::MaxDate(bound) => at_most(value, resolve_bound(bound, state).as_ref()),

        Rule::Or(rules) => evaluate_rules_any(rules, value, state),
    }
}

/// True when at least one rule passes. An empty list never passes.
pub fn evaluate_rules_any(rules: &[Rule], value: Option<&Value>, state: &dyn StateReader) -> bool {
    rules.iter().any(|rule| evaluate_rule(rule, value, state))
}

/// Returns the first rule in `rules` that `value` fails, in order.
pub fn first_failure<'a>(
    rules: &'a [Rule],
    value: Option<&Value>,
    state: &dyn StateReader,
) -> Option<&'a Rule> {
    rules.iter().find(|rule| !evaluate_rule(rule, value, state))
}

fn at_least(value: Option<&Value>, bound: Option<&Value>) -> bool {
    matches!(
        compare_values(value, bound),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

fn at_most(value: Option<&Value>, bound: Option<&Value>) -> bool {
    matches!(
        compare_values(value, bound),
        Some(Ordering::Less | Ordering::Equal)
    )
}

fn resolve_bound(bound: &DateBound, state: &dyn StateReader) -> Option<Value> {
    match bound {
        DateBound::Field(path) => state.read(path),
        DateBound::Literal(v) => Some(v.clone()),
    }
}
