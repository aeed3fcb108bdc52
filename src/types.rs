use regex::Regex;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::enums::{ReservedKey, RuleKind};
use crate::error::ConfigError;

/// Sentinel leaf value that removes a key during [`Config::merged`].
pub const DELETE_MARKER: &str = "delete";

/// Field name → the rule that first failed for it.
pub type ErrorMap = BTreeMap<String, RuleKind>;

/// Field name → rule name → message template.
pub type MessageTable = HashMap<String, HashMap<String, String>>;

// ─── Rule ───────────────────────────────────────────────────────────────────

/// A compiled `pattern` rule parameter.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Pattern {
            source: source.to_string(),
            regex: Regex::new(source)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Bound for `minDate` / `maxDate`.
///
/// A string parameter names another field whose current value is the bound;
/// anything else is a literal bound.
#[derive(Clone, Debug, PartialEq)]
pub enum DateBound {
    Field(String),
    Literal(Value),
}

/// One rule with its typed parameter.
#[derive(Clone, Debug)]
pub enum Rule {
    Required(bool),
    /// The flag is carried for message formatting only; the check always runs.
    Integer(bool),
    EqualTo(String),
    Url(bool),
    Email(bool),
    Phone(bool),
    Uuid(bool),
    Pattern(Pattern),
    Min(Value),
    Max(Value),
    Range(Value, Value),
    MinLength(usize),
    MaxLength(usize),
    RangeLength(usize, usize),
    MinDate(DateBound),
    MaxDate(DateBound),
    /// Passes when at least one nested rule passes.
    Or(Vec<Rule>),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required(_) => RuleKind::Required,
            Rule::Integer(_) => RuleKind::Integer,
            Rule::EqualTo(_) => RuleKind::EqualTo,
            Rule::Url(_) => RuleKind::Url,
            Rule::Email(_) => RuleKind::Email,
            Rule::Phone(_) => RuleKind::Phone,
            Rule::Uuid(_) => RuleKind::Uuid,
            Rule::Pattern(_) => RuleKind::Pattern,
            Rule::Min(_) => RuleKind::Min,
            Rule::Max(_) => RuleKind::Max,
            Rule::Range(..) => RuleKind::Range,
            Rule::MinLength(_) => RuleKind::MinLength,
            Rule::MaxLength(_) => RuleKind::MaxLength,
            Rule::RangeLength(..) => RuleKind::RangeLength,
            Rule::MinDate(_) => RuleKind::MinDate,
            Rule::MaxDate(_) => RuleKind::MaxDate,
            Rule::Or(_) => RuleKind::Or,
        }
    }

    /// The rule parameter in its configuration form. Used to fill message
    /// placeholders.
    pub fn parameter(&self) -> Value {
        match self {
            Rule::Required(b)
            | Rule::Integer(b)
            | Rule::Url(b)
            | Rule::Email(b)
            | Rule::Phone(b)
            | Rule::Uuid(b) => Value::Bool(*b),
            Rule::EqualTo(field) => Value::String(field.clone()),
            Rule::Pattern(p) => Value::String(p.as_str().to_string()),
            Rule::Min(v) | Rule::Max(v) => v.clone(),
            Rule::Range(lo, hi) => Value::Array(vec![lo.clone(), hi.clone()]),
            Rule::MinLength(n) | Rule::MaxLength(n) => Value::from(*n),
            Rule::RangeLength(lo, hi) => Value::Array(vec![Value::from(*lo), Value::from(*hi)]),
            Rule::MinDate(bound) | Rule::MaxDate(bound) => match bound {
                DateBound::Field(field) => Value::String(field.clone()),
                DateBound::Literal(v) => v.clone(),
            },
            Rule::Or(rules) => Value::Object(
                rules
                    .iter()
                    .map(|r| (r.kind().as_str().to_string(), r.parameter()))
                    .collect(),
            ),
        }
    }

    /// Builds a rule from one `name: parameter` entry of a field's mapping.
    pub fn from_entry(field: &str, name: &str, param: &Value) -> Result<Rule, ConfigError> {
        let kind = RuleKind::from_name(name).ok_or_else(|| ConfigError::UnsupportedRule {
            field: field.to_string(),
            rule: name.to_string(),
        })?;

        let rule = match kind {
            RuleKind::Required => Rule::Required(expect_bool(field, name, param)?),
            RuleKind::Integer => Rule::Integer(expect_bool(field, name, param)?),
            RuleKind::Url => Rule::Url(expect_bool(field, name, param)?),
            RuleKind::Email => Rule::Email(expect_bool(field, name, param)?),
            RuleKind::Phone => Rule::Phone(expect_bool(field, name, param)?),
            RuleKind::Uuid => Rule::Uuid(expect_bool(field, name, param)?),
            RuleKind::EqualTo => Rule::EqualTo(expect_str(field, name, param)?.to_string()),
            RuleKind::Pattern => {
                let source = expect_str(field, name, param)?;
                let pattern = Pattern::new(source).map_err(|e| {
                    ConfigError::invalid_parameter(field, name, format!("invalid regex: {}", e))
                })?;
                Rule::Pattern(pattern)
            }
            RuleKind::Min => Rule::Min(expect_scalar(field, name, param)?),
            RuleKind::Max => Rule::Max(expect_scalar(field, name, param)?),
            RuleKind::Range => {
                let (lo, hi) = expect_pair(field, name, param)?;
                Rule::Range(
                    expect_scalar(field, name, lo)?,
                    expect_scalar(field, name, hi)?,
                )
            }
            RuleKind::MinLength => Rule::MinLength(expect_length(field, name, param)?),
            RuleKind::MaxLength => Rule::MaxLength(expect_length(field, name, param)?),
            RuleKind::RangeLength => {
                let (lo, hi) = expect_pair(field, name, param)?;
                Rule::RangeLength(
                    expect_length(field, name, lo)?,
                    expect_length(field, name, hi)?,
                )
            }
            RuleKind::MinDate => Rule::MinDate(date_bound(field, name, param)?),
            RuleKind::MaxDate => Rule::MaxDate(date_bound(field, name, param)?),
            RuleKind::Or => {
                let nested = param.as_object().ok_or_else(|| {
                    ConfigError::invalid_parameter(field, name, "expected a mapping of rules")
                })?;
                let rules = nested
                    .iter()
                    .map(|(sub_name, sub_param)| Rule::from_entry(field, sub_name, sub_param))
                    .collect::<Result<Vec<_>, _>>()?;
                Rule::Or(rules)
            }
        };
        Ok(rule)
    }
}

fn expect_bool(field: &str, rule: &str, param: &Value) -> Result<bool, ConfigError> {
    param
        .as_bool()
        .ok_or_else(|| ConfigError::invalid_parameter(field, rule, "expected a boolean"))
}

fn expect_str<'a>(field: &str, rule: &str, param: &'a Value) -> Result<&'a str, ConfigError> {
    param
        .as_str()
        .ok_or_else(|| ConfigError::invalid_parameter(field, rule, "expected a string"))
}

fn expect_scalar(field: &str, rule: &str, param: &Value) -> Result<Value, ConfigError> {
    match param {
        Value::Number(_) | Value::String(_) => Ok(param.clone()),
        _ => Err(ConfigError::invalid_parameter(
            field,
            rule,
            "expected a number or string bound",
        )),
    }
}

fn expect_length(field: &str, rule: &str, param: &Value) -> Result<usize, ConfigError> {
    param
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ConfigError::invalid_parameter(field, rule, "expected a non-negative integer"))
}

fn expect_pair<'a>(
    field: &str,
    rule: &str,
    param: &'a Value,
) -> Result<(&'a Value, &'a Value), ConfigError> {
    match param.as_array().map(Vec::as_slice) {
        Some([lo, hi]) => Ok((lo, hi)),
        _ => Err(ConfigError::invalid_parameter(
            field,
            rule,
            "expected a two-element array",
        )),
    }
}

fn date_bound(field: &str, rule: &str, param: &Value) -> Result<DateBound, ConfigError> {
    match param {
        Value::String(reference) => Ok(DateBound::Field(reference.clone())),
        Value::Number(_) => Ok(DateBound::Literal(param.clone())),
        _ => Err(ConfigError::invalid_parameter(
            field,
            rule,
            "expected a field name or a numeric bound",
        )),
    }
}

// ─── FieldRules ─────────────────────────────────────────────────────────────

/// Everything configured for one field.
#[derive(Clone, Debug, Default)]
pub struct FieldRules {
    /// Rules in declaration order.
    pub rules: Vec<Rule>,
    /// Path that receives the rendered error text.
    pub error_state: Option<String>,
    /// Field whose value `false` disables validation of this field.
    pub depend: Option<String>,
}

impl FieldRules {
    pub fn from_value(field: &str, value: &Value) -> Result<FieldRules, ConfigError> {
        let entries = value.as_object().ok_or_else(|| {
            ConfigError::invalid_shape(&format!("rules.{}", field), "expected a mapping")
        })?;

        let mut out = FieldRules::default();
        for (name, param) in entries {
            match ReservedKey::from_name(name) {
                Some(ReservedKey::ErrorState) => {
                    out.error_state = Some(expect_str(field, name, param)?.to_string());
                }
                Some(ReservedKey::Depend) => {
                    out.depend = Some(expect_str(field, name, param)?.to_string());
                }
                None => out.rules.push(Rule::from_entry(field, name, param)?),
            }
        }
        Ok(out)
    }

    /// True when the field carries `required: true`.
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(true)))
    }

    pub fn rule(&self, kind: RuleKind) -> Option<&Rule> {
        self.rules.iter().find(|r| r.kind() == kind)
    }
}

// ─── Config ─────────────────────────────────────────────────────────────────

/// An immutable validation configuration.
///
/// Keeps the source document alongside the parsed rules so that a partial
/// update can be merged into it and re-parsed as a whole.
#[derive(Clone, Debug)]
pub struct Config {
    source: Value,
    fields: Vec<(String, FieldRules)>,
    messages: MessageTable,
}

impl Config {
    /// Parses `{ rules: {...}, messages?: {...} }`.
    pub fn from_value(source: Value) -> Result<Config, ConfigError> {
        let root = source
            .as_object()
            .ok_or_else(|| ConfigError::invalid_shape("", "expected a mapping"))?;

        let mut fields = Vec::new();
        match root.get("rules") {
            None => {}
            Some(Value::Object(rules)) => {
                for (field, value) in rules {
                    fields.push((field.clone(), FieldRules::from_value(field, value)?));
                }
            }
            Some(_) => return Err(ConfigError::invalid_shape("rules", "expected a mapping")),
        }

        let messages = match root.get("messages") {
            None | Some(Value::Null) => MessageTable::new(),
            Some(Value::Object(table)) => parse_messages(table)?,
            Some(_) => return Err(ConfigError::invalid_shape("messages", "expected a mapping")),
        };

        Ok(Config {
            source,
            fields,
            messages,
        })
    }

    /// Returns a new configuration with `patch` deep-merged into this one.
    ///
    /// Objects merge recursively, arrays merge by index, everything else
    /// overwrites. Afterwards every object entry whose value is
    /// [`DELETE_MARKER`] is removed.
    pub fn merged(&self, patch: &Value) -> Result<Config, ConfigError> {
        let mut source = self.source.clone();
        deep_merge(&mut source, patch);
        strip_delete_markers(&mut source);
        Config::from_value(source)
    }

    pub fn source(&self) -> &Value {
        &self.source
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&FieldRules> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rules)| rules)
    }

    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// Custom message override for a field/rule pair.
    pub fn custom_message(&self, field: &str, kind: RuleKind) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|per_rule| per_rule.get(kind.as_str()))
            .map(String::as_str)
    }
}

fn parse_messages(table: &Map<String, Value>) -> Result<MessageTable, ConfigError> {
    let mut out = MessageTable::new();
    for (field, per_rule) in table {
        let path = format!("messages.{}", field);
        let per_rule = per_rule
            .as_object()
            .ok_or_else(|| ConfigError::invalid_shape(&path, "expected a mapping"))?;
        let mut templates = HashMap::new();
        for (rule, template) in per_rule {
            let template = template.as_str().ok_or_else(|| {
                ConfigError::invalid_shape(&format!("{}.{}", path, rule), "expected a string")
            })?;
            templates.insert(rule.clone(), template.to_string());
        }
        out.insert(field.clone(), templates);
    }
    Ok(out)
}

fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(patch)) => {
            for (index, value) in patch.iter().enumerate() {
                match target.get_mut(index) {
                    Some(existing) => deep_merge(existing, value),
                    None => target.push(value.clone()),
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

fn strip_delete_markers(value: &mut Value) {
    if let Value::Object(map) = value {
        map.retain(|_, v| v.as_str() != Some(DELETE_MARKER));
        for child in map.values_mut() {
            strip_delete_markers(child);
        }
    }
}
