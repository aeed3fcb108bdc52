//! The validation engine.
//!
//! A [`Validator`] owns the current configuration, the error map and the
//! active set, and drives rule evaluation for the fields of one host state.
//! Each pass records at most one failing rule per field and writes the
//! rendered message to the field's `errorState` path.

use crate::error::ConfigError;
use crate::evaluate::{StateReader, StateWriter, first_failure};
use crate::messages::render_message;
use crate::primitives::is_empty_value;
use crate::types::{Config, ErrorMap, FieldRules};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Stateful validation engine over a host `H`.
pub struct Validator<H> {
    host: H,
    config: Arc<Config>,
    errors: ErrorMap,
    active: HashMap<String, bool>,
}

impl<H: StateReader + StateWriter> Validator<H> {
    /// Creates an engine. Every configured field starts inactive.
    pub fn new(config: Config, host: H) -> Self {
        let active = config
            .field_names()
            .map(|field| (field.to_string(), false))
            .collect();
        Validator {
            host,
            config: Arc::new(config),
            errors: ErrorMap::new(),
            active,
        }
    }

    /// Parses `config` and creates an engine.
    pub fn from_value(config: Value, host: H) -> Result<Self, ConfigError> {
        Ok(Validator::new(Config::from_value(config)?, host))
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Errors recorded so far, one rule per field.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Rendered messages for every recorded error.
    pub fn error_messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .filter_map(|(field, kind)| {
                let rule = self.config.field(field)?.rule(*kind)?;
                Some((field.clone(), render_message(&self.config, field, rule)))
            })
            .collect()
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.active.get(field).copied().unwrap_or(false)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // ─── Public operations ──────────────────────────────────────────────────

    /// Activates `fields` (all configured fields when empty) and validates
    /// them.
    pub fn validate(&mut self, fields: &[&str]) -> Option<ErrorMap> {
        let targets = self.targets(fields);
        self.activate(&targets);
        self.run_pass(&targets)
    }

    /// Validates `fields` (all configured fields when empty) without touching
    /// the active set.
    pub fn validate_fields(&mut self, fields: &[&str]) -> Option<ErrorMap> {
        let targets = self.targets(fields);
        self.run_pass(&targets)
    }

    /// Validates only the fields among `fields` that are already active.
    ///
    /// Returns `None` without touching any state when none are active.
    pub fn validate_when_active(&mut self, fields: &[&str]) -> Option<ErrorMap> {
        let targets: Vec<String> = self
            .targets(fields)
            .into_iter()
            .filter(|field| self.is_active(field))
            .collect();
        if targets.is_empty() {
            return None;
        }
        self.run_pass(&targets)
    }

    /// Activates and validates the fields among `fields` that hold a
    /// non-empty value and are not active yet.
    ///
    /// Returns `None` without touching any state when there are none.
    pub fn activate_validator(&mut self, fields: &[&str]) -> Option<ErrorMap> {
        let targets: Vec<String> = self
            .targets(fields)
            .into_iter()
            .filter(|field| {
                !self.is_active(field) && !is_empty_value(self.host.read(field).as_ref())
            })
            .collect();
        if targets.is_empty() {
            return None;
        }
        self.activate(&targets);
        self.run_pass(&targets)
    }

    /// Merges `patch` into the configuration and swaps it in.
    ///
    /// Leaves set to `"delete"` remove the corresponding entry. On error the
    /// current configuration stays in force. Activation is never revoked, so
    /// a field that is removed and declared again comes back active.
    pub fn set_config(&mut self, patch: &Value) -> Result<(), ConfigError> {
        let next = self.config.merged(patch)?;

        for field in next.field_names() {
            self.active.entry(field.to_string()).or_insert(false);
        }
        self.errors.retain(|field, _| next.field(field).is_some());

        debug!(fields = self.active.len(), "validation configuration replaced");
        self.config = Arc::new(next);
        Ok(())
    }

    // ─── Internals ──────────────────────────────────────────────────────────

    fn targets(&self, fields: &[&str]) -> Vec<String> {
        if fields.is_empty() {
            return self.config.field_names().map(str::to_string).collect();
        }

        fields
            .iter()
            .filter(|field| {
                let known = self.config.field(field).is_some();
                if !known {
                    warn!(field = %field, "ignoring field without configured rules");
                }
                known
            })
            .map(|field| field.to_string())
            .collect()
    }

    fn activate(&mut self, fields: &[String]) {
        for field in fields {
            self.active.insert(field.clone(), true);
        }
        debug!(count = fields.len(), "fields activated");
    }

    fn run_pass(&mut self, fields: &[String]) -> Option<ErrorMap> {
        let config = Arc::clone(&self.config);

        for field in fields {
            self.errors.remove(field);
        }

        for field in fields {
            let Some(rules) = config.field(field) else {
                continue;
            };
            if let Some(path) = &rules.error_state {
                self.host.write(path, Value::String(String::new()));
            }
            self.validate_field(&config, field, rules);
        }

        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.clone())
        }
    }

    fn validate_field(&mut self, config: &Config, field: &str, rules: &FieldRules) {
        let value = self.host.read(field);

        if !rules.is_required() && is_empty_value(value.as_ref()) {
            trace!(field, "optional field is empty, skipping");
            return;
        }

        if let Some(dependency) = &rules.depend
            && self.host.read(dependency) == Some(Value::Bool(false))
        {
            trace!(field, dependency = %dependency, "dependency is off, skipping");
            return;
        }

        let Some(rule) = first_failure(&rules.rules, value.as_ref(), &self.host) else {
            return;
        };

        debug!(field, rule = %rule.kind(), "field failed validation");
        self.errors.insert(field.to_string(), rule.kind());

        if let Some(path) = &rules.error_state {
            let message = render_message(config, field, rule);
            self.host.write(path, Value::String(message));
        }
    }
}
