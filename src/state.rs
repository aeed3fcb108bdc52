//! In-memory host state.

use crate::evaluate::{StateReader, StateWriter};
use crate::primitives::{resolve_path, write_path};
use serde_json::Value;
use std::fmt;

type Listener = Box<dyn FnMut(&Value)>;

/// A host state held as a JSON value.
///
/// Every [`StateWriter::write`] mutates the value in place and then hands the
/// whole state to the registered listener, once per write.
pub struct JsonState {
    value: Value,
    listener: Option<Listener>,
}

impl JsonState {
    pub fn new(value: Value) -> Self {
        JsonState {
            value,
            listener: None,
        }
    }

    /// Registers the callback that receives the state after each write.
    pub fn with_listener(mut self, listener: impl FnMut(&Value) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl Default for JsonState {
    fn default() -> Self {
        JsonState::new(Value::Object(serde_json::Map::new()))
    }
}

impl fmt::Debug for JsonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonState")
            .field("value", &self.value)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl StateReader for JsonState {
    fn read(&self, path: &str) -> Option<Value> {
        resolve_path(path, &self.value)
    }
}

impl StateWriter for JsonState {
    fn write(&mut self, path: &str, value: Value) {
        write_path(&mut self.value, path, value);
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.value);
        }
    }
}
