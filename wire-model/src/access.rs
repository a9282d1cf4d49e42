use serde_json::Value;
use std::fmt;
use wire_types::{Error, FieldId, Result};

/// Read access shared by every field variant.
///
/// Only [`get`](FieldAccess::get) is required. Everything else is derived
/// from it, so a variant that overrides `get` for a key gets consistent
/// answers from the typed helpers too.
pub trait FieldAccess: fmt::Debug + Send + Sync {
    /// Returns the value of an attribute, or `Value::Null` when unset.
    fn get(&self, key: &str) -> Value;

    /// Like `get`, but an unset attribute is an error.
    fn require(&self, key: &str) -> Result<Value> {
        match self.get(key) {
            Value::Null => Err(Error::UnknownAttribute(key.to_string())),
            value => Ok(value),
        }
    }

    /// The field id. `FieldId::NULL` for a field that does not exist.
    fn id(&self) -> FieldId {
        FieldId::from_value(&self.get("id"))
    }

    /// The field name. Empty for a field that does not exist.
    fn name(&self) -> String {
        match self.get("name") {
            Value::String(name) => name,
            _ => String::new(),
        }
    }

    /// True when this is a real, persisted field.
    fn exists(&self) -> bool {
        !self.id().is_null()
    }

    /// String attribute, if set and a string.
    fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean attribute, if set and a boolean.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).as_bool()
    }

    /// Numeric attribute, if set and a number.
    fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).as_f64()
    }
}
