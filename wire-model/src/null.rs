use serde_json::Value;
use wire_types::FieldId;

use crate::{Field, FieldAccess};

/// A field that does not exist.
///
/// Returned in place of a real [`Field`] when a lookup misses, so callers
/// can read attributes without checking for absence first. `id` always
/// reads as `0` and `name` as `""`, whatever the wrapped store holds; every
/// other key is answered by the wrapped field's generic accessor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullField {
    inner: Field,
}

impl NullField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Value {
        match key {
            "id" => FieldId::NULL.into(),
            "name" => Value::String(String::new()),
            _ => self.inner.get(key),
        }
    }
}

impl From<Field> for NullField {
    fn from(inner: Field) -> Self {
        Self { inner }
    }
}

impl FieldAccess for NullField {
    fn get(&self, key: &str) -> Value {
        NullField::get(self, key)
    }
}
