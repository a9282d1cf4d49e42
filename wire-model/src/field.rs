use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;
use wire_types::{Error, FieldId, Result};

use crate::FieldAccess;

/// A field definition in the schema model.
///
/// Identity lives in typed attributes (`id`, `name`); everything else a
/// field carries (label, description, fieldtype settings) goes in the
/// generic `attributes` store, which is flattened into the same JSON object.
/// Store entries under a typed key are never read and are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub id: FieldId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flags: FieldFlags,
    /// Name of the fieldtype module, e.g. `"FieldtypeText"`.
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Keys answered by typed attributes rather than the store.
const TYPED_KEYS: [&str; 4] = ["id", "name", "flags", "type"];

impl Field {
    /// Creates a field with the given id and name and no other attributes.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(id),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the fieldtype module name.
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    /// Replaces the flags.
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets an attribute through [`Field::set`]; an invalid value is logged and dropped.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if let Err(e) = self.set(&key, value.into()) {
            warn!("Ignoring attribute on field {}: {e}", self.name);
        }
        self
    }

    /// Generic attribute accessor.
    ///
    /// `id`, `name`, `flags` and `type` come from the typed attributes. Any
    /// other key is looked up in the attribute store; unset keys read as
    /// `Value::Null`.
    pub fn get(&self, key: &str) -> Value {
        match key {
            "id" => self.id.into(),
            "name" => Value::String(self.name.clone()),
            "flags" => Value::from(self.flags.bits()),
            "type" => self.field_type.clone().map_or(Value::Null, Value::String),
            _ => self.attributes.get(key).cloned().unwrap_or(Value::Null),
        }
    }

    /// Generic attribute mutator.
    ///
    /// Typed attributes are validated; setting a store attribute to `null`
    /// removes it.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        match key {
            "id" => self.id = FieldId::new(expect_u32(key, &value)?),
            "name" => {
                let name = value
                    .as_str()
                    .ok_or_else(|| invalid(key, "expected a string"))?;
                if !is_valid_name(name) {
                    return Err(invalid(key, format!("{name:?} is not a valid field name")));
                }
                self.name = name.to_string();
            }
            "flags" => self.flags = FieldFlags::from_bits(expect_u32(key, &value)?),
            "type" => {
                self.field_type = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s),
                    _ => return Err(invalid(key, "expected a string or null")),
                }
            }
            _ if value.is_null() => {
                self.attributes.remove(key);
            }
            _ => {
                self.attributes.insert(key.to_string(), value);
            }
        }
        Ok(())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        if !self.flags.is_empty() {
            map.serialize_entry("flags", &self.flags)?;
        }
        if let Some(field_type) = &self.field_type {
            map.serialize_entry("type", field_type)?;
        }
        for (key, value) in &self.attributes {
            if !TYPED_KEYS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl FieldAccess for Field {
    fn get(&self, key: &str) -> Value {
        Field::get(self, key)
    }
}

/// Field names are non-empty and limited to ASCII letters, digits and `_`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn expect_u32(key: &str, value: &Value) -> Result<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(key, format!("expected an unsigned 32-bit integer, got {value}")))
}

fn invalid(key: &str, reason: impl Into<String>) -> Error {
    Error::InvalidAttribute {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Behavior flags stored on a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldFlags(u32);

impl FieldFlags {
    /// Loaded together with the page rather than on first access.
    pub const AUTOJOIN: FieldFlags = FieldFlags(1);
    /// Required on every template.
    pub const GLOBAL: FieldFlags = FieldFlags(4);
    /// Created by the system; cannot be deleted.
    pub const SYSTEM: FieldFlags = FieldFlags(8);
    /// Cannot be removed from the templates it is attached to.
    pub const PERMANENT: FieldFlags = FieldFlags(16);
    /// Access is restricted by role.
    pub const ACCESS: FieldFlags = FieldFlags(32);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: FieldFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: FieldFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: FieldFlags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for FieldFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
