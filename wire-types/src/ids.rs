//! Identifier type for fields.
//!
//! Field ids are positive integers assigned when a field is saved. The
//! value `0` is reserved: it marks a field that was never persisted, and
//! it is what the null field reports.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Unique numeric identifier for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u32);

impl FieldId {
    /// The "no such field" id.
    pub const NULL: FieldId = FieldId(0);

    /// Creates a field id from a raw number.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw number.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// True for the reserved `0` id.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Reads an id out of an attribute value.
    ///
    /// Unsigned integers that fit in `u32` map to that id. Everything else,
    /// including `null`, strings, and negative numbers, maps to [`FieldId::NULL`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Self)
            .unwrap_or(Self::NULL)
    }

    /// Parses a field id from a decimal string.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| Error::InvalidId(format!("{s:?}: {e}")))
    }
}

impl From<u32> for FieldId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<FieldId> for Value {
    fn from(id: FieldId) -> Self {
        Value::from(id.0)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
