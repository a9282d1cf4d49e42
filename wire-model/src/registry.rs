//! In-memory field registry.
//!
//! Resolves fields by id or name. [`Fields::find`] reports a miss as `None`;
//! [`Fields::get`] reports it as a [`NullField`] so the caller can keep
//! reading attributes.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;
use wire_types::{Error, FieldId, Result};

use crate::{Field, FieldAccess, NullField, is_valid_name};

/// How a field is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    Id(FieldId),
    /// Matched exactly; a numeric string is still a name.
    Name(String),
}

impl From<FieldId> for FieldSelector {
    fn from(id: FieldId) -> Self {
        Self::Id(id)
    }
}

impl From<u32> for FieldSelector {
    fn from(id: u32) -> Self {
        Self::Id(FieldId::new(id))
    }
}

impl From<&str> for FieldSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FieldSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

/// Result of [`Fields::get`]: the registered field, or the null field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRef<'a> {
    Found(&'a Field),
    Missing(NullField),
}

impl<'a> FieldRef<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Drops the null field, leaving an explicit option.
    pub fn found(self) -> Option<&'a Field> {
        match self {
            Self::Found(field) => Some(field),
            Self::Missing(_) => None,
        }
    }
}

impl FieldAccess for FieldRef<'_> {
    fn get(&self, key: &str) -> Value {
        match self {
            Self::Found(field) => field.get(key),
            Self::Missing(null) => null.get(key),
        }
    }
}

/// All known fields, indexed by id and by name.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    by_id: BTreeMap<FieldId, Field>,
    ids_by_name: HashMap<String, FieldId>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads field definitions from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<Field> = serde_json::from_str(json)?;
        let mut fields = Self::new();
        for field in definitions {
            fields.insert(field)?;
        }
        Ok(fields)
    }

    /// Registers a field, replacing any field with the same id.
    ///
    /// Fields must have a non-zero id and a valid name, and a name may only
    /// belong to one id.
    pub fn insert(&mut self, field: Field) -> Result<()> {
        if field.id.is_null() {
            return Err(Error::NotPersisted(field.name));
        }
        if !is_valid_name(&field.name) {
            return Err(Error::InvalidAttribute {
                key: "name".to_string(),
                reason: format!("{:?} is not a valid field name", field.name),
            });
        }
        if let Some(&owner) = self.ids_by_name.get(&field.name) {
            if owner != field.id {
                return Err(Error::DuplicateName(field.name));
            }
        }

        if let Some(previous) = self.by_id.get(&field.id) {
            debug!("Replacing field {} ({})", field.id, previous.name);
            if previous.name != field.name {
                self.ids_by_name.remove(&previous.name);
            }
        }
        self.ids_by_name.insert(field.name.clone(), field.id);
        self.by_id.insert(field.id, field);
        Ok(())
    }

    pub fn remove(&mut self, selector: impl Into<FieldSelector>) -> Option<Field> {
        let id = self.resolve(&selector.into())?;
        let field = self.by_id.remove(&id)?;
        self.ids_by_name.remove(&field.name);
        Some(field)
    }

    /// Looks up a field, reporting a miss as `None`.
    pub fn find(&self, selector: impl Into<FieldSelector>) -> Option<&Field> {
        let id = self.resolve(&selector.into())?;
        self.by_id.get(&id)
    }

    /// Looks up a field, substituting a [`NullField`] on a miss.
    pub fn get(&self, selector: impl Into<FieldSelector>) -> FieldRef<'_> {
        let selector = selector.into();
        match self.resolve(&selector).and_then(|id| self.by_id.get(&id)) {
            Some(field) => FieldRef::Found(field),
            None => {
                debug!("Field not found by {selector}, returning null field");
                FieldRef::Missing(NullField::new())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Registered fields in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.by_id.values()
    }

    fn resolve(&self, selector: &FieldSelector) -> Option<FieldId> {
        match selector {
            FieldSelector::Id(id) if self.by_id.contains_key(id) => Some(*id),
            FieldSelector::Id(_) => None,
            FieldSelector::Name(name) => self.ids_by_name.get(name).copied(),
        }
    }
}
