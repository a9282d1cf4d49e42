//! Field model for the wire schema layer.
//!
//! Defines the field objects the rest of the system reads attributes from:
//! - [`Field`]: a named, identified field with a generic attribute store
//! - [`NullField`]: the stand-in handed out when a field lookup misses
//! - [`FieldAccess`]: the capability every field variant implements
//! - [`Fields`]: the in-memory registry that resolves ids and names
//!
//! Callers that only read attributes take `&dyn FieldAccess` (or
//! `impl FieldAccess`) and never need to branch on whether a lookup hit.
//! A missing field reports `id == 0` and `name == ""`.

mod access;
mod field;
mod null;
mod registry;

pub use access::FieldAccess;
pub use field::{Field, FieldFlags, is_valid_name};
pub use null::NullField;
pub use registry::{FieldRef, FieldSelector, Fields};
pub use wire_types::{Error, FieldId, Result};
