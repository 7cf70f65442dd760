//! Validated entity reference strings
//!
//! An entity reference is a string a manager recognizes as addressing one
//! of its entities. The string itself is opaque to the host.
//!
//! ## Construction
//!
//! Hosts obtain references from a host-side `Manager`, which validates the
//! string against the manager before wrapping it. Manager implementations
//! mint references for their own results (preflight, register, paging)
//! through [`EntityReference::new_unchecked`], since they are the
//! authority on what is valid.
//!
//! References serialize as their plain string but do not deserialize:
//! a stored string goes back through `Manager::create_entity_reference`.

use serde::Serialize;
use std::fmt;

/// An entity reference string that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityReference(String);

/// A batch of entity references.
pub type EntityReferences = Vec<EntityReference>;

impl EntityReference {
    /// Wrap a string the caller has already validated.
    ///
    /// Intended for manager implementations. Hosts should go through
    /// `Manager::create_entity_reference` instead.
    pub fn new_unchecked(reference: impl Into<String>) -> Self {
        EntityReference(reference.into())
    }

    /// The reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the reference string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
