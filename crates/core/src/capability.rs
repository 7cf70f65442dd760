//! Manager capabilities
//!
//! Manager implementations may be partial: a manager written in several
//! languages, or a proxy forwarding to another manager, only knows which
//! behaviors it supports at runtime. A [`Capability`] names one optional
//! behavior; a manager reports support per capability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An optional manager behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    /// The manager keeps state in contexts (`create_state` and friends).
    StatefulContexts,
    /// The manager customizes host terminology.
    CustomTerminology,
    /// The manager resolves entity references to trait data.
    Resolution,
    /// The manager supports preflight and register.
    Publishing,
    /// The manager answers relationship queries.
    RelationshipQueries,
    /// The manager answers entity existence queries.
    ExistenceQueries,
    /// The manager provides default entity references.
    DefaultEntityReferences,
    /// The manager classifies entity reference strings.
    EntityReferenceIdentification,
    /// The manager answers management policy queries.
    ManagementPolicyQueries,
    /// The manager reports the traits of an entity.
    EntityTraitIntrospection,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 10] = [
        Capability::StatefulContexts,
        Capability::CustomTerminology,
        Capability::Resolution,
        Capability::Publishing,
        Capability::RelationshipQueries,
        Capability::ExistenceQueries,
        Capability::DefaultEntityReferences,
        Capability::EntityReferenceIdentification,
        Capability::ManagementPolicyQueries,
        Capability::EntityTraitIntrospection,
    ];

    /// Capabilities every manager must have after initialization.
    pub const REQUIRED: [Capability; 3] = [
        Capability::EntityReferenceIdentification,
        Capability::ManagementPolicyQueries,
        Capability::EntityTraitIntrospection,
    ];

    /// Stable name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::StatefulContexts => "statefulContexts",
            Capability::CustomTerminology => "customTerminology",
            Capability::Resolution => "resolution",
            Capability::Publishing => "publishing",
            Capability::RelationshipQueries => "relationshipQueries",
            Capability::ExistenceQueries => "existenceQueries",
            Capability::DefaultEntityReferences => "defaultEntityReferences",
            Capability::EntityReferenceIdentification => "entityReferenceIdentification",
            Capability::ManagementPolicyQueries => "managementPolicyQueries",
            Capability::EntityTraitIntrospection => "entityTraitIntrospection",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
