//! Access modes
//!
//! Every operation tells the manager the intent behind the call. Each
//! operation family accepts only the modes that make sense for it, so each
//! gets its own enum; all of them widen into [`Access`], whose name is
//! used when rendering error messages.
//!
//! | Enum | Modes |
//! |------|-------|
//! | `PolicyAccess` | read, write, createRelated, required, managerDriven |
//! | `ResolveAccess` | read, managerDriven |
//! | `PublishingAccess` | write, createRelated |
//! | `RelationsAccess` | read, write, createRelated |
//! | `DefaultEntityAccess` | read, write, createRelated |
//! | `EntityTraitsAccess` | read, write |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Union of every access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// Reading existing data
    Read,
    /// Writing to an entity
    Write,
    /// Creating a new entity related to an existing one
    CreateRelated,
    /// Querying which traits are required for an operation
    Required,
    /// Letting the manager decide
    ManagerDriven,
}

impl Access {
    /// Stable name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Access::Read => "read",
            Access::Write => "write",
            Access::CreateRelated => "createRelated",
            Access::Required => "required",
            Access::ManagerDriven => "managerDriven",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! access_subset {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl From<$name> for Access {
            fn from(mode: $name) -> Access {
                match mode {
                    $($name::$variant => Access::$variant),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(Access::from(*self).name())
            }
        }
    };
}

access_subset!(
    /// Access modes for management policy queries.
    PolicyAccess {
        /// Reading existing data
        Read,
        /// Writing to an entity
        Write,
        /// Creating a new entity related to an existing one
        CreateRelated,
        /// Querying which traits are required
        Required,
        /// Letting the manager decide
        ManagerDriven,
    }
);

access_subset!(
    /// Access modes for resolution.
    ResolveAccess {
        /// Reading existing data
        Read,
        /// Letting the manager decide
        ManagerDriven,
    }
);

access_subset!(
    /// Access modes for preflight and registration.
    PublishingAccess {
        /// Writing to an entity
        Write,
        /// Creating a new entity related to an existing one
        CreateRelated,
    }
);

access_subset!(
    /// Access modes for relationship queries.
    RelationsAccess {
        /// Reading existing relationships
        Read,
        /// Querying relationships to publish to
        Write,
        /// Querying relationships for new related entities
        CreateRelated,
    }
);

access_subset!(
    /// Access modes for default entity reference queries.
    DefaultEntityAccess {
        /// A default to read from
        Read,
        /// A default to write to
        Write,
        /// A default for a new related entity
        CreateRelated,
    }
);

access_subset!(
    /// Access modes for entity trait introspection.
    EntityTraitsAccess {
        /// Traits of the entity as it exists
        Read,
        /// Traits required to publish to the entity
        Write,
    }
);
