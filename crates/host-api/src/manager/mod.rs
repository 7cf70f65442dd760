//! The host-facing manager facade
//!
//! [`Manager`] wraps a [`ManagerInterface`] together with the host's
//! [`HostSession`] and is the only way hosts talk to a manager.
//!
//! ## Responsibilities
//!
//! - Capability gate: `initialize` verifies the required capabilities
//! - Contexts: creation, derivation and persistence of manager state
//! - Entity references: validation before wrapping any host string
//! - Batched operations: canonical callback form plus the convenience
//!   calling conventions built on it
//! - Relationship queries: wrapping manager pagers into host pagers
//!
//! ## Calling Conventions
//!
//! `resolve`, `preflight` and `register` come in five forms:
//!
//! | Form | In | Out | Element error |
//! |------|----|-----|---------------|
//! | `resolve` | N refs + callbacks | via callbacks | via callback |
//! | `resolve_one` | 1 ref | value | `Error::BatchElement` |
//! | `resolve_many` | N refs | N values | `Error::BatchElement` (lowest index) |
//! | `try_resolve_one` | 1 ref | outcome | `Err` outcome |
//! | `try_resolve_many` | N refs | N outcomes | `Err` outcome per index |
//!
//! The last four are thin wrappers over `*_with_policy`, which takes a
//! [`BatchElementErrorPolicy`] explicitly.
//!
//! # Example
//!
//! ```ignore
//! let manager = Manager::new(interface, host_session);
//! manager.initialize(settings)?;
//!
//! let context = manager.create_context()?;
//! let reference = manager.create_entity_reference("asset://shot/010")?;
//! let data = manager.resolve_one(&reference, &trait_set, ResolveAccess::Read, &context)?;
//! ```

mod capability;
mod context;
mod entity;
mod publishing;
mod reference;
mod relationship;

use std::sync::Arc;

use assetlink_core::{
    Capability, Context, InfoDictionary, PolicyAccess, Result, StrMap, TraitSet, TraitsData,
};
use assetlink_manager_api::{HostSession, ManagerInterface};
use parking_lot::RwLock;
use tracing::debug;

use crate::config::ManagerConfig;

/// Host-side handle to one manager implementation.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct Manager {
    interface: Arc<dyn ManagerInterface>,
    host_session: HostSession,
    /// Prefix from the manager's info, cached at `initialize`.
    entity_reference_prefix: RwLock<Option<String>>,
}

impl Manager {
    /// Wrap a manager implementation for use by the given host.
    ///
    /// The manager is not usable until [`Manager::initialize`] succeeds.
    pub fn new(interface: Arc<dyn ManagerInterface>, host_session: HostSession) -> Self {
        Self {
            interface,
            host_session,
            entity_reference_prefix: RwLock::new(None),
        }
    }

    // =========================================================================
    // Identification
    // =========================================================================

    /// Unique identifier of the manager.
    pub fn identifier(&self) -> String {
        self.interface.identifier()
    }

    /// Human readable name of the manager.
    pub fn display_name(&self) -> String {
        self.interface.display_name()
    }

    /// Free-form information about the manager.
    pub fn info(&self) -> InfoDictionary {
        self.interface.info()
    }

    /// Whether the manager supports `capability`.
    ///
    /// Usable before initialization, though proxies may only report
    /// their final capabilities after it.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.interface.has_capability(capability)
    }

    /// The host session this manager is driven with.
    pub fn host_session(&self) -> &HostSession {
        &self.host_session
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Current manager settings.
    pub fn settings(&self) -> Result<InfoDictionary> {
        self.interface.settings(&self.host_session)
    }

    /// Substitute manager-specific terminology into `terms`.
    pub fn update_terminology(&self, terms: StrMap) -> Result<StrMap> {
        self.interface.update_terminology(terms, &self.host_session)
    }

    /// Initialize the manager with `settings`.
    ///
    /// After the manager has initialized, verifies it has every required
    /// capability and caches the entity reference prefix from its info,
    /// if it publishes one.
    ///
    /// # Errors
    ///
    /// - Whatever the manager's own `initialize` returns
    /// - `Configuration` if required capabilities are missing
    pub fn initialize(&self, settings: InfoDictionary) -> Result<()> {
        self.interface.initialize(settings, &self.host_session)?;

        // Only after initialize: proxies learn their capabilities there.
        capability::verify_required_capabilities(self.interface.as_ref())?;

        let prefix = reference::entity_reference_prefix_from_info(&self.interface.info());
        *self.entity_reference_prefix.write() = prefix;

        debug!(manager = %self.identifier(), "Manager initialized");
        Ok(())
    }

    /// Initialize from a parsed config file.
    ///
    /// # Errors
    ///
    /// - `Configuration` if the config names a different manager
    /// - Anything [`Manager::initialize`] returns
    pub fn initialize_from_config(&self, config: &ManagerConfig) -> Result<()> {
        let identifier = self.identifier();
        if config.identifier != identifier {
            return Err(assetlink_core::Error::configuration(format!(
                "Config is for manager '{}' but this manager is '{}'",
                config.identifier, identifier
            )));
        }
        self.initialize(config.settings.clone())
    }

    /// Ask the manager to drop any cached data.
    pub fn flush_caches(&self) -> Result<()> {
        self.interface.flush_caches(&self.host_session)
    }

    // =========================================================================
    // Policy
    // =========================================================================

    /// One policy document per trait set.
    pub fn management_policy(
        &self,
        trait_sets: &[TraitSet],
        access: PolicyAccess,
        context: &Context,
    ) -> Result<Vec<TraitsData>> {
        self.interface
            .management_policy(trait_sets, access, context, &self.host_session)
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("identifier", &self.interface.identifier())
            .field("host_session", &self.host_session)
            .field("entity_reference_prefix", &*self.entity_reference_prefix.read())
            .finish()
    }
}
