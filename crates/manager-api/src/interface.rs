//! The manager plugin contract
//!
//! A manager implements [`ManagerInterface`]. The host never calls it
//! directly; it goes through the host-side `Manager`, which adds
//! validation, capability checks and calling conventions on top.
//!
//! ## Batched Calls
//!
//! Entity operations take a batch of elements and report per element
//! through two callbacks keyed by the element's index:
//!
//! - `success(index, value)` for an element that succeeded
//! - `error(index, BatchElementError)` for an element that failed
//!
//! ## Callback Contract
//!
//! | Rule | Meaning |
//! |------|---------|
//! | Exactly once | every index gets one success or one error |
//! | Any thread | callbacks may run on manager worker threads, concurrently |
//! | Any order | indices may be reported out of order |
//! | Synchronous | the call returns only after all callbacks have run |
//!
//! Returning `Err` from a batched call means the call as a whole failed;
//! callbacks may or may not have run for some indices.
//!
//! ## Optional Methods
//!
//! Methods behind an optional [`Capability`] have default bodies that
//! return `NotImplemented`. A manager overrides the ones it advertises.

use crate::pager::EntityReferencePagerInterfacePtr;
use crate::HostSession;
use assetlink_core::{
    BatchElementError, Capability, Context, DefaultEntityAccess, EntityReference,
    EntityTraitsAccess, Error, InfoDictionary, ManagerStateHandle, PolicyAccess,
    PublishingAccess, RelationsAccess, ResolveAccess, Result, StrMap, TraitSet, TraitsData,
};

/// Per-index success callback.
pub type SuccessCallback<'a, T> = &'a (dyn Fn(usize, T) + Sync + 'a);

/// Per-index error callback.
pub type BatchElementErrorCallback<'a> = &'a (dyn Fn(usize, BatchElementError) + Sync + 'a);

fn not_implemented<T>(identifier: &str, method: &str) -> Result<T> {
    Err(Error::not_implemented(format!(
        "'{}' does not implement {}",
        identifier, method
    )))
}

/// Contract every manager implementation fulfils.
pub trait ManagerInterface: Send + Sync {
    // =========================================================================
    // Identification
    // =========================================================================

    /// Unique, reverse-DNS style identifier of the manager.
    fn identifier(&self) -> String;

    /// Human readable name of the manager.
    fn display_name(&self) -> String;

    /// Free-form information about the manager.
    ///
    /// May carry `entityReferencesMatchPrefix` to let hosts classify
    /// reference strings without a call.
    fn info(&self) -> InfoDictionary {
        InfoDictionary::new()
    }

    /// Whether the manager supports `capability`.
    ///
    /// The answer may change during `initialize`, e.g. for proxies.
    fn has_capability(&self, capability: Capability) -> bool;

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Current settings.
    fn settings(&self, _host_session: &HostSession) -> Result<InfoDictionary> {
        Ok(InfoDictionary::new())
    }

    /// Apply settings and prepare for use.
    fn initialize(&self, settings: InfoDictionary, host_session: &HostSession) -> Result<()>;

    /// Substitute manager-specific terms into `terms`.
    fn update_terminology(&self, terms: StrMap, _host_session: &HostSession) -> Result<StrMap> {
        Ok(terms)
    }

    /// Drop any cached data.
    fn flush_caches(&self, _host_session: &HostSession) -> Result<()> {
        Ok(())
    }

    // =========================================================================
    // Policy
    // =========================================================================

    /// One policy document per trait set, describing how the manager
    /// handles entities with those traits.
    fn management_policy(
        &self,
        trait_sets: &[TraitSet],
        access: PolicyAccess,
        context: &Context,
        host_session: &HostSession,
    ) -> Result<Vec<TraitsData>>;

    // =========================================================================
    // State (Capability::StatefulContexts)
    // =========================================================================

    /// Create state for a new top-level context.
    fn create_state(&self, _host_session: &HostSession) -> Result<ManagerStateHandle> {
        not_implemented(&self.identifier(), "create_state")
    }

    /// Derive state for a child context.
    fn create_child_state(
        &self,
        _parent_state: &ManagerStateHandle,
        _host_session: &HostSession,
    ) -> Result<ManagerStateHandle> {
        not_implemented(&self.identifier(), "create_child_state")
    }

    /// Serialize state into an opaque token.
    fn persistence_token_for_state(
        &self,
        _state: &ManagerStateHandle,
        _host_session: &HostSession,
    ) -> Result<String> {
        not_implemented(&self.identifier(), "persistence_token_for_state")
    }

    /// Rebuild state from a token produced by `persistence_token_for_state`.
    fn state_from_persistence_token(
        &self,
        _token: &str,
        _host_session: &HostSession,
    ) -> Result<ManagerStateHandle> {
        not_implemented(&self.identifier(), "state_from_persistence_token")
    }

    // =========================================================================
    // Entity references
    // =========================================================================

    /// Whether `some_string` is an entity reference of this manager.
    fn is_entity_reference_string(&self, some_string: &str, host_session: &HostSession) -> bool;

    // =========================================================================
    // Batched entity operations
    // =========================================================================

    /// Report whether each entity exists.
    fn entity_exists(
        &self,
        _entity_references: &[EntityReference],
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, bool>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "entity_exists")
    }

    /// Report the trait set of each entity.
    fn entity_traits(
        &self,
        entity_references: &[EntityReference],
        access: EntityTraitsAccess,
        context: &Context,
        host_session: &HostSession,
        success: SuccessCallback<'_, TraitSet>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()>;

    /// Resolve `trait_set` for each entity.
    #[allow(clippy::too_many_arguments)]
    fn resolve(
        &self,
        _entity_references: &[EntityReference],
        _trait_set: &TraitSet,
        _access: ResolveAccess,
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, TraitsData>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "resolve")
    }

    /// Report a default reference for each trait set, or `None` when
    /// the manager has no sensible default.
    #[allow(clippy::too_many_arguments)]
    fn default_entity_reference(
        &self,
        _trait_sets: &[TraitSet],
        _access: DefaultEntityAccess,
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, Option<EntityReference>>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "default_entity_reference")
    }

    /// One pager per entity over entities related by `relationship`.
    #[allow(clippy::too_many_arguments)]
    fn get_with_relationship(
        &self,
        _entity_references: &[EntityReference],
        _relationship: &TraitsData,
        _result_trait_set: &TraitSet,
        _page_size: usize,
        _access: RelationsAccess,
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, EntityReferencePagerInterfacePtr>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "get_with_relationship")
    }

    /// One pager per relationship over entities related to a single entity.
    #[allow(clippy::too_many_arguments)]
    fn get_with_relationships(
        &self,
        _entity_reference: &EntityReference,
        _relationships: &[TraitsData],
        _result_trait_set: &TraitSet,
        _page_size: usize,
        _access: RelationsAccess,
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, EntityReferencePagerInterfacePtr>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "get_with_relationships")
    }

    /// Prepare each entity for publishing; report the reference to
    /// publish to.
    #[allow(clippy::too_many_arguments)]
    fn preflight(
        &self,
        _entity_references: &[EntityReference],
        _traits_hints: &[TraitsData],
        _access: PublishingAccess,
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, EntityReference>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "preflight")
    }

    /// Publish trait data to each entity; report the final reference.
    #[allow(clippy::too_many_arguments)]
    fn register(
        &self,
        _entity_references: &[EntityReference],
        _entity_traits_datas: &[TraitsData],
        _access: PublishingAccess,
        _context: &Context,
        _host_session: &HostSession,
        _success: SuccessCallback<'_, EntityReference>,
        _error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        not_implemented(&self.identifier(), "register")
    }
}
