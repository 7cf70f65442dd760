//! Existence, introspection, resolution and default reference queries.

use std::slice;

use super::Manager;
use crate::dispatch::{self, BatchElementErrorPolicy, BatchOutcome};
use assetlink_core::{
    Context, DefaultEntityAccess, EntityReference, EntityTraitsAccess, ResolveAccess, Result,
    TraitSet, TraitsData,
};
use assetlink_manager_api::{BatchElementErrorCallback, SuccessCallback};
use tracing::debug;

impl Manager {
    // =========================================================================
    // Existence and introspection (canonical form only)
    // =========================================================================

    /// Report whether each entity exists.
    pub fn entity_exists(
        &self,
        entity_references: &[EntityReference],
        context: &Context,
        success: SuccessCallback<'_, bool>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        debug!(operation = "entity_exists", count = entity_references.len(), "Dispatching batch");
        self.interface
            .entity_exists(entity_references, context, &self.host_session, success, error)
    }

    /// Report the trait set of each entity.
    pub fn entity_traits(
        &self,
        entity_references: &[EntityReference],
        access: EntityTraitsAccess,
        context: &Context,
        success: SuccessCallback<'_, TraitSet>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        debug!(operation = "entity_traits", count = entity_references.len(), "Dispatching batch");
        self.interface.entity_traits(
            entity_references,
            access,
            context,
            &self.host_session,
            success,
            error,
        )
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `trait_set` for each entity, reporting through callbacks.
    pub fn resolve(
        &self,
        entity_references: &[EntityReference],
        trait_set: &TraitSet,
        access: ResolveAccess,
        context: &Context,
        success: SuccessCallback<'_, TraitsData>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        debug!(operation = "resolve", count = entity_references.len(), "Dispatching batch");
        self.interface.resolve(
            entity_references,
            trait_set,
            access,
            context,
            &self.host_session,
            success,
            error,
        )
    }

    /// Resolve a batch, surfacing element errors as `policy` says.
    pub fn resolve_with_policy(
        &self,
        entity_references: &[EntityReference],
        trait_set: &TraitSet,
        access: ResolveAccess,
        context: &Context,
        policy: BatchElementErrorPolicy,
    ) -> Result<Vec<BatchOutcome<TraitsData>>> {
        dispatch::collect(
            "resolve",
            entity_references,
            access.into(),
            policy,
            |success, error| {
                self.resolve(entity_references, trait_set, access, context, success, error)
            },
        )
    }

    /// Resolve one entity.
    ///
    /// # Errors
    ///
    /// `BatchElement` if the manager reports an error for the entity.
    pub fn resolve_one(
        &self,
        entity_reference: &EntityReference,
        trait_set: &TraitSet,
        access: ResolveAccess,
        context: &Context,
    ) -> Result<TraitsData> {
        let outcomes = self.resolve_with_policy(
            slice::from_ref(entity_reference),
            trait_set,
            access,
            context,
            BatchElementErrorPolicy::Exception,
        )?;
        dispatch::into_single_value(outcomes)
    }

    /// Resolve a batch, failing on the first element error.
    ///
    /// # Errors
    ///
    /// `BatchElement` for the lowest-index element the manager reported
    /// an error for; results for all other elements are discarded.
    pub fn resolve_many(
        &self,
        entity_references: &[EntityReference],
        trait_set: &TraitSet,
        access: ResolveAccess,
        context: &Context,
    ) -> Result<Vec<TraitsData>> {
        let outcomes = self.resolve_with_policy(
            entity_references,
            trait_set,
            access,
            context,
            BatchElementErrorPolicy::Exception,
        )?;
        dispatch::into_values(outcomes)
    }

    /// Resolve one entity, returning an element error as data.
    pub fn try_resolve_one(
        &self,
        entity_reference: &EntityReference,
        trait_set: &TraitSet,
        access: ResolveAccess,
        context: &Context,
    ) -> Result<BatchOutcome<TraitsData>> {
        let outcomes = self.resolve_with_policy(
            slice::from_ref(entity_reference),
            trait_set,
            access,
            context,
            BatchElementErrorPolicy::Variant,
        )?;
        dispatch::into_single(outcomes)
    }

    /// Resolve a batch, returning each element's outcome by index.
    pub fn try_resolve_many(
        &self,
        entity_references: &[EntityReference],
        trait_set: &TraitSet,
        access: ResolveAccess,
        context: &Context,
    ) -> Result<Vec<BatchOutcome<TraitsData>>> {
        self.resolve_with_policy(
            entity_references,
            trait_set,
            access,
            context,
            BatchElementErrorPolicy::Variant,
        )
    }

    // =========================================================================
    // Default references (canonical form only)
    // =========================================================================

    /// Report a default entity reference for each trait set, or `None`
    /// where the manager has none.
    pub fn default_entity_reference(
        &self,
        trait_sets: &[TraitSet],
        access: DefaultEntityAccess,
        context: &Context,
        success: SuccessCallback<'_, Option<EntityReference>>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        debug!(operation = "default_entity_reference", count = trait_sets.len(), "Dispatching batch");
        self.interface.default_entity_reference(
            trait_sets,
            access,
            context,
            &self.host_session,
            success,
            error,
        )
    }
}
