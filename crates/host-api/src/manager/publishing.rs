//! Preflight and registration.
//!
//! Both take a payload per entity reference; the two lists must be the
//! same length or the call fails before reaching the manager.

use std::slice;

use super::Manager;
use crate::dispatch::{self, BatchElementErrorPolicy, BatchOutcome};
use assetlink_core::{Context, EntityReference, Error, PublishingAccess, Result, TraitsData};
use assetlink_manager_api::{BatchElementErrorCallback, SuccessCallback};
use tracing::debug;

fn check_paired_lengths(references: usize, payloads: usize, payload_name: &str) -> Result<()> {
    if references == payloads {
        return Ok(());
    }
    Err(Error::input_validation(format!(
        "Parameter lists must be of the same length: {} entity references vs. {} {}.",
        references, payloads, payload_name
    )))
}

impl Manager {
    // =========================================================================
    // Preflight
    // =========================================================================

    /// Prepare each entity for publishing, reporting the reference to
    /// publish to through callbacks.
    ///
    /// # Errors
    ///
    /// `InputValidation` if `traits_hints` and `entity_references` differ
    /// in length. Nothing is dispatched in that case.
    pub fn preflight(
        &self,
        entity_references: &[EntityReference],
        traits_hints: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
        success: SuccessCallback<'_, EntityReference>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        check_paired_lengths(entity_references.len(), traits_hints.len(), "traits hints")?;
        debug!(operation = "preflight", count = entity_references.len(), "Dispatching batch");
        self.interface.preflight(
            entity_references,
            traits_hints,
            access,
            context,
            &self.host_session,
            success,
            error,
        )
    }

    /// Preflight a batch, surfacing element errors as `policy` says.
    pub fn preflight_with_policy(
        &self,
        entity_references: &[EntityReference],
        traits_hints: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
        policy: BatchElementErrorPolicy,
    ) -> Result<Vec<BatchOutcome<EntityReference>>> {
        dispatch::collect(
            "preflight",
            entity_references,
            access.into(),
            policy,
            |success, error| {
                self.preflight(entity_references, traits_hints, access, context, success, error)
            },
        )
    }

    /// Preflight one entity.
    pub fn preflight_one(
        &self,
        entity_reference: &EntityReference,
        traits_hint: &TraitsData,
        access: PublishingAccess,
        context: &Context,
    ) -> Result<EntityReference> {
        let outcomes = self.preflight_with_policy(
            slice::from_ref(entity_reference),
            slice::from_ref(traits_hint),
            access,
            context,
            BatchElementErrorPolicy::Exception,
        )?;
        dispatch::into_single_value(outcomes)
    }

    /// Preflight a batch, failing on the first element error.
    pub fn preflight_many(
        &self,
        entity_references: &[EntityReference],
        traits_hints: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
    ) -> Result<Vec<EntityReference>> {
        let outcomes = self.preflight_with_policy(
            entity_references,
            traits_hints,
            access,
            context,
            BatchElementErrorPolicy::Exception,
        )?;
        dispatch::into_values(outcomes)
    }

    /// Preflight one entity, returning an element error as data.
    pub fn try_preflight_one(
        &self,
        entity_reference: &EntityReference,
        traits_hint: &TraitsData,
        access: PublishingAccess,
        context: &Context,
    ) -> Result<BatchOutcome<EntityReference>> {
        let outcomes = self.preflight_with_policy(
            slice::from_ref(entity_reference),
            slice::from_ref(traits_hint),
            access,
            context,
            BatchElementErrorPolicy::Variant,
        )?;
        dispatch::into_single(outcomes)
    }

    /// Preflight a batch, returning each element's outcome by index.
    pub fn try_preflight_many(
        &self,
        entity_references: &[EntityReference],
        traits_hints: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
    ) -> Result<Vec<BatchOutcome<EntityReference>>> {
        self.preflight_with_policy(
            entity_references,
            traits_hints,
            access,
            context,
            BatchElementErrorPolicy::Variant,
        )
    }

    // =========================================================================
    // Register
    // =========================================================================

    /// Publish trait data to each entity, reporting the final reference
    /// through callbacks.
    ///
    /// # Errors
    ///
    /// `InputValidation` if `entity_traits_datas` and `entity_references`
    /// differ in length. Nothing is dispatched in that case.
    pub fn register(
        &self,
        entity_references: &[EntityReference],
        entity_traits_datas: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
        success: SuccessCallback<'_, EntityReference>,
        error: BatchElementErrorCallback<'_>,
    ) -> Result<()> {
        check_paired_lengths(
            entity_references.len(),
            entity_traits_datas.len(),
            "traits datas",
        )?;
        debug!(operation = "register", count = entity_references.len(), "Dispatching batch");
        self.interface.register(
            entity_references,
            entity_traits_datas,
            access,
            context,
            &self.host_session,
            success,
            error,
        )
    }

    /// Register a batch, surfacing element errors as `policy` says.
    pub fn register_with_policy(
        &self,
        entity_references: &[EntityReference],
        entity_traits_datas: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
        policy: BatchElementErrorPolicy,
    ) -> Result<Vec<BatchOutcome<EntityReference>>> {
        dispatch::collect(
            "register",
            entity_references,
            access.into(),
            policy,
            |success, error| {
                self.register(
                    entity_references,
                    entity_traits_datas,
                    access,
                    context,
                    success,
                    error,
                )
            },
        )
    }

    /// Register one entity.
    pub fn register_one(
        &self,
        entity_reference: &EntityReference,
        entity_traits_data: &TraitsData,
        access: PublishingAccess,
        context: &Context,
    ) -> Result<EntityReference> {
        let outcomes = self.register_with_policy(
            slice::from_ref(entity_reference),
            slice::from_ref(entity_traits_data),
            access,
            context,
            BatchElementErrorPolicy::Exception,
        )?;
        dispatch::into_single_value(outcomes)
    }

    /// Register a batch, failing on the first element error.
    pub fn register_many(
        &self,
        entity_references: &[EntityReference],
        entity_traits_datas: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
    ) -> Result<Vec<EntityReference>> {
        let outcomes = self.register_with_policy(
            entity_references,
            entity_traits_datas,
            access,
            context,
            BatchElementErrorPolicy::Exception,
        )?;
        dispatch::into_values(outcomes)
    }

    /// Register one entity, returning an element error as data.
    pub fn try_register_one(
        &self,
        entity_reference: &EntityReference,
        entity_traits_data: &TraitsData,
        access: PublishingAccess,
        context: &Context,
    ) -> Result<BatchOutcome<EntityReference>> {
        let outcomes = self.register_with_policy(
            slice::from_ref(entity_reference),
            slice::from_ref(entity_traits_data),
            access,
            context,
            BatchElementErrorPolicy::Variant,
        )?;
        dispatch::into_single(outcomes)
    }

    /// Register a batch, returning each element's outcome by index.
    pub fn try_register_many(
        &self,
        entity_references: &[EntityReference],
        entity_traits_datas: &[TraitsData],
        access: PublishingAccess,
        context: &Context,
    ) -> Result<Vec<BatchOutcome<EntityReference>>> {
        self.register_with_policy(
            entity_references,
            entity_traits_datas,
            access,
            context,
            BatchElementErrorPolicy::Variant,
        )
    }
}
