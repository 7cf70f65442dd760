//! Relationship queries.
//!
//! Managers report each result as an [`EntityReferencePagerInterfacePtr`];
//! they know nothing of host types. Each one is wrapped into an
//! [`EntityReferencePager`] paired with this manager's host session at
//! the moment it is delivered.

use super::Manager;
use crate::pager::EntityReferencePager;
use assetlink_core::{
    Context, EntityReference, Error, RelationsAccess, Result, TraitSet, TraitsData,
};
use assetlink_manager_api::{
    BatchElementErrorCallback, EntityReferencePagerInterfacePtr, SuccessCallback,
};
use tracing::debug;

fn check_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::input_validation("pageSize must be greater than zero."));
    }
    Ok(())
}

impl Manager {
    /// For each entity, a pager over the entities related to it by
    /// `relationship`.
    ///
    /// `result_trait_set` asks the manager to only page entities with
    /// those traits; empty means no filter.
    ///
    /// # Errors
    ///
    /// `InputValidation` if `page_size` is zero. The manager is not
    /// contacted in that case.
    #[allow(clippy::too_many_arguments)]
    pub fn get_with_relationship(
        &self,
        entity_references: &[EntityReference],
        relationship: &TraitsData,
        page_size: usize,
        access: RelationsAccess,
        context: &Context,
        success: SuccessCallback<'_, EntityReferencePager>,
        error: BatchElementErrorCallback<'_>,
        result_trait_set: &TraitSet,
    ) -> Result<()> {
        check_page_size(page_size)?;
        debug!(
            operation = "get_with_relationship",
            count = entity_references.len(),
            page_size,
            "Dispatching batch"
        );

        let host_session = &self.host_session;
        let converting_success = |index: usize, pager: EntityReferencePagerInterfacePtr| {
            success(index, EntityReferencePager::new(pager, host_session.clone()))
        };
        self.interface.get_with_relationship(
            entity_references,
            relationship,
            result_trait_set,
            page_size,
            access,
            context,
            &self.host_session,
            &converting_success,
            error,
        )
    }

    /// For one entity, a pager per relationship over the entities related
    /// to it.
    ///
    /// Indices in the callbacks refer to `relationships`.
    ///
    /// # Errors
    ///
    /// `InputValidation` if `page_size` is zero. The manager is not
    /// contacted in that case.
    #[allow(clippy::too_many_arguments)]
    pub fn get_with_relationships(
        &self,
        entity_reference: &EntityReference,
        relationships: &[TraitsData],
        page_size: usize,
        access: RelationsAccess,
        context: &Context,
        success: SuccessCallback<'_, EntityReferencePager>,
        error: BatchElementErrorCallback<'_>,
        result_trait_set: &TraitSet,
    ) -> Result<()> {
        check_page_size(page_size)?;
        debug!(
            operation = "get_with_relationships",
            count = relationships.len(),
            page_size,
            "Dispatching batch"
        );

        let host_session = &self.host_session;
        let converting_success = |index: usize, pager: EntityReferencePagerInterfacePtr| {
            success(index, EntityReferencePager::new(pager, host_session.clone()))
        };
        self.interface.get_with_relationships(
            entity_reference,
            relationships,
            result_trait_set,
            page_size,
            access,
            context,
            &self.host_session,
            &converting_success,
            error,
        )
    }
}
