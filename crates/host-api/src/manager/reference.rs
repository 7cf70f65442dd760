//! Entity reference validation.

use super::Manager;
use assetlink_core::constants::INFO_KEY_ENTITY_REFERENCES_MATCH_PREFIX;
use assetlink_core::{EntityReference, Error, InfoDictionary, Result};
use tracing::{debug, warn};

/// The prefix a manager publishes in its info, if it is a string.
pub(super) fn entity_reference_prefix_from_info(info: &InfoDictionary) -> Option<String> {
    let value = info.get(INFO_KEY_ENTITY_REFERENCES_MATCH_PREFIX)?;
    match value.as_str() {
        Some(prefix) => {
            debug!(
                prefix,
                "Entity reference prefix provided by manager info; \
                 reference strings will be checked locally"
            );
            Some(prefix.to_string())
        }
        None => {
            warn!(
                actual = value.type_name(),
                "Entity reference prefix given but is not a string; ignoring"
            );
            None
        }
    }
}

impl Manager {
    /// Whether `some_string` is an entity reference of this manager.
    ///
    /// Uses the cached prefix when the manager published one, otherwise
    /// asks the manager.
    pub fn is_entity_reference_string(&self, some_string: &str) -> bool {
        if let Some(prefix) = self.entity_reference_prefix.read().as_deref() {
            return some_string.starts_with(prefix);
        }
        self.interface
            .is_entity_reference_string(some_string, &self.host_session)
    }

    /// Validate `entity_reference_string` and wrap it.
    ///
    /// # Errors
    ///
    /// `InputValidation` carrying the string if the manager does not
    /// recognize it.
    pub fn create_entity_reference(
        &self,
        entity_reference_string: impl Into<String>,
    ) -> Result<EntityReference> {
        let entity_reference_string = entity_reference_string.into();
        if !self.is_entity_reference_string(&entity_reference_string) {
            return Err(Error::input_validation(format!(
                "Invalid entity reference: {}",
                entity_reference_string
            )));
        }
        Ok(EntityReference::new_unchecked(entity_reference_string))
    }

    /// Validate and wrap, or `None` if the string is not a reference.
    pub fn create_entity_reference_if_valid(
        &self,
        entity_reference_string: impl Into<String>,
    ) -> Option<EntityReference> {
        let entity_reference_string = entity_reference_string.into();
        self.is_entity_reference_string(&entity_reference_string)
            .then(|| EntityReference::new_unchecked(entity_reference_string))
    }
}
