//! Required capability verification

use assetlink_core::{Capability, Error, Result};
use assetlink_manager_api::ManagerInterface;
use tracing::debug;

/// Fail with `Configuration` unless the manager has every capability in
/// [`Capability::REQUIRED`].
///
/// These are checked at runtime rather than through the type system: a
/// manager implemented across several languages may only provide some
/// methods in one of them.
pub(crate) fn verify_required_capabilities(interface: &dyn ManagerInterface) -> Result<()> {
    let missing: Vec<&str> = Capability::REQUIRED
        .iter()
        .filter(|capability| !interface.has_capability(**capability))
        .map(Capability::name)
        .collect();

    if missing.is_empty() {
        debug!(manager = %interface.identifier(), "Required capabilities present");
        return Ok(());
    }

    Err(Error::configuration(format!(
        "Manager implementation for '{}' does not support the required capabilities: {}",
        interface.identifier(),
        missing.join(", ")
    )))
}
