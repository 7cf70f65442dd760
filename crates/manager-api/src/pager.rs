//! Manager-side paging over relationship query results

use crate::HostSession;
use assetlink_core::{EntityReferences, Result};

/// Cursor over pages of entity references, implemented by a manager.
///
/// The cursor starts on the first page. `get` returns the current page
/// without moving; `next` moves to the following page, which may block
/// while the manager fetches it. An empty page marks the end.
pub trait EntityReferencePagerInterface: Send {
    /// Whether a page follows the current one.
    fn has_next(&mut self, host_session: &HostSession) -> Result<bool>;

    /// The current page. Empty once the results are exhausted.
    fn get(&mut self, host_session: &HostSession) -> Result<EntityReferences>;

    /// Advance to the following page.
    fn next(&mut self, host_session: &HostSession) -> Result<()>;
}

/// Owned pager handed from a manager to the host.
pub type EntityReferencePagerInterfacePtr = Box<dyn EntityReferencePagerInterface>;
