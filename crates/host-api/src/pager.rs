//! Host-side pager over relationship query results
//!
//! Managers hand back an [`EntityReferencePagerInterface`]; the host never
//! asks them to build host types. The host-facing [`EntityReferencePager`]
//! wraps that cursor together with the host session it must be called
//! with.
//!
//! ## Exhaustion
//!
//! An empty page marks the end of the results. Once the pager has seen
//! an empty page it stops calling the manager: `get` keeps returning an
//! empty page and `next` does nothing.

use assetlink_core::{EntityReferences, Result};
use assetlink_manager_api::{EntityReferencePagerInterfacePtr, HostSession};
use std::fmt;

/// Cursor over pages of related entity references.
pub struct EntityReferencePager {
    interface: EntityReferencePagerInterfacePtr,
    host_session: HostSession,
    exhausted: bool,
}

impl EntityReferencePager {
    /// Pair a manager cursor with the host session used to drive it.
    pub fn new(interface: EntityReferencePagerInterfacePtr, host_session: HostSession) -> Self {
        Self {
            interface,
            host_session,
            exhausted: false,
        }
    }

    /// Whether a page follows the current one.
    pub fn has_next(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        self.interface.has_next(&self.host_session)
    }

    /// The current page. Empty once the results are exhausted.
    pub fn get(&mut self) -> Result<EntityReferences> {
        if self.exhausted {
            return Ok(EntityReferences::new());
        }
        let page = self.interface.get(&self.host_session)?;
        if page.is_empty() {
            self.exhausted = true;
        }
        Ok(page)
    }

    /// Advance to the following page. May block while the manager
    /// fetches it.
    pub fn next(&mut self) -> Result<()> {
        if self.exhausted {
            return Ok(());
        }
        self.interface.next(&self.host_session)
    }

    /// Lazily iterate pages, starting at the current one.
    ///
    /// Each step after the first advances the cursor, so dropping the
    /// iterator and calling `pages` again resumes where it stopped.
    pub fn pages(&mut self) -> Pages<'_> {
        Pages {
            pager: self,
            started: false,
            done: false,
        }
    }
}

impl fmt::Debug for EntityReferencePager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityReferencePager")
            .field("host_session", &self.host_session)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Iterator over the remaining pages of an [`EntityReferencePager`].
///
/// Ends at the first empty page, or after yielding an error.
pub struct Pages<'a> {
    pager: &'a mut EntityReferencePager,
    started: bool,
    done: bool,
}

impl Iterator for Pages<'_> {
    type Item = Result<EntityReferences>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if let Err(e) = self.pager.next() {
                self.done = true;
                return Some(Err(e));
            }
        }
        self.started = true;

        match self.pager.get() {
            Ok(page) if page.is_empty() => {
                self.done = true;
                None
            }
            Ok(page) => Some(Ok(page)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
