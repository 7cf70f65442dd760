//! The host as seen by a manager
//!
//! Every manager call receives the [`HostSession`] of the host that made
//! it, so a manager serving several hosts can tell them apart.

use assetlink_core::InfoDictionary;
use std::fmt;
use std::sync::Arc;

/// Identity of the calling host application.
pub trait HostInterface: Send + Sync {
    /// Unique, reverse-DNS style identifier of the host.
    fn identifier(&self) -> String;

    /// Human readable name of the host.
    fn display_name(&self) -> String;

    /// Free-form information about the host.
    fn info(&self) -> InfoDictionary {
        InfoDictionary::new()
    }
}

/// Host handle passed to every manager call.
#[derive(Clone)]
pub struct HostSession {
    host: Arc<dyn HostInterface>,
}

impl HostSession {
    /// Wrap a host implementation.
    pub fn new(host: Arc<dyn HostInterface>) -> Self {
        Self { host }
    }

    /// The host this session belongs to.
    pub fn host(&self) -> &dyn HostInterface {
        self.host.as_ref()
    }
}

impl fmt::Debug for HostSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostSession")
            .field("host", &self.host.identifier())
            .finish()
    }
}
