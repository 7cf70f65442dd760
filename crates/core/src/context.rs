//! Execution contexts and opaque manager state
//!
//! A [`Context`] scopes one logical unit of host work. It carries:
//! - `locale`: a [`TraitsData`] describing the calling environment
//! - `manager_state`: an optional token owned by the manager
//!
//! ## Manager State
//!
//! The host never looks inside manager state. It is shared by reference
//! ([`ManagerStateHandle`] is an `Arc`) so a parent context, its children
//! and any in-flight call can all hold it; the state lives as long as any
//! holder does. Equality and identity are the manager's concern, which is
//! why the trait only offers a downcast hook.

use crate::traits_data::TraitsData;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque state created and interpreted only by a manager.
pub trait ManagerState: Any + Send + Sync + fmt::Debug {
    /// Downcast hook for the owning manager.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to manager state.
pub type ManagerStateHandle = Arc<dyn ManagerState>;

/// Per-call-chain execution scope.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Description of the calling environment.
    pub locale: TraitsData,
    /// Manager-owned state, if the manager is stateful.
    pub manager_state: Option<ManagerStateHandle>,
}

impl Context {
    /// A context with an empty locale and no manager state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with the given locale and no manager state.
    pub fn with_locale(locale: TraitsData) -> Self {
        Self {
            locale,
            manager_state: None,
        }
    }

    /// Whether the context carries manager state.
    pub fn has_manager_state(&self) -> bool {
        self.manager_state.is_some()
    }
}
