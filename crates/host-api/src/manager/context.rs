//! Context creation and persistence.

use super::Manager;
use assetlink_core::{Capability, Context, Result};
use tracing::debug;

impl Manager {
    /// Create a top-level context with an empty locale.
    ///
    /// Stateful managers also get to attach fresh manager state.
    pub fn create_context(&self) -> Result<Context> {
        let mut context = Context::new();
        if self.has_capability(Capability::StatefulContexts) {
            context.manager_state = Some(self.interface.create_state(&self.host_session)?);
        }
        Ok(context)
    }

    /// Create a context for a sub-task of `parent`.
    ///
    /// The locale is copied, so later changes to either context's locale
    /// stay local to it. If the parent carries manager state the manager
    /// derives child state from it.
    pub fn create_child_context(&self, parent: &Context) -> Result<Context> {
        let mut context = Context::with_locale(parent.locale.clone());
        if let Some(parent_state) = &parent.manager_state {
            context.manager_state = Some(
                self.interface
                    .create_child_state(parent_state, &self.host_session)?,
            );
        }
        Ok(context)
    }

    /// A token from which [`Manager::context_from_persistence_token`] can
    /// restore the context's manager state, e.g. in another process.
    ///
    /// Empty if and only if the context carries no manager state.
    pub fn persistence_token_for_context(&self, context: &Context) -> Result<String> {
        match &context.manager_state {
            Some(state) => self
                .interface
                .persistence_token_for_state(state, &self.host_session),
            None => Ok(String::new()),
        }
    }

    /// Create a context whose manager state is restored from `token`.
    ///
    /// The locale always starts empty; only manager state is persisted.
    /// An empty token gives a context without manager state.
    pub fn context_from_persistence_token(&self, token: &str) -> Result<Context> {
        let mut context = Context::new();
        if !token.is_empty() {
            debug!(manager = %self.identifier(), "Restoring manager state from token");
            context.manager_state = Some(
                self.interface
                    .state_from_persistence_token(token, &self.host_session)?,
            );
        }
        Ok(context)
    }
}
