//! Error types for the assetlink bridge
//!
//! Two kinds of failure cross the bridge:
//!
//! | Kind | Type | Delivery |
//! |------|------|----------|
//! | Call-level | [`Error`] | returned from the call, before or instead of dispatch |
//! | Per-element | [`BatchElementError`] | handed to the error callback for one index |
//!
//! A [`BatchElementError`] is data, not a failure of the call. The host
//! API decides whether to hand it back as a per-index outcome or to
//! convert it into [`Error::BatchElement`] with a rendered message.

use crate::access::Access;
use crate::entity_reference::EntityReference;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Call-level errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Configuration | `Configuration` | Manager unusable as configured |
/// | Validation | `InputValidation` | Caller broke a precondition |
/// | Element | `BatchElement` | A per-element error raised by a throwing convention |
/// | Manager | `NotImplemented`, `Manager` | Manager failed the whole call |
/// | System | `Internal` | Contract violation or bug |
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Manager is missing something it needs, e.g. required capabilities.
    #[error("configuration error: {reason}")]
    Configuration {
        /// What went wrong
        reason: String,
    },

    /// Caller-side contract violation, raised before any dispatch.
    #[error("input validation error: {reason}")]
    InputValidation {
        /// What went wrong
        reason: String,
    },

    /// A per-element error converted into a failure.
    #[error("{message}")]
    BatchElement {
        /// Index of the failing element in the batch
        index: usize,
        /// The error the manager reported
        error: BatchElementError,
        /// Rendered message including entity and access mode
        message: String,
    },

    /// Manager does not implement the requested method.
    #[error("not implemented: {reason}")]
    NotImplemented {
        /// What went wrong
        reason: String,
    },

    /// Manager failed the call as a whole.
    #[error("manager error: {reason}")]
    Manager {
        /// What went wrong
        reason: String,
    },

    /// Internal error (bug or broken contract)
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Build an `InputValidation` error.
    pub fn input_validation(reason: impl Into<String>) -> Self {
        Error::InputValidation {
            reason: reason.into(),
        }
    }

    /// Build a `Configuration` error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Build a `NotImplemented` error.
    pub fn not_implemented(reason: impl Into<String>) -> Self {
        Error::NotImplemented {
            reason: reason.into(),
        }
    }

    /// Build an `Internal` error.
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal {
            reason: reason.into(),
        }
    }

    /// Convert a per-element error into a failure for `entity_reference`.
    pub fn batch_element(
        index: usize,
        error: BatchElementError,
        entity_reference: &EntityReference,
        access: impl Into<Access>,
    ) -> Self {
        let message = render_batch_element_message(&error, index, entity_reference, access.into());
        Error::BatchElement {
            index,
            error,
            message,
        }
    }
}

/// Reason a single element of a batch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchElementErrorCode {
    /// Unclassified failure
    Unknown,
    /// The reference is well formed but unknown to the manager
    InvalidEntityReference,
    /// The reference string is not one the manager can parse
    MalformedEntityReference,
    /// The entity exists but the access mode is not allowed
    EntityAccessError,
    /// The entity could not be resolved
    EntityResolutionError,
    /// The preflight hint was rejected
    InvalidPreflightHint,
    /// The requested trait set is not supported for this entity
    InvalidTraitSet,
}

impl BatchElementErrorCode {
    /// Stable name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            BatchElementErrorCode::Unknown => "unknown",
            BatchElementErrorCode::InvalidEntityReference => "invalidEntityReference",
            BatchElementErrorCode::MalformedEntityReference => "malformedEntityReference",
            BatchElementErrorCode::EntityAccessError => "entityAccessError",
            BatchElementErrorCode::EntityResolutionError => "entityResolutionError",
            BatchElementErrorCode::InvalidPreflightHint => "invalidPreflightHint",
            BatchElementErrorCode::InvalidTraitSet => "invalidTraitSet",
        }
    }
}

impl fmt::Display for BatchElementErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-element failure reported by a manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchElementError {
    /// Machine-readable reason
    pub code: BatchElementErrorCode,
    /// Human-readable detail
    pub message: String,
}

impl BatchElementError {
    /// Create a new element error.
    pub fn new(code: BatchElementErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for BatchElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Render the message carried by [`Error::BatchElement`].
///
/// Format: `<code>: <message> [index=<i>] [access=<mode>] [entity=<ref>]`
pub fn render_batch_element_message(
    error: &BatchElementError,
    index: usize,
    entity_reference: &EntityReference,
    access: Access,
) -> String {
    format!(
        "{}: {} [index={}] [access={}] [entity={}]",
        error.code, error.message, index, access, entity_reference
    )
}
