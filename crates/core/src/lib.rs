//! Core types for assetlink
//!
//! This crate defines the value types both sides of the bridge agree on:
//! - Value / InfoDictionary / StrMap: scalar data and free-form dictionaries
//! - TraitsData / TraitSet: trait-keyed property documents
//! - EntityReference: validated reference strings
//! - Context / ManagerState: execution scope and opaque manager state
//! - Access modes: per-operation intent enums
//! - Capability: optional manager behaviors
//! - Error / BatchElementError: call-level and per-element failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod capability;
pub mod constants;
pub mod context;
pub mod entity_reference;
pub mod error;
pub mod traits_data;
pub mod value;

pub use access::{
    Access, DefaultEntityAccess, EntityTraitsAccess, PolicyAccess, PublishingAccess,
    RelationsAccess, ResolveAccess,
};
pub use capability::Capability;
pub use context::{Context, ManagerState, ManagerStateHandle};
pub use entity_reference::{EntityReference, EntityReferences};
pub use error::{
    render_batch_element_message, BatchElementError, BatchElementErrorCode, Error, Result,
};
pub use traits_data::{TraitSet, TraitSets, TraitsData};
pub use value::{InfoDictionary, StrMap, Value};
