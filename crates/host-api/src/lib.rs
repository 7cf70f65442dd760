//! Host-side API for assetlink
//!
//! Hosts talk to a manager plugin only through [`Manager`]. It provides:
//! - Capability verification at initialization
//! - Context creation, derivation and persistence
//! - Entity reference validation
//! - Batched entity operations with four convenience calling conventions
//! - Relationship queries returning host-owned [`EntityReferencePager`]s
//!
//! ## Quick Start
//!
//! ```ignore
//! use assetlink_host_api::{Manager, ManagerConfig};
//!
//! let manager = Manager::new(interface, host_session);
//! manager.initialize_from_config(&ManagerConfig::from_file(path)?)?;
//!
//! let context = manager.create_context()?;
//! let reference = manager.create_entity_reference("asset://shot/010")?;
//! let data = manager.resolve_one(&reference, &trait_set, ResolveAccess::Read, &context)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
mod dispatch;
mod manager;
mod pager;

pub use config::{ManagerConfig, CONFIG_FILE_NAME};
pub use dispatch::{BatchElementErrorPolicy, BatchOutcome};
pub use manager::Manager;
pub use pager::{EntityReferencePager, Pages};
