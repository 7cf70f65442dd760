//! Assetlink - host-to-manager bridge for asset management interoperability
//!
//! Hosts (applications that consume or publish assets) talk to managers
//! (plugins that own asset identity and storage) through one facade.
//!
//! # Quick Start
//!
//! ```ignore
//! use assetlink::{Manager, ManagerConfig, ResolveAccess};
//!
//! let manager = Manager::new(interface, host_session);
//! manager.initialize_from_config(&ManagerConfig::from_file(path)?)?;
//!
//! let context = manager.create_context()?;
//! let reference = manager.create_entity_reference("asset://shot/010")?;
//! let data = manager.resolve_one(&reference, &trait_set, ResolveAccess::Read, &context)?;
//! ```
//!
//! # Architecture
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `assetlink-core` | shared value types, access modes, errors |
//! | `assetlink-manager-api` | the contract manager plugins implement |
//! | `assetlink-host-api` | the [`Manager`] facade hosts call |

pub use assetlink_core::*;
pub use assetlink_host_api::*;
pub use assetlink_manager_api::*;
