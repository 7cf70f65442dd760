//! Manager-side API for assetlink
//!
//! Everything a manager plugin implements or receives:
//! - [`ManagerInterface`]: the plugin contract
//! - [`EntityReferencePagerInterface`]: cursor over relationship results
//! - [`HostSession`] / [`HostInterface`]: the calling host
//!
//! Manager implementations depend on this crate and `assetlink-core` only;
//! they never see host-side types.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod host_session;
mod interface;
mod pager;

pub use host_session::{HostInterface, HostSession};
pub use interface::{BatchElementErrorCallback, ManagerInterface, SuccessCallback};
pub use pager::{EntityReferencePagerInterface, EntityReferencePagerInterfacePtr};
