//! Per-window runtime core for the desktop shell: versioned state store,
//! backend sync bridge, and widget content host.
//!
//! Each shell window runs this core on its own single-threaded event loop.
//! [`boot::boot_window`] sequences startup so the first paint never observes
//! default-only state or a window without its designated widget content.

pub mod boot;
pub mod selectors;
pub mod store;
pub mod sync;
pub mod widget_host;

pub use boot::{boot_window, BootError, BootServices, BootedWindow};
pub use store::{StateStore, StoreError};
pub use sync::{SyncBridge, SyncError, UpdateFeed};
pub use widget_host::{
    inject, resolve, ContentOp, ContentTree, MemoryContentTree, NoopContentTree, WidgetError,
    WidgetHost,
};
