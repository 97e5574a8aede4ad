//! Window startup sequencing: hydrate state, establish sync, mount the widget.

use std::rc::Rc;

use platform_backend::{StateService, WidgetService};
use shell_contract::{WidgetDescriptor, WindowIdentity};
use thiserror::Error;

use crate::{
    store::StateStore,
    sync::{SyncBridge, SyncError, UpdateFeed},
    widget_host::{ContentTree, WidgetError, WidgetHost},
};

#[derive(Debug, Error, PartialEq, Eq)]
/// Fatal window startup failures.
///
/// Any of these must surface as a visible startup error; the window never
/// reaches a rendered state with incomplete or default-only content.
pub enum BootError {
    /// Initial state load or update subscription failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
    /// Widget resolution or injection failed.
    #[error(transparent)]
    Widget(#[from] WidgetError),
}

#[derive(Clone)]
/// Backend services required to boot one window.
pub struct BootServices {
    /// Authoritative state source.
    pub state: Rc<dyn StateService>,
    /// Widget registry source.
    pub widgets: Rc<dyn WidgetService>,
}

/// A fully initialized window core, ready for first paint.
pub struct BootedWindow {
    /// The hydrated per-window state store.
    pub store: StateStore,
    /// Update feed to be driven by the window's event loop.
    pub updates: UpdateFeed,
    /// The widget mounted into the window's content tree.
    pub widget: WidgetDescriptor,
}

/// Boots one window: hydrates the store from the backend, registers the
/// update subscription, and mounts the widget selected by `identity`.
///
/// Completion gates first paint — when this returns, the store already holds
/// backend state and the widget's content is injected. The returned update
/// feed must be spawned onto the window's event loop; it does not block
/// startup. A stalled backend stalls startup indefinitely; any timeout is
/// the transport's concern.
///
/// # Errors
///
/// Returns [`BootError`] when the backend is unavailable or the window's
/// widget cannot be resolved or injected. Callers must surface the failure
/// instead of rendering.
pub async fn boot_window(
    identity: &WindowIdentity,
    services: &BootServices,
    content: &mut dyn ContentTree,
) -> Result<BootedWindow, BootError> {
    let store = StateStore::new();
    let bridge = SyncBridge::new(store.clone(), services.state.clone());

    bridge.load_initial().await?;
    let updates = bridge.register_updates().await?;

    let widget = WidgetHost::new(services.widgets.clone())
        .mount(identity, content)
        .await?;

    Ok(BootedWindow {
        store,
        updates,
        widget,
    })
}
