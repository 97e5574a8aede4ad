//! Keeps one window's state store eventually consistent with the backend.

use std::rc::Rc;

use futures::StreamExt;
use platform_backend::{FieldEventStream, StateService};
use shell_contract::FieldEvent;
use thiserror::Error;

use crate::store::StateStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced while establishing backend synchronization.
pub enum SyncError {
    /// The backend request failed or the backend is unreachable.
    ///
    /// Retry-versus-abort policy is delegated to the caller; this core only
    /// reports the failure.
    #[error("backend unavailable: {0}")]
    Backend(String),
}

/// Reconciles one window's local snapshot with the authoritative backend.
///
/// The backend is the single writer of truth for synchronized fields; the
/// bridge's store writes are the only path by which backend-originated
/// changes reach the snapshot.
pub struct SyncBridge {
    store: StateStore,
    state: Rc<dyn StateService>,
}

impl SyncBridge {
    /// Creates a bridge applying backend state onto `store`.
    pub fn new(store: StateStore, state: Rc<dyn StateService>) -> Self {
        Self { store, state }
    }

    /// Fetches the full current configuration and hydrates the store.
    ///
    /// Must complete, and its result must be applied, before the window's
    /// content is allowed to render, so the first paint never shows stale
    /// defaults for backend-owned fields.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Backend`] when the fetch fails.
    pub async fn load_initial(&self) -> Result<(), SyncError> {
        let initial = self
            .state
            .fetch_initial_state()
            .await
            .map_err(SyncError::Backend)?;
        self.store.hydrate(initial);
        Ok(())
    }

    /// Subscribes to the backend push channel and returns the update feed.
    ///
    /// Establishing the subscription does not block startup; the returned
    /// feed is driven by the window's event loop for the life of the window.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Backend`] when the subscription cannot be
    /// established.
    pub async fn register_updates(&self) -> Result<UpdateFeed, SyncError> {
        let events = self
            .state
            .subscribe_field_updates()
            .await
            .map_err(SyncError::Backend)?;
        Ok(UpdateFeed {
            store: self.store.clone(),
            events,
        })
    }
}

/// Long-lived task applying pushed field updates in arrival order.
pub struct UpdateFeed {
    store: StateStore,
    events: FieldEventStream,
}

impl UpdateFeed {
    /// Applies events strictly in arrival order until the channel closes.
    ///
    /// Events are never reordered or coalesced, so consecutive updates to
    /// the same field converge to the last value pushed. Channel durability
    /// and reconnects are the transport's concern.
    pub async fn run(mut self) {
        while let Some(event) = self.events.next().await {
            self.apply(event);
        }
    }

    /// Applies one event; unknown fields and undecodable values are dropped
    /// with a warning and do not stop subsequent events.
    fn apply(&self, event: FieldEvent) {
        if let Err(err) = self.store.apply_named(&event.field, event.value) {
            log::warn!("dropped backend update: {err}");
        }
    }
}
