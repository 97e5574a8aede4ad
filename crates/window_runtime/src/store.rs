//! Versioned state store owned by one window process.

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use serde_json::Value;
use shell_contract::{FieldUpdate, InitialState, StateField, StateSnapshot};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors from the name-driven mutation path.
///
/// A local caller naming a field outside the snapshot shape is a programming
/// error; the store fails fast instead of silently ignoring the write.
pub enum StoreError {
    /// The named field is not part of the snapshot shape.
    #[error("unknown state field `{0}`")]
    UnknownField(String),
    /// The value payload does not match the named field's schema.
    #[error("invalid value for state field: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Default)]
/// Clonable handle to one window's versioned state snapshot.
///
/// Clones share the same underlying snapshot. The store is single-threaded
/// and every mutation applies synchronously and in issue order, so a read
/// after a mutation always observes it. Construct one store per window and
/// pass handles to the sync bridge and UI consumers explicitly.
pub struct StateStore {
    snapshot: Rc<RefCell<StateSnapshot>>,
}

impl StateStore {
    /// Creates a store holding the defaulted snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the current snapshot.
    pub fn read(&self) -> Ref<'_, StateSnapshot> {
        self.snapshot.borrow()
    }

    /// Returns an owned copy of the current snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Replaces one field, carrying every other field over unchanged.
    ///
    /// `version` is not advanced here; see [`StateStore::force_update`].
    pub fn apply(&self, update: FieldUpdate) {
        let mut snapshot = self.snapshot.borrow_mut();
        match update {
            FieldUpdate::SetLayout(layout) => snapshot.layout = layout,
            FieldUpdate::SetSettings(settings) => snapshot.settings = settings,
            FieldUpdate::SetColors(colors) => snapshot.colors = colors,
            FieldUpdate::SetActiveWindow(handle) => snapshot.active_window = handle,
            FieldUpdate::SetReservation(reservation) => snapshot.reservation = reservation,
            FieldUpdate::SetOverlayVisible(visible) => snapshot.overlay_visible = visible,
        }
    }

    /// Applies a wire-named field update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownField`] for names outside the snapshot
    /// shape and [`StoreError::InvalidValue`] when the payload does not
    /// decode. The snapshot is untouched in both cases.
    pub fn apply_named(&self, field: &str, value: Value) -> Result<(), StoreError> {
        let field = StateField::parse(field)
            .ok_or_else(|| StoreError::UnknownField(field.to_string()))?;
        let update = FieldUpdate::from_wire(field, value).map_err(StoreError::InvalidValue)?;
        self.apply(update);
        Ok(())
    }

    /// Increments the snapshot version by exactly one and returns the new
    /// value, leaving every other field unchanged.
    ///
    /// Used to force downstream recomputation when an externally observed
    /// side effect invalidates derived presentation without any tracked
    /// field changing.
    pub fn force_update(&self) -> u64 {
        let mut snapshot = self.snapshot.borrow_mut();
        snapshot.version += 1;
        snapshot.version
    }

    /// Replaces all backend-owned fields from `initial` in one step.
    ///
    /// The locally counted `version` is preserved; the backend never writes
    /// it.
    pub fn hydrate(&self, initial: InitialState) {
        let mut snapshot = self.snapshot.borrow_mut();
        snapshot.layout = initial.layout;
        snapshot.settings = initial.settings;
        snapshot.colors = initial.colors;
        snapshot.active_window = initial.active_window;
        snapshot.reservation = initial.reservation;
        snapshot.overlay_visible = initial.overlay_visible;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shell_contract::{Reservation, UiColors, WindowHandle};

    use super::*;

    #[test]
    fn updates_apply_in_issue_order_and_none_are_dropped() {
        let store = StateStore::new();
        let updates = vec![
            FieldUpdate::SetActiveWindow(WindowHandle(3)),
            FieldUpdate::SetOverlayVisible(false),
            FieldUpdate::SetActiveWindow(WindowHandle(9)),
            FieldUpdate::SetReservation(Some(Reservation::Left)),
        ];

        for update in updates.clone() {
            store.apply(update);
        }

        let sequential = StateStore::new();
        for update in updates {
            sequential.apply(update);
            let _ = sequential.snapshot();
        }

        assert_eq!(store.snapshot(), sequential.snapshot());
        assert_eq!(store.read().active_window, WindowHandle(9));
        assert!(!store.read().overlay_visible);
        assert_eq!(store.read().reservation, Some(Reservation::Left));
    }

    #[test]
    fn apply_carries_every_other_field_unchanged() {
        let store = StateStore::new();
        store.apply(FieldUpdate::SetActiveWindow(WindowHandle(5)));
        let before = store.snapshot();

        store.apply(FieldUpdate::SetOverlayVisible(false));

        let expected = StateSnapshot {
            overlay_visible: false,
            ..before
        };
        assert_eq!(store.snapshot(), expected);
    }

    #[test]
    fn force_update_bumps_version_by_exactly_one() {
        let store = StateStore::new();
        store.apply(FieldUpdate::SetColors(UiColors {
            is_dark_mode: true,
            ..UiColors::default()
        }));
        let before = store.snapshot();

        assert_eq!(store.force_update(), before.version + 1);

        let expected = StateSnapshot {
            version: before.version + 1,
            ..before
        };
        assert_eq!(store.snapshot(), expected);
    }

    #[test]
    fn mutation_does_not_advance_version() {
        let store = StateStore::new();
        store.force_update();
        store.apply(FieldUpdate::SetOverlayVisible(false));
        store.apply(FieldUpdate::SetActiveWindow(WindowHandle(2)));
        assert_eq!(store.read().version, 1);
    }

    #[test]
    fn named_mutation_fails_fast_on_unknown_field() {
        let store = StateStore::new();
        let before = store.snapshot();

        let err = store
            .apply_named("focusedWindow", json!(3))
            .expect_err("expected unknown-field error");
        assert_eq!(err, StoreError::UnknownField("focusedWindow".to_string()));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn named_mutation_fails_fast_on_undecodable_value() {
        let store = StateStore::new();
        let before = store.snapshot();

        let err = store
            .apply_named("activeWindow", json!({ "bad": true }))
            .expect_err("expected invalid-value error");
        assert!(matches!(err, StoreError::InvalidValue(_)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn hydrate_replaces_backend_fields_and_preserves_version() {
        let store = StateStore::new();
        store.force_update();
        store.force_update();

        let mut initial = InitialState::default();
        initial.active_window = WindowHandle(7);
        initial.overlay_visible = false;
        initial.layout = Some(json!({ "root": "horizontal" }));
        store.hydrate(initial);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.version, 2);
        assert_eq!(snapshot.active_window, WindowHandle(7));
        assert!(!snapshot.overlay_visible);
        assert_eq!(snapshot.layout, Some(json!({ "root": "horizontal" })));
    }
}
