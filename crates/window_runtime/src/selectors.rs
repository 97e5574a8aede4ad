//! Pure per-field projections over [`StateSnapshot`].
//!
//! Each selector depends on exactly one field, so a consumer can memoize on
//! the selected value and skip recomputation whenever consecutive results
//! compare equal, instead of subscribing to the whole snapshot.

use serde_json::Value;
use shell_contract::{Reservation, StateSnapshot, UiColors, WindowHandle, WindowManagerSettings};

/// Selects the local version counter.
pub fn version(snapshot: &StateSnapshot) -> u64 {
    snapshot.version
}

/// Selects the opaque layout descriptor.
pub fn layout(snapshot: &StateSnapshot) -> Option<&Value> {
    snapshot.layout.as_ref()
}

/// Selects the window-manager settings.
pub fn settings(snapshot: &StateSnapshot) -> &WindowManagerSettings {
    &snapshot.settings
}

/// Selects the theme-derived color set.
pub fn colors(snapshot: &StateSnapshot) -> &UiColors {
    &snapshot.colors
}

/// Selects the focused-window handle.
pub fn active_window(snapshot: &StateSnapshot) -> WindowHandle {
    snapshot.active_window
}

/// Selects the pending placement reservation.
pub fn reservation(snapshot: &StateSnapshot) -> Option<Reservation> {
    snapshot.reservation
}

/// Selects the overlay visibility flag.
pub fn overlay_visible(snapshot: &StateSnapshot) -> bool {
    snapshot.overlay_visible
}

#[cfg(test)]
mod tests {
    use shell_contract::FieldUpdate;

    use super::*;
    use crate::store::StateStore;

    #[test]
    fn selector_result_is_stable_across_unrelated_mutations() {
        let store = StateStore::new();
        let colors_before = colors(&store.read()).clone();
        let settings_before = settings(&store.read()).clone();

        store.apply(FieldUpdate::SetActiveWindow(WindowHandle(11)));
        store.apply(FieldUpdate::SetOverlayVisible(false));
        store.force_update();

        assert_eq!(colors(&store.read()).clone(), colors_before);
        assert_eq!(settings(&store.read()).clone(), settings_before);
    }

    #[test]
    fn selectors_project_the_current_field_value() {
        let store = StateStore::new();
        store.apply(FieldUpdate::SetActiveWindow(WindowHandle(11)));
        store.apply(FieldUpdate::SetReservation(Some(Reservation::Stack)));
        store.force_update();

        let snapshot = store.snapshot();
        assert_eq!(active_window(&snapshot), WindowHandle(11));
        assert_eq!(reservation(&snapshot), Some(Reservation::Stack));
        assert_eq!(version(&snapshot), 1);
        assert!(overlay_visible(&snapshot));
        assert_eq!(layout(&snapshot), None);
    }
}
