//! Compile-time enumeration of the settable state fields and their wire envelopes.
//!
//! The backend pushes single-field updates as `(field, value)` pairs. The
//! enumeration below is the static mapping from wire field token to typed
//! update; there is no runtime reflection over the snapshot shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Reservation, UiColors, WindowHandle, WindowManagerSettings};

/// Backend-settable fields of [`crate::model::StateSnapshot`].
///
/// `version` is intentionally absent: it is advanced locally by the owning
/// store and is never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    /// Opaque layout descriptor.
    Layout,
    /// Window-manager configuration.
    Settings,
    /// Theme-derived color set.
    Colors,
    /// Focused-window handle.
    ActiveWindow,
    /// Pending placement reservation.
    Reservation,
    /// Workspace overlay visibility.
    OverlayVisible,
}

impl StateField {
    /// Every settable field, in declaration order.
    pub const ALL: [StateField; 6] = [
        StateField::Layout,
        StateField::Settings,
        StateField::Colors,
        StateField::ActiveWindow,
        StateField::Reservation,
        StateField::OverlayVisible,
    ];

    /// Returns the stable wire token for this field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Settings => "settings",
            Self::Colors => "colors",
            Self::ActiveWindow => "activeWindow",
            Self::Reservation => "reservation",
            Self::OverlayVisible => "overlayVisible",
        }
    }

    /// Resolves a wire token back to its field, if it names one.
    pub fn parse(name: &str) -> Option<StateField> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// One typed single-field update, carrying the field's new value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    /// Replace the layout descriptor.
    SetLayout(Option<Value>),
    /// Replace the window-manager configuration.
    SetSettings(WindowManagerSettings),
    /// Replace the theme-derived color set.
    SetColors(UiColors),
    /// Replace the focused-window handle.
    SetActiveWindow(WindowHandle),
    /// Replace the pending placement reservation.
    SetReservation(Option<Reservation>),
    /// Replace the overlay visibility flag.
    SetOverlayVisible(bool),
}

impl FieldUpdate {
    /// Returns the field this update targets.
    pub const fn field(&self) -> StateField {
        match self {
            Self::SetLayout(_) => StateField::Layout,
            Self::SetSettings(_) => StateField::Settings,
            Self::SetColors(_) => StateField::Colors,
            Self::SetActiveWindow(_) => StateField::ActiveWindow,
            Self::SetReservation(_) => StateField::Reservation,
            Self::SetOverlayVisible(_) => StateField::OverlayVisible,
        }
    }

    /// Decodes a wire value into the typed update for `field`.
    ///
    /// # Errors
    ///
    /// Returns a message naming the field when `value` does not match its
    /// schema.
    pub fn from_wire(field: StateField, value: Value) -> Result<Self, String> {
        fn decode<T: DeserializeOwned>(field: StateField, value: Value) -> Result<T, String> {
            serde_json::from_value(value).map_err(|e| format!("field `{}`: {e}", field.name()))
        }

        Ok(match field {
            StateField::Layout => Self::SetLayout(decode(field, value)?),
            StateField::Settings => Self::SetSettings(decode(field, value)?),
            StateField::Colors => Self::SetColors(decode(field, value)?),
            StateField::ActiveWindow => Self::SetActiveWindow(decode(field, value)?),
            StateField::Reservation => Self::SetReservation(decode(field, value)?),
            StateField::OverlayVisible => Self::SetOverlayVisible(decode(field, value)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Wire envelope for one backend-pushed field update.
pub struct FieldEvent {
    /// Wire token of the field being updated.
    pub field: String,
    /// New value for the field.
    pub value: Value,
}

impl FieldEvent {
    /// Creates an event from a field token and value.
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Full configuration returned by the backend's one-shot state fetch.
///
/// Covers every snapshot field except `version`, which starts at the store's
/// own initial value and is advanced locally.
pub struct InitialState {
    /// Opaque layout descriptor.
    pub layout: Option<Value>,
    /// Window-manager configuration.
    pub settings: WindowManagerSettings,
    /// Theme-derived color set.
    pub colors: UiColors,
    /// Focused-window handle.
    pub active_window: WindowHandle,
    /// Pending placement reservation.
    pub reservation: Option<Reservation>,
    /// Workspace overlay visibility.
    pub overlay_visible: bool,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            layout: None,
            settings: WindowManagerSettings::default(),
            colors: UiColors::default(),
            active_window: WindowHandle::NONE,
            reservation: None,
            overlay_visible: true,
        }
    }
}
