//! Shared state and widget contracts between the native shell backend and window processes.
//!
//! This crate is intentionally runtime-agnostic. It defines the versioned
//! per-window state record, the compile-time enumeration of its settable
//! fields with their wire envelopes, and the widget identity/content
//! descriptors resolved at window startup — without depending on any UI
//! runtime, transport, or desktop host internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fields;
pub mod model;
pub mod widget;

pub use fields::{FieldEvent, FieldUpdate, InitialState, StateField};
pub use model::{
    BorderSettings, FloatingWindowSettings, Reservation, StateSnapshot, UiColors, WindowHandle,
    WindowManagerSettings,
};
pub use widget::{WidgetDescriptor, WidgetId, WindowIdentity};
