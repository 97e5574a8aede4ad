//! Typed backend-service contracts and adapters used by window processes.
//!
//! This crate is the API-first boundary for the authoritative native backend.
//! Concrete transports (the desktop IPC bridge) implement these traits, while
//! the `Noop*` and `Memory*` adapters back tests and stub compositions.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod state;
pub mod widgets;

pub use state::{
    BackendFuture, FieldEventStream, MemoryStateService, NoopStateService, StateService,
};
pub use widgets::{MemoryWidgetService, NoopWidgetService, WidgetService};
