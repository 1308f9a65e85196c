//! Selection dialog state machine for OSLC delegated UIs.
//!
//! [`SelectionDialog`] owns the lifecycle of one widget: a button that opens a
//! modal dialog, an iframe pointed at the delegated UI, and the listener that
//! waits for its answer. It draws through a [`DialogSurface`] and talks to the
//! delegated UI through an [`oslc_protocol::Dispatcher`], so it runs the same in
//! a browser binding and in tests without a document.
//!
//! # Lifecycle
//!
//! ```text
//! Closed ──open()──▸ Opening ──frame_loaded()──▸ AwaitingResponse
//!    ▲                  │                              │
//!    └── selection / close() / teardown() ◂────────────┘
//! ```
//!
//! The only output is a [`SelectionEvent`]: `oslc-selection-made` with the
//! resources (possibly none) or `oslc-selection-cancelled` with a reason.

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod session;
pub mod surface;

pub use config::{Attribute, DEFAULT_BUTTON_TEXT, DEFAULT_DIALOG_TITLE, DialogConfig};
pub use controller::SelectionDialog;
pub use error::{Error, Result};
pub use events::{CancelReason, SELECTION_CANCELLED, SELECTION_MADE, SelectionEvent};
pub use session::Phase;
pub use surface::DialogSurface;
