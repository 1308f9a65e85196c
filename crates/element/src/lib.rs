//! Browser binding for the OSLC selection dialog.
//!
//! Loading the module defines `<oslc-selection-button>`:
//!
//! ```html
//! <oslc-selection-button
//!   dialog-url="https://provider.example/selector"
//!   dialog-title="Select Requirements"
//!   button-text="Select Resources">
//! </oslc-selection-button>
//! ```
//!
//! The element fires `oslc-selection-made` (`detail.resources`) or
//! `oslc-selection-cancelled` (`detail.reason`). Delegated UI pages use the
//! exported `send*Response` functions to answer.

#![cfg(target_arch = "wasm32")]

mod element;
mod logging;
mod responder;
mod styles;
mod surface;
mod window;

pub use element::{SelectionButton, TAG_NAME, define};
pub use logging::{DEFAULT_FILTER, init_logging, set_log_level};
pub use responder::{
	build_dialog_url, send_cancel_response, send_creation_response, send_response,
	send_selection_response,
};
pub use surface::ShadowSurface;
pub use window::{IframeFrame, MessageHook, WebWindow, WindowChannel};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();
	init_logging(DEFAULT_FILTER);

	if let Err(err) = define() {
		tracing::error!(error = ?err, "failed to define <{TAG_NAME}>");
	}
}
