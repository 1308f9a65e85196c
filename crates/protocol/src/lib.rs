//! Wire codec and message dispatcher for the OSLC delegated-UI protocol.
//!
//! A delegated UI is a remote page, loaded in an iframe, that picks or creates
//! resources on behalf of the embedding application and hands the result back
//! across the window boundary. This crate holds everything about that exchange
//! that does not depend on a live browser:
//!
//! - [`types`] - [`Resource`], [`Response`] and the closed [`Protocol`] enum
//! - [`codec`] - `oslc-response:` framing via [`encode_response`] / [`decode_response`]
//! - [`dialog_url`] - protocol-qualified dialog URLs via [`build_dialog_url`]
//! - [`window`] - traits the platform binding implements ([`HostWindow`],
//!   [`ContentFrame`], [`MessageChannel`])
//! - [`dispatch`] - the [`Dispatcher`] listener arena and [`ListenerHandle`]
//! - [`respond`] - responder side, [`send_response`] over either transport
//!
//! # Receiving a selection
//!
//! ```ignore
//! let dispatcher = Dispatcher::new(channel);
//! let mut handle = dispatcher.register_selection_listener(
//!     frame,
//!     |resources| println!("picked {} resources", resources.len()),
//!     None,
//! );
//! // ...
//! handle.release();
//! ```

pub mod codec;
pub mod dialog_url;
pub mod dispatch;
pub mod error;
pub mod respond;
pub mod types;
pub mod window;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use codec::{RESPONSE_PREFIX, decode_response, encode_response, has_response_prefix};
pub use dialog_url::{INERT_FRAME_URL, build_dialog_url, detect_protocol};
pub use dispatch::{
	Dispatcher, ListenerHandle, ListenerId, PreprocessHandler, is_valid_message,
};
pub use error::{Error, Result};
pub use respond::{
	ANY_ORIGIN, ResponsePayload, send_cancel_response, send_creation_response, send_response,
	send_selection_response,
};
pub use types::{Protocol, Resource, Response, SelectionResult};
pub use window::{ContentFrame, HostWindow, InboundMessage, MessageChannel, MessageSink};
