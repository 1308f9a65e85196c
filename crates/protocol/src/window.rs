//! Platform seams: the traits a browser binding implements.
//!
//! Nothing in this crate touches the DOM. A binding supplies:
//!
//! - [`HostWindow`] for the responder side (hash, name, navigation, posting)
//! - [`ContentFrame`] for the iframe a listener is scoped to
//! - [`MessageChannel`] for the window's `message` event stream

use std::rc::Rc;

use crate::error::Result;

/// A `message` event as observed on the embedding window.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage<W> {
	/// Window that posted the message, if the platform exposes one.
	pub source: Option<W>,
	/// String payload, or `None` when the posted data was not string-typed.
	pub data: Option<String>,
}

impl<W> InboundMessage<W> {
	/// A string message posted by `source`.
	pub fn text(source: W, data: impl Into<String>) -> Self {
		Self {
			source: Some(source),
			data: Some(data.into()),
		}
	}

	/// A message whose payload was not a string (an object, a buffer, ...).
	pub fn opaque(source: Option<W>) -> Self {
		Self { source, data: None }
	}
}

/// An iframe-like element whose content window can be compared by identity.
pub trait ContentFrame<W> {
	/// The frame's current content window, `None` while detached.
	fn content_window(&self) -> Option<W>;
}

/// Callback receiving every message delivered to the window.
pub type MessageSink<W> = Rc<dyn Fn(InboundMessage<W>)>;

/// Registration surface for window `message` events.
///
/// The [`Dispatcher`](crate::Dispatcher) attaches at most one sink at a time and
/// holds the returned hook while it has active listeners; dropping the hook must
/// stop delivery.
pub trait MessageChannel {
	/// Window handle; `==` must be identity, not origin equality.
	type Window: PartialEq + 'static;
	/// Guard that detaches the sink when dropped.
	type Hook;

	fn attach(&self, sink: MessageSink<Self::Window>) -> Self::Hook;
}

/// The current window as seen by a delegated UI page sending its answer.
pub trait HostWindow {
	/// `location.hash`, including the leading `#` (empty when there is none).
	fn location_hash(&self) -> String;

	/// `window.name`.
	fn name(&self) -> String;

	fn set_name(&self, name: &str) -> Result<()>;

	/// Navigates the window to `url`.
	fn navigate(&self, url: &str) -> Result<()>;

	/// Whether the window has a parent to post to.
	fn has_parent(&self) -> bool;

	fn post_to_parent(&self, message: &str, target_origin: &str) -> Result<()>;

	fn post_to_self(&self, message: &str, target_origin: &str) -> Result<()>;
}
