//! `web-sys` implementations of the protocol's platform traits.
//!
//! Window handles are plain [`JsValue`]s: `==` on them is JavaScript `===`,
//! which is the identity check the dispatcher relies on.

use std::fmt::Display;

use oslc_protocol::{ContentFrame, Error, HostWindow, InboundMessage, MessageChannel, MessageSink};
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlIFrameElement, MessageEvent};

/// Renders a thrown JS value for logs and error messages.
pub(crate) fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Converts a Rust error into the value thrown back to JavaScript.
pub(crate) fn to_js(err: impl Display) -> JsValue {
	JsValue::from_str(&err.to_string())
}

fn transport(err: JsValue) -> Error {
	Error::Transport(describe(&err))
}

fn global() -> Result<web_sys::Window, JsValue> {
	web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The page's own window, as used by a delegated UI sending its answer.
#[derive(Debug, Clone)]
pub struct WebWindow {
	window: web_sys::Window,
}

impl WebWindow {
	pub fn current() -> Result<Self, JsValue> {
		global().map(|window| Self { window })
	}
}

impl HostWindow for WebWindow {
	fn location_hash(&self) -> String {
		self.window.location().hash().unwrap_or_default()
	}

	fn name(&self) -> String {
		self.window.name().unwrap_or_default()
	}

	fn set_name(&self, name: &str) -> oslc_protocol::Result<()> {
		self.window.set_name(name).map_err(transport)
	}

	fn navigate(&self, url: &str) -> oslc_protocol::Result<()> {
		self.window.location().set_href(url).map_err(transport)
	}

	fn has_parent(&self) -> bool {
		matches!(self.window.parent(), Ok(Some(_)))
	}

	fn post_to_parent(&self, message: &str, target_origin: &str) -> oslc_protocol::Result<()> {
		let parent = self
			.window
			.parent()
			.map_err(transport)?
			.ok_or_else(|| Error::Transport("window has no parent".into()))?;
		parent
			.post_message(&JsValue::from_str(message), target_origin)
			.map_err(transport)
	}

	fn post_to_self(&self, message: &str, target_origin: &str) -> oslc_protocol::Result<()> {
		self.window
			.post_message(&JsValue::from_str(message), target_origin)
			.map_err(transport)
	}
}

/// The dialog's iframe.
#[derive(Debug, Clone)]
pub struct IframeFrame {
	element: HtmlIFrameElement,
}

impl IframeFrame {
	pub fn new(element: HtmlIFrameElement) -> Self {
		Self { element }
	}

	pub fn element(&self) -> &HtmlIFrameElement {
		&self.element
	}
}

impl ContentFrame<JsValue> for IframeFrame {
	fn content_window(&self) -> Option<JsValue> {
		self.element.content_window().map(JsValue::from)
	}
}

/// `message` events of the embedding window.
#[derive(Debug, Clone)]
pub struct WindowChannel {
	window: web_sys::Window,
}

impl WindowChannel {
	pub fn current() -> Result<Self, JsValue> {
		global().map(|window| Self { window })
	}
}

impl MessageChannel for WindowChannel {
	type Window = JsValue;
	type Hook = MessageHook;

	fn attach(&self, sink: MessageSink<JsValue>) -> MessageHook {
		let callback = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
			sink(InboundMessage {
				source: event.source().map(JsValue::from),
				data: event.data().as_string(),
			});
		});

		if let Err(err) = self
			.window
			.add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())
		{
			error!(error = %describe(&err), "failed to listen for window messages");
		}

		MessageHook {
			window: self.window.clone(),
			callback,
		}
	}
}

/// Removes the window `message` listener on drop.
pub struct MessageHook {
	window: web_sys::Window,
	callback: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for MessageHook {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("message", self.callback.as_ref().unchecked_ref());
	}
}
