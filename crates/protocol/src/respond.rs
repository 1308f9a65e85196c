//! Responder side: how a delegated UI page hands its answer back.
//!
//! The protocol is picked from the explicit argument, else from the page's own
//! location hash, else it falls back to postMessage with a warning.
//!
//! - **Window name**: the opener stored its return address in `window.name`. The
//!   page captures it, overwrites the name with the encoded response, then
//!   navigates back so the (same-origin) opener can read the name.
//! - **postMessage**: the encoded response is posted to the parent window, or to
//!   the window itself when there is no parent, with target origin `*`. The
//!   payload is only resource URIs and labels; the receiving side pins the sender
//!   by window identity instead.

use tracing::{debug, warn};

use crate::codec::encode_response;
use crate::dialog_url::detect_protocol;
use crate::error::Result;
use crate::types::{Protocol, Resource, Response, SelectionResult};
use crate::window::HostWindow;

/// Target origin used for every posted response.
pub const ANY_ORIGIN: &str = "*";

/// What a responder sends back.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
	/// Encoded as `oslc-response:<json>`.
	Response(Response),
	/// Sent verbatim; the caller is responsible for framing.
	Raw(String),
}

impl ResponsePayload {
	/// The string that goes over the wire.
	pub fn to_wire(&self) -> Result<String> {
		match self {
			ResponsePayload::Response(response) => encode_response(response),
			ResponsePayload::Raw(raw) => Ok(raw.clone()),
		}
	}
}

impl From<Response> for ResponsePayload {
	fn from(response: Response) -> Self {
		ResponsePayload::Response(response)
	}
}

impl From<String> for ResponsePayload {
	fn from(raw: String) -> Self {
		ResponsePayload::Raw(raw)
	}
}

impl From<&str> for ResponsePayload {
	fn from(raw: &str) -> Self {
		ResponsePayload::Raw(raw.to_owned())
	}
}

/// Sends `payload` to the opener and returns the protocol that was used.
pub fn send_response<W>(
	window: &W,
	payload: impl Into<ResponsePayload>,
	protocol: Option<Protocol>,
) -> Result<Protocol>
where
	W: HostWindow + ?Sized,
{
	let message = payload.into().to_wire()?;

	let protocol = match protocol.or_else(|| detect_protocol(window)) {
		Some(protocol) => protocol,
		None => {
			warn!("no OSLC protocol detected, defaulting to postMessage");
			Protocol::PostMessage
		}
	};

	match protocol {
		Protocol::WindowName => respond_with_window_name(window, &message)?,
		Protocol::PostMessage => respond_with_post_message(window, &message)?,
	}

	debug!(%protocol, "sent OSLC response");
	Ok(protocol)
}

/// Sends the resources the user picked.
pub fn send_selection_response<W>(window: &W, resources: SelectionResult) -> Result<Protocol>
where
	W: HostWindow + ?Sized,
{
	send_response(window, Response::new(resources), None)
}

/// Sends the single resource the user created.
pub fn send_creation_response<W>(window: &W, resource: Resource) -> Result<Protocol>
where
	W: HostWindow + ?Sized,
{
	send_response(window, Response::single(resource), None)
}

/// Sends an empty result, which is how a delegated UI reports its own cancel button.
pub fn send_cancel_response<W>(window: &W) -> Result<Protocol>
where
	W: HostWindow + ?Sized,
{
	send_response(window, Response::empty(), None)
}

fn respond_with_window_name<W: HostWindow + ?Sized>(window: &W, message: &str) -> Result<()> {
	let return_url = window.name();
	window.set_name(message)?;
	window.navigate(&return_url)
}

fn respond_with_post_message<W: HostWindow + ?Sized>(window: &W, message: &str) -> Result<()> {
	if window.has_parent() {
		window.post_to_parent(message, ANY_ORIGIN)
	} else {
		window.post_to_self(message, ANY_ORIGIN)
	}
}
