//! State of one open-dialog attempt.

use oslc_protocol::{ListenerHandle, Protocol};

/// Lifecycle phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
	/// No session. Initial and terminal.
	#[default]
	Closed,
	/// Modal shown, iframe still loading.
	Opening,
	/// Iframe loaded, waiting for the delegated UI to answer.
	AwaitingResponse,
}

/// Everything held while the dialog is open.
///
/// Dropping a session releases its listener.
#[derive(Debug)]
pub(crate) struct DialogSession {
	url: String,
	protocol: Protocol,
	phase: Phase,
	listener: Option<ListenerHandle>,
}

impl DialogSession {
	pub(crate) fn new(url: String, protocol: Protocol) -> Self {
		Self {
			url,
			protocol,
			phase: Phase::Opening,
			listener: None,
		}
	}

	/// Protocol-qualified URL the iframe was pointed at.
	pub(crate) fn url(&self) -> &str {
		&self.url
	}

	pub(crate) fn protocol(&self) -> Protocol {
		self.protocol
	}

	pub(crate) fn phase(&self) -> Phase {
		self.phase
	}

	pub(crate) fn set_phase(&mut self, phase: Phase) {
		self.phase = phase;
	}

	/// Installs the session's listener, releasing any previous one.
	pub(crate) fn attach_listener(&mut self, listener: ListenerHandle) {
		if let Some(mut previous) = self.listener.replace(listener) {
			previous.release();
		}
	}

	pub(crate) fn release_listener(&mut self) {
		if let Some(mut listener) = self.listener.take() {
			listener.release();
		}
	}
}
