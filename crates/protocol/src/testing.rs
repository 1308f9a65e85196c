//! In-memory window, frame and channel fakes.
//!
//! Compiled for this crate's tests and, with the `testing` feature, for
//! downstream crates that drive a [`Dispatcher`](crate::Dispatcher) without a
//! browser.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};
use crate::window::{ContentFrame, HostWindow, InboundMessage, MessageChannel, MessageSink};

/// Window identity used by the fakes. Two windows are the same iff the ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Iframe whose content window can be swapped, as a navigation or detach would.
#[derive(Debug, Default)]
pub struct MemoryFrame {
	window: Cell<Option<WindowId>>,
}

impl MemoryFrame {
	pub fn new(window: WindowId) -> Rc<Self> {
		Rc::new(Self {
			window: Cell::new(Some(window)),
		})
	}

	pub fn set_window(&self, window: Option<WindowId>) {
		self.window.set(window);
	}
}

impl ContentFrame<WindowId> for MemoryFrame {
	fn content_window(&self) -> Option<WindowId> {
		self.window.get()
	}
}

#[derive(Default)]
struct ChannelState {
	sink: RefCell<Option<MessageSink<WindowId>>>,
	attach_count: Cell<usize>,
}

/// Message channel that lets tests post messages as any window.
#[derive(Clone, Default)]
pub struct MemoryChannel {
	state: Rc<ChannelState>,
}

impl MemoryChannel {
	/// Posts a string message as `source`.
	pub fn post(&self, source: WindowId, data: &str) {
		self.post_message(InboundMessage::text(source, data));
	}

	pub fn post_message(&self, message: InboundMessage<WindowId>) {
		let sink = self.state.sink.borrow().clone();
		if let Some(sink) = sink {
			sink(message);
		}
	}

	/// Whether a sink is currently attached.
	pub fn is_attached(&self) -> bool {
		self.state.sink.borrow().is_some()
	}

	/// How many times a sink has been attached over the channel's lifetime.
	pub fn attach_count(&self) -> usize {
		self.state.attach_count.get()
	}
}

/// Detaches the sink from a [`MemoryChannel`] on drop.
pub struct MemoryHook {
	state: Weak<ChannelState>,
}

impl Drop for MemoryHook {
	fn drop(&mut self) {
		if let Some(state) = self.state.upgrade() {
			state.sink.borrow_mut().take();
		}
	}
}

impl MessageChannel for MemoryChannel {
	type Window = WindowId;
	type Hook = MemoryHook;

	fn attach(&self, sink: MessageSink<WindowId>) -> MemoryHook {
		*self.state.sink.borrow_mut() = Some(sink);
		self.state.attach_count.set(self.state.attach_count.get() + 1);
		MemoryHook {
			state: Rc::downgrade(&self.state),
		}
	}
}

/// A window operation performed through [`RecordingWindow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCall {
	SetName(String),
	Navigate(String),
	PostToParent {
		message: String,
		target_origin: String,
	},
	PostToSelf {
		message: String,
		target_origin: String,
	},
}

/// [`HostWindow`] that records every operation in order.
#[derive(Debug, Default)]
pub struct RecordingWindow {
	hash: String,
	name: RefCell<String>,
	parent: bool,
	fail_posts: bool,
	calls: RefCell<Vec<WindowCall>>,
}

impl RecordingWindow {
	pub fn new(hash: &str) -> Self {
		Self {
			hash: hash.to_owned(),
			..Default::default()
		}
	}

	pub fn with_name(self, name: &str) -> Self {
		*self.name.borrow_mut() = name.to_owned();
		self
	}

	pub fn with_parent(mut self, parent: bool) -> Self {
		self.parent = parent;
		self
	}

	/// Makes every post fail with [`Error::Transport`].
	pub fn failing_posts(mut self) -> Self {
		self.fail_posts = true;
		self
	}

	pub fn calls(&self) -> Vec<WindowCall> {
		self.calls.borrow().clone()
	}

	fn post(&self, call: WindowCall) -> Result<()> {
		if self.fail_posts {
			return Err(Error::Transport("postMessage rejected".into()));
		}
		self.calls.borrow_mut().push(call);
		Ok(())
	}
}

impl HostWindow for RecordingWindow {
	fn location_hash(&self) -> String {
		self.hash.clone()
	}

	fn name(&self) -> String {
		self.name.borrow().clone()
	}

	fn set_name(&self, name: &str) -> Result<()> {
		*self.name.borrow_mut() = name.to_owned();
		self.calls.borrow_mut().push(WindowCall::SetName(name.to_owned()));
		Ok(())
	}

	fn navigate(&self, url: &str) -> Result<()> {
		self.calls.borrow_mut().push(WindowCall::Navigate(url.to_owned()));
		Ok(())
	}

	fn has_parent(&self) -> bool {
		self.parent
	}

	fn post_to_parent(&self, message: &str, target_origin: &str) -> Result<()> {
		self.post(WindowCall::PostToParent {
			message: message.to_owned(),
			target_origin: target_origin.to_owned(),
		})
	}

	fn post_to_self(&self, message: &str, target_origin: &str) -> Result<()> {
		self.post(WindowCall::PostToSelf {
			message: message.to_owned(),
			target_origin: target_origin.to_owned(),
		})
	}
}
