//! Listener arena for delegated-UI responses.
//!
//! The [`Dispatcher`] keeps one slot per registered listener in an [`IndexMap`]
//! keyed by a monotonically increasing [`ListenerId`], so removal is O(1) and
//! delivery follows registration order. Each slot is scoped to one
//! [`ContentFrame`]; a message reaches it only if [`is_valid_message`] holds.
//!
//! The dispatcher attaches a single sink to its [`MessageChannel`] when the first
//! slot is registered and drops the hook when the last slot is released, so the
//! window never carries a listener that outlived its dialog session.
//!
//! Handlers may release their own [`ListenerHandle`] (or any other) while being
//! invoked: a handler is taken out of its slot for the duration of the call.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tracing::{error, trace};

use crate::codec::{decode_response, has_response_prefix};
use crate::types::{Resource, SelectionResult};
use crate::window::{ContentFrame, InboundMessage, MessageChannel, MessageSink};

/// Identifier of a listener slot.
pub type ListenerId = u64;

/// Hook run after a response decodes and before it is delivered.
pub type PreprocessHandler = Box<dyn FnMut()>;

type RawHandler = Box<dyn FnMut(&str)>;

struct Slot<W> {
	frame: Rc<dyn ContentFrame<W>>,
	/// `None` while the handler is executing.
	handler: Option<RawHandler>,
}

struct Registry<C: MessageChannel> {
	next_id: ListenerId,
	slots: IndexMap<ListenerId, Slot<C::Window>>,
	hook: Option<C::Hook>,
}

/// Returns true if `message` is an OSLC response posted by `frame`'s content window.
///
/// The sender must be the frame's content window by identity, the payload must
/// be a string, and it must start with the reserved prefix.
pub fn is_valid_message<W: PartialEq>(
	message: &InboundMessage<W>,
	frame: &dyn ContentFrame<W>,
) -> bool {
	let from_frame = match (&message.source, frame.content_window()) {
		(Some(source), Some(window)) => *source == window,
		_ => false,
	};
	from_frame && message.data.as_deref().is_some_and(has_response_prefix)
}

/// Routes window messages to listeners scoped to individual iframes.
pub struct Dispatcher<C: MessageChannel> {
	channel: Rc<C>,
	registry: Rc<RefCell<Registry<C>>>,
}

impl<C: MessageChannel> Clone for Dispatcher<C> {
	fn clone(&self) -> Self {
		Self {
			channel: Rc::clone(&self.channel),
			registry: Rc::clone(&self.registry),
		}
	}
}

impl<C: MessageChannel + 'static> Dispatcher<C> {
	pub fn new(channel: C) -> Self {
		Self {
			channel: Rc::new(channel),
			registry: Rc::new(RefCell::new(Registry {
				next_id: 1,
				slots: IndexMap::new(),
				hook: None,
			})),
		}
	}

	/// Calls `handler` with the raw payload of every valid OSLC message from `frame`.
	pub fn register_raw_response_listener<F>(
		&self,
		frame: Rc<dyn ContentFrame<C::Window>>,
		handler: F,
	) -> ListenerHandle
	where
		F: FnMut(&str) + 'static,
	{
		let (id, needs_hook) = {
			let mut registry = self.registry.borrow_mut();
			let id = registry.next_id;
			registry.next_id += 1;
			registry.slots.insert(
				id,
				Slot {
					frame,
					handler: Some(Box::new(handler)),
				},
			);
			(id, registry.hook.is_none())
		};

		if needs_hook {
			let hook = self.channel.attach(self.sink());
			self.registry.borrow_mut().hook = Some(hook);
			trace!("attached window message hook");
		}

		trace!(listener = id, "registered OSLC response listener");
		ListenerHandle::new(id, self.releaser())
	}

	/// Decodes responses from `frame` and delivers their resources.
	///
	/// `preprocess` runs before `on_resources` for the same message. Malformed
	/// payloads are logged and dropped; `on_resources` is not called for them.
	pub fn register_selection_listener<F>(
		&self,
		frame: Rc<dyn ContentFrame<C::Window>>,
		mut on_resources: F,
		mut preprocess: Option<PreprocessHandler>,
	) -> ListenerHandle
	where
		F: FnMut(SelectionResult) + 'static,
	{
		self.register_raw_response_listener(frame, move |raw| match decode_response(raw) {
			Ok(response) => {
				if let Some(preprocess) = preprocess.as_mut() {
					preprocess();
				}
				on_resources(response.into_results());
			}
			Err(err) => error!(error = %err, "failed to parse OSLC response"),
		})
	}

	/// Decodes responses from `frame` and delivers the first resource as `(uri, label)`.
	///
	/// An empty result list delivers nothing.
	pub fn register_creation_listener<F>(
		&self,
		frame: Rc<dyn ContentFrame<C::Window>>,
		mut on_created: F,
		mut preprocess: Option<PreprocessHandler>,
	) -> ListenerHandle
	where
		F: FnMut(String, String) + 'static,
	{
		self.register_raw_response_listener(frame, move |raw| match decode_response(raw) {
			Ok(response) => {
				if let Some(preprocess) = preprocess.as_mut() {
					preprocess();
				}
				if let Some(first) = response.into_results().into_iter().next() {
					let (uri, label) = Resource::into_parts(first);
					on_created(uri, label);
				}
			}
			Err(err) => error!(error = %err, "failed to parse OSLC response"),
		})
	}

	/// Delivers one window message to every slot it is valid for.
	///
	/// The channel's sink calls this; bindings without a channel can call it directly.
	pub fn dispatch(&self, message: &InboundMessage<C::Window>) {
		deliver(&self.registry, message);
	}

	/// Number of listeners not yet released.
	pub fn active_listeners(&self) -> usize {
		self.registry.borrow().slots.len()
	}

	/// Whether the window message hook is currently attached.
	pub fn is_attached(&self) -> bool {
		self.registry.borrow().hook.is_some()
	}

	fn sink(&self) -> MessageSink<C::Window> {
		let registry = Rc::downgrade(&self.registry);
		Rc::new(move |message: InboundMessage<C::Window>| {
			if let Some(registry) = registry.upgrade() {
				deliver(&registry, &message);
			}
		})
	}

	fn releaser(&self) -> Box<dyn FnOnce(ListenerId)> {
		let registry: Weak<RefCell<Registry<C>>> = Rc::downgrade(&self.registry);
		Box::new(move |id| {
			if let Some(registry) = registry.upgrade() {
				remove(&registry, id);
			}
		})
	}
}

fn deliver<C: MessageChannel>(
	registry: &RefCell<Registry<C>>,
	message: &InboundMessage<C::Window>,
) {
	let Some(payload) = message.data.as_deref() else {
		trace!("ignoring non-string window message");
		return;
	};

	let targets: Vec<ListenerId> = registry
		.borrow()
		.slots
		.iter()
		.filter(|(_, slot)| is_valid_message(message, slot.frame.as_ref()))
		.map(|(id, _)| *id)
		.collect();

	if targets.is_empty() {
		trace!("ignoring window message not addressed to any listener");
		return;
	}

	for id in targets {
		let handler = registry
			.borrow_mut()
			.slots
			.get_mut(&id)
			.and_then(|slot| slot.handler.take());
		let Some(mut handler) = handler else {
			continue;
		};

		handler(payload);

		if let Some(slot) = registry.borrow_mut().slots.get_mut(&id) {
			slot.handler = Some(handler);
		}
	}
}

fn remove<C: MessageChannel>(registry: &RefCell<Registry<C>>, id: ListenerId) {
	let (slot, hook) = {
		let mut registry = registry.borrow_mut();
		let slot = registry.slots.shift_remove(&id);
		let hook = if registry.slots.is_empty() {
			registry.hook.take()
		} else {
			None
		};
		(slot, hook)
	};

	if slot.is_some() {
		trace!(listener = id, "released OSLC response listener");
	}
	if hook.is_some() {
		trace!("detached window message hook");
	}
	drop(slot);
	drop(hook);
}

/// Owned capability for one registered listener.
///
/// [`release`](Self::release) removes the listener; calling it again does
/// nothing. Dropping the handle releases it as well, and releasing after the
/// [`Dispatcher`] itself is gone is a no-op.
pub struct ListenerHandle {
	id: ListenerId,
	release: Option<Box<dyn FnOnce(ListenerId)>>,
}

impl ListenerHandle {
	fn new(id: ListenerId, release: Box<dyn FnOnce(ListenerId)>) -> Self {
		Self {
			id,
			release: Some(release),
		}
	}

	pub fn id(&self) -> ListenerId {
		self.id
	}

	/// Whether the listener has not been released through this handle yet.
	pub fn is_active(&self) -> bool {
		self.release.is_some()
	}

	/// Removes the listener. Idempotent.
	pub fn release(&mut self) {
		if let Some(release) = self.release.take() {
			release(self.id);
		}
	}
}

impl Drop for ListenerHandle {
	fn drop(&mut self) {
		self.release();
	}
}

impl fmt::Debug for ListenerHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListenerHandle")
			.field("id", &self.id)
			.field("active", &self.is_active())
			.finish()
	}
}
