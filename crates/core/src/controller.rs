//! The selection dialog controller.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use oslc_protocol::{
	Dispatcher, INERT_FRAME_URL, MessageChannel, Protocol, SelectionResult, build_dialog_url,
};
use tracing::{debug, info, trace};

use crate::config::{Attribute, DialogConfig};
use crate::error::{Error, Result};
use crate::events::{CancelReason, SelectionEvent};
use crate::session::{DialogSession, Phase};
use crate::surface::DialogSurface;

struct Inner<S, C: MessageChannel> {
	surface: S,
	dispatcher: Dispatcher<C>,
	config: RefCell<DialogConfig>,
	session: RefCell<Option<DialogSession>>,
}

/// Drives one widget instance through `Closed → Opening → AwaitingResponse → Closed`.
///
/// Cheap to clone; clones share the same widget. At most one dialog session
/// exists at a time, and every exit path releases its listener and resets the
/// iframe to `about:blank` before the terminal event is emitted.
pub struct SelectionDialog<S, C>
where
	S: DialogSurface,
	C: MessageChannel<Window = S::Window>,
{
	inner: Rc<Inner<S, C>>,
}

impl<S, C> Clone for SelectionDialog<S, C>
where
	S: DialogSurface,
	C: MessageChannel<Window = S::Window>,
{
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<S, C> SelectionDialog<S, C>
where
	S: DialogSurface + 'static,
	C: MessageChannel<Window = S::Window> + 'static,
{
	pub fn new(surface: S, dispatcher: Dispatcher<C>) -> Self {
		Self::with_config(surface, dispatcher, DialogConfig::default())
	}

	pub fn with_config(surface: S, dispatcher: Dispatcher<C>, config: DialogConfig) -> Self {
		Self {
			inner: Rc::new(Inner {
				surface,
				dispatcher,
				config: RefCell::new(config),
				session: RefCell::new(None),
			}),
		}
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> Phase {
		self.inner
			.session
			.borrow()
			.as_ref()
			.map_or(Phase::Closed, DialogSession::phase)
	}

	pub fn is_open(&self) -> bool {
		self.inner.session.borrow().is_some()
	}

	/// URL of the active session's iframe, if any.
	pub fn session_url(&self) -> Option<String> {
		self.inner
			.session
			.borrow()
			.as_ref()
			.map(|session| session.url().to_owned())
	}

	pub fn config(&self) -> DialogConfig {
		self.inner.config.borrow().clone()
	}

	pub fn surface(&self) -> &S {
		&self.inner.surface
	}

	pub fn dispatcher(&self) -> &Dispatcher<C> {
		&self.inner.dispatcher
	}

	/// Initial render, called when the widget is attached to a document.
	pub fn connect(&self) {
		self.render_button();
		self.render_title();
	}

	/// Applies an attribute change. Unknown attributes are ignored.
	///
	/// A new dialog URL takes effect on the next activation; an open session
	/// keeps the URL it was opened with.
	pub fn on_attribute_changed(&self, name: &str, value: Option<&str>) {
		let Some(attribute) = Attribute::from_name(name) else {
			trace!(name, "ignoring unobserved attribute");
			return;
		};

		let changed = self
			.inner
			.config
			.borrow_mut()
			.set(attribute, value.map(str::to_owned));
		if !changed {
			return;
		}

		if attribute.affects_button() {
			self.render_button();
		} else {
			self.render_title();
		}
	}

	/// Replaces the whole configuration and re-renders.
	pub fn configure(&self, config: DialogConfig) {
		*self.inner.config.borrow_mut() = config;
		self.connect();
	}

	/// Button activation: opens the dialog on the configured URL.
	///
	/// Does nothing while a session is active. Fails without keeping any state
	/// when no dialog URL is configured, it is not an absolute URL, or the
	/// surface cannot show the modal.
	pub fn open(&self) -> Result<()> {
		if self.is_open() {
			debug!("selection dialog already open, ignoring activation");
			return Ok(());
		}

		let base_url = self.inner.config.borrow().dialog_url().map(str::to_owned);
		let base_url = base_url.ok_or(Error::MissingDialogUrl)?;
		let protocol = Protocol::PostMessage;
		let url = build_dialog_url(&base_url, protocol)?;

		let surface = &self.inner.surface;
		surface.show_modal()?;

		*self.inner.session.borrow_mut() = Some(DialogSession::new(url.clone(), protocol));
		surface.set_loading(true);
		surface.set_frame_visible(false);
		surface.set_frame_source(&url);

		let weak = Rc::downgrade(&self.inner);
		let listener = self.inner.dispatcher.register_selection_listener(
			surface.frame(),
			move |resources| {
				if let Some(dialog) = Self::upgrade(&weak) {
					dialog.complete(resources);
				}
			},
			Some(Box::new(|| debug!("preprocessing OSLC selection response"))),
		);

		// A re-entrant cancel may have ended the session while the frame was
		// being set up; `listener` is then dropped, which releases it.
		if let Some(session) = self.inner.session.borrow_mut().as_mut() {
			session.attach_listener(listener);
			debug!(url = session.url(), protocol = %session.protocol(), "opened selection dialog");
		}
		Ok(())
	}

	/// Iframe `load` event: hides the loading indicator and reveals the frame.
	///
	/// Ignored outside `Opening`, which covers the load fired by `about:blank`
	/// after a session ends.
	pub fn frame_loaded(&self) {
		{
			let mut session = self.inner.session.borrow_mut();
			match session.as_mut() {
				Some(session) if session.phase() == Phase::Opening => {
					session.set_phase(Phase::AwaitingResponse);
				}
				_ => {
					trace!("ignoring frame load outside of an opening session");
					return;
				}
			}
		}

		self.inner.surface.set_loading(false);
		self.inner.surface.set_frame_visible(true);
		debug!("delegated UI loaded, awaiting response");
	}

	/// User cancellation: close button, backdrop click or Escape.
	pub fn close(&self) {
		self.cancel(CancelReason::UserCancelled);
	}

	/// Ends the session and emits `oslc-selection-cancelled`. No-op when closed.
	pub fn cancel(&self, reason: CancelReason) {
		let Some(session) = self.take_session() else {
			trace!("no selection dialog to cancel");
			return;
		};
		self.end_session(session);

		info!(%reason, "selection cancelled");
		self.inner
			.surface
			.emit(&SelectionEvent::Cancelled { reason });
	}

	/// Widget removed from the document: same cleanup as cancelling, no event.
	pub fn teardown(&self) {
		if let Some(session) = self.take_session() {
			self.end_session(session);
			debug!("selection dialog torn down");
		}
	}

	fn complete(&self, resources: SelectionResult) {
		let Some(session) = self.take_session() else {
			return;
		};
		self.end_session(session);

		info!(count = resources.len(), "selection made");
		self.inner
			.surface
			.emit(&SelectionEvent::Made { resources });
	}

	fn take_session(&self) -> Option<DialogSession> {
		self.inner.session.borrow_mut().take()
	}

	fn end_session(&self, mut session: DialogSession) {
		session.release_listener();
		self.inner.surface.close_modal();
		self.inner.surface.set_frame_source(INERT_FRAME_URL);
	}

	fn render_button(&self) {
		let config = self.inner.config.borrow().clone();
		self.inner
			.surface
			.render_button(config.button_text(), config.button_class());
	}

	fn render_title(&self) {
		let title = self.inner.config.borrow().dialog_title().to_owned();
		self.inner.surface.render_title(&title);
	}

	fn upgrade(weak: &Weak<Inner<S, C>>) -> Option<Self> {
		weak.upgrade().map(|inner| Self { inner })
	}
}
