//! What the controller draws on.

use std::rc::Rc;

use oslc_protocol::ContentFrame;

use crate::error::Result;
use crate::events::SelectionEvent;

/// The widget's view: button, modal dialog, loading indicator and iframe.
///
/// Implementations report their own failures (the browser binding logs them).
/// Only [`show_modal`](Self::show_modal) can fail, since a dialog that never
/// appeared must not leave a session behind.
pub trait DialogSurface {
	/// Identity handle of the iframe's content window.
	type Window: PartialEq + 'static;

	fn render_button(&self, text: &str, class: &str);

	fn render_title(&self, title: &str);

	fn show_modal(&self) -> Result<()>;

	fn close_modal(&self);

	fn set_loading(&self, loading: bool);

	fn set_frame_visible(&self, visible: bool);

	fn set_frame_source(&self, url: &str);

	/// The iframe listeners are scoped to.
	fn frame(&self) -> Rc<dyn ContentFrame<Self::Window>>;

	/// Dispatches the terminal event to the host page.
	fn emit(&self, event: &SelectionEvent);
}
