use std::rc::Rc;

use oslc_protocol::ContentFrame;
use oslc_selection::{DialogSurface, SelectionEvent};
use serde::Serialize;
use tracing::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	CustomEvent, CustomEventInit, Element, HtmlButtonElement, HtmlDialogElement, HtmlElement,
	HtmlIFrameElement, ShadowRoot, ShadowRootInit, ShadowRootMode,
};

use crate::styles::markup;
use crate::window::{IframeFrame, describe};

/// The element's shadow DOM.
pub struct ShadowSurface {
	host: HtmlElement,
	button: HtmlButtonElement,
	dialog: HtmlDialogElement,
	title: Element,
	close_button: HtmlButtonElement,
	loading: HtmlElement,
	frame: Rc<IframeFrame>,
}

impl ShadowSurface {
	/// Populates `host`'s open shadow root, attaching one if needed.
	pub fn build(host: &HtmlElement) -> Result<Self, JsValue> {
		let shadow = match host.shadow_root() {
			Some(shadow) => shadow,
			None => host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
		};
		shadow.set_inner_html(&markup());

		Ok(Self {
			host: host.clone(),
			button: query(&shadow, r#"button[part="button"]"#)?,
			dialog: query(&shadow, "dialog")?,
			title: query(&shadow, ".dialog-title")?,
			close_button: query(&shadow, ".close-button")?,
			loading: query(&shadow, ".loading")?,
			frame: Rc::new(IframeFrame::new(query::<HtmlIFrameElement>(&shadow, "iframe")?)),
		})
	}

	pub fn host(&self) -> &HtmlElement {
		&self.host
	}

	pub fn button(&self) -> &HtmlButtonElement {
		&self.button
	}

	pub fn dialog(&self) -> &HtmlDialogElement {
		&self.dialog
	}

	pub fn close_button(&self) -> &HtmlButtonElement {
		&self.close_button
	}

	pub fn iframe(&self) -> &HtmlIFrameElement {
		self.frame.element()
	}
}

fn query<T: JsCast>(root: &ShadowRoot, selector: &str) -> Result<T, JsValue> {
	root.query_selector(selector)?
		.ok_or_else(|| JsValue::from_str(&format!("shadow root has no `{selector}`")))?
		.dyn_into::<T>()
		.map_err(|_| JsValue::from_str(&format!("`{selector}` has an unexpected element type")))
}

fn set_display(element: &HtmlElement, display: Option<&str>) {
	let style = element.style();
	let result = match display {
		Some(display) => style.set_property("display", display),
		None => style.remove_property("display").map(drop),
	};
	if let Err(err) = result {
		error!(error = %describe(&err), "failed to update element display");
	}
}

impl DialogSurface for ShadowSurface {
	type Window = JsValue;

	fn render_button(&self, text: &str, class: &str) {
		self.button.set_text_content(Some(text));
		self.button.set_class_name(class);
	}

	fn render_title(&self, title: &str) {
		self.title.set_text_content(Some(title));
	}

	fn show_modal(&self) -> oslc_selection::Result<()> {
		if self.dialog.open() {
			return Ok(());
		}
		// Throws `InvalidStateError` while the element is detached.
		self.dialog
			.show_modal()
			.map_err(|err| oslc_selection::Error::Surface(describe(&err)))
	}

	fn close_modal(&self) {
		if self.dialog.open() {
			self.dialog.close();
		}
	}

	fn set_loading(&self, loading: bool) {
		set_display(&self.loading, (!loading).then_some("none"));
	}

	fn set_frame_visible(&self, visible: bool) {
		set_display(self.iframe(), Some(if visible { "block" } else { "none" }));
	}

	fn set_frame_source(&self, url: &str) {
		self.iframe().set_src(url);
	}

	fn frame(&self) -> Rc<dyn ContentFrame<JsValue>> {
		self.frame.clone()
	}

	fn emit(&self, event: &SelectionEvent) {
		let detail = match event.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
			Ok(detail) => detail,
			Err(err) => {
				error!(%err, event = event.name(), "failed to serialize event detail");
				return;
			}
		};

		let init = CustomEventInit::new();
		init.set_bubbles(true);
		init.set_composed(true);
		init.set_detail(&detail);

		let dispatched = CustomEvent::new_with_event_init_dict(event.name(), &init)
			.and_then(|custom| self.host.dispatch_event(&custom));
		if let Err(err) = dispatched {
			error!(error = %describe(&err), event = event.name(), "failed to dispatch event");
		}
	}
}
