//! The `<oslc-selection-button>` custom element.
//!
//! Custom elements must be JavaScript classes, so a small inline class forwards
//! its lifecycle callbacks to a [`SelectionButton`] created per instance.

use js_sys::Array;
use oslc_protocol::Dispatcher;
use oslc_selection::{Attribute, DialogConfig, SelectionDialog};
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::surface::ShadowSurface;
use crate::window::{WindowChannel, describe, to_js};

pub const TAG_NAME: &str = "oslc-selection-button";

#[wasm_bindgen(inline_js = r#"
export function defineSelectionButton(tag, observed, properties, create) {
	if (customElements.get(tag)) {
		return false;
	}

	class OslcSelectionButton extends HTMLElement {
		static get observedAttributes() {
			return observed;
		}

		constructor() {
			super();
			this.attachShadow({ mode: 'open' });
			this._binding = create(this);
		}

		connectedCallback() {
			this._binding?.connected();
		}

		disconnectedCallback() {
			this._binding?.disconnected();
		}

		attributeChangedCallback(name, oldValue, newValue) {
			if (oldValue !== newValue) {
				this._binding?.attributeChanged(name, newValue);
			}
		}

		configure(config) {
			this._binding?.configure(config);
		}

		open() {
			this._binding?.open();
		}

		close() {
			this._binding?.close();
		}
	}

	for (const [attribute, property, fallback] of properties) {
		Object.defineProperty(OslcSelectionButton.prototype, property, {
			get() {
				return this.getAttribute(attribute) || fallback;
			},
			set(value) {
				this.setAttribute(attribute, value);
			},
			configurable: true,
			enumerable: true,
		});
	}

	customElements.define(tag, OslcSelectionButton);
	return true;
}
"#)]
extern "C" {
	#[wasm_bindgen(js_name = defineSelectionButton, catch)]
	fn define_selection_button(
		tag: &str,
		observed: &Array,
		properties: &Array,
		create: &Closure<dyn FnMut(HtmlElement) -> JsValue>,
	) -> Result<bool, JsValue>;
}

/// Defines `<oslc-selection-button>`. Returns false if the tag was already defined.
#[wasm_bindgen(js_name = defineElement)]
pub fn define() -> Result<bool, JsValue> {
	let observed: Array = Attribute::OBSERVED
		.iter()
		.map(|attribute| JsValue::from_str(attribute.name()))
		.collect();
	let properties: Array = Attribute::OBSERVED
		.iter()
		.map(|attribute| {
			Array::of3(
				&attribute.name().into(),
				&attribute.property().into(),
				&attribute.default_value().into(),
			)
		})
		.collect();

	let create = Closure::<dyn FnMut(HtmlElement) -> JsValue>::new(|host: HtmlElement| {
		match SelectionButton::new(host) {
			Ok(button) => JsValue::from(button),
			Err(err) => {
				error!(error = %describe(&err), "failed to build <{TAG_NAME}>");
				JsValue::NULL
			}
		}
	});

	let defined = define_selection_button(TAG_NAME, &observed, &properties, &create)?;
	if defined {
		// The element class calls it for every instance from now on.
		create.forget();
		debug!("defined <{TAG_NAME}>");
	}
	Ok(defined)
}

/// DOM listener removed on drop.
struct Listener {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	fn on<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
	where
		F: FnMut(Event) + 'static,
	{
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			kind,
			callback,
		})
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
	}
}

/// Per-instance state behind one `<oslc-selection-button>`.
#[wasm_bindgen]
pub struct SelectionButton {
	dialog: SelectionDialog<ShadowSurface, WindowChannel>,
	_listeners: Vec<Listener>,
}

impl SelectionButton {
	pub fn new(host: HtmlElement) -> Result<Self, JsValue> {
		let surface = ShadowSurface::build(&host)?;
		let dispatcher = Dispatcher::new(WindowChannel::current()?);
		let dialog = SelectionDialog::new(surface, dispatcher);
		let listeners = wire(&dialog)?;

		Ok(Self {
			dialog,
			_listeners: listeners,
		})
	}

	pub fn dialog(&self) -> &SelectionDialog<ShadowSurface, WindowChannel> {
		&self.dialog
	}
}

fn wire(dialog: &SelectionDialog<ShadowSurface, WindowChannel>) -> Result<Vec<Listener>, JsValue> {
	let surface = dialog.surface();
	let dialog_element = JsValue::from(surface.dialog().clone());

	Ok(vec![
		Listener::on(surface.button(), "click", {
			let dialog = dialog.clone();
			move |_| {
				if let Err(err) = dialog.open() {
					error!("{err}");
				}
			}
		})?,
		Listener::on(surface.close_button(), "click", {
			let dialog = dialog.clone();
			move |_| dialog.close()
		})?,
		// Backdrop clicks land on the <dialog> itself.
		Listener::on(surface.dialog(), "click", {
			let dialog = dialog.clone();
			move |event: Event| {
				if event.target().map(JsValue::from).as_ref() == Some(&dialog_element) {
					dialog.close();
				}
			}
		})?,
		Listener::on(surface.dialog(), "keydown", {
			let dialog = dialog.clone();
			move |event: Event| {
				let escape = event
					.dyn_ref::<KeyboardEvent>()
					.is_some_and(|key| key.key() == "Escape");
				if escape {
					event.prevent_default();
					dialog.close();
				}
			}
		})?,
		// Native dismissal would close the <dialog> behind the controller's back.
		Listener::on(surface.dialog(), "cancel", {
			let dialog = dialog.clone();
			move |event: Event| {
				event.prevent_default();
				dialog.close();
			}
		})?,
		Listener::on(surface.iframe(), "load", {
			let dialog = dialog.clone();
			move |_| dialog.frame_loaded()
		})?,
	])
}

#[wasm_bindgen]
impl SelectionButton {
	pub fn connected(&self) {
		self.dialog.connect();
	}

	pub fn disconnected(&self) {
		self.dialog.teardown();
	}

	#[wasm_bindgen(js_name = attributeChanged)]
	pub fn attribute_changed(&self, name: &str, value: Option<String>) {
		self.dialog.on_attribute_changed(name, value.as_deref());
	}

	/// Replaces the whole configuration from a `{ dialogUrl, dialogTitle,
	/// buttonText, buttonClass }` object and mirrors it onto the attributes.
	pub fn configure(&self, config: JsValue) -> Result<(), JsValue> {
		let config: DialogConfig = serde_wasm_bindgen::from_value(config)?;
		self.dialog.configure(config.clone());

		let host = self.dialog.surface().host();
		for attribute in Attribute::OBSERVED {
			match config.get(attribute) {
				Some(value) => host.set_attribute(attribute.name(), value)?,
				None => host.remove_attribute(attribute.name())?,
			}
		}
		Ok(())
	}

	pub fn open(&self) -> Result<(), JsValue> {
		self.dialog.open().map_err(to_js)
	}

	pub fn close(&self) {
		self.dialog.close();
	}

	#[wasm_bindgen(getter, js_name = isOpen)]
	pub fn is_open(&self) -> bool {
		self.dialog.is_open()
	}
}
