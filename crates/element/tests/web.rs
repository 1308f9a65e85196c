#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use oslc_selection_element::{TAG_NAME, build_dialog_url, define, set_log_level};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{
	CustomEvent, Event, HtmlButtonElement, HtmlDialogElement, HtmlElement, HtmlIFrameElement,
	KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn detached() -> HtmlElement {
	let _ = define();
	web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.create_element(TAG_NAME)
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
}

fn mount() -> HtmlElement {
	let element = detached();
	let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
	body.append_child(&element).unwrap();
	element
}

fn shadow<T: JsCast>(element: &HtmlElement, selector: &str) -> T {
	element
		.shadow_root()
		.unwrap()
		.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<T>()
		.unwrap()
}

fn record(element: &HtmlElement, name: &str) -> Rc<RefCell<Vec<JsValue>>> {
	let details = Rc::new(RefCell::new(Vec::new()));
	let sink = details.clone();
	let callback = Closure::<dyn FnMut(CustomEvent)>::new(move |event: CustomEvent| {
		sink.borrow_mut().push(event.detail());
	});
	element
		.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
		.unwrap();
	callback.forget();
	details
}

#[wasm_bindgen_test]
fn defining_twice_is_harmless() {
	let _ = define();
	assert!(!define().unwrap());
}

#[wasm_bindgen_test]
fn button_renders_defaults_and_follows_attributes() {
	let element = mount();
	let button: HtmlButtonElement = shadow(&element, r#"button[part="button"]"#);
	assert_eq!(button.text_content().unwrap(), "Select Resources");

	element.set_attribute("button-text", "Pick requirements").unwrap();
	element.set_attribute("button-class", "btn btn-primary").unwrap();
	assert_eq!(button.text_content().unwrap(), "Pick requirements");
	assert_eq!(button.class_name(), "btn btn-primary");
}

#[wasm_bindgen_test]
fn properties_reflect_attributes() {
	let element = mount();
	let title = Reflect::get(&element, &"dialogTitle".into()).unwrap();
	assert_eq!(title.as_string().unwrap(), "Select Resources");

	Reflect::set(&element, &"dialogUrl".into(), &"https://ex.org/selector".into()).unwrap();
	assert_eq!(
		element.get_attribute("dialog-url").as_deref(),
		Some("https://ex.org/selector")
	);
}

#[wasm_bindgen_test]
fn activation_without_url_keeps_dialog_closed() {
	let element = mount();
	let button: HtmlButtonElement = shadow(&element, r#"button[part="button"]"#);
	let dialog: HtmlDialogElement = shadow(&element, "dialog");

	button.click();
	assert!(!dialog.open());
}

#[wasm_bindgen_test]
fn close_button_cancels_and_resets_the_frame() {
	let element = mount();
	element.set_attribute("dialog-url", "about:blank").unwrap();
	let cancelled = record(&element, "oslc-selection-cancelled");

	let button: HtmlButtonElement = shadow(&element, r#"button[part="button"]"#);
	let dialog: HtmlDialogElement = shadow(&element, "dialog");
	let iframe: HtmlIFrameElement = shadow(&element, "iframe");

	button.click();
	assert!(dialog.open());
	assert_eq!(iframe.src(), "about:blank#oslc-core-postMessage-1.0");

	shadow::<HtmlButtonElement>(&element, ".close-button").click();
	assert!(!dialog.open());
	assert_eq!(iframe.src(), "about:blank");

	let details = cancelled.borrow();
	assert_eq!(details.len(), 1);
	let reason = Reflect::get(&details[0], &"reason".into()).unwrap();
	assert_eq!(reason.as_string().unwrap(), "user-cancelled");
}

/// Opens the dialog, runs `dismiss` on it, and checks for exactly one
/// `user-cancelled` event and an inert iframe.
fn assert_dismissed_by(dismiss: impl FnOnce(&HtmlDialogElement)) {
	let element = mount();
	element.set_attribute("dialog-url", "about:blank").unwrap();
	let cancelled = record(&element, "oslc-selection-cancelled");
	let made = record(&element, "oslc-selection-made");

	let dialog: HtmlDialogElement = shadow(&element, "dialog");
	let iframe: HtmlIFrameElement = shadow(&element, "iframe");
	shadow::<HtmlButtonElement>(&element, r#"button[part="button"]"#).click();
	assert!(dialog.open());

	dismiss(&dialog);

	assert!(!dialog.open());
	assert_eq!(iframe.src(), "about:blank");
	assert!(made.borrow().is_empty());
	let details = cancelled.borrow();
	assert_eq!(details.len(), 1);
	let reason = Reflect::get(&details[0], &"reason".into()).unwrap();
	assert_eq!(reason.as_string().unwrap(), "user-cancelled");
}

#[wasm_bindgen_test]
fn escape_key_cancels() {
	assert_dismissed_by(|dialog| {
		let init = KeyboardEventInit::new();
		init.set_key("Escape");
		init.set_cancelable(true);
		let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
		dialog.dispatch_event(&event).unwrap();
		assert!(event.default_prevented());
	});
}

#[wasm_bindgen_test]
fn other_keys_keep_the_dialog_open() {
	let element = mount();
	element.set_attribute("dialog-url", "about:blank").unwrap();
	let cancelled = record(&element, "oslc-selection-cancelled");
	let dialog: HtmlDialogElement = shadow(&element, "dialog");
	shadow::<HtmlButtonElement>(&element, r#"button[part="button"]"#).click();

	let init = KeyboardEventInit::new();
	init.set_key("Enter");
	let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
	dialog.dispatch_event(&event).unwrap();

	assert!(dialog.open());
	assert!(cancelled.borrow().is_empty());
}

#[wasm_bindgen_test]
fn native_cancel_event_cancels() {
	assert_dismissed_by(|dialog| {
		let event = Event::new("cancel").unwrap();
		dialog.dispatch_event(&event).unwrap();
	});
}

#[wasm_bindgen_test]
fn backdrop_click_cancels() {
	assert_dismissed_by(|dialog| dialog.click());
}

#[wasm_bindgen_test]
fn open_on_a_detached_element_fails_and_recovers() {
	let element = detached();
	element.set_attribute("dialog-url", "about:blank").unwrap();

	let open = Reflect::get(&element, &"open".into())
		.unwrap()
		.dyn_into::<js_sys::Function>()
		.unwrap();
	assert!(open.call0(&element).is_err());

	web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.body()
		.unwrap()
		.append_child(&element)
		.unwrap();
	shadow::<HtmlButtonElement>(&element, r#"button[part="button"]"#).click();
	assert!(shadow::<HtmlDialogElement>(&element, "dialog").open());
}

#[wasm_bindgen_test]
fn log_level_accepts_directives_and_rejects_garbage() {
	oslc_selection_element::init_logging("info");
	assert!(set_log_level("debug").is_ok());
	assert!(set_log_level("oslc_protocol=trace,warn").is_ok());
	assert!(set_log_level("oslc_protocol=loudest").is_err());
}

#[wasm_bindgen_test]
fn removing_the_element_ends_the_session_silently() {
	let element = mount();
	element.set_attribute("dialog-url", "about:blank").unwrap();
	let cancelled = record(&element, "oslc-selection-cancelled");

	shadow::<HtmlButtonElement>(&element, r#"button[part="button"]"#).click();
	element.remove();

	assert!(!shadow::<HtmlDialogElement>(&element, "dialog").open());
	assert!(cancelled.borrow().is_empty());
}

#[wasm_bindgen_test]
fn exported_url_builder_accepts_hash_or_token() {
	assert_eq!(
		build_dialog_url("https://ex.org/selector", None).unwrap(),
		"https://ex.org/selector#oslc-core-postMessage-1.0"
	);
	assert_eq!(
		build_dialog_url("https://ex.org/selector", Some("#oslc-core-windowName-1.0".into()))
			.unwrap(),
		"https://ex.org/selector#oslc-core-windowName-1.0"
	);
	assert!(build_dialog_url("https://ex.org/selector", Some("bogus".into())).is_err());
}
