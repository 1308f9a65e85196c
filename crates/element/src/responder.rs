//! Functions a delegated UI page calls to answer its opener.

use oslc_protocol::{Protocol, Resource, Response, ResponsePayload, SelectionResult};
use wasm_bindgen::prelude::*;

use crate::window::{WebWindow, to_js};

/// Accepts a protocol as a hash (`#oslc-core-postMessage-1.0`) or a bare token.
fn parse_protocol(value: Option<&str>) -> Result<Option<Protocol>, JsValue> {
	value
		.map(|value| {
			Protocol::from_hash(value)
				.or_else(|| Protocol::from_token(value))
				.ok_or_else(|| JsValue::from_str(&format!("unknown OSLC protocol: {value}")))
		})
		.transpose()
}

/// Returns `base_url` with its fragment set to the protocol token (postMessage by default).
#[wasm_bindgen(js_name = buildDialogUrl)]
pub fn build_dialog_url(base_url: &str, protocol: Option<String>) -> Result<String, JsValue> {
	let protocol = parse_protocol(protocol.as_deref())?.unwrap_or_default();
	oslc_protocol::build_dialog_url(base_url, protocol).map_err(to_js)
}

/// Sends a response object, or a raw string verbatim, and returns the protocol hash used.
#[wasm_bindgen(js_name = sendResponse)]
pub fn send_response(response: JsValue, protocol: Option<String>) -> Result<String, JsValue> {
	let payload = match response.as_string() {
		Some(raw) => ResponsePayload::Raw(raw),
		None => ResponsePayload::Response(serde_wasm_bindgen::from_value::<Response>(response)?),
	};
	let protocol = parse_protocol(protocol.as_deref())?;

	let window = WebWindow::current()?;
	let used = oslc_protocol::send_response(&window, payload, protocol).map_err(to_js)?;
	Ok(format!("#{used}"))
}

#[wasm_bindgen(js_name = sendSelectionResponse)]
pub fn send_selection_response(resources: JsValue) -> Result<(), JsValue> {
	let resources: SelectionResult = serde_wasm_bindgen::from_value(resources)?;
	let window = WebWindow::current()?;
	oslc_protocol::send_selection_response(&window, resources).map_err(to_js)?;
	Ok(())
}

#[wasm_bindgen(js_name = sendCreationResponse)]
pub fn send_creation_response(resource: JsValue) -> Result<(), JsValue> {
	let resource: Resource = serde_wasm_bindgen::from_value(resource)?;
	let window = WebWindow::current()?;
	oslc_protocol::send_creation_response(&window, resource).map_err(to_js)?;
	Ok(())
}

#[wasm_bindgen(js_name = sendCancelResponse)]
pub fn send_cancel_response() -> Result<(), JsValue> {
	let window = WebWindow::current()?;
	oslc_protocol::send_cancel_response(&window).map_err(to_js)?;
	Ok(())
}
