//! `oslc-response:` framing.
//!
//! The reserved prefix is the only framing: no length, no envelope version.
//! Producers and consumers must agree on it byte for byte.

use crate::error::{Error, Result};
use crate::types::Response;

/// Marker that distinguishes an OSLC response from other cross-window traffic.
pub const RESPONSE_PREFIX: &str = "oslc-response:";

/// Serializes `response` into `oslc-response:<json>`.
pub fn encode_response(response: &Response) -> Result<String> {
	let json = serde_json::to_string(response)?;
	Ok(format!("{RESPONSE_PREFIX}{json}"))
}

/// Strips the prefix from a framed message and parses the envelope.
///
/// A missing prefix, invalid JSON, or an object without `oslc:results` yields
/// [`Error::MalformedResponse`].
pub fn decode_response(message: &str) -> Result<Response> {
	let body = message
		.strip_prefix(RESPONSE_PREFIX)
		.ok_or_else(|| Error::MalformedResponse(format!("missing `{RESPONSE_PREFIX}` prefix")))?;
	serde_json::from_str(body).map_err(|err| Error::MalformedResponse(err.to_string()))
}

/// Returns true if `payload` carries the reserved prefix.
pub fn has_response_prefix(payload: &str) -> bool {
	payload.starts_with(RESPONSE_PREFIX)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::types::Resource;

	#[test]
	fn encodes_the_documented_wire_format() {
		let response = Response::single(Resource::new("urn:1", "Req 1"));
		assert_eq!(
			encode_response(&response).unwrap(),
			r#"oslc-response:{"oslc:results":[{"rdf:resource":"urn:1","oslc:label":"Req 1"}]}"#
		);
	}

	#[test]
	fn empty_response_encodes_an_empty_result_array() {
		assert_eq!(
			encode_response(&Response::empty()).unwrap(),
			r#"oslc-response:{"oslc:results":[]}"#
		);
	}

	#[test]
	fn decode_rejects_missing_prefix() {
		let err = decode_response(r#"{"oslc:results":[]}"#).unwrap_err();
		assert!(err.is_malformed_response());
	}

	#[test]
	fn decode_rejects_non_json_body() {
		let err = decode_response("oslc-response:not json").unwrap_err();
		assert!(err.is_malformed_response());
	}

	#[test]
	fn decode_rejects_body_without_results() {
		let err = decode_response(r#"oslc-response:{"results":[]}"#).unwrap_err();
		assert!(err.is_malformed_response());
	}

	#[test]
	fn decode_preserves_result_order() {
		let decoded = decode_response(
			r#"oslc-response:{"oslc:results":[{"rdf:resource":"urn:b","oslc:label":"B"},{"rdf:resource":"urn:a","oslc:label":"A"}]}"#,
		)
		.unwrap();
		let uris: Vec<_> = decoded.results.iter().map(Resource::uri).collect();
		assert_eq!(uris, ["urn:b", "urn:a"]);
	}

	#[test]
	fn prefix_check_is_anchored_at_start() {
		assert!(has_response_prefix("oslc-response:{}"));
		assert!(!has_response_prefix(" oslc-response:{}"));
		assert!(!has_response_prefix("x-oslc-response:{}"));
	}

	fn resource_strategy() -> impl Strategy<Value = Resource> {
		(any::<String>(), any::<String>()).prop_map(|(uri, label)| Resource::new(uri, label))
	}

	proptest! {
		#[test]
		fn decode_inverts_encode(results in prop::collection::vec(resource_strategy(), 0..8)) {
			let response = Response::new(results);
			let wire = encode_response(&response).unwrap();
			prop_assert_eq!(decode_response(&wire).unwrap(), response);
		}
	}
}
