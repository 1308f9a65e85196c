//! Protocol-qualified dialog URLs and protocol detection.

use url::Url;

use crate::error::{Error, Result};
use crate::types::Protocol;
use crate::window::HostWindow;

/// Address an iframe is pointed at once its session ends.
pub const INERT_FRAME_URL: &str = "about:blank";

/// Returns `base_url` with its fragment replaced by `protocol`'s token.
///
/// Scheme, host, path and query are left alone. Relative or unparsable URLs
/// fail with [`Error::InvalidUrl`].
pub fn build_dialog_url(base_url: &str, protocol: Protocol) -> Result<String> {
	let mut url = Url::parse(base_url).map_err(|source| Error::InvalidUrl {
		url: base_url.to_owned(),
		source,
	})?;
	url.set_fragment(Some(protocol.token()));
	Ok(url.into())
}

/// Reads the protocol a delegated UI page was opened with from its own hash.
///
/// Only the exact fragment tokens match; any other hash yields `None`.
pub fn detect_protocol<W: HostWindow + ?Sized>(window: &W) -> Option<Protocol> {
	Protocol::from_hash(&window.location_hash())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::RecordingWindow;

	#[test]
	fn post_message_fragment_is_appended() {
		assert_eq!(
			build_dialog_url("https://ex.org/selector", Protocol::PostMessage).unwrap(),
			"https://ex.org/selector#oslc-core-postMessage-1.0"
		);
	}

	#[test]
	fn existing_fragment_is_replaced() {
		assert_eq!(
			build_dialog_url("https://ex.org/selector#old", Protocol::WindowName).unwrap(),
			"https://ex.org/selector#oslc-core-windowName-1.0"
		);
	}

	#[test]
	fn query_and_port_are_preserved() {
		assert_eq!(
			build_dialog_url("http://localhost:8080/sel?type=req&q=a%20b", Protocol::PostMessage)
				.unwrap(),
			"http://localhost:8080/sel?type=req&q=a%20b#oslc-core-postMessage-1.0"
		);
	}

	#[test]
	fn relative_url_is_invalid() {
		let err = build_dialog_url("/selector", Protocol::PostMessage).unwrap_err();
		assert!(matches!(err, Error::InvalidUrl { ref url, .. } if url == "/selector"));
	}

	#[test]
	fn garbage_url_is_invalid() {
		assert!(matches!(
			build_dialog_url("http://[::1", Protocol::PostMessage),
			Err(Error::InvalidUrl { .. })
		));
	}

	#[test]
	fn detects_protocol_from_host_hash() {
		let window = RecordingWindow::new("#oslc-core-windowName-1.0");
		assert_eq!(detect_protocol(&window), Some(Protocol::WindowName));
	}

	#[test]
	fn unrelated_hash_detects_nothing() {
		assert_eq!(detect_protocol(&RecordingWindow::new("#section-2")), None);
		assert_eq!(detect_protocol(&RecordingWindow::new("")), None);
	}
}
