//! Resource and response shapes exchanged with a delegated UI.
//!
//! A delegated UI answers with a single JSON object:
//!
//! ```text
//! {"oslc:results": [{"rdf:resource": "<uri>", "oslc:label": "<label>"}, ...]}
//! ```
//!
//! # Main Types
//!
//! - [`Resource`] - One selected or created resource
//! - [`Response`] - The `oslc:results` envelope
//! - [`Protocol`] - How the dialog URL is qualified and how the answer travels back

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resource picked or created in a delegated UI.
///
/// Resources are only produced by decoding a remote response (or by a responder
/// building one) and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
	/// Absolute identifier of the resource.
	#[serde(rename = "rdf:resource")]
	uri: String,
	/// Human-readable display name. Delegated UIs that omit it yield an empty label.
	#[serde(rename = "oslc:label", default)]
	label: String,
}

impl Resource {
	/// Creates a resource from its URI and label.
	pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			uri: uri.into(),
			label: label.into(),
		}
	}

	/// Returns the resource URI (`rdf:resource`).
	pub fn uri(&self) -> &str {
		&self.uri
	}

	/// Returns the display label (`oslc:label`).
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Splits the resource into `(uri, label)`.
	pub fn into_parts(self) -> (String, String) {
		(self.uri, self.label)
	}
}

/// Ordered resources returned by a delegated UI; empty is a valid answer.
pub type SelectionResult = Vec<Resource>;

/// The `oslc:results` envelope carried after the response prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
	#[serde(rename = "oslc:results")]
	pub results: SelectionResult,
}

impl Response {
	/// Wraps `results` in a response envelope.
	pub fn new(results: SelectionResult) -> Self {
		Self { results }
	}

	/// Response with no results, sent when the user cancels inside the delegated UI.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Response carrying one created resource.
	pub fn single(resource: Resource) -> Self {
		Self {
			results: vec![resource],
		}
	}

	pub fn into_results(self) -> SelectionResult {
		self.results
	}
}

/// Messaging protocol negotiated through the dialog URL fragment.
///
/// The fragment tokens are the only stringly-typed part of the handshake; they
/// are converted with [`from_token`](Self::from_token) / [`from_hash`](Self::from_hash)
/// at the boundary and never passed around as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
	/// Legacy transport: the child renames its window and navigates back.
	WindowName,
	/// `window.postMessage` to the parent frame.
	#[default]
	PostMessage,
}

impl Protocol {
	/// All protocol variants, in detection order.
	pub const ALL: [Protocol; 2] = [Protocol::WindowName, Protocol::PostMessage];

	/// Fragment token without the leading `#`.
	pub const fn token(self) -> &'static str {
		match self {
			Protocol::WindowName => "oslc-core-windowName-1.0",
			Protocol::PostMessage => "oslc-core-postMessage-1.0",
		}
	}

	/// Parses a fragment token (no leading `#`). Anything else is untrusted.
	pub fn from_token(token: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|protocol| protocol.token() == token)
	}

	/// Parses a `location.hash` value, which includes the leading `#`.
	pub fn from_hash(hash: &str) -> Option<Self> {
		hash.strip_prefix('#').and_then(Self::from_token)
	}
}

impl fmt::Display for Protocol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}
