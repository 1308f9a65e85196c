//! Error types for the OSLC protocol layer.

use thiserror::Error;

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building dialog URLs or encoding and decoding responses.
///
/// Messages that fail the sender or prefix check are not errors: the window
/// message channel carries unrelated traffic, so those are dropped silently.
#[derive(Debug, Error)]
pub enum Error {
	/// The dialog base URL could not be parsed as an absolute URL.
	#[error("invalid dialog URL '{url}': {source}")]
	InvalidUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	/// A framed response was not JSON or lacked `oslc:results`.
	#[error("malformed OSLC response: {0}")]
	MalformedResponse(String),

	/// JSON serialization error while encoding a response.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The platform refused a window operation (rename, navigation, post).
	#[error("window transport failed: {0}")]
	Transport(String),
}

impl Error {
	/// Returns true if this error came from decoding a remote response.
	pub fn is_malformed_response(&self) -> bool {
		matches!(self, Error::MalformedResponse(_))
	}
}
