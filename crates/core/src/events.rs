//! The widget's output contract.

use std::fmt;

use oslc_protocol::SelectionResult;
use serde::Serialize;

/// Event fired when the delegated UI returns a result.
pub const SELECTION_MADE: &str = "oslc-selection-made";

/// Event fired when the user dismisses the dialog.
pub const SELECTION_CANCELLED: &str = "oslc-selection-cancelled";

/// Why a dialog was dismissed without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancelReason {
	/// Close button, backdrop click or Escape.
	UserCancelled,
}

impl CancelReason {
	pub const fn as_str(self) -> &'static str {
		match self {
			CancelReason::UserCancelled => "user-cancelled",
		}
	}
}

impl fmt::Display for CancelReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Terminal event of a dialog session.
///
/// Serializes to the event `detail`: `{"resources": [...]}` or `{"reason": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SelectionEvent {
	Made { resources: SelectionResult },
	Cancelled { reason: CancelReason },
}

impl SelectionEvent {
	/// DOM event type.
	pub fn name(&self) -> &'static str {
		match self {
			SelectionEvent::Made { .. } => SELECTION_MADE,
			SelectionEvent::Cancelled { .. } => SELECTION_CANCELLED,
		}
	}
}

#[cfg(test)]
mod tests {
	use oslc_protocol::Resource;

	use super::*;

	#[test]
	fn made_detail_carries_wire_shaped_resources() {
		let event = SelectionEvent::Made {
			resources: vec![Resource::new("urn:1", "Req 1")],
		};
		assert_eq!(event.name(), "oslc-selection-made");
		assert_eq!(
			serde_json::to_string(&event).unwrap(),
			r#"{"resources":[{"rdf:resource":"urn:1","oslc:label":"Req 1"}]}"#
		);
	}

	#[test]
	fn cancelled_detail_carries_reason_token() {
		let event = SelectionEvent::Cancelled {
			reason: CancelReason::UserCancelled,
		};
		assert_eq!(event.name(), "oslc-selection-cancelled");
		assert_eq!(
			serde_json::to_string(&event).unwrap(),
			r#"{"reason":"user-cancelled"}"#
		);
	}
}
