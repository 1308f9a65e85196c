//! Error types for the selection dialog.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`SelectionDialog::open`](crate::SelectionDialog::open)
/// and by [`DialogSurface::show_modal`](crate::DialogSurface::show_modal).
///
/// None of these leave a session behind: the dialog stays closed.
#[derive(Debug, Error)]
pub enum Error {
	/// Activation without a dialog URL configured.
	#[error("OSLC selection button: dialog-url attribute is required")]
	MissingDialogUrl,

	/// The view refused to show the dialog (for example, a detached element).
	#[error("failed to show selection dialog: {0}")]
	Surface(String),

	/// The configured dialog URL could not be turned into a protocol URL.
	#[error(transparent)]
	Protocol(#[from] oslc_protocol::Error),
}

impl Error {
	/// Returns true for errors caused by the host page's configuration.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			Error::MissingDialogUrl | Error::Protocol(oslc_protocol::Error::InvalidUrl { .. })
		)
	}
}
