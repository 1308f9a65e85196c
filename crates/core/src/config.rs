//! Widget configuration: the four observed attributes.

use serde::{Deserialize, Serialize};

/// Title shown in the dialog header when none is configured.
pub const DEFAULT_DIALOG_TITLE: &str = "Select Resources";

/// Button label when none is configured.
pub const DEFAULT_BUTTON_TEXT: &str = "Select Resources";

/// An attribute the widget observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
	DialogUrl,
	DialogTitle,
	ButtonText,
	ButtonClass,
}

impl Attribute {
	/// Every observed attribute, in declaration order.
	pub const OBSERVED: [Attribute; 4] = [
		Attribute::DialogUrl,
		Attribute::DialogTitle,
		Attribute::ButtonText,
		Attribute::ButtonClass,
	];

	/// HTML attribute name.
	pub const fn name(self) -> &'static str {
		match self {
			Attribute::DialogUrl => "dialog-url",
			Attribute::DialogTitle => "dialog-title",
			Attribute::ButtonText => "button-text",
			Attribute::ButtonClass => "button-class",
		}
	}

	/// Reflecting JS property name.
	pub const fn property(self) -> &'static str {
		match self {
			Attribute::DialogUrl => "dialogUrl",
			Attribute::DialogTitle => "dialogTitle",
			Attribute::ButtonText => "buttonText",
			Attribute::ButtonClass => "buttonClass",
		}
	}

	/// Value a reflecting property reads when the attribute is missing or empty.
	pub const fn default_value(self) -> &'static str {
		match self {
			Attribute::DialogTitle => DEFAULT_DIALOG_TITLE,
			Attribute::ButtonText => DEFAULT_BUTTON_TEXT,
			Attribute::DialogUrl | Attribute::ButtonClass => "",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::OBSERVED.into_iter().find(|attribute| attribute.name() == name)
	}

	/// Whether a change to this attribute re-renders the button (otherwise the dialog).
	pub const fn affects_button(self) -> bool {
		matches!(self, Attribute::ButtonText | Attribute::ButtonClass)
	}
}

/// Attribute values as set by the host page.
///
/// Raw values are kept as given; the accessors resolve empty or missing values
/// to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogConfig {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub dialog_url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub dialog_title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub button_text: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub button_class: Option<String>,
}

impl DialogConfig {
	/// Dialog URL, `None` when missing or empty.
	pub fn dialog_url(&self) -> Option<&str> {
		non_empty(&self.dialog_url)
	}

	pub fn dialog_title(&self) -> &str {
		non_empty(&self.dialog_title).unwrap_or(DEFAULT_DIALOG_TITLE)
	}

	pub fn button_text(&self) -> &str {
		non_empty(&self.button_text).unwrap_or(DEFAULT_BUTTON_TEXT)
	}

	pub fn button_class(&self) -> &str {
		self.button_class.as_deref().unwrap_or_default()
	}

	/// Raw value of `attribute`.
	pub fn get(&self, attribute: Attribute) -> Option<&str> {
		self.slot(attribute).as_deref()
	}

	/// Sets `attribute`, returning true if the raw value changed.
	pub fn set(&mut self, attribute: Attribute, value: Option<String>) -> bool {
		let slot = self.slot_mut(attribute);
		if *slot == value {
			return false;
		}
		*slot = value;
		true
	}

	fn slot(&self, attribute: Attribute) -> &Option<String> {
		match attribute {
			Attribute::DialogUrl => &self.dialog_url,
			Attribute::DialogTitle => &self.dialog_title,
			Attribute::ButtonText => &self.button_text,
			Attribute::ButtonClass => &self.button_class,
		}
	}

	fn slot_mut(&mut self, attribute: Attribute) -> &mut Option<String> {
		match attribute {
			Attribute::DialogUrl => &mut self.dialog_url,
			Attribute::DialogTitle => &mut self.dialog_title,
			Attribute::ButtonText => &mut self.button_text,
			Attribute::ButtonClass => &mut self.button_class,
		}
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|value| !value.is_empty())
}
