//! Shadow DOM style sheet. Every visual property is overridable through an
//! `--oslc-*` custom property set on the host or an ancestor.

pub(crate) const STYLES: &str = r#"
:host {
	display: var(--oslc-button-display, inline-block);
	margin: var(--oslc-button-margin, 0);
}

button[part="button"] {
	padding: var(--oslc-button-padding, 8px 16px);
	border: var(--oslc-button-border, 1px solid #ccc);
	border-radius: var(--oslc-button-border-radius, 4px);
	background: var(--oslc-button-background, #f8f9fa);
	color: var(--oslc-button-color, #333);
	cursor: pointer;
	font-family: var(--oslc-button-font-family, inherit);
	font-size: var(--oslc-button-font-size, inherit);
	font-weight: var(--oslc-button-font-weight, normal);
	transition: var(--oslc-button-transition, all 0.2s ease);
	min-width: var(--oslc-button-min-width, auto);
	min-height: var(--oslc-button-min-height, auto);
}

button[part="button"]:hover {
	background: var(--oslc-button-hover-background, #e9ecef);
	border-color: var(--oslc-button-hover-border-color, #adb5bd);
	color: var(--oslc-button-hover-color, var(--oslc-button-color, #333));
	transform: var(--oslc-button-hover-transform, none);
}

button[part="button"]:active {
	background: var(--oslc-button-active-background, #dee2e6);
	color: var(--oslc-button-active-color, var(--oslc-button-color, #333));
	transform: var(--oslc-button-active-transform, none);
}

button[part="button"]:disabled {
	background: var(--oslc-button-disabled-background, #f8f9fa);
	color: var(--oslc-button-disabled-color, #6c757d);
	cursor: not-allowed;
	opacity: var(--oslc-button-disabled-opacity, 0.65);
}

button[part="button"]:focus {
	outline: var(--oslc-button-focus-outline, 2px solid #007bff);
	outline-offset: var(--oslc-button-focus-outline-offset, 2px);
}

dialog {
	padding: 0;
	border: var(--oslc-dialog-border, none);
	border-radius: var(--oslc-dialog-border-radius, 8px);
	box-shadow: var(--oslc-dialog-box-shadow, 0 4px 20px rgba(0, 0, 0, 0.3));
	max-width: var(--oslc-dialog-max-width, 90vw);
	max-height: var(--oslc-dialog-max-height, 90vh);
	width: var(--oslc-dialog-width, 800px);
	height: var(--oslc-dialog-height, 600px);
	background: var(--oslc-dialog-background, white);
	animation: var(--oslc-dialog-animation, none);
}

dialog::backdrop {
	background: var(--oslc-dialog-backdrop-background, rgba(0, 0, 0, 0.5));
	backdrop-filter: var(--oslc-dialog-backdrop-filter, none);
}

.dialog-header {
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: var(--oslc-dialog-header-padding, 16px 20px);
	border-bottom: var(--oslc-dialog-header-border-bottom, 1px solid #e9ecef);
	background: var(--oslc-dialog-header-background, #f8f9fa);
	border-radius: var(--oslc-dialog-header-border-radius, 8px 8px 0 0);
	min-height: var(--oslc-dialog-header-min-height, auto);
}

.dialog-title {
	margin: 0;
	font-size: var(--oslc-dialog-title-font-size, 1.25rem);
	font-weight: var(--oslc-dialog-title-font-weight, 500);
	color: var(--oslc-dialog-title-color, #333);
	font-family: var(--oslc-dialog-title-font-family, inherit);
}

.close-button {
	background: var(--oslc-close-button-background, none);
	border: var(--oslc-close-button-border, none);
	font-size: var(--oslc-close-button-font-size, 1.5rem);
	cursor: pointer;
	color: var(--oslc-close-button-color, #6c757d);
	padding: var(--oslc-close-button-padding, 0);
	width: var(--oslc-close-button-width, 32px);
	height: var(--oslc-close-button-height, 32px);
	display: flex;
	align-items: center;
	justify-content: center;
	border-radius: var(--oslc-close-button-border-radius, 4px);
	transition: var(--oslc-close-button-transition, all 0.2s ease);
}

.close-button:hover {
	background: var(--oslc-close-button-hover-background, #e9ecef);
	color: var(--oslc-close-button-hover-color, #495057);
}

.dialog-content {
	flex: 1;
	display: flex;
	flex-direction: column;
	overflow: hidden;
	background: var(--oslc-dialog-content-background, transparent);
}

iframe {
	flex: 1;
	border: var(--oslc-iframe-border, none);
	width: 100%;
	min-height: var(--oslc-iframe-min-height, 500px);
	border-radius: var(--oslc-iframe-border-radius, 0);
}

.loading {
	display: flex;
	align-items: center;
	justify-content: center;
	padding: var(--oslc-loading-padding, 40px);
	color: var(--oslc-loading-color, #6c757d);
	font-size: var(--oslc-loading-font-size, inherit);
	background: var(--oslc-loading-background, transparent);
}
"#;

/// Shadow root content: style sheet, trigger button and the closed dialog.
pub(crate) fn markup() -> String {
	format!(
		r#"<style>{STYLES}</style>
<button part="button" type="button"></button>
<dialog>
	<div class="dialog-header">
		<h2 class="dialog-title"></h2>
		<button class="close-button" type="button" aria-label="Close">×</button>
	</div>
	<div class="dialog-content">
		<div class="loading">Loading selection dialog...</div>
		<iframe src="about:blank" style="display: none"></iframe>
	</div>
</dialog>"#
	)
}
