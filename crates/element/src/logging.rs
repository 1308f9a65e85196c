use std::cell::RefCell;
use std::io;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::window::to_js;

/// Directive installed at startup, and the fallback for one that does not parse.
pub const DEFAULT_FILTER: &str = "info";

thread_local! {
	static FILTER: RefCell<Option<reload::Handle<EnvFilter, Registry>>> = const { RefCell::new(None) };
}

/// Installs a subscriber that prints to the browser console.
///
/// Only the first call installs anything; later filters go through [`set_log_level`].
pub fn init_logging(filter: &str) {
	let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let (filter_layer, handle) = reload::Layer::new(env_filter);

	let installed = tracing_subscriber::registry()
		.with(filter_layer)
		.with(
			fmt::layer()
				.with_writer(ConsoleWriter)
				.without_time()
				.with_ansi(false)
				.with_target(true)
				.with_level(true)
				.compact(),
		)
		.try_init();

	if installed.is_ok() {
		FILTER.with(|slot| *slot.borrow_mut() = Some(handle));
	}
}

/// Replaces the active log filter, e.g. `"debug"` or `"oslc_protocol=trace,warn"`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(directive: &str) -> Result<(), JsValue> {
	let filter = EnvFilter::try_new(directive).map_err(to_js)?;
	FILTER.with(|slot| match slot.borrow().as_ref() {
		Some(handle) => handle.reload(filter).map_err(to_js),
		None => Err(JsValue::from_str("logging is not initialized")),
	})
}

/// Routes each formatted event to the console method matching its level.
struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
	type Writer = ConsoleLine;

	fn make_writer(&'a self) -> Self::Writer {
		ConsoleLine::new(Level::INFO)
	}

	fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
		ConsoleLine::new(*meta.level())
	}
}

/// Buffers one event and flushes it as a single console call on drop.
struct ConsoleLine {
	level: Level,
	buf: Vec<u8>,
}

impl ConsoleLine {
	fn new(level: Level) -> Self {
		Self {
			level,
			buf: Vec::new(),
		}
	}
}

impl io::Write for ConsoleLine {
	fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
		self.buf.extend_from_slice(bytes);
		Ok(bytes.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Drop for ConsoleLine {
	fn drop(&mut self) {
		let line = String::from_utf8_lossy(&self.buf);
		let line = line.trim_end();
		if line.is_empty() {
			return;
		}

		match self.level {
			Level::ERROR => console::error_1(&line.into()),
			Level::WARN => console::warn_1(&line.into()),
			Level::INFO => console::info_1(&line.into()),
			_ => console::debug_1(&line.into()),
		}
	}
}
