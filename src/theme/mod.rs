//! Colour themes as CSS custom-property tables applied to the document root.

mod palette;

pub use palette::{FOLLOW_DEVICE, Theme, ThemeTable, VARIABLES};

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement};

/// Receiver of style property writes.
pub trait StyleSink {
	/// Sets one custom property.
	fn set_property(&mut self, name: &str, value: &str);
}

impl StyleSink for CssStyleDeclaration {
	fn set_property(&mut self, name: &str, value: &str) {
		let _ = CssStyleDeclaration::set_property(self, name, value);
	}
}

/// Writes every variable of `theme` into `sink`, back to back.
pub fn apply(sink: &mut impl StyleSink, theme: &Theme) {
	for (name, value) in theme.assignments() {
		sink.set_property(name, value);
	}
}

/// Whether the host reports `prefers-color-scheme: dark`.
pub fn prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.is_some_and(|query| query.matches())
}

/// Resolves `name` against `table` and applies it to `:root`.
///
/// Returns the name of the theme actually written, or `None` when there is
/// no document root or the table is empty.
pub fn apply_to_document(table: &ThemeTable, name: &str) -> Option<String> {
	let theme = table.resolve(name, prefers_dark())?;
	let root: HtmlElement = web_sys::window()?
		.document()?
		.document_element()?
		.dyn_into()
		.ok()?;
	apply(&mut root.style(), theme);
	debug!("applied theme {} for selection {name:?}", theme.name());
	Some(theme.name().to_owned())
}
