//! Error types for the fallible edges of the page: graph loading and storage.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// The graph document could not be turned into a renderable model.
#[derive(Debug, Error)]
pub enum GraphLoadError {
	/// The request itself failed (network, CSP, missing window).
	#[error("failed to fetch graph document `{path}`: {reason}")]
	Fetch {
		/// Requested resource path.
		path: String,
		/// Browser-provided description.
		reason: String,
	},
	/// The server answered with a non-success status.
	#[error("graph document `{path}` returned HTTP {status}")]
	Status {
		/// Requested resource path.
		path: String,
		/// HTTP status code.
		status: u16,
	},
	/// The body is not a valid `{nodes, links}` document.
	#[error("malformed graph document: {0}")]
	Parse(#[from] serde_json::Error),
	/// A link names a node id that is not in `nodes`.
	#[error("link references unknown node `{0}`")]
	UnknownNode(String),
}

/// Platform storage rejected a read or write.
#[derive(Debug, Error)]
pub enum StorageError {
	/// The storage call itself failed.
	#[error("storage access for `{key}` failed: {reason}")]
	Access {
		/// Storage key.
		key: &'static str,
		/// Browser-provided description.
		reason: String,
	},
	/// The stored value does not have the expected shape.
	#[error("could not convert value for `{key}`: {reason}")]
	Codec {
		/// Storage key.
		key: &'static str,
		/// Conversion failure.
		reason: String,
	},
}

/// Best-effort text for a `JsValue` thrown by the browser.
pub fn describe_js(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
