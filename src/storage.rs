//! Typed slots over `chrome.storage`.

use std::marker::PhantomData;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::error::{StorageError, describe_js};

#[wasm_bindgen(module = "/storage.js")]
extern "C" {
	#[wasm_bindgen(catch)]
	async fn getStorage(area: &str, key: &str) -> Result<JsValue, JsValue>;

	#[wasm_bindgen(catch)]
	async fn setStorage(area: &str, key: &str, value: JsValue) -> Result<(), JsValue>;
}

/// Which `chrome.storage` area a slot lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
	/// Synced across the user's browsers.
	Sync,
	/// This browser only.
	Local,
}

impl StorageArea {
	fn as_str(self) -> &'static str {
		match self {
			Self::Sync => "sync",
			Self::Local => "local",
		}
	}
}

/// One key in one storage area, holding a `T`.
#[derive(Debug)]
pub struct Slot<T> {
	area: StorageArea,
	key: &'static str,
	_value: PhantomData<fn() -> T>,
}

impl<T> Clone for Slot<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Slot<T> {}

/// Name of the selected theme.
pub const THEME: Slot<String> = Slot::new(StorageArea::Sync, "theme");

/// Whether the bubble overlay is enabled.
pub const OVERLAY_ENABLED: Slot<bool> = Slot::new(StorageArea::Local, "bubble_bool");

impl<T> Slot<T> {
	pub const fn new(area: StorageArea, key: &'static str) -> Self {
		Self {
			area,
			key,
			_value: PhantomData,
		}
	}

	pub fn key(&self) -> &'static str {
		self.key
	}
}

impl<T: Serialize + DeserializeOwned + 'static> Slot<T> {
	/// Reads the slot; `Ok(None)` when nothing is stored.
	pub async fn load(self) -> Result<Option<T>, StorageError> {
		let raw = getStorage(self.area.as_str(), self.key)
			.await
			.map_err(|e| StorageError::Access {
				key: self.key,
				reason: describe_js(&e),
			})?;
		if raw.is_undefined() || raw.is_null() {
			return Ok(None);
		}
		serde_wasm_bindgen::from_value(raw)
			.map(Some)
			.map_err(|e| StorageError::Codec {
				key: self.key,
				reason: e.to_string(),
			})
	}

	/// Reads the slot, falling back to `default` when it is empty or the
	/// read fails.
	pub async fn load_or(self, default: T) -> T {
		match self.load().await {
			Ok(Some(value)) => value,
			Ok(None) => default,
			Err(err) => {
				warn!("{err}; using default");
				default
			}
		}
	}

	pub async fn store(self, value: &T) -> Result<(), StorageError> {
		let raw = serde_wasm_bindgen::to_value(value).map_err(|e| StorageError::Codec {
			key: self.key,
			reason: e.to_string(),
		})?;
		setStorage(self.area.as_str(), self.key, raw)
			.await
			.map_err(|e| StorageError::Access {
				key: self.key,
				reason: describe_js(&e),
			})
	}

	/// Fire-and-forget write; failures are logged.
	pub fn persist(self, value: T) {
		spawn_local(async move {
			if let Err(err) = self.store(&value).await {
				warn!("{err}");
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_slot_keys() {
		assert_eq!(THEME.key(), "theme");
		assert_eq!(OVERLAY_ENABLED.key(), "bubble_bool");
		assert_eq!(THEME.area, StorageArea::Sync);
		assert_eq!(OVERLAY_ENABLED.area, StorageArea::Local);
	}

	#[test]
	fn test_area_names_match_chrome_storage() {
		assert_eq!(StorageArea::Sync.as_str(), "sync");
		assert_eq!(StorageArea::Local.as_str(), "local");
	}
}
