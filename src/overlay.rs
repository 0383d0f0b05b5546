//! The bubble overlay flag and its content-script wiring.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::window_event_listener;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::history_tree::HistoryTree;
use crate::keymap::{Command, KeyBindings, focus_in_text_entry};
use crate::storage;

/// Enabled/disabled state of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayToggle {
	enabled: bool,
	/// Flipped by the user since creation.
	touched: bool,
}

impl OverlayToggle {
	pub fn new(enabled: bool) -> Self {
		Self {
			enabled,
			touched: false,
		}
	}

	/// Takes the stored flag unless the user has flipped it already.
	pub fn restore(&mut self, stored: bool) -> bool {
		if self.touched {
			return false;
		}
		self.enabled = stored;
		true
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Flips the flag and returns the new value.
	pub fn toggle(&mut self) -> bool {
		self.enabled = !self.enabled;
		self.touched = true;
		self.enabled
	}
}

/// Per-page overlay state held by the content script.
#[derive(Debug)]
pub struct OverlaySession {
	toggle: OverlayToggle,
	trail: HistoryTree,
	page: String,
}

impl OverlaySession {
	/// `referrer` is empty when the page was not opened from another page.
	pub fn new(enabled: bool, referrer: &str, page: &str) -> Self {
		let trail = if referrer.is_empty() || referrer == page {
			HistoryTree::new(page)
		} else {
			let mut trail = HistoryTree::new(referrer);
			trail.insert(page, referrer);
			trail
		};
		Self {
			toggle: OverlayToggle::new(enabled),
			trail,
			page: page.to_owned(),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.toggle.is_enabled()
	}

	pub fn trail(&self) -> &HistoryTree {
		&self.trail
	}

	/// Flips the overlay, persists it and logs the page when enabling.
	pub fn toggle(&mut self) -> bool {
		let enabled = self.toggle.toggle();
		storage::OVERLAY_ENABLED.persist(enabled);
		if enabled {
			info!("bubble overlay enabled on {}", self.page);
			for (depth, url) in self.trail.outline() {
				debug!("{:indent$}{url}", "", indent = depth * 2);
			}
		}
		enabled
	}
}

/// Loads the overlay flag and binds the overlay key on the current page.
pub fn install(keys: KeyBindings) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let page = window.location().href().unwrap_or_default();
	let referrer = window
		.document()
		.map(|d| d.referrer())
		.unwrap_or_default();

	spawn_local(async move {
		let enabled = storage::OVERLAY_ENABLED.load_or(false).await;
		debug!("bubble overlay starts {}", if enabled { "on" } else { "off" });
		let session = Rc::new(RefCell::new(OverlaySession::new(enabled, &referrer, &page)));

		window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
			if focus_in_text_entry() {
				return;
			}
			if keys.resolve(&ev.key(), false) == Some(Command::ToggleOverlay) {
				session.borrow_mut().toggle();
			}
		});
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_toggle_flips_and_reports() {
		let mut toggle = OverlayToggle::default();
		assert!(!toggle.is_enabled());
		assert!(toggle.toggle());
		assert!(toggle.is_enabled());
		assert!(!toggle.toggle());
	}

	#[test]
	fn test_toggle_pairs_restore_state() {
		let mut toggle = OverlayToggle::new(true);
		toggle.toggle();
		toggle.toggle();
		assert!(toggle.is_enabled());
	}

	#[test]
	fn test_restore_sets_untouched_flag() {
		let mut toggle = OverlayToggle::default();
		assert!(toggle.restore(true));
		assert!(toggle.is_enabled());
	}

	#[test]
	fn test_restore_after_toggle_keeps_user_choice() {
		let mut toggle = OverlayToggle::default();
		toggle.toggle();
		assert!(!toggle.restore(false));
		assert!(toggle.is_enabled());
	}

	#[test]
	fn test_session_trail_links_referrer() {
		let session = OverlaySession::new(false, "https://a.example/", "https://b.example/");
		assert_eq!(
			session.trail().outline(),
			vec![(0, "https://a.example/"), (1, "https://b.example/")]
		);
		assert!(!session.is_enabled());
	}

	#[test]
	fn test_session_without_referrer() {
		let session = OverlaySession::new(true, "", "https://b.example/");
		assert_eq!(session.trail().len(), 1);
		assert!(session.is_enabled());
	}
}
