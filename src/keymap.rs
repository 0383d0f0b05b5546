//! Single-key shortcuts for the settings panel and the bubble overlay.

/// Sub-tabs of the settings drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsTab {
	Clusters,
	Themes,
	Blacklist,
}

impl SettingsTab {
	pub const ALL: [SettingsTab; 3] = [Self::Clusters, Self::Themes, Self::Blacklist];

	pub fn label(self) -> &'static str {
		match self {
			Self::Clusters => "Clusters",
			Self::Themes => "Themes",
			Self::Blacklist => "Blacklist",
		}
	}
}

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	ToggleSettings,
	ToggleTab(SettingsTab),
	ToggleOverlay,
}

/// Key assignments, compared against `KeyboardEvent.key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
	pub settings: String,
	pub clusters: String,
	pub themes: String,
	pub blacklist: String,
	pub overlay: String,
}

impl Default for KeyBindings {
	fn default() -> Self {
		Self {
			settings: "s".into(),
			clusters: "c".into(),
			themes: "t".into(),
			blacklist: "b".into(),
			overlay: "b".into(),
		}
	}
}

impl KeyBindings {
	/// Maps a key press to a command.
	///
	/// Tab keys only apply while the settings drawer is open and take
	/// precedence over the overlay key when they share a binding.
	pub fn resolve(&self, key: &str, settings_open: bool) -> Option<Command> {
		if key == self.settings {
			return Some(Command::ToggleSettings);
		}
		if settings_open {
			let tab = SettingsTab::ALL
				.into_iter()
				.find(|tab| key == self.tab_key(*tab));
			if let Some(tab) = tab {
				return Some(Command::ToggleTab(tab));
			}
		}
		(key == self.overlay).then_some(Command::ToggleOverlay)
	}

	fn tab_key(&self, tab: SettingsTab) -> &str {
		match tab {
			SettingsTab::Clusters => &self.clusters,
			SettingsTab::Themes => &self.themes,
			SettingsTab::Blacklist => &self.blacklist,
		}
	}
}

/// Whether an element with this `nodeName` swallows shortcut keys.
pub fn is_text_entry(node_name: &str) -> bool {
	node_name.eq_ignore_ascii_case("INPUT") || node_name.eq_ignore_ascii_case("TEXTAREA")
}

/// Whether keyboard focus currently sits in a text field.
pub fn focus_in_text_entry() -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.active_element())
		.is_some_and(|el| is_text_entry(&el.node_name()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_settings_key_always_resolves() {
		let keys = KeyBindings::default();
		assert_eq!(keys.resolve("s", false), Some(Command::ToggleSettings));
		assert_eq!(keys.resolve("s", true), Some(Command::ToggleSettings));
	}

	#[test]
	fn test_tab_keys_need_open_settings() {
		let keys = KeyBindings::default();
		assert_eq!(keys.resolve("c", false), None);
		assert_eq!(keys.resolve("t", false), None);
		assert_eq!(
			keys.resolve("c", true),
			Some(Command::ToggleTab(SettingsTab::Clusters))
		);
		assert_eq!(
			keys.resolve("t", true),
			Some(Command::ToggleTab(SettingsTab::Themes))
		);
	}

	#[test]
	fn test_shared_overlay_key_depends_on_settings() {
		let keys = KeyBindings::default();
		assert_eq!(keys.resolve("b", false), Some(Command::ToggleOverlay));
		assert_eq!(
			keys.resolve("b", true),
			Some(Command::ToggleTab(SettingsTab::Blacklist))
		);
	}

	#[test]
	fn test_distinct_overlay_key() {
		let keys = KeyBindings {
			overlay: "o".into(),
			..KeyBindings::default()
		};
		assert_eq!(keys.resolve("o", true), Some(Command::ToggleOverlay));
		assert_eq!(keys.resolve("b", false), None);
	}

	#[test]
	fn test_unbound_key() {
		assert_eq!(KeyBindings::default().resolve("x", true), None);
	}

	#[test]
	fn test_text_entry_detection() {
		assert!(is_text_entry("TEXTAREA"));
		assert!(is_text_entry("INPUT"));
		assert!(is_text_entry("input"));
		assert!(!is_text_entry("BUTTON"));
		assert!(!is_text_entry("BODY"));
	}
}
