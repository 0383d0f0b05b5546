/// CSS custom properties every theme assigns, in write order.
pub const VARIABLES: [&str; 24] = [
	"--shade",
	"--shade-hover",
	"--shade-fade",
	"--shade-fade-hover",
	"--primary",
	"--primary-hover",
	"--menu-fg",
	"--menu-bg",
	"--textarea-bg",
	"--canvas",
	"--submenu-bg",
	"--switch-bg",
	"--header-text",
	"--primary-text",
	"--secondary-text",
	"--secondary-hover",
	"--scrollbar",
	"--scrollbar-hover",
	"--scrollbar-bg",
	"--list-bg",
	"--switch-toggle",
	"--watermark",
	"--borders",
	"--shadow",
];

/// Pseudo-theme that defers to the host's colour-scheme preference.
pub const FOLLOW_DEVICE: &str = "Follow device theme";

/// A named, complete assignment of [`VARIABLES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
	name: String,
	values: [String; VARIABLES.len()],
}

impl Theme {
	/// `values[i]` is the value of `VARIABLES[i]`.
	pub fn new(name: impl Into<String>, values: [&str; VARIABLES.len()]) -> Self {
		Self {
			name: name.into(),
			values: values.map(str::to_owned),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// `(variable, value)` pairs in write order.
	pub fn assignments(&self) -> impl Iterator<Item = (&'static str, &str)> {
		VARIABLES
			.iter()
			.copied()
			.zip(self.values.iter().map(String::as_str))
	}

	pub fn value(&self, variable: &str) -> Option<&str> {
		self.assignments()
			.find(|(name, _)| *name == variable)
			.map(|(_, value)| value)
	}
}

/// The themes offered in the menu, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeTable {
	themes: Vec<Theme>,
	default: String,
}

impl ThemeTable {
	/// An empty table; `default` names the fallback theme.
	pub fn new(default: impl Into<String>) -> Self {
		Self {
			themes: Vec::new(),
			default: default.into(),
		}
	}

	/// Adds a theme, replacing any existing one with the same name.
	pub fn with_theme(mut self, theme: Theme) -> Self {
		match self.themes.iter_mut().find(|t| t.name == theme.name) {
			Some(existing) => *existing = theme,
			None => self.themes.push(theme),
		}
		self
	}

	pub fn get(&self, name: &str) -> Option<&Theme> {
		self.themes.iter().find(|t| t.name == name)
	}

	pub fn default_theme(&self) -> Option<&Theme> {
		self.get(&self.default).or_else(|| self.themes.first())
	}

	/// Names in display order, followed by [`FOLLOW_DEVICE`].
	pub fn option_names(&self) -> Vec<String> {
		self.themes
			.iter()
			.map(|t| t.name.clone())
			.chain(std::iter::once(FOLLOW_DEVICE.to_owned()))
			.collect()
	}

	/// Picks the theme for a stored selection.
	///
	/// Named themes resolve directly. [`FOLLOW_DEVICE`] and names not in the
	/// table go through the colour-scheme preference to Dark or Light, then
	/// to the table default.
	pub fn resolve(&self, name: &str, prefers_dark: bool) -> Option<&Theme> {
		if name != FOLLOW_DEVICE {
			if let Some(theme) = self.get(name) {
				return Some(theme);
			}
		}
		let device = if prefers_dark { "Dark" } else { "Light" };
		self.get(device).or_else(|| self.default_theme())
	}
}

impl Default for ThemeTable {
	fn default() -> Self {
		ThemeTable::new("Dark")
			.with_theme(Theme::new(
				"Light",
				[
					"1.0", "0.8", "0.8", "1.0", "#eb6056", "red", "white", "#ab9edb", "#f5f8fc",
					"#f1f3f5", "#ddd8f1", "#ccc", "white", "black", "black", "#eeecf8", "#889",
					"#556", "#ccc", "white", "white", "#eb6056", "#ccccdd", "#ccccdd",
				],
			))
			.with_theme(Theme::new(
				"Dark",
				[
					"0.6", "1.0", "0.6", "1.0", "#ed452b", "#f79286", "#2b2b30", "#24233D",
					"#171717", "#202023", "#111114", "#ccc", "white", "white", "#ccc", "#3c3a44",
					"#555", "#888", "#252526", "#252526", "white", "#ffffff6e", "#494953",
					"#191920",
				],
			))
			.with_theme(Theme::new(
				"Twilight",
				[
					"0.6", "1.0", "0.6", "1.0", "#ab9edb", "green", "#323558", "#24233D",
					"#171717", "#0c0c15", "#000000", "#ccc", "white", "#ffffff", "#ccc",
					"#3c3a44", "#555", "#888", "#252526", "#252526", "#ffffff", "#ffffff6e",
					"#494953", "#101010",
				],
			))
			.with_theme(Theme::new(
				"Arctic",
				[
					"0.6", "1.0", "0.6", "1.0", "#819ac1", "#bce", "#2e3440", "#383a59",
					"#1c1e26", "#191a1f", "#22262f", "#d8dee9", "#22262f", "#d8dee9", "#d8dee9",
					"#3b4252", "#434c5e", "#678", "#1c1e26", "#2e3440", "#d8dee9", "#ffffff6e",
					"#484a53", "#14161a",
				],
			))
			.with_theme(Theme::new(
				"Pastel",
				[
					"1.0", "0.85", "0.85", "1.0", "#f4a7b9", "#f7c6d3", "#fdf6f0", "#c3b1e1",
					"#fffaf5", "#f8f1ec", "#e8dff5", "#d9d2e9", "white", "#4a4453", "#6b6478",
					"#f1e9fb", "#c9bfd8", "#a99cbf", "#eee6f7", "#fffaf5", "white", "#f4a7b9",
					"#e3d9ef", "#e3d9ef",
				],
			))
			.with_theme(Theme::new(
				"Darker",
				[
					"0.5", "0.9", "0.5", "0.9", "#e0402a", "#f07a68", "#161618", "#121220",
					"#0b0b0b", "#0e0e10", "#070709", "#999", "white", "#e6e6e6", "#aaa",
					"#26252c", "#3a3a3a", "#666", "#141415", "#141415", "#e6e6e6", "#ffffff4a",
					"#2e2e35", "#050507",
				],
			))
	}
}
