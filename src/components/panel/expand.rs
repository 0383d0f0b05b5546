use crate::config::PanelConfig;

/// Height limit an expanded panel's content gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandCap {
	/// Simple settings rows.
	Small,
	/// The main settings drawer.
	Large,
}

/// Whether a header's content region is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
	#[default]
	Collapsed,
	Expanded,
}

/// Click-to-expand state of one panel header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandState {
	expansion: Expansion,
	cap: ExpandCap,
	widens: bool,
}

impl ExpandState {
	/// A row that opens to the small cap.
	pub fn row() -> Self {
		Self {
			expansion: Expansion::Collapsed,
			cap: ExpandCap::Small,
			widens: false,
		}
	}

	/// The drawer: large cap, and its container widens while open.
	pub fn drawer() -> Self {
		Self {
			expansion: Expansion::Collapsed,
			cap: ExpandCap::Large,
			widens: true,
		}
	}

	pub fn expansion(&self) -> Expansion {
		self.expansion
	}

	/// Whether expanding also widens the surrounding container.
	pub fn widens(&self) -> bool {
		self.widens
	}

	pub fn is_expanded(&self) -> bool {
		self.expansion == Expansion::Expanded
	}

	/// Flips expansion unless `dragging`. Returns whether anything changed.
	pub fn toggle(&mut self, dragging: bool) -> bool {
		if dragging {
			return false;
		}
		self.expansion = match self.expansion {
			Expansion::Collapsed => Expansion::Expanded,
			Expansion::Expanded => Expansion::Collapsed,
		};
		true
	}

	/// Inline content max-height; `None` clears the override.
	pub fn max_height(&self, config: &PanelConfig) -> Option<f64> {
		if !self.is_expanded() {
			return None;
		}
		Some(match self.cap {
			ExpandCap::Small => config.small_cap,
			ExpandCap::Large => config.large_cap,
		})
	}

	/// Container max-width for panels that widen; `None` for the rest.
	pub fn max_width(&self, config: &PanelConfig) -> Option<f64> {
		if !self.widens {
			return None;
		}
		Some(if self.is_expanded() {
			config.wide_width
		} else {
			config.narrow_width
		})
	}
}
