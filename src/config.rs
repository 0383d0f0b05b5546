//! Tunables for the new-tab page, provided to the view tree as context.

use crate::keymap::KeyBindings;
use crate::theme::ThemeTable;

/// Sizes and timings of the draggable/expandable panels.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
	/// Content max-height of an expanded simple row, in px.
	pub small_cap: f64,
	/// Content max-height of the expanded settings drawer, in px.
	pub large_cap: f64,
	/// Container max-width while the drawer is collapsed, in px.
	pub narrow_width: f64,
	/// Container max-width while the drawer is expanded, in px.
	pub wide_width: f64,
	/// Delay between pointer-up and the end of a drag, in ms.
	pub release_delay_ms: u64,
	/// Scale applied to a panel while it is picked up.
	pub pickup_scale: f64,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			small_cap: 150.0,
			large_cap: 750.0,
			narrow_width: 107.5,
			wide_width: 150.0,
			release_delay_ms: 10,
			pickup_scale: 1.04,
		}
	}
}

/// Force layout and rendering parameters for the history graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	/// Path of the graph document, relative to the extension root.
	pub data_path: String,
	/// Marker radius, also the pick radius for dragging.
	pub node_radius: f64,
	/// Many-body repulsion handed to `force_graph`.
	pub force_charge: f32,
	/// Link spring constant handed to `force_graph`.
	pub force_spring: f32,
	/// Strength of the x/y centering forces, scaled by alpha.
	pub center_strength: f64,
	/// Energy below which the layout counts as settled.
	pub alpha_min: f64,
	/// Fraction of the gap to the target energy closed per tick.
	pub alpha_decay: f64,
	/// Target energy while a node is being dragged.
	pub drag_alpha_target: f64,
	/// Interval of the layout step timer, in ms.
	pub tick_interval_ms: u64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		let alpha_min = 0.001_f64;
		Self {
			data_path: "data.json".into(),
			node_radius: 4.0,
			force_charge: 150.0,
			force_spring: 0.05,
			center_strength: 0.1,
			alpha_min,
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			drag_alpha_target: 0.3,
			tick_interval_ms: 16,
		}
	}
}

/// Everything the page reads at startup.
#[derive(Clone, Debug, Default)]
pub struct Config {
	/// Panel sizes and timings.
	pub panel: PanelConfig,
	/// Graph view parameters.
	pub graph: GraphConfig,
	/// Keyboard shortcuts.
	pub keys: KeyBindings,
	/// Available colour themes.
	pub themes: ThemeTable,
}
