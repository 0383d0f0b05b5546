use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::scale::OrdinalScale;
use super::types::GraphData;
use crate::config::GraphConfig;
use crate::error::GraphLoadError;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub color: String,
	/// Position the node is held at while dragged.
	pub pin: Option<(f32, f32)>,
}

/// Pan/zoom from simulation space to canvas space: `screen = p * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	pub fn invert(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	pub last_x: f64,
	pub last_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Layout temperature. Forces act while `alpha` is above the minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Energy {
	pub alpha: f64,
	pub target: f64,
}

impl Energy {
	fn step(&mut self, decay: f64) {
		self.alpha += (self.target - self.alpha) * decay;
	}

	pub fn is_settled(&self, alpha_min: f64) -> bool {
		self.alpha < alpha_min && self.target < alpha_min
	}
}

pub struct GraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub energy: Energy,
	pub width: f64,
	pub height: f64,
	config: GraphConfig,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

impl GraphState {
	/// Builds the model. Every link endpoint must name a node.
	pub fn new(
		data: &GraphData,
		width: f64,
		height: f64,
		config: GraphConfig,
	) -> Result<Self, GraphLoadError> {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut colors = OrdinalScale::default();
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let user = node.user.as_ref().map_or("", |u| u.0.as_str());
			// phyllotaxis seed around the origin
			let (radius, angle) = (
				10.0 * (0.5 + i as f64).sqrt(),
				i as f64 * PI * (3.0 - 5f64.sqrt()),
			);
			let idx = graph.add_node(NodeData {
				x: (radius * angle.cos()) as f32,
				y: (radius * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.0.clone(),
					color: colors.color(user).into(),
					pin: None,
				},
			});
			id_to_idx.insert(node.id.0.clone(), idx);
		}

		for link in &data.links {
			let resolve = |key: &str| {
				id_to_idx
					.get(key)
					.copied()
					.ok_or_else(|| GraphLoadError::UnknownNode(key.to_owned()))
			};
			let (src, tgt) = (resolve(&link.source.0)?, resolve(&link.target.0)?);
			// a spring needs two distinct ends
			if src == tgt {
				debug!("skipping self-link on node {}", link.source.0);
				continue;
			}
			graph.add_edge(src, tgt, EdgeData::default());
		}

		Ok(Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			energy: Energy {
				alpha: 1.0,
				target: 0.0,
			},
			width,
			height,
			config,
			id_to_idx,
		})
	}

	pub fn node_radius(&self) -> f64 {
		self.config.node_radius
	}

	pub fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn pin(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = node.data.user_data.pin;
			}
		});
		found
	}

	pub fn is_settled(&self) -> bool {
		self.energy.is_settled(self.config.alpha_min)
	}

	/// Nearest node within the marker radius of a canvas point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.transform.invert(sx, sy);
		let limit = self.config.node_radius * self.config.node_radius;
		let mut nearest: Option<(f64, DefaultNodeIdx)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let d2 = dx * dx + dy * dy;
			if d2 < limit && nearest.is_none_or(|(best, _)| d2 < best) {
				nearest = Some((d2, node.index()));
			}
		});
		nearest.map(|(_, idx)| idx)
	}

	/// One layout step. Returns `false` once the layout has settled.
	pub fn tick(&mut self, dt: f32) -> bool {
		if self.is_settled() {
			return false;
		}
		self.energy.step(self.config.alpha_decay);
		self.graph.update(dt);

		let pull = self.config.center_strength * self.energy.alpha;
		self.graph.visit_nodes_mut(|node| {
			if let Some((fx, fy)) = node.data.user_data.pin {
				node.data.x = fx;
				node.data.y = fy;
			} else {
				node.data.x -= (node.data.x as f64 * pull) as f32;
				node.data.y -= (node.data.y as f64 * pull) as f32;
			}
		});
		true
	}

	/// Pointer-down on the canvas: pins a node under the pointer, otherwise
	/// starts panning.
	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.node_at_position(sx, sy) else {
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
			return;
		};
		self.energy.target = self.config.drag_alpha_target;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.user_data.pin = Some((node.data.x, node.data.y));
				node.data.is_anchor = true;
			}
		});
		self.drag = DragState {
			node_idx: Some(idx),
			last_x: sx,
			last_y: sy,
		};
	}

	/// Pointer-move. Returns whether the view needs a redraw.
	pub fn pointer_move(&mut self, sx: f64, sy: f64) -> bool {
		if let Some(idx) = self.drag.node_idx {
			let k = self.transform.k;
			let (dx, dy) = ((sx - self.drag.last_x) / k, (sy - self.drag.last_y) / k);
			(self.drag.last_x, self.drag.last_y) = (sx, sy);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					if let Some((fx, fy)) = node.data.user_data.pin.as_mut() {
						*fx += dx as f32;
						*fy += dy as f32;
					}
				}
			});
			return true;
		}
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
			return true;
		}
		false
	}

	/// Pointer-up or leave: releases a pinned node and lets the layout cool.
	pub fn pointer_up(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.energy.target = 0.0;
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.user_data.pin = None;
					node.data.is_anchor = false;
				}
			});
		}
		self.pan.active = false;
	}

	/// Wheel zoom around a canvas point.
	pub fn zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::scale::CATEGORY10;

	fn two_nodes() -> GraphData {
		GraphData::from_json(
			r#"{"nodes":[{"id":1,"user":"a"},{"id":2,"user":"b"}],
			    "links":[{"source":1,"target":2}]}"#,
		)
		.unwrap()
	}

	fn state() -> GraphState {
		GraphState::new(&two_nodes(), 800.0, 600.0, GraphConfig::default()).unwrap()
	}

	fn to_screen(s: &GraphState, (x, y): (f64, f64)) -> (f64, f64) {
		(x * s.transform.k + s.transform.x, y * s.transform.k + s.transform.y)
	}

	#[test]
	fn test_initial_transform_centers_origin() {
		let s = state();
		assert_eq!(s.transform.invert(400.0, 300.0), (0.0, 0.0));
		assert_eq!(s.transform.k, 1.0);
	}

	#[test]
	fn test_colors_follow_user() {
		let s = state();
		let mut colors = Vec::new();
		s.graph.visit_nodes(|n| colors.push(n.data.user_data.color.clone()));
		colors.sort();
		let mut expected = vec![CATEGORY10[0].to_owned(), CATEGORY10[1].to_owned()];
		expected.sort();
		assert_eq!(colors, expected);
	}

	#[test]
	fn test_unknown_link_endpoint_fails_load() {
		let data = GraphData::from_json(
			r#"{"nodes":[{"id":1}],"links":[{"source":1,"target":9}]}"#,
		)
		.unwrap();
		let err = GraphState::new(&data, 800.0, 600.0, GraphConfig::default())
			.err()
			.unwrap();
		assert!(matches!(err, GraphLoadError::UnknownNode(id) if id == "9"));
	}

	#[test]
	fn test_self_link_is_skipped() {
		let data = GraphData::from_json(
			r#"{"nodes":[{"id":1}],"links":[{"source":1,"target":1}]}"#,
		)
		.unwrap();
		let mut s = GraphState::new(&data, 800.0, 600.0, GraphConfig::default()).unwrap();
		let mut edges = 0;
		s.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(edges, 0);
		assert!(s.tick(0.016));
		assert!(s.position(s.node_index("1").unwrap()).is_some());
	}

	#[test]
	fn test_self_link_beside_real_link_keeps_the_real_one() {
		let data = GraphData::from_json(
			r#"{"nodes":[{"id":1},{"id":2}],
			    "links":[{"source":1,"target":2},{"source":1,"target":1}]}"#,
		)
		.unwrap();
		let mut s = GraphState::new(&data, 800.0, 600.0, GraphConfig::default()).unwrap();
		let mut edges = 0;
		s.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(edges, 1);
		for _ in 0..3 {
			s.tick(0.016);
		}
	}

	#[test]
	fn test_hit_test_uses_inverse_transform() {
		let mut s = state();
		s.transform = ViewTransform {
			x: 100.0,
			y: 50.0,
			k: 3.0,
		};
		let idx = s.node_index("2").unwrap();
		let (sx, sy) = to_screen(&s, s.position(idx).unwrap());
		assert_eq!(s.node_at_position(sx, sy), Some(idx));
		assert_eq!(s.node_at_position(sx + 500.0, sy + 500.0), None);
	}

	#[test]
	fn test_pin_moves_by_delta_over_zoom() {
		let mut s = state();
		s.transform.k = 2.0;
		let idx = s.node_index("1").unwrap();
		let start = s.position(idx).unwrap();
		let (sx, sy) = to_screen(&s, start);

		s.pointer_down(sx, sy);
		let (px, py) = s.pin(idx).unwrap();
		assert_eq!((px as f64, py as f64), start);

		s.pointer_move(sx + 10.0, sy - 6.0);
		let (fx, fy) = s.pin(idx).unwrap();
		assert!((fx as f64 - (start.0 + 5.0)).abs() < 1e-4);
		assert!((fy as f64 - (start.1 - 3.0)).abs() < 1e-4);

		s.tick(0.016);
		let held = s.position(idx).unwrap();
		assert!((held.0 - fx as f64).abs() < 1e-6);

		s.pointer_up();
		assert_eq!(s.pin(idx), None);
		assert_eq!(s.energy.target, 0.0);
		assert!(!s.is_settled());
	}

	#[test]
	fn test_released_node_leaves_pin_point() {
		let data = GraphData::from_json(
			r#"{"nodes":[{"id":1},{"id":2},{"id":3}],
			    "links":[{"source":1,"target":2},{"source":2,"target":3}]}"#,
		)
		.unwrap();
		let mut s = GraphState::new(&data, 800.0, 600.0, GraphConfig::default()).unwrap();
		let idx = s.node_index("3").unwrap();
		let (sx, sy) = to_screen(&s, s.position(idx).unwrap());

		s.pointer_down(sx, sy);
		s.pointer_move(sx + 200.0, sy + 200.0);
		s.tick(0.016);
		let pinned = s.position(idx).unwrap();
		let (fx, fy) = s.pin(idx).unwrap();
		assert!((pinned.0 - fx as f64).abs() < 1e-6);
		assert!((pinned.1 - fy as f64).abs() < 1e-6);

		s.pointer_up();
		for _ in 0..5 {
			assert!(s.tick(0.016));
		}
		let moved = s.position(idx).unwrap();
		let distance = ((moved.0 - pinned.0).powi(2) + (moved.1 - pinned.1).powi(2)).sqrt();
		assert!(distance > 1.0, "node stayed at {pinned:?}");
	}

	#[test]
	fn test_drag_raises_energy_of_settled_layout() {
		let mut s = state();
		s.energy.alpha = 0.0;
		assert!(s.is_settled());
		assert!(!s.tick(0.016));

		let idx = s.node_index("2").unwrap();
		let (sx, sy) = to_screen(&s, s.position(idx).unwrap());
		s.pointer_down(sx, sy);
		assert!(s.tick(0.016));
		assert!(s.energy.alpha > 0.0);
	}

	#[test]
	fn test_background_drag_pans() {
		let mut s = state();
		s.pointer_down(5.0, 5.0);
		assert!(s.pan.active);
		assert!(s.pointer_move(25.0, 15.0));
		assert_eq!((s.transform.x, s.transform.y), (420.0, 310.0));
		s.pointer_up();
		assert!(!s.pointer_move(100.0, 100.0));
	}

	#[test]
	fn test_zoom_keeps_cursor_point_fixed() {
		let mut s = state();
		let before = s.transform.invert(200.0, 100.0);
		s.zoom(200.0, 100.0, -1.0);
		let after = s.transform.invert(200.0, 100.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert!((s.transform.k - 1.1).abs() < 1e-12);
	}

	#[test]
	fn test_zoom_is_clamped() {
		let mut s = state();
		for _ in 0..200 {
			s.zoom(0.0, 0.0, 1.0);
		}
		assert!((s.transform.k - MIN_ZOOM).abs() < 1e-12);
	}

	#[test]
	fn test_layout_settles() {
		let mut s = state();
		let mut ticks = 0;
		while s.tick(0.016) {
			ticks += 1;
			assert!(ticks < 1000);
		}
		assert!(s.is_settled());
	}
}
