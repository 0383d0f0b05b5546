use std::cell::Cell;
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{GraphState, ViewTransform};

const EDGE_STYLE: &str = "rgba(153, 153, 153, 0.6)";
const OUTLINE_STYLE: &str = "#ffffff";

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: (f64, f64),
	pub to: (f64, f64),
}

/// Everything one redraw paints, in simulation coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
	pub markers: Vec<Marker>,
	pub edges: Vec<Segment>,
}

pub fn build_frame(state: &GraphState) -> Frame {
	let radius = state.node_radius();
	let mut markers = Vec::new();
	state.graph.visit_nodes(|node| {
		markers.push(Marker {
			x: node.x() as f64,
			y: node.y() as f64,
			radius,
			color: node.data.user_data.color.clone(),
		});
	});
	let mut edges = Vec::new();
	state.graph.visit_edges(|n1, n2, _| {
		edges.push(Segment {
			from: (n1.x() as f64, n1.y() as f64),
			to: (n2.x() as f64, n2.y() as f64),
		});
	});
	Frame {
		transform: state.transform,
		width: state.width,
		height: state.height,
		markers,
		edges,
	}
}

pub fn paint(frame: &Frame, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, frame.width, frame.height);
	ctx.save();
	let _ = ctx.translate(frame.transform.x, frame.transform.y);
	let _ = ctx.scale(frame.transform.k, frame.transform.k);

	ctx.begin_path();
	for edge in &frame.edges {
		ctx.move_to(edge.from.0, edge.from.1);
		ctx.line_to(edge.to.0, edge.to.1);
	}
	ctx.set_stroke_style_str(EDGE_STYLE);
	ctx.set_line_width(1.0);
	ctx.stroke();

	ctx.set_stroke_style_str(OUTLINE_STYLE);
	ctx.set_line_width(1.5);
	for marker in &frame.markers {
		ctx.begin_path();
		let _ = ctx.arc(marker.x, marker.y, marker.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&marker.color);
		ctx.fill();
		ctx.stroke();
	}
	ctx.restore();
}

/// Tracks whether an animation frame is already queued so redraw requests
/// collapse into one.
#[derive(Debug, Default)]
pub struct FrameRequest {
	pending: Cell<bool>,
}

impl FrameRequest {
	/// Returns `true` if the caller must queue a frame.
	pub fn request(&self) -> bool {
		!self.pending.replace(true)
	}

	/// Called when the queued frame runs (or could not be queued).
	pub fn complete(&self) {
		self.pending.set(false);
	}

	pub fn is_pending(&self) -> bool {
		self.pending.get()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::types::GraphData;
	use crate::config::GraphConfig;

	fn loaded() -> GraphState {
		let data = GraphData::from_json(
			r#"{"nodes":[{"id":1,"user":"a"},{"id":2,"user":"b"}],
			    "links":[{"source":1,"target":2}]}"#,
		)
		.unwrap();
		GraphState::new(&data, 800.0, 600.0, GraphConfig::default()).unwrap()
	}

	#[test]
	fn test_two_nodes_one_link_after_first_tick() {
		let mut state = loaded();
		assert!(state.tick(0.016));
		let frame = build_frame(&state);
		assert_eq!(frame.markers.len(), 2);
		assert_eq!(frame.edges.len(), 1);

		let ends = [frame.edges[0].from, frame.edges[0].to];
		for marker in &frame.markers {
			assert!(ends.contains(&(marker.x, marker.y)));
			assert_eq!(marker.radius, 4.0);
		}
	}

	#[test]
	fn test_frame_carries_view_transform() {
		let mut state = loaded();
		state.zoom(10.0, 10.0, -1.0);
		let frame = build_frame(&state);
		assert_eq!(frame.transform, state.transform);
		assert_eq!((frame.width, frame.height), (800.0, 600.0));
	}

	#[test]
	fn test_requests_coalesce_until_complete() {
		let request = FrameRequest::default();
		assert!(request.request());
		assert!(!request.request());
		assert!(!request.request());
		assert!(request.is_pending());
		request.complete();
		assert!(!request.is_pending());
		assert!(request.request());
	}
}
