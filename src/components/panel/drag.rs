/// Left edge a panel snaps to when dragged past the viewport.
pub const LEFT_FLOOR: f64 = 0.0;
/// Top edge a panel snaps to; one pixel above the viewport hides the border.
pub const TOP_FLOOR: f64 = -1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Where the panel is right before a move is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelGeometry {
	/// `offsetLeft` / `offsetTop`.
	pub offset: Point,
	/// Bounding-rect right edge.
	pub right: f64,
	/// Bounding-rect bottom edge.
	pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// New inline position per axis; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
	pub left: Option<f64>,
	pub top: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
	#[default]
	Idle,
	/// Pointer is down, nothing moved yet.
	Pressed { cursor: Point },
	Dragging { cursor: Point },
	/// Pointer released, waiting for the drop animation.
	Settling { moved: bool },
}

/// Drag-to-reposition state of one panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelDrag {
	phase: DragPhase,
}

impl PanelDrag {
	pub fn phase(&self) -> DragPhase {
		self.phase
	}

	/// Pointer-down. Ignored while the pointer is over a text field so text
	/// selection keeps working.
	pub fn press(&mut self, cursor: Point, over_text: bool) -> bool {
		if over_text {
			return false;
		}
		self.phase = DragPhase::Pressed { cursor };
		true
	}

	/// Pointer-move. Returns the placement to apply, or `None` when no drag
	/// is in progress.
	pub fn drag(&mut self, cursor: Point, geometry: PanelGeometry, viewport: Viewport) -> Option<Placement> {
		let last = match self.phase {
			DragPhase::Pressed { cursor } | DragPhase::Dragging { cursor } => cursor,
			_ => return None,
		};
		self.phase = DragPhase::Dragging { cursor };
		Some(Placement {
			left: clamp_axis(
				geometry.offset.x,
				last.x - cursor.x,
				geometry.right,
				viewport.width,
				LEFT_FLOOR,
			),
			top: clamp_axis(
				geometry.offset.y,
				last.y - cursor.y,
				geometry.bottom,
				viewport.height,
				TOP_FLOOR,
			),
		})
	}

	/// Pointer-up. Returns `true` if a press was active.
	pub fn release(&mut self) -> bool {
		let moved = match self.phase {
			DragPhase::Pressed { .. } => false,
			DragPhase::Dragging { .. } => true,
			_ => return false,
		};
		self.phase = DragPhase::Settling { moved };
		true
	}

	/// End of the post-release delay.
	pub fn settle(&mut self) {
		if matches!(self.phase, DragPhase::Settling { .. }) {
			self.phase = DragPhase::Idle;
		}
	}

	/// True from the first movement until the drag settles. Clicks from the
	/// same gesture must not toggle expansion during this window.
	pub fn is_dragging(&self) -> bool {
		matches!(
			self.phase,
			DragPhase::Dragging { .. } | DragPhase::Settling { moved: true }
		)
	}
}

/// One axis of a move. `retreat` is the cursor motion toward the origin
/// since the previous event.
fn clamp_axis(offset: f64, retreat: f64, far_edge: f64, bound: f64, floor: f64) -> Option<f64> {
	let candidate = offset - retreat;
	if candidate <= 0.0 {
		return Some(floor);
	}
	(far_edge < bound || retreat > 0.0).then_some(candidate)
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEWPORT: Viewport = Viewport {
		width: 1000.0,
		height: 800.0,
	};

	/// A 200x100 panel that applies placements to itself.
	struct SimPanel {
		left: f64,
		top: f64,
		drag: PanelDrag,
	}

	impl SimPanel {
		fn at(left: f64, top: f64) -> Self {
			Self {
				left,
				top,
				drag: PanelDrag::default(),
			}
		}

		fn geometry(&self) -> PanelGeometry {
			PanelGeometry {
				offset: Point::new(self.left, self.top),
				right: self.left + 200.0,
				bottom: self.top + 100.0,
			}
		}

		fn move_to(&mut self, x: f64, y: f64) {
			let geometry = self.geometry();
			if let Some(p) = self.drag.drag(Point::new(x, y), geometry, VIEWPORT) {
				self.left = p.left.unwrap_or(self.left);
				self.top = p.top.unwrap_or(self.top);
			}
		}
	}

	#[test]
	fn test_drag_follows_cursor() {
		let mut panel = SimPanel::at(100.0, 100.0);
		assert!(panel.drag.press(Point::new(110.0, 110.0), false));
		panel.move_to(130.0, 150.0);
		assert_eq!((panel.left, panel.top), (120.0, 140.0));
	}

	#[test]
	fn test_press_over_text_is_ignored() {
		let mut panel = SimPanel::at(100.0, 100.0);
		assert!(!panel.drag.press(Point::new(110.0, 110.0), true));
		panel.move_to(300.0, 300.0);
		assert_eq!((panel.left, panel.top), (100.0, 100.0));
		assert!(!panel.drag.is_dragging());
	}

	#[test]
	fn test_snaps_to_floors() {
		let mut panel = SimPanel::at(50.0, 50.0);
		panel.drag.press(Point::new(60.0, 60.0), false);
		panel.move_to(-500.0, -500.0);
		assert_eq!((panel.left, panel.top), (LEFT_FLOOR, TOP_FLOOR));
	}

	#[test]
	fn test_far_edge_sticks_at_viewport() {
		let mut panel = SimPanel::at(790.0, 100.0);
		panel.drag.press(Point::new(800.0, 110.0), false);
		// right edge at 990, still inside: accepted.
		panel.move_to(820.0, 110.0);
		assert_eq!(panel.left, 810.0);
		// right edge 1010 is now outside: further outward moves stick.
		panel.move_to(900.0, 110.0);
		assert_eq!(panel.left, 810.0);
		// moving back inward is always allowed.
		panel.move_to(850.0, 110.0);
		assert_eq!(panel.left, 760.0);
	}

	#[test]
	fn test_full_left_then_full_right_stays_on_screen() {
		let mut panel = SimPanel::at(400.0, 300.0);
		panel.drag.press(Point::new(410.0, 310.0), false);
		for x in (-2000..=410).rev().step_by(37) {
			panel.move_to(x as f64, 310.0);
			assert!(panel.left >= LEFT_FLOOR);
		}
		for x in (-2000..=3000).step_by(41) {
			panel.move_to(x as f64, 310.0);
			assert!(panel.left >= LEFT_FLOOR);
		}
		assert!(panel.left >= 0.0);
		assert!(panel.left + 200.0 < VIEWPORT.width + 50.0);
	}

	#[test]
	fn test_click_suppression_window() {
		let mut drag = PanelDrag::default();
		let geometry = PanelGeometry {
			offset: Point::new(10.0, 10.0),
			right: 210.0,
			bottom: 110.0,
		};
		drag.press(Point::new(20.0, 20.0), false);
		assert!(!drag.is_dragging());
		drag.drag(Point::new(25.0, 25.0), geometry, VIEWPORT);
		assert!(drag.is_dragging());
		assert!(drag.release());
		assert!(drag.is_dragging());
		drag.settle();
		assert!(!drag.is_dragging());
		assert_eq!(drag.phase(), DragPhase::Idle);
	}

	#[test]
	fn test_press_release_without_move_does_not_suppress() {
		let mut drag = PanelDrag::default();
		drag.press(Point::new(20.0, 20.0), false);
		assert!(drag.release());
		assert!(!drag.is_dragging());
		assert_eq!(drag.phase(), DragPhase::Settling { moved: false });
	}

	#[test]
	fn test_move_without_press_is_ignored() {
		let mut drag = PanelDrag::default();
		let geometry = PanelGeometry {
			offset: Point::new(10.0, 10.0),
			right: 210.0,
			bottom: 110.0,
		};
		assert_eq!(drag.drag(Point::new(1.0, 1.0), geometry, VIEWPORT), None);
		assert!(!drag.release());
	}
}
