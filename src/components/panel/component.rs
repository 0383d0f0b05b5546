use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::drag::{PanelDrag, PanelGeometry, Point, Viewport};
use super::expand::ExpandState;
use crate::config::Config;

/// Page-wide pointer flags shared by every panel.
#[derive(Clone, Copy, Debug)]
pub struct InteractionContext {
	/// A panel drag is in progress or settling; expand clicks are ignored.
	pub dragging: RwSignal<bool>,
	/// The pointer is over a text field; panel drags are not started.
	pub text_hover: RwSignal<bool>,
}

impl InteractionContext {
	pub fn new() -> Self {
		Self {
			dragging: RwSignal::new(false),
			text_hover: RwSignal::new(false),
		}
	}
}

impl Default for InteractionContext {
	fn default() -> Self {
		Self::new()
	}
}

/// The context provided by the page, or a detached one.
pub fn use_interaction() -> InteractionContext {
	use_context::<InteractionContext>().unwrap_or_default()
}

fn viewport() -> Option<Viewport> {
	let window = web_sys::window()?;
	Some(Viewport {
		width: window.inner_width().ok()?.as_f64()?,
		height: window.inner_height().ok()?.as_f64()?,
	})
}

fn px(value: Option<f64>) -> String {
	value.map(|v| format!("{v}px")).unwrap_or_default()
}

/// A panel that can be picked up and moved around the page.
#[component]
pub fn DragPanel(
	#[prop(into)] id: String,
	/// Inline max-width; `None` leaves it to the stylesheet.
	#[prop(into, default = Signal::derive(|| None))]
	max_width: Signal<Option<f64>>,
	children: Children,
) -> impl IntoView {
	let ctx = use_interaction();
	let panel = use_context::<Config>().map(|c| c.panel).unwrap_or_default();
	let panel_ref = NodeRef::<leptos::html::Div>::new();
	let drag = Rc::new(RefCell::new(PanelDrag::default()));
	let position = RwSignal::new(None::<Point>);
	let lifted = RwSignal::new(false);

	let drag_down = drag.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let cursor = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		if drag_down
			.borrow_mut()
			.press(cursor, ctx.text_hover.get_untracked())
		{
			ev.prevent_default();
		}
	};

	let drag_move = drag.clone();
	let _ = window_event_listener(ev::mousemove, move |ev: MouseEvent| {
		let (Some(el), Some(viewport)) = (panel_ref.get_untracked(), viewport()) else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		let geometry = PanelGeometry {
			offset: Point::new(el.offset_left() as f64, el.offset_top() as f64),
			right: rect.right(),
			bottom: rect.bottom(),
		};
		let cursor = Point::new(ev.client_x() as f64, ev.client_y() as f64);
		let Some(placement) = drag_move.borrow_mut().drag(cursor, geometry, viewport) else {
			return;
		};
		ev.prevent_default();
		lifted.set(true);
		ctx.dragging.set(true);
		position.set(Some(Point::new(
			placement.left.unwrap_or(geometry.offset.x),
			placement.top.unwrap_or(geometry.offset.y),
		)));
	});

	let release_delay = Duration::from_millis(panel.release_delay_ms);
	let _ = window_event_listener(ev::mouseup, move |_: MouseEvent| {
		if !drag.borrow_mut().release() {
			return;
		}
		let drag_settle = drag.clone();
		set_timeout(
			move || {
				drag_settle.borrow_mut().settle();
				lifted.set(false);
				ctx.dragging.set(false);
			},
			release_delay,
		);
	});

	let pickup_scale = panel.pickup_scale;
	view! {
		<div
			node_ref=panel_ref
			id=id
			class="drag"
			on:mousedown=on_mousedown
			style:left=move || px(position.get().map(|p| p.x))
			style:top=move || px(position.get().map(|p| p.y))
			style:max-width=move || px(max_width.get())
			style:transition="transform 0.15s ease-in-out"
			style:transform=move || {
				format!("scale({})", if lifted.get() { pickup_scale } else { 1.0 })
			}
		>
			{children()}
		</div>
	}
}

/// A clickable header followed by a content region it expands.
#[component]
pub fn ExpandSection(
	#[prop(into)] id: String,
	#[prop(into)] title: String,
	state: RwSignal<ExpandState>,
	children: Children,
) -> impl IntoView {
	let ctx = use_interaction();
	let panel = use_context::<Config>().map(|c| c.panel).unwrap_or_default();

	let on_click = move |_: MouseEvent| {
		let dragging = ctx.dragging.get_untracked();
		state.maybe_update(|s| s.toggle(dragging));
	};

	view! {
		<button
			id=id
			class="header"
			class:active=move || state.with(|s| s.widens() && s.is_expanded())
			on:click=on_click
		>
			{title}
		</button>
		<div class="content" style:max-height=move || px(state.with(|s| s.max_height(&panel)))>
			{children()}
		</div>
	}
}
