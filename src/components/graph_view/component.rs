use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Response, WheelEvent, Window};

use super::render::{self, FrameRequest};
use super::state::GraphState;
use super::types::GraphData;
use crate::config::{Config, GraphConfig};
use crate::error::{GraphLoadError, describe_js};

type SharedState = Rc<RefCell<Option<GraphState>>>;

/// Timers and listeners the canvas owns beyond its own element.
#[derive(Default)]
struct Teardown {
	done: bool,
	interval: Option<IntervalHandle>,
	resize: Option<WindowListenerHandle>,
}

impl Teardown {
	fn release(&mut self) {
		self.done = true;
		if let Some(handle) = self.interval.take() {
			handle.clear();
		}
		if let Some(handle) = self.resize.take() {
			handle.remove();
		}
	}
}

type SharedTeardown = Arc<Mutex<Teardown>>;

fn with_teardown(teardown: &SharedTeardown, f: impl FnOnce(&mut Teardown)) {
	match teardown.lock() {
		Ok(mut guard) => f(&mut guard),
		Err(poisoned) => f(&mut poisoned.into_inner()),
	}
}

/// Redraws on the next animation frame, at most one frame queued.
#[derive(Clone, Default)]
struct FrameLoop {
	request: Rc<FrameRequest>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
	fn install(&self, state: SharedState, ctx: CanvasRenderingContext2d) {
		let request = self.request.clone();
		*self.callback.borrow_mut() = Some(Closure::new(move || {
			request.complete();
			if let Some(ref s) = *state.borrow() {
				render::paint(&render::build_frame(s), &ctx);
			}
		}));
	}

	fn schedule(&self) {
		if !self.request.request() {
			return;
		}
		let queued = web_sys::window().zip(self.callback.borrow().as_ref()).is_some_and(
			|(window, cb)| window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
		);
		if !queued {
			self.request.complete();
		}
	}
}

async fn fetch_document(path: &str) -> Result<GraphData, GraphLoadError> {
	let fetch_err = |e: JsValue| GraphLoadError::Fetch {
		path: path.to_owned(),
		reason: describe_js(&e),
	};
	let window = web_sys::window().ok_or_else(|| fetch_err(JsValue::from_str("no window")))?;
	let response: Response = JsFuture::from(window.fetch_with_str(path))
		.await
		.map_err(fetch_err)?
		.dyn_into()
		.map_err(fetch_err)?;
	if !response.ok() {
		return Err(GraphLoadError::Status {
			path: path.to_owned(),
			status: response.status(),
		});
	}
	let body: js_sys::Promise = response.text().map_err(fetch_err)?;
	let text = JsFuture::from(body).await.map_err(fetch_err)?;
	GraphData::from_json(&text.as_string().unwrap_or_default())
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn start_stepping(
	state: SharedState,
	frames: FrameLoop,
	config: &GraphConfig,
) -> Option<IntervalHandle> {
	let dt = config.tick_interval_ms as f32 / 1000.0;
	let stepped = set_interval_with_handle(
		move || {
			let ticked = state.borrow_mut().as_mut().is_some_and(|s| s.tick(dt));
			if ticked {
				frames.schedule();
			}
		},
		Duration::from_millis(config.tick_interval_ms),
	);
	stepped
		.map_err(|err| error!("could not start layout timer: {}", describe_js(&err)))
		.ok()
}

/// Force-directed view of the graph document at `src`.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] src: String,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let config = use_context::<Config>().map(|c| c.graph).unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let frames = FrameLoop::default();
	let teardown = SharedTeardown::default();
	let load_error = RwSignal::new(None::<String>);
	let (state_init, frames_init, teardown_init) = (state.clone(), frames.clone(), teardown.clone());
	on_cleanup(move || with_teardown(&teardown, Teardown::release));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = match viewport_size(&window) {
			Some(size) if fullscreen => size,
			_ => (
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			),
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("canvas has no 2d context");
			return;
		};
		frames_init.install(state_init.clone(), ctx);

		if fullscreen {
			let (state_resize, frames_resize, canvas_resize) =
				(state_init.clone(), frames_init.clone(), canvas.clone());
			let handle = window_event_listener(ev::resize, move |_| {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
				frames_resize.schedule();
			});
			with_teardown(&teardown_init, |t| {
				if let Some(old) = t.resize.replace(handle) {
					old.remove();
				}
			});
		}

		let (state_load, frames_load, config, path, teardown_load) = (
			state_init.clone(),
			frames_init.clone(),
			config.clone(),
			src.clone(),
			teardown_init.clone(),
		);
		spawn_local(async move {
			let built = fetch_document(&path)
				.await
				.and_then(|data| GraphState::new(&data, w, h, config.clone()));
			match built {
				Ok(graph) => {
					info!("graph loaded from {path}");
					*state_load.borrow_mut() = Some(graph);
					let interval = start_stepping(state_load, frames_load.clone(), &config);
					// the view may have been unmounted while the document loaded
					with_teardown(&teardown_load, |t| {
						t.interval = interval;
						if t.done {
							t.release();
						}
					});
					frames_load.schedule();
				}
				Err(err) => {
					error!("graph view disabled: {err}");
					load_error.set(Some(err.to_string()));
				}
			}
		});
	});

	let (state_md, frames_md) = (state.clone(), frames.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
			if let Some(idx) = s.drag.node_idx {
				debug!("pinned {:?}", s.position(idx));
			}
		}
		frames_md.schedule();
	};

	let (state_mm, frames_mm) = (state.clone(), frames.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let changed = state_mm
			.borrow_mut()
			.as_mut()
			.is_some_and(|s| s.pointer_move(x, y));
		if changed {
			frames_mm.schedule();
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_up();
		}
	};

	let (state_wh, frames_wh) = (state.clone(), frames.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(x, y, ev.delta_y());
		}
		frames_wh.schedule();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
		<Show when=move || load_error.with(Option::is_some)>
			<p class="graph-error">{move || load_error.get().unwrap_or_default()}</p>
		</Show>
	}
}
