use leptos::ev;
use leptos::prelude::*;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use super::ThemeMenu;
use crate::components::panel::{DragPanel, ExpandSection, ExpandState, use_interaction};
use crate::config::Config;
use crate::keymap::{Command, SettingsTab, focus_in_text_entry};
use crate::overlay::OverlayToggle;
use crate::storage;

/// The draggable settings drawer with its Clusters, Themes and Blacklist
/// rows, plus the page's keyboard shortcuts.
#[component]
pub fn SettingsPanel(show_graph: RwSignal<bool>) -> impl IntoView {
	let config = use_context::<Config>().unwrap_or_default();
	let ctx = use_interaction();
	let drawer = RwSignal::new(ExpandState::drawer());
	let (clusters, themes, blacklist) = (
		RwSignal::new(ExpandState::row()),
		RwSignal::new(ExpandState::row()),
		RwSignal::new(ExpandState::row()),
	);
	let row = move |tab: SettingsTab| match tab {
		SettingsTab::Clusters => clusters,
		SettingsTab::Themes => themes,
		SettingsTab::Blacklist => blacklist,
	};

	let overlay = RwSignal::new(OverlayToggle::default());
	spawn_local(async move {
		let enabled = storage::OVERLAY_ENABLED.load_or(false).await;
		if !overlay.try_update(|t| t.restore(enabled)).unwrap_or(false) {
			info!("bubble overlay flipped before its stored value loaded");
		}
	});

	let keys = config.keys.clone();
	let _ = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		if focus_in_text_entry() {
			return;
		}
		let dragging = ctx.dragging.get_untracked();
		let open = drawer.with_untracked(ExpandState::is_expanded);
		match keys.resolve(&ev.key(), open) {
			Some(Command::ToggleSettings) => {
				drawer.maybe_update(|s| s.toggle(dragging));
			}
			Some(Command::ToggleTab(tab)) => {
				row(tab).maybe_update(|s| s.toggle(dragging));
			}
			Some(Command::ToggleOverlay) => {
				let mut toggle = overlay.get_untracked();
				let enabled = toggle.toggle();
				overlay.set(toggle);
				storage::OVERLAY_ENABLED.persist(enabled);
				info!("bubble overlay {}", if enabled { "enabled" } else { "disabled" });
			}
			None => {}
		}
	});

	let panel = config.panel.clone();
	let max_width = Signal::derive(move || drawer.with(|s| s.max_width(&panel)));

	view! {
		<DragPanel id="settings-panel" max_width=max_width>
			<ExpandSection id="setting" title="Settings" state=drawer>
				<ExpandSection
					id=SettingsTab::Clusters.label()
					title=SettingsTab::Clusters.label()
					state=clusters
				>
					<label class="switch">
						<input
							type="checkbox"
							prop:checked=move || show_graph.get()
							on:change=move |_| show_graph.update(|shown| *shown = !*shown)
						/>
						<span class="slider"></span>
					</label>
					<span class="switch-label">"History graph"</span>
				</ExpandSection>
				<ExpandSection
					id=SettingsTab::Themes.label()
					title=SettingsTab::Themes.label()
					state=themes
				>
					<ThemeMenu />
				</ExpandSection>
				<ExpandSection
					id=SettingsTab::Blacklist.label()
					title=SettingsTab::Blacklist.label()
					state=blacklist
				>
					<textarea
						class="text"
						placeholder="One domain per line"
						on:mouseover=move |_| ctx.text_hover.set(true)
						on:mouseleave=move |_| ctx.text_hover.set(false)
					></textarea>
				</ExpandSection>
			</ExpandSection>
		</DragPanel>
	}
}
