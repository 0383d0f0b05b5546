use leptos::prelude::*;

use crate::components::graph_view::ForceGraphCanvas;
use crate::components::panel::InteractionContext;
use crate::components::settings::SettingsPanel;
use crate::config::Config;

/// The new-tab page: settings drawer over the history graph.
#[component]
pub fn Home() -> impl IntoView {
	provide_context(InteractionContext::new());
	let data_path = use_context::<Config>()
		.unwrap_or_default()
		.graph
		.data_path;
	let show_graph = RwSignal::new(true);

	view! {
		<div class="newtab">
			<SettingsPanel show_graph=show_graph />
			<div
				class="fullscreen-graph"
				style:display=move || if show_graph.get() { "block" } else { "none" }
			>
				<ForceGraphCanvas src=data_path fullscreen=true />
			</div>
		</div>
	}
}
