use leptos::prelude::*;
use log::debug;
use wasm_bindgen_futures::spawn_local;

use crate::config::Config;
use crate::selection::OptionGroup;
use crate::storage;
use crate::theme::{self, FOLLOW_DEVICE};

/// Mutually exclusive theme buttons. Restores the stored theme on mount.
#[component]
pub fn ThemeMenu() -> impl IntoView {
	let table = use_context::<Config>().map(|c| c.themes).unwrap_or_default();
	let group = RwSignal::new(OptionGroup::new(table.option_names()));
	let table = StoredValue::new(table);

	spawn_local(async move {
		let name = storage::THEME.load_or(FOLLOW_DEVICE.to_owned()).await;
		debug!("restoring theme {name:?}");
		// an unknown stored name still resolves, but the menu shows the
		// device option as selected
		if !group.try_update(|g| g.restore(&name, FOLLOW_DEVICE)).unwrap_or(false) {
			debug!("theme chosen before {name:?} loaded, keeping it");
			return;
		}
		table.with_value(|t| theme::apply_to_document(t, &name));
	});

	let choose = move |name: String| {
		if !group.try_update(|g| g.select(&name)).unwrap_or(false) {
			return;
		}
		storage::THEME.persist(name.clone());
		table.with_value(|t| theme::apply_to_document(t, &name));
	};

	let options = group
		.with_untracked(|g| g.members().to_vec())
		.into_iter()
		.map(|name| {
			let (id, label, selected) = (name.clone(), name.clone(), name.clone());
			view! {
				<button
					id=id
					class="option"
					class:select=move || group.with(|g| g.is_selected(&selected))
					on:click=move |_| choose(name.clone())
				>
					{label}
				</button>
			}
		})
		.collect_view();

	view! { <div class="menu theme">{options}</div> }
}
