//! bubble-tab: a new-tab page with a themeable settings drawer and a
//! force-directed history graph, plus the bubble overlay content script.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod history_tree;
pub mod keymap;
pub mod overlay;
mod pages;
pub mod selection;
pub mod storage;
pub mod theme;

use crate::config::Config;
use crate::keymap::KeyBindings;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

#[wasm_bindgen(start)]
pub fn start() {
	init_logging();
}

/// Mounts the new-tab page.
#[wasm_bindgen]
pub fn start_newtab() {
	leptos::mount::mount_to_body(|| view! { <App /> });
}

/// Binds the overlay shortcut on an ordinary web page.
#[wasm_bindgen]
pub fn start_bubble() {
	overlay::install(KeyBindings::default());
}

/// Root of the new-tab page.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(Config::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		<Title text="New Tab" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/newtab.html") view=Home />
			</Routes>
		</Router>
	}
}
