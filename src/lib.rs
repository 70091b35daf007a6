//! Leptos client-side course catalog viewer: app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::info;

// Modules
pub mod catalog;
pub mod components;
pub mod config;
mod pages;

// Top-Level pages
use crate::config::AppConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(config: &AppConfig) {
	let _ = console_log::init_with_level(config.log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", config.log_level);
}

/// An app router which renders the catalog page and handles 404's
#[component]
pub fn App(
	/// Settings to use instead of the build-time ones.
	#[prop(optional)]
	config: Option<AppConfig>,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(config.unwrap_or_else(AppConfig::from_build_env));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Course Catalog" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
