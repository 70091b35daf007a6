use catalog_graph::config::AppConfig;
use catalog_graph::{App, init_logging};
use leptos::prelude::*;

fn main() {
	let config = AppConfig::from_build_env();
	init_logging(&config);
	leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> })
}
