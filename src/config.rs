//! Build-time configuration.
//!
//! Values are read with `option_env!` when the WASM bundle is compiled, e.g.
//! `CATALOG_GRAPH_URL=/data/catalogs.json trunk build`.

use log::Level;

const DEFAULT_CATALOG_URL: &str = "./catalogs.json";
const DEFAULT_LOG_LEVEL: Level = Level::Debug;

/// Application settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
	/// Where the catalog index is fetched from.
	pub catalog_url: String,
	/// Console log level.
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			catalog_url: DEFAULT_CATALOG_URL.to_string(),
			log_level: DEFAULT_LOG_LEVEL,
		}
	}
}

impl AppConfig {
	/// Settings baked in at compile time.
	pub fn from_build_env() -> Self {
		Self::from_values(option_env!("CATALOG_GRAPH_URL"), option_env!("CATALOG_GRAPH_LOG"))
	}

	fn from_values(url: Option<&str>, level: Option<&str>) -> Self {
		let defaults = Self::default();
		Self {
			catalog_url: url
				.map(str::trim)
				.filter(|url| !url.is_empty())
				.map_or(defaults.catalog_url, str::to_string),
			log_level: level
				.and_then(|level| level.trim().parse().ok())
				.unwrap_or(defaults.log_level),
		}
	}
}
