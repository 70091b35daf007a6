use thiserror::Error;

/// Failure to obtain the catalog index. Terminal until the page reloads.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// Network or browser API failure.
	#[error("fetch failed: {0}")]
	Fetch(String),
	/// Non-2xx response.
	#[error("catalog index request returned HTTP {0}")]
	Status(u16),
	/// Body is not a JSON object.
	#[error("catalog index is not valid JSON: {0}")]
	Parse(String),
}

impl From<serde_json::Error> for CatalogError {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}
