use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::catalog::{CatalogError, RawCatalogIndex, parse_index};

/// Single attempt at loading the catalog index. No retry.
pub async fn load_index(url: String) -> Result<RawCatalogIndex, CatalogError> {
	info!("loading catalog index from {url}");
	let result = fetch_text(&url).await.and_then(|body| parse_index(&body));
	match &result {
		Ok(index) => info!("loaded {} catalogs", index.len()),
		Err(err) => error!("catalog index unavailable: {err}"),
	}
	result
}

async fn fetch_text(url: &str) -> Result<String, CatalogError> {
	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::SameOrigin);

	let request = Request::new_with_str_and_init(url, &opts)
		.map_err(|e| CatalogError::Fetch(format!("request error: {e:?}")))?;

	let window = web_sys::window().ok_or_else(|| CatalogError::Fetch("no window".into()))?;
	let resp_value = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| CatalogError::Fetch(format!("{e:?}")))?;

	let resp: Response = resp_value
		.dyn_into()
		.map_err(|_| CatalogError::Fetch("response is not a Response".into()))?;

	if !resp.ok() {
		return Err(CatalogError::Status(resp.status()));
	}

	let text = resp
		.text()
		.map_err(|e| CatalogError::Fetch(format!("body error: {e:?}")))?;
	let body = JsFuture::from(text)
		.await
		.map_err(|e| CatalogError::Fetch(format!("body error: {e:?}")))?;

	body.as_string()
		.ok_or_else(|| CatalogError::Fetch("body is not text".into()))
}
