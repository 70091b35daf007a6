use leptos::prelude::*;

use crate::components::catalog_picker::CatalogPicker;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="catalog-page">
				<header class="catalog-page__header">
					<h1>"Course Catalog"</h1>
					<p class="subtitle">"Hover a course to highlight its prerequisites and corequisites."</p>
				</header>
				<CatalogPicker />
			</div>
		</ErrorBoundary>
	}
}
