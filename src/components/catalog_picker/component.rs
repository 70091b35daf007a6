use leptos::prelude::*;
use log::debug;

use super::fetch::load_index;
use crate::catalog::{derive_choices, majors_for, resolve, years_descending};
use crate::components::course_nodes::CourseNodes;
use crate::config::AppConfig;

fn selection(value: String) -> Option<String> {
	(!value.is_empty()).then_some(value)
}

/// New `(year, major)` after a year is picked; the major always resets.
fn select_year(value: String) -> (Option<String>, Option<String>) {
	(selection(value), None)
}

/// Year and major selects over the catalog index, feeding the selected
/// catalog into [`CourseNodes`].
#[component]
pub fn CatalogPicker() -> impl IntoView {
	let url = use_context::<AppConfig>().unwrap_or_default().catalog_url;
	let index = LocalResource::new(move || load_index(url.clone()));

	let raw = Memo::new(move |_| index.get().and_then(Result::ok));

	let (year, major) = (RwSignal::new(None::<String>), RwSignal::new(None::<String>));

	let choices = Memo::new(move |_| {
		raw.with(|raw| raw.as_ref().map(derive_choices).unwrap_or_default())
	});
	let years = Memo::new(move |_| choices.with(years_descending));
	let majors = Memo::new(move |_| choices.with(|index| year.with(|year| majors_for(index, year.as_deref()))));
	let selected = Memo::new(move |_| {
		raw.with(|raw| {
			year.with(|year| major.with(|major| resolve(raw.as_ref(), year.as_deref(), major.as_deref())))
		})
	});

	view! {
		<div class="catalog-picker">
			<div class="catalog-picker__controls">
				<label>
					"Catalog year"
					<select on:change=move |ev| {
						let (picked, cleared) = select_year(event_target_value(&ev));
						debug!("catalog year selected: {picked:?}");
						year.set(picked);
						major.set(cleared);
					}>
						<option value="">"Select a year"</option>
						{move || {
							years
								.get()
								.into_iter()
								.map(|y| {
									let label = y.clone();
									view! { <option value=y>{label}</option> }
								})
								.collect_view()
						}}
					</select>
				</label>
				<label>
					"Catalog major"
					<select
						prop:disabled=move || year.with(Option::is_none)
						prop:value=move || major.get().unwrap_or_default()
						on:change=move |ev| {
							let value = selection(event_target_value(&ev));
							debug!("catalog major selected: {value:?}");
							major.set(value);
						}
					>
						<option value="">"Select a major"</option>
						{move || {
							majors
								.get()
								.into_iter()
								.map(|m| {
									let label = m.clone();
									view! { <option value=m>{label}</option> }
								})
								.collect_view()
						}}
					</select>
				</label>
			</div>
			<div class="catalog-picker__courses">
				{move || match index.get() {
					None => view! { <p class="catalog-picker__status">"Loading catalogs..."</p> }.into_any(),
					Some(Err(err)) => {
						view! {
							<p class="catalog-picker__status catalog-picker__status--error">
								{format!("Could not load catalogs: {err}")}
							</p>
						}
							.into_any()
					}
					Some(Ok(_)) => view! { <CourseNodes catalog=selected /> }.into_any(),
				}}
			</div>
		</div>
	}
}
