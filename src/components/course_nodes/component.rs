use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;

use super::render::{self, CourseCardData};
use crate::catalog::{Catalog, HighlightMap, HoverMachine};

/// One card per course of `catalog`; hovering a card highlights its direct
/// prerequisites and corequisites.
#[component]
pub fn CourseNodes(
	/// Catalog whose courses are shown.
	#[prop(into)]
	catalog: Signal<Catalog>,
) -> impl IntoView {
	view! {
		<div class="course-nodes">
			{move || {
				let catalog = catalog.get();
				// Fresh cells for every catalog; disposed with this render.
				let highlights = RwSignal::new(HighlightMap::for_catalog(&catalog));
				let cards = render::course_cards(&catalog);
				debug!("rendering {} course cards", cards.len());
				cards
					.into_iter()
					.map(|card| view! { <CourseCard card=card highlights=highlights /> })
					.collect_view()
			}}
		</div>
	}
}

#[component]
fn CourseCard(card: CourseCardData, highlights: RwSignal<HighlightMap>) -> impl IntoView {
	let CourseCardData {
		id,
		title,
		hours,
		requisites,
	} = card;
	let machine = Rc::new(RefCell::new(HoverMachine::new(requisites)));

	let on_hover = {
		let id = id.clone();
		move |hovered: bool| {
			let deltas = machine.borrow_mut().transition(hovered);
			if deltas.is_empty() {
				return;
			}
			debug!("{id} hovered={hovered}, {} highlight updates", deltas.len());
			highlights.update(|map| map.apply(&deltas));
		}
	};
	let on_enter = on_hover.clone();

	let highlight = Memo::new(move |_| highlights.with(|map| map.get(&id)));

	view! {
		<div
			class=move || render::card_class(highlight.get())
			on:mouseenter=move |_| on_enter(true)
			on:mouseleave=move |_| on_hover(false)
		>
			<p class="course-card__title">{move || render::display_title(highlight.get(), &title)}</p>
			<p class="course-card__hours">{render::credit_hours(hours)}</p>
		</div>
	}
}
