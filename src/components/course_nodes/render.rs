use crate::catalog::{Catalog, Highlight, Requisites, edges_for};

/// Everything one course card needs, computed once per catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardData {
	/// Course id.
	pub id: String,
	/// Display title.
	pub title: String,
	/// Credit hours.
	pub hours: u32,
	/// Courses highlighted while this card is hovered.
	pub requisites: Requisites,
}

/// One card per course, in catalog order.
pub fn course_cards(catalog: &Catalog) -> Vec<CourseCardData> {
	catalog
		.nodes
		.iter()
		.map(|(id, course)| CourseCardData {
			id: id.to_string(),
			title: course.title.clone(),
			hours: course.hours,
			requisites: edges_for(catalog, id),
		})
		.collect()
}

/// CSS classes for a card; highlighted cards get the accent outline.
pub fn card_class(highlight: Highlight) -> &'static str {
	match highlight {
		Highlight::None => "course-card",
		Highlight::Prerequisite => "course-card course-card--highlighted course-card--pre",
		Highlight::Corequisite => "course-card course-card--highlighted course-card--co",
	}
}

/// Card title with the `(PRE)`/`(CO)` tag of the card's own highlight.
pub fn display_title(highlight: Highlight, title: &str) -> String {
	match highlight.tag() {
		Some(tag) => format!("({tag}) {title}"),
		None => title.to_string(),
	}
}

/// `"1 credit hour"`, `"3 credit hours"`.
pub fn credit_hours(hours: u32) -> String {
	if hours == 1 {
		"1 credit hour".to_string()
	} else {
		format!("{hours} credit hours")
	}
}
