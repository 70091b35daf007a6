//! Hover-driven highlighting.
//!
//! Each card owns a [`HoverMachine`]. Flipping its hover state produces a list
//! of [`HighlightDelta`]s which the node renderer applies to the shared
//! [`HighlightMap`]. Nothing here knows about the DOM.

use std::collections::HashMap;

use super::edges::Requisites;
use super::types::Catalog;

/// How a card is marked because of another card's hover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Highlight {
	/// Not related to the hovered course.
	#[default]
	None,
	/// Prerequisite of the hovered course.
	Prerequisite,
	/// Corequisite of the hovered course.
	Corequisite,
}

impl Highlight {
	/// Short tag shown before the course title.
	pub fn tag(self) -> Option<&'static str> {
		match self {
			Self::None => None,
			Self::Prerequisite => Some("PRE"),
			Self::Corequisite => Some("CO"),
		}
	}

	/// True for [`Highlight::None`].
	pub fn is_none(self) -> bool {
		self == Self::None
	}
}

/// A single highlight write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightDelta {
	/// Course whose cell is written.
	pub id: String,
	/// Value written.
	pub highlight: Highlight,
}

impl HighlightDelta {
	fn new(id: &str, highlight: Highlight) -> Self {
		Self {
			id: id.to_string(),
			highlight,
		}
	}
}

/// One highlight cell per course of a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightMap {
	cells: HashMap<String, Highlight>,
}

impl HighlightMap {
	/// Every course of `catalog` starts unhighlighted.
	pub fn for_catalog(catalog: &Catalog) -> Self {
		Self {
			cells: catalog
				.nodes
				.ids()
				.map(|id| (id.to_string(), Highlight::None))
				.collect(),
		}
	}

	/// `None` for ids without a cell.
	pub fn get(&self, id: &str) -> Highlight {
		self.cells.get(id).copied().unwrap_or_default()
	}

	/// True when `id` is a course of the catalog.
	pub fn has_cell(&self, id: &str) -> bool {
		self.cells.contains_key(id)
	}

	/// Apply deltas in order. Ids without a cell are skipped.
	pub fn apply(&mut self, deltas: &[HighlightDelta]) {
		for delta in deltas {
			if let Some(cell) = self.cells.get_mut(&delta.id) {
				*cell = delta.highlight;
			}
		}
	}

	/// Ids currently marked, in no particular order.
	pub fn highlighted(&self) -> impl Iterator<Item = (&str, Highlight)> {
		self.cells
			.iter()
			.filter(|(_, highlight)| !highlight.is_none())
			.map(|(id, highlight)| (id.as_str(), *highlight))
	}
}

/// Hover state of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverPhase {
	/// Pointer is elsewhere.
	#[default]
	Idle,
	/// Pointer is over the card.
	Hovered,
}

/// Two-state hover machine for one course card.
#[derive(Clone, Debug, Default)]
pub struct HoverMachine {
	phase: HoverPhase,
	requisites: Requisites,
}

impl HoverMachine {
	/// Idle machine for a card with the given requisites.
	pub fn new(requisites: Requisites) -> Self {
		Self {
			phase: HoverPhase::Idle,
			requisites,
		}
	}

	/// Current phase.
	pub fn phase(&self) -> HoverPhase {
		self.phase
	}

	/// Move to `hovered` and return the highlight writes for the transition.
	///
	/// Staying in the same phase yields nothing.
	pub fn transition(&mut self, hovered: bool) -> Vec<HighlightDelta> {
		let next = if hovered {
			HoverPhase::Hovered
		} else {
			HoverPhase::Idle
		};
		if next == self.phase {
			return Vec::new();
		}
		self.phase = next;

		match next {
			HoverPhase::Hovered => {
				let pre = self
					.requisites
					.prerequisites
					.iter()
					.map(|id| HighlightDelta::new(id, Highlight::Prerequisite));
				let co = self
					.requisites
					.corequisites
					.iter()
					.map(|id| HighlightDelta::new(id, Highlight::Corequisite));
				pre.chain(co).collect()
			}
			HoverPhase::Idle => self
				.requisites
				.all()
				.map(|id| HighlightDelta::new(id, Highlight::None))
				.collect(),
		}
	}
}
