//! Catalog data and the view-independent logic behind the picker and cards.

mod choices;
mod edges;
mod error;
mod highlight;
mod types;

pub use choices::{CatalogIndex, derive_choices, majors_for, natural_cmp, parse_index, resolve, years_descending};
pub use edges::{Requisites, edges_for};
pub use error::CatalogError;
pub use highlight::{Highlight, HighlightDelta, HighlightMap, HoverMachine, HoverPhase};
pub use types::{Catalog, Course, CourseMap, Edge, Edges, RawCatalogIndex};
