use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A single course card's source data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Course {
	/// Credit hours.
	pub hours: u32,
	/// Display title.
	pub title: String,
	/// Suggested term ordinal.
	pub term: u32,
}

/// A prerequisite or corequisite pair of course ids.
pub type Edge = (String, String);

/// Relationship lists of a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Edges {
	/// Directed pairs: the first course is a prerequisite of the second.
	pub prerequisites: Vec<Edge>,
	/// Unordered pairs of mutually co-required courses.
	pub corequisites: Vec<Edge>,
}

/// Courses of a catalog by id, kept in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseMap(Vec<(String, Course)>);

impl CourseMap {
	/// True when the catalog has no courses.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Look up a course by id.
	pub fn get(&self, id: &str) -> Option<&Course> {
		self.0.iter().find(|(key, _)| key == id).map(|(_, course)| course)
	}

	/// Iterate `(id, course)` pairs in source order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Course)> {
		self.0.iter().map(|(id, course)| (id.as_str(), course))
	}

	/// Course ids in source order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(id, _)| id.as_str())
	}
}

impl<K: Into<String>> FromIterator<(K, Course)> for CourseMap {
	fn from_iter<I: IntoIterator<Item = (K, Course)>>(iter: I) -> Self {
		let mut nodes = Self::default();
		for (id, course) in iter {
			let id = id.into();
			// Later duplicates win, like a JSON object.
			match nodes.0.iter_mut().find(|(key, _)| *key == id) {
				Some(slot) => slot.1 = course,
				None => nodes.0.push((id, course)),
			}
		}
		nodes
	}
}

impl<'de> Deserialize<'de> for CourseMap {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct NodesVisitor;

		impl<'de> Visitor<'de> for NodesVisitor {
			type Value = CourseMap;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a map of course ids to courses")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
				let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
				while let Some(entry) = map.next_entry::<String, Course>()? {
					entries.push(entry);
				}
				Ok(entries.into_iter().collect())
			}
		}

		deserializer.deserialize_map(NodesVisitor)
	}
}

/// One year/major's courses and their relationships.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Catalog {
	/// Courses by id.
	pub nodes: CourseMap,
	/// Prerequisite and corequisite pairs.
	pub edges: Edges,
}

impl Catalog {
	/// True when there are no courses and no edges.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.edges.prerequisites.is_empty() && self.edges.corequisites.is_empty()
	}
}

/// The fetched `catalogs.json`, keyed by `"{major}_{year}"`.
///
/// Catalogs stay as raw JSON until selected, so one malformed entry does not
/// hide the others.
pub type RawCatalogIndex = BTreeMap<String, serde_json::Value>;
