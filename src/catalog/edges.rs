use super::types::Catalog;

/// Direct prerequisites and corequisites of one course.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Requisites {
	/// Courses that must be completed first.
	pub prerequisites: Vec<String>,
	/// Courses taken alongside.
	pub corequisites: Vec<String>,
}

impl Requisites {
	/// True for a course with no related courses.
	pub fn is_empty(&self) -> bool {
		self.prerequisites.is_empty() && self.corequisites.is_empty()
	}

	/// Every related course, prerequisites first.
	pub fn all(&self) -> impl Iterator<Item = &str> {
		self.prerequisites.iter().chain(&self.corequisites).map(String::as_str)
	}
}

fn push_unique(list: &mut Vec<String>, id: &str) {
	if !list.iter().any(|existing| existing == id) {
		list.push(id.to_string());
	}
}

/// Scan the catalog's edge lists for the courses directly related to `id`.
///
/// Endpoints are not checked against `nodes`.
pub fn edges_for(catalog: &Catalog, id: &str) -> Requisites {
	let mut requisites = Requisites::default();

	for (pre, course) in &catalog.edges.prerequisites {
		if course == id {
			push_unique(&mut requisites.prerequisites, pre);
		}
	}

	for (a, b) in &catalog.edges.corequisites {
		let other = if a == id {
			b
		} else if b == id {
			a
		} else {
			continue;
		};
		// (id, id) pairs never make a course its own corequisite
		if other != id {
			push_unique(&mut requisites.corequisites, other);
		}
	}

	requisites
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::types::Edges;

	fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
		list.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
	}

	fn catalog(pre: &[(&str, &str)], co: &[(&str, &str)]) -> Catalog {
		Catalog {
			edges: Edges {
				prerequisites: pairs(pre),
				corequisites: pairs(co),
			},
			..Catalog::default()
		}
	}

	#[test]
	fn prerequisites_are_first_elements_pointing_at_the_course() {
		let catalog = catalog(&[("a", "c"), ("b", "c"), ("c", "d")], &[]);

		assert_eq!(edges_for(&catalog, "c").prerequisites, ["a", "b"]);
		assert_eq!(edges_for(&catalog, "d").prerequisites, ["c"]);
		assert!(edges_for(&catalog, "a").is_empty());
	}

	#[test]
	fn corequisites_match_either_side() {
		let catalog = catalog(&[], &[("lab", "lec"), ("lec", "rec")]);

		assert_eq!(edges_for(&catalog, "lec").corequisites, ["lab", "rec"]);
		assert_eq!(edges_for(&catalog, "lab").corequisites, ["lec"]);
		assert_eq!(edges_for(&catalog, "rec").corequisites, ["lec"]);
	}

	#[test]
	fn self_paired_corequisite_is_excluded() {
		let catalog = catalog(&[], &[("a", "a"), ("a", "b")]);
		assert_eq!(edges_for(&catalog, "a").corequisites, ["b"]);
	}

	#[test]
	fn duplicate_edges_collapse() {
		let catalog = catalog(&[("a", "b"), ("a", "b")], &[("b", "c"), ("c", "b")]);
		let requisites = edges_for(&catalog, "b");

		assert_eq!(requisites.prerequisites, ["a"]);
		assert_eq!(requisites.corequisites, ["c"]);
		assert_eq!(requisites.all().collect::<Vec<_>>(), ["a", "c"]);
	}

	#[test]
	fn unknown_course_has_no_requisites() {
		let catalog = catalog(&[("a", "b")], &[("b", "c")]);
		assert_eq!(edges_for(&catalog, "zzz"), Requisites::default());
	}
}
