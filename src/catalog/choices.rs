//! Year/major choices derived from the catalog index keys.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::iter::Peekable;
use std::str::Chars;

use log::warn;
use serde::Deserialize;

use super::error::CatalogError;
use super::types::{Catalog, RawCatalogIndex};

/// Year -> majors offered that year.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogIndex {
	years: BTreeMap<String, BTreeSet<String>>,
}

impl CatalogIndex {
	/// True before any catalog key has been grouped.
	pub fn is_empty(&self) -> bool {
		self.years.is_empty()
	}

	/// Years in ascending string order.
	pub fn years(&self) -> impl Iterator<Item = &str> {
		self.years.keys().map(String::as_str)
	}

	/// Lower-case majors offered in `year`.
	pub fn majors(&self, year: &str) -> Option<&BTreeSet<String>> {
		self.years.get(year)
	}
}

/// Parse the body of `catalogs.json`.
///
/// Only the top-level shape is checked here; each catalog is read when it is
/// selected.
pub fn parse_index(body: &str) -> Result<RawCatalogIndex, CatalogError> {
	Ok(serde_json::from_str(body)?)
}

/// Split a `"{major}_{year}"` key at its last underscore.
fn split_key(key: &str) -> Option<(&str, &str)> {
	let (major, year) = key.rsplit_once('_')?;
	(!major.is_empty() && !year.is_empty()).then_some((major, year))
}

/// Group every catalog key under its year.
pub fn derive_choices(raw: &RawCatalogIndex) -> CatalogIndex {
	let mut years: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
	for key in raw.keys() {
		match split_key(key) {
			Some((major, year)) => {
				years.entry(year.to_string()).or_default().insert(major.to_string());
			}
			None => warn!("skipping catalog key {key:?}: expected \"{{major}}_{{year}}\""),
		}
	}
	CatalogIndex { years }
}

/// Years newest first, compared numerically where digits line up.
pub fn years_descending(index: &CatalogIndex) -> Vec<String> {
	let mut years: Vec<String> = index.years().map(str::to_string).collect();
	years.sort_by(|a, b| natural_cmp(b, a));
	years
}

/// Majors available in `year`, sorted and upper-cased for display.
pub fn majors_for(index: &CatalogIndex, year: Option<&str>) -> Vec<String> {
	let Some(majors) = year.and_then(|year| index.majors(year)) else {
		return Vec::new();
	};
	majors.iter().map(|major| major.to_uppercase()).collect()
}

/// The catalog for a selection, or an empty one when anything is missing.
///
/// A selected catalog that does not deserialize is logged and shown empty.
pub fn resolve(raw: Option<&RawCatalogIndex>, year: Option<&str>, major: Option<&str>) -> Catalog {
	let (Some(raw), Some(year), Some(major)) = (raw, year, major) else {
		return Catalog::default();
	};
	let key = format!("{}_{}", major.to_lowercase(), year);
	let Some(value) = raw.get(&key) else {
		return Catalog::default();
	};
	Catalog::deserialize(value).unwrap_or_else(|err| {
		warn!("catalog {key:?} is malformed, showing no courses: {err}");
		Catalog::default()
	})
}

/// Case-insensitive comparison that orders digit runs by numeric value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
	let (mut a, mut b) = (a.chars().peekable(), b.chars().peekable());
	loop {
		match (a.peek().copied(), b.peek().copied()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
				let ord = cmp_digits(&take_digits(&mut a), &take_digits(&mut b));
				if ord != Ordering::Equal {
					return ord;
				}
			}
			(Some(x), Some(y)) => {
				let ord = x.to_lowercase().cmp(y.to_lowercase());
				if ord != Ordering::Equal {
					return ord;
				}
				a.next();
				b.next();
			}
		}
	}
}

fn take_digits(chars: &mut Peekable<Chars>) -> String {
	let mut run = String::new();
	while let Some(c) = chars.next_if(char::is_ascii_digit) {
		run.push(c);
	}
	run
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
	let (a, b) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use serde_json::json;

	use super::*;

	fn raw(keys: &[&str]) -> RawCatalogIndex {
		keys.iter().map(|key| (key.to_string(), json!({}))).collect()
	}

	#[test]
	fn groups_each_key_under_its_year() {
		let index = derive_choices(&raw(&["cs_2023", "ce_2023", "ee_2023", "cs_2024", "ee_2024"]));

		assert_eq!(index.years().collect::<Vec<_>>(), ["2023", "2024"]);
		assert_eq!(majors_for(&index, Some("2023")), ["CE", "CS", "EE"]);
		assert_eq!(majors_for(&index, Some("2024")), ["CS", "EE"]);
	}

	#[test]
	fn majors_may_contain_underscores() {
		let index = derive_choices(&raw(&["cs_ai_2025", "cs_2025"]));
		assert_eq!(majors_for(&index, Some("2025")), ["CS", "CS_AI"]);
	}

	#[test]
	fn malformed_keys_are_skipped() {
		let index = derive_choices(&raw(&["readme", "_2023", "cs_", "cs_2023"]));
		assert_eq!(index.years().collect::<Vec<_>>(), ["2023"]);
		assert_eq!(majors_for(&index, Some("2023")), ["CS"]);
	}

	#[rstest]
	#[case(&["9", "10", "2"], &["10", "9", "2"])]
	#[case(&["2019", "2024", "2021"], &["2024", "2021", "2019"])]
	#[case(&["2023-24", "2023-25", "2022-23"], &["2023-25", "2023-24", "2022-23"])]
	#[case(&[], &[])]
	fn years_sort_newest_first(#[case] years: &[&str], #[case] expected: &[&str]) {
		let keys: Vec<String> = years.iter().map(|year| format!("cs_{year}")).collect();
		let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
		assert_eq!(years_descending(&derive_choices(&raw(&keys))), expected);
	}

	#[rstest]
	#[case("a2", "a10", Ordering::Less)]
	#[case("007", "7", Ordering::Equal)]
	#[case("Fall", "fall", Ordering::Equal)]
	#[case("abc", "abd", Ordering::Less)]
	#[case("10", "10a", Ordering::Less)]
	fn natural_ordering(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
		assert_eq!(natural_cmp(a, b), expected);
	}

	#[test]
	fn majors_for_unknown_or_unset_year_is_empty() {
		let index = derive_choices(&raw(&["cs_2023"]));
		assert!(majors_for(&index, Some("1999")).is_empty());
		assert!(majors_for(&index, None).is_empty());
		assert!(majors_for(&CatalogIndex::default(), Some("2023")).is_empty());
	}

	#[test]
	fn resolve_lowercases_the_major() {
		let mut index = raw(&["ee_2024"]);
		index.insert(
			"cs_2024".into(),
			json!({"nodes": {"cs101": {"hours": 3, "title": "Programming", "term": 1}}}),
		);

		let catalog = resolve(Some(&index), Some("2024"), Some("CS"));
		assert_eq!(catalog.nodes.get("cs101").unwrap().title, "Programming");
	}

	#[test]
	fn malformed_catalog_does_not_hide_its_neighbours() {
		let index = parse_index(
			r#"{
				"ee_2023": {"nodes": {"ee101": {"hours": 3, "title": "Circuits", "term": 1}}},
				"cs_2019": {"nodes": {"old": {"hours": 3, "title": "Legacy"}}},
				"me_2019": 5
			}"#,
		)
		.unwrap();

		assert_eq!(majors_for(&derive_choices(&index), Some("2019")), ["CS", "ME"]);
		assert_eq!(resolve(Some(&index), Some("2023"), Some("EE")).nodes.ids().collect::<Vec<_>>(), ["ee101"]);
		assert!(resolve(Some(&index), Some("2019"), Some("CS")).is_empty());
		assert!(resolve(Some(&index), Some("2019"), Some("ME")).is_empty());
	}

	#[rstest]
	#[case(None, Some("CS"))]
	#[case(Some("2024"), None)]
	#[case(None, None)]
	#[case(Some("1999"), Some("CS"))]
	fn resolve_defaults_to_empty(#[case] year: Option<&str>, #[case] major: Option<&str>) {
		let index = raw(&["cs_2024"]);
		assert!(resolve(Some(&index), year, major).is_empty());
	}

	#[test]
	fn resolve_before_load_is_empty() {
		assert!(resolve(None, Some("2024"), Some("CS")).is_empty());
	}

	#[test]
	fn parse_errors_are_reported() {
		assert!(matches!(parse_index("{not json"), Err(CatalogError::Parse(_))));
		assert!(matches!(parse_index("[1, 2]"), Err(CatalogError::Parse(_))));
		assert_eq!(parse_index("{}").unwrap().len(), 0);
	}
}
