use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Plugin options: which attributes to inspect and where the path map comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct Options {
	/// Tag name to attribute names to inspect. Defaults to `script` / `src`.
	#[serde(default)]
	pub search: SearchTable,

	/// Inline path map, or the path of a JSON file holding one.
	#[serde(rename = "pathMap", alias = "path-map", alias = "path_map")]
	pub path_map: PathMapSource,
}

impl Options {
	/// Options with the default search table.
	pub fn new(path_map: impl Into<PathMapSource>) -> Self {
		Options {
			search: SearchTable::default(),
			path_map: path_map.into(),
		}
	}

	pub fn with_search(mut self, search: SearchTable) -> Self {
		self.search = search;
		self
	}

	/// Validate the search table.
	pub fn validate(&self) -> Result<(), crate::error::RemapError> {
		self.search.validate()
	}
}

/// Mapping from element tag name to the attribute names inspected on it.
///
/// Attribute names are kept unique per tag, in first-listed order, so no
/// attribute is processed twice in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct SearchTable(HashMap<String, Vec<String>>);

impl SearchTable {
	/// An empty table that inspects nothing.
	pub fn empty() -> Self {
		SearchTable(HashMap::new())
	}

	/// Attribute names to inspect on elements with the given tag.
	pub fn attributes(&self, tag: &str) -> Option<&[String]> {
		self.0.get(tag).map(Vec::as_slice)
	}

	pub fn insert<T, I, A>(&mut self, tag: T, attributes: I)
	where
		T: Into<String>,
		I: IntoIterator<Item = A>,
		A: Into<String>,
	{
		let mut unique: Vec<String> = Vec::new();
		for attr in attributes.into_iter().map(Into::into) {
			if !unique.contains(&attr) {
				unique.push(attr);
			}
		}
		self.0.insert(tag.into(), unique);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Reject empty tag or attribute names.
	pub fn validate(&self) -> Result<(), crate::error::RemapError> {
		for (tag, attributes) in &self.0 {
			if tag.trim().is_empty() {
				return Err(crate::error::RemapError::InvalidSearch {
					reason: "tag name must not be empty".to_string(),
				});
			}
			if attributes.iter().any(|attr| attr.trim().is_empty()) {
				return Err(crate::error::RemapError::InvalidSearch {
					reason: format!("attribute name for <{}> must not be empty", tag),
				});
			}
		}
		Ok(())
	}
}

impl Default for SearchTable {
	fn default() -> Self {
		let mut table = SearchTable::empty();
		table.insert("script", ["src"]);
		table
	}
}

impl From<HashMap<String, Vec<String>>> for SearchTable {
	fn from(raw: HashMap<String, Vec<String>>) -> Self {
		raw.into_iter().collect()
	}
}

impl<T, I, A> FromIterator<(T, I)> for SearchTable
where
	T: Into<String>,
	I: IntoIterator<Item = A>,
	A: Into<String>,
{
	fn from_iter<It: IntoIterator<Item = (T, I)>>(iter: It) -> Self {
		let mut table = SearchTable::empty();
		for (tag, attributes) in iter {
			table.insert(tag, attributes);
		}
		table
	}
}

/// Ordered table of original path to replacement path.
///
/// `None` marks a path whose attribute is removed. Entry order is the order
/// rules are tried in. Re-inserting a key keeps its position and takes the
/// new value.
///
/// Inline maps and JSON path map files follow the same value rules: a string
/// replaces, `null` and `false` remove, anything else is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMap {
	entries: IndexMap<String, Option<String>>,
}

impl PathMap {
	pub fn new() -> Self {
		PathMap::default()
	}

	pub fn insert(&mut self, path: impl Into<String>, replacement: Option<String>) {
		self.entries.insert(path.into(), replacement);
	}

	pub fn get(&self, path: &str) -> Option<Option<&str>> {
		self.entries.get(path).map(Option::as_deref)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.entries
			.iter()
			.map(|(path, replacement)| (path.as_str(), replacement.as_deref()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for PathMap
where
	K: Into<String>,
	V: Into<Option<String>>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = PathMap::new();
		for (path, replacement) in iter {
			map.insert(path, replacement.into());
		}
		map
	}
}

struct PathMapVisitor;

impl<'de> Visitor<'de> for PathMapVisitor {
	type Value = PathMap;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a map of original path to replacement path, null or false")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PathMap, A::Error> {
		let mut map = PathMap::new();
		while let Some((path, value)) = access.next_entry::<String, Option<InlineValue>>()? {
			let replacement = match value {
				Some(InlineValue::Path(replacement)) => Some(replacement),
				None | Some(InlineValue::Flag(false)) => None,
				Some(InlineValue::Flag(true)) => {
					return Err(de::Error::custom(format!(
						"invalid replacement for {:?}: expected a string, null or false",
						path
					)));
				}
			};
			map.insert(path, replacement);
		}
		Ok(map)
	}
}

/// Raw inline path map value.
#[derive(Deserialize)]
#[serde(untagged)]
enum InlineValue {
	Path(String),
	Flag(bool),
}

impl<'de> Deserialize<'de> for PathMap {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(PathMapVisitor)
	}
}

/// Where the path map comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMapSource {
	/// A map supplied in memory.
	Inline(PathMap),

	/// A JSON file holding the map, read once on first use.
	File(PathBuf),
}

impl From<PathMap> for PathMapSource {
	fn from(map: PathMap) -> Self {
		PathMapSource::Inline(map)
	}
}

impl From<PathBuf> for PathMapSource {
	fn from(path: PathBuf) -> Self {
		PathMapSource::File(path)
	}
}

impl From<&std::path::Path> for PathMapSource {
	fn from(path: &std::path::Path) -> Self {
		PathMapSource::File(path.to_path_buf())
	}
}

struct PathMapSourceVisitor;

impl<'de> Visitor<'de> for PathMapSourceVisitor {
	type Value = PathMapSource;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("pathMap option must be a string or object")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<PathMapSource, E> {
		Ok(PathMapSource::File(PathBuf::from(value)))
	}

	fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<PathMapSource, A::Error> {
		PathMapVisitor.visit_map(access).map(PathMapSource::Inline)
	}
}

impl<'de> Deserialize<'de> for PathMapSource {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(PathMapSourceVisitor)
	}
}
