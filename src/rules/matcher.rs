use crate::config::types::PathMap;
use crate::error::{RemapError, Result};
use regex::Regex;

/// What happens to an attribute matched by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
	/// Overwrite the attribute value.
	Replace(String),

	/// Remove the attribute.
	Remove,
}

impl From<Option<&str>> for Replacement {
	/// `None` and the empty string both mean removal.
	fn from(value: Option<&str>) -> Self {
		match value {
			Some(replacement) if !replacement.is_empty() => {
				Replacement::Replace(replacement.to_string())
			}
			_ => Replacement::Remove,
		}
	}
}

/// A compiled path rule.
#[derive(Debug, Clone)]
pub struct PathRule {
	/// Original path as configured.
	pub path: String,

	/// Anchored, slash- and whitespace-tolerant matcher for `path`.
	pub regex: Regex,

	pub replacement: Replacement,
}

impl PathRule {
	pub fn new(path: &str, replacement: Replacement) -> Result<Self> {
		Ok(PathRule {
			path: path.to_string(),
			regex: compile_path_regex(path)?,
			replacement,
		})
	}

	/// Check if `value` denotes the same path as this rule.
	pub fn matches(&self, value: &str) -> bool {
		self.regex.is_match(value)
	}
}

/// Rules in configuration order. First match wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	rules: Vec<PathRule>,
}

impl RuleSet {
	/// Compile one rule per path map entry, preserving entry order.
	pub fn compile(map: &PathMap) -> Result<Self> {
		let rules = map
			.iter()
			.map(|(path, replacement)| PathRule::new(path, replacement.into()))
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(rules = rules.len(), "Compiled path rules");
		Ok(RuleSet { rules })
	}

	/// Find the first rule matching `value`.
	pub fn find(&self, value: &str) -> Option<&PathRule> {
		self.rules.iter().find(|rule| rule.matches(value))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, PathRule> {
		self.rules.iter()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

/// Build the regex source for a path.
///
/// One leading separator is dropped; it is matched optionally by the prefix.
/// Both separators match either style. Every other character is literal.
fn path_pattern(path: &str) -> String {
	let trimmed = path
		.strip_prefix('/')
		.or_else(|| path.strip_prefix('\\'))
		.unwrap_or(path);

	let mut pattern = String::from(r"^\s*[/\\]?");
	let mut buf = [0u8; 4];
	for c in trimmed.chars() {
		match c {
			'/' | '\\' => pattern.push_str(r"[/\\]"),
			_ => pattern.push_str(&regex::escape(c.encode_utf8(&mut buf))),
		}
	}
	pattern.push_str(r"\s*$");
	pattern
}

fn compile_path_regex(path: &str) -> Result<Regex> {
	Regex::new(&path_pattern(path)).map_err(|source| RemapError::InvalidPattern {
		path: path.to_string(),
		source,
	})
}
