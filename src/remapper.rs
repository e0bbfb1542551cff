use crate::config::path_map::resolve_path_map;
use crate::config::types::{Options, PathMapSource, SearchTable};
use crate::error::Result;
use crate::rules::{Outcome, RuleSet, rewrite_attribute};
use crate::tree::{Node, Tree};
use tokio::sync::OnceCell;

/// Rewrites path attributes in markup trees.
///
/// The path map is resolved and compiled on first use and shared by every
/// later call. A failed resolution is kept and returned to every caller.
#[derive(Debug)]
pub struct PathRemapper {
	search: SearchTable,
	source: PathMapSource,
	rules: OnceCell<Result<RuleSet>>,
}

impl PathRemapper {
	pub fn new(options: Options) -> Self {
		PathRemapper {
			search: options.search,
			source: options.path_map,
			rules: OnceCell::new(),
		}
	}

	pub fn search(&self) -> &SearchTable {
		&self.search
	}

	/// Resolve and compile the path map, or return the memoized result.
	pub async fn ready(&self) -> Result<&RuleSet> {
		let source = &self.source;
		let compiled = self
			.rules
			.get_or_init(|| async move {
				let map = resolve_path_map(source).await?;
				RuleSet::compile(&map)
			})
			.await;

		match compiled {
			Ok(rules) => Ok(rules),
			Err(err) => {
				tracing::debug!(error = %err, "Path map unavailable");
				Err(err.clone())
			}
		}
	}

	/// Rewrite every searched attribute in `tree` and hand the tree back.
	pub async fn transform<'t, T: Tree + ?Sized>(&self, tree: &'t mut T) -> Result<&'t mut T> {
		let rules = self.ready().await?;

		let mut rewritten = 0usize;
		let mut removed = 0usize;
		tree.walk(&mut |node| {
			let Some(attributes) = self.search.attributes(node.tag()) else {
				return;
			};
			for attr in attributes {
				if node.attr(attr).is_none_or(str::is_empty) {
					continue;
				}
				match rewrite_attribute(rules, node, attr) {
					Outcome::Rewritten => rewritten += 1,
					Outcome::Removed => removed += 1,
					Outcome::Unchanged => {}
				}
			}
		});

		tracing::debug!(rewritten, removed, "Remapped tree");
		Ok(tree)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::PathMap;
	use crate::error::RemapError;
	use crate::tree::{Document, Element};

	fn inline(entries: &[(&str, &str)]) -> Options {
		let map: PathMap = entries
			.iter()
			.map(|(path, replacement)| (*path, Some(replacement.to_string())))
			.collect();
		Options::new(map)
	}

	#[tokio::test]
	async fn test_ready_compiles_once() {
		let remapper = PathRemapper::new(inline(&[("a.js", "b.js")]));
		let first = remapper.ready().await.unwrap() as *const RuleSet;
		let second = remapper.ready().await.unwrap() as *const RuleSet;
		assert_eq!(first, second);
	}

	#[tokio::test]
	async fn test_empty_values_are_skipped() {
		let remapper = PathRemapper::new(inline(&[("", "filled.js")]));
		let mut doc = Document::new().with_child(Element::new("script").with_attr("src", ""));

		remapper.transform(&mut doc).await.unwrap();
		assert_eq!(doc.to_string(), r#"<script src=""></script>"#);
	}

	#[tokio::test]
	async fn test_missing_search_attribute_is_not_added() {
		let remapper = PathRemapper::new(inline(&[("", "filled.js")]));
		let mut doc = Document::new().with_child(Element::new("script"));

		remapper.transform(&mut doc).await.unwrap();
		assert_eq!(doc.to_string(), "<script></script>");
	}

	#[tokio::test]
	async fn test_failure_is_memoized() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("late.json");
		let remapper = PathRemapper::new(Options::new(path.clone()));

		assert!(matches!(
			remapper.ready().await.unwrap_err(),
			RemapError::PathMapReadError { .. }
		));

		std::fs::write(&path, r#"{"a.js": "b.js"}"#).unwrap();
		assert!(matches!(
			remapper.ready().await.unwrap_err(),
			RemapError::PathMapReadError { .. }
		));
	}

	#[tokio::test]
	async fn test_transform_returns_same_tree() {
		let remapper = PathRemapper::new(inline(&[("a.js", "b.js")]));
		let mut doc = Document::new().with_child(Element::new("script").with_attr("src", "a.js"));
		let doc_ptr = &doc as *const Document;

		let returned = remapper.transform(&mut doc).await.unwrap();
		assert_eq!(returned as *const Document, doc_ptr);
	}
}
