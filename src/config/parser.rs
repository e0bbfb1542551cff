use crate::config::types::Options;
use crate::error::{RemapError, Result};
use std::path::Path;
use std::sync::Arc;

/// Parse an options file from the given path.
///
/// Files with a `.json` extension are decoded as JSON, everything else as TOML.
pub fn parse_options_file(path: &Path) -> Result<Options> {
	let content = std::fs::read_to_string(path).map_err(|source| RemapError::OptionsReadError {
		path: path.to_path_buf(),
		source: Arc::new(source),
	})?;

	let is_json = path
		.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

	if is_json {
		parse_options_json(&content, path)
	} else {
		parse_options_str(&content, path)
	}
}

/// Parse TOML options from a string (useful for testing).
pub fn parse_options_str(content: &str, path: &Path) -> Result<Options> {
	let options: Options =
		toml::from_str(content).map_err(|source| RemapError::OptionsParseError {
			path: path.to_path_buf(),
			source: Arc::new(source),
		})?;

	options.validate()?;

	Ok(options)
}

/// Parse JSON options from a string.
pub fn parse_options_json(content: &str, path: &Path) -> Result<Options> {
	let options: Options =
		serde_json::from_str(content).map_err(|source| RemapError::OptionsJsonError {
			path: path.to_path_buf(),
			source: Arc::new(source),
		})?;

	options.validate()?;

	Ok(options)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::{PathMapSource, SearchTable};
	use std::path::PathBuf;

	#[test]
	fn test_parse_file_reference() {
		let content = r#"pathMap = "dist/manifest.json""#;
		let path = PathBuf::from("rewrite-paths.toml");
		let options = parse_options_str(content, &path).unwrap();

		assert_eq!(
			options.path_map,
			PathMapSource::File(PathBuf::from("dist/manifest.json"))
		);
		assert_eq!(options.search, SearchTable::default());
	}

	#[test]
	fn test_parse_inline_map_and_search() {
		let content = r#"
[search]
script = ["src"]
link = ["href"]

[pathMap]
"css/site.css" = "dist/site.3f1a.css"
"js/app.js" = "dist/app.9c2e.js"
"#;
		let path = PathBuf::from("rewrite-paths.toml");
		let options = parse_options_str(content, &path).unwrap();

		assert_eq!(options.search.len(), 2);
		assert_eq!(
			options.search.attributes("link"),
			Some(&["href".to_string()][..])
		);

		match options.path_map {
			PathMapSource::Inline(map) => {
				let paths: Vec<_> = map.iter().map(|(path, _)| path).collect();
				assert_eq!(paths, vec!["css/site.css", "js/app.js"]);
			}
			_ => panic!("Expected inline path map"),
		}
	}

	#[test]
	fn test_parse_kebab_case_alias() {
		let content = r#"path-map = "manifest.json""#;
		let path = PathBuf::from("rewrite-paths.toml");
		let options = parse_options_str(content, &path).unwrap();
		assert!(matches!(options.path_map, PathMapSource::File(_)));
	}

	#[test]
	fn test_parse_json_null_removes() {
		let content = r#"{ "pathMap": { "debug.js": null, "app.js": "app.1.js" } }"#;
		let path = PathBuf::from("rewrite-paths.json");
		let options = parse_options_json(content, &path).unwrap();

		match options.path_map {
			PathMapSource::Inline(map) => {
				assert_eq!(map.get("debug.js"), Some(None));
				assert_eq!(map.get("app.js"), Some(Some("app.1.js")));
			}
			_ => panic!("Expected inline path map"),
		}
	}

	#[test]
	fn test_path_map_must_be_string_or_object() {
		let content = r#"{ "pathMap": 3 }"#;
		let path = PathBuf::from("rewrite-paths.json");
		let err = parse_options_json(content, &path).unwrap_err();

		match err {
			RemapError::OptionsJsonError { source, .. } => {
				assert!(
					source
						.to_string()
						.contains("pathMap option must be a string or object")
				);
			}
			_ => panic!("Expected OptionsJsonError error"),
		}
	}

	#[test]
	fn test_missing_path_map() {
		let path = PathBuf::from("rewrite-paths.toml");
		let result = parse_options_str("", &path);
		assert!(matches!(
			result.unwrap_err(),
			RemapError::OptionsParseError { .. }
		));
	}

	#[test]
	fn test_invalid_search_rejected() {
		let content = r#"
pathMap = "manifest.json"

[search]
script = [""]
"#;
		let path = PathBuf::from("rewrite-paths.toml");
		let result = parse_options_str(content, &path);
		assert!(matches!(
			result.unwrap_err(),
			RemapError::InvalidSearch { .. }
		));
	}

	#[test]
	fn test_parse_options_file_by_extension() {
		let temp_dir = tempfile::tempdir().unwrap();

		let toml_path = temp_dir.path().join("options.toml");
		std::fs::write(&toml_path, r#"pathMap = "a.json""#).unwrap();
		assert!(parse_options_file(&toml_path).is_ok());

		let json_path = temp_dir.path().join("options.json");
		std::fs::write(&json_path, r#"{ "pathMap": "a.json" }"#).unwrap();
		assert!(parse_options_file(&json_path).is_ok());

		let missing = temp_dir.path().join("missing.toml");
		assert!(matches!(
			parse_options_file(&missing).unwrap_err(),
			RemapError::OptionsReadError { .. }
		));
	}
}
