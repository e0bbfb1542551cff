use crate::config::legacy::unwrap_path_objects;
use crate::config::types::{PathMap, PathMapSource};
use crate::error::{RemapError, Result};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;

/// Resolve a path map source into a concrete map.
///
/// Inline maps resolve immediately; files are read and decoded once.
pub async fn resolve_path_map(source: &PathMapSource) -> Result<PathMap> {
	match source {
		PathMapSource::Inline(map) => Ok(map.clone()),
		PathMapSource::File(path) => load_path_map_file(path).await,
	}
}

/// Read and decode a JSON path map file.
pub async fn load_path_map_file(path: &Path) -> Result<PathMap> {
	let content = tokio::fs::read(path)
		.await
		.map_err(|source| RemapError::PathMapReadError {
			path: path.to_path_buf(),
			source: Arc::new(source),
		})?;

	let map = parse_path_map_slice(&content, path)?;
	tracing::debug!(path = %path.display(), entries = map.len(), "Loaded path map");
	Ok(map)
}

/// Decode a JSON path map (useful for testing).
pub fn parse_path_map_slice(content: &[u8], path: &Path) -> Result<PathMap> {
	let mut raw: Map<String, Value> =
		serde_json::from_slice(content).map_err(|source| RemapError::PathMapParseError {
			path: path.to_path_buf(),
			source: Arc::new(source),
		})?;

	unwrap_path_objects(&mut raw);
	into_path_map(raw)
}

/// Convert decoded JSON values into replacements.
///
/// Strings replace; `null` and `false` remove. Anything else is rejected.
fn into_path_map(raw: Map<String, Value>) -> Result<PathMap> {
	let mut map = PathMap::new();
	for (key, value) in raw {
		let replacement = match value {
			Value::String(replacement) => Some(replacement),
			Value::Null | Value::Bool(false) => None,
			_ => return Err(RemapError::InvalidReplacement { key }),
		};
		map.insert(key, replacement);
	}
	Ok(map)
}
