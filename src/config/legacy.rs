//! Legacy path map format support.
//!
//! Some asset manifest generators emit `{ "a.js": { "path": "a.1f3c.js" } }`
//! instead of a flat map. Those wrapped values are flattened here, before
//! the map is converted, so the rest of the loader only sees strings.

use serde_json::{Map, Value};

/// Replace every `{ "path": string }` value with its `path` string.
///
/// Values that are strings, null, or objects without a string `path` are left
/// untouched. Returns the number of values unwrapped.
pub fn unwrap_path_objects(map: &mut Map<String, Value>) -> usize {
	let mut unwrapped = 0;
	for (key, value) in map.iter_mut() {
		let inner = match value {
			Value::Object(object) => match object.get("path") {
				Some(Value::String(path)) => path.clone(),
				_ => continue,
			},
			_ => continue,
		};
		tracing::debug!(key = %key, path = %inner, "Unwrapped legacy path entry");
		*value = Value::String(inner);
		unwrapped += 1;
	}
	unwrapped
}
