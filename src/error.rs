use std::path::PathBuf;
use std::sync::Arc;

/// Library-level structured errors for rewrite-paths.
///
/// Sources are shared through `Arc` so a failed configuration load can be
/// handed to every caller of the same remapper.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemapError {
	#[error("Failed to read path map file: {path}")]
	PathMapReadError {
		path: PathBuf,
		#[source]
		source: Arc<std::io::Error>,
	},

	#[error("Failed to parse path map file: {path}")]
	PathMapParseError {
		path: PathBuf,
		#[source]
		source: Arc<serde_json::Error>,
	},

	#[error("Invalid replacement for {key:?}: expected a string, null, false or {{\"path\": string}}")]
	InvalidReplacement { key: String },

	#[error("Failed to read options file: {path}")]
	OptionsReadError {
		path: PathBuf,
		#[source]
		source: Arc<std::io::Error>,
	},

	#[error("Failed to parse options file: {path}")]
	OptionsParseError {
		path: PathBuf,
		#[source]
		source: Arc<toml::de::Error>,
	},

	#[error("Failed to parse options file: {path}")]
	OptionsJsonError {
		path: PathBuf,
		#[source]
		source: Arc<serde_json::Error>,
	},

	#[error("Invalid pattern built from path: {path}")]
	InvalidPattern {
		path: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid search table: {reason}")]
	InvalidSearch { reason: String },
}

/// Result type alias using RemapError.
pub type Result<T> = std::result::Result<T, RemapError>;
