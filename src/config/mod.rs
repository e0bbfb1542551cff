//! Configuration types and loading for rewrite-paths.
//!
//! This module handles:
//! - Plugin options (search table and path map source)
//! - Path map resolution, inline or from a JSON file
//! - Legacy `{ "path": ... }` manifest entries
//! - Options files in TOML or JSON

pub mod legacy;
pub mod parser;
pub mod path_map;
pub mod types;

pub use parser::{parse_options_file, parse_options_json, parse_options_str};
pub use path_map::{load_path_map_file, parse_path_map_slice, resolve_path_map};
pub use types::{Options, PathMap, PathMapSource, SearchTable};
