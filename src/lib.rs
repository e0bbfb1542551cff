//! Rewrite-paths - markup tree plugin that rewrites path-like attribute values.
//!
//! Typical use is pointing `<script src>` references at hashed build output.
//! This library provides:
//! - Plugin options with a per-tag search table and a path map source
//! - Path map loading from inline tables or JSON manifest files
//! - Slash-agnostic, whitespace-tolerant, literal path matching
//! - Attribute rewriting and removal over any [`tree::Tree`]
//!
//! # Example
//!
//! ```no_run
//! use rewrite_paths::PathRemapper;
//! use rewrite_paths::config::{Options, PathMap};
//! use rewrite_paths::tree::{Document, Element};
//!
//! # async fn run() -> rewrite_paths::Result<()> {
//! let mut map = PathMap::new();
//! map.insert("src/js/index.js", Some("dist/index.3f1a.js".to_string()));
//! let remapper = PathRemapper::new(Options::new(map));
//!
//! let mut doc = Document::new()
//!     .with_child(Element::new("script").with_attr("src", "src/js/index.js"));
//! remapper.transform(&mut doc).await?;
//!
//! assert_eq!(doc.to_string(), r#"<script src="dist/index.3f1a.js"></script>"#);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod remapper;
pub mod rules;
pub mod tree;

pub use error::{RemapError, Result};
pub use remapper::PathRemapper;
