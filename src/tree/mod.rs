//! Markup tree access.
//!
//! The remapper never parses or serializes markup. It only needs to visit
//! elements and mutate their attributes, which is what these traits expose.
//! [`dom`] provides a small document model implementing them.

pub mod dom;

pub use dom::{Content, Document, Element};

/// An element whose attributes can be read and rewritten.
pub trait Node {
	/// Tag name of the element.
	fn tag(&self) -> &str;

	/// Current value of an attribute, if present.
	fn attr(&self, name: &str) -> Option<&str>;

	/// Set an attribute, replacing any existing value.
	fn set_attr(&mut self, name: &str, value: &str);

	/// Remove an attribute if present.
	fn remove_attr(&mut self, name: &str);
}

/// A markup tree that can be walked mutably.
pub trait Tree {
	type Node: Node;

	/// Visit every element at least once, in any order.
	fn walk(&mut self, visit: &mut dyn FnMut(&mut Self::Node));
}
