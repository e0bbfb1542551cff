use crate::tree::{Node, Tree};
use std::fmt;

/// A markup document fragment: an ordered list of top-level content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
	pub children: Vec<Content>,
}

/// A piece of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	Element(Element),
	Text(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: String,
	attrs: Vec<(String, String)>,
	children: Vec<Content>,
}

impl Document {
	pub fn new() -> Self {
		Document::default()
	}

	pub fn with_child(mut self, child: impl Into<Content>) -> Self {
		self.children.push(child.into());
		self
	}
}

impl Element {
	pub fn new(tag: impl Into<String>) -> Self {
		Element {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	pub fn with_attr(mut self, name: &str, value: &str) -> Self {
		self.set_attr(name, value);
		self
	}

	pub fn with_child(mut self, child: impl Into<Content>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Attributes in document order.
	pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	pub fn children(&self) -> &[Content] {
		&self.children
	}

	fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
		visit(self);
		for child in &mut self.children {
			if let Content::Element(element) = child {
				element.walk_mut(visit);
			}
		}
	}
}

impl From<Element> for Content {
	fn from(element: Element) -> Self {
		Content::Element(element)
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Content::Text(text.to_string())
	}
}

impl Node for Element {
	fn tag(&self) -> &str {
		&self.tag
	}

	fn attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_str())
	}

	fn set_attr(&mut self, name: &str, value: &str) {
		match self.attrs.iter_mut().find(|(existing, _)| existing == name) {
			Some((_, slot)) => *slot = value.to_string(),
			None => self.attrs.push((name.to_string(), value.to_string())),
		}
	}

	fn remove_attr(&mut self, name: &str) {
		self.attrs.retain(|(existing, _)| existing != name);
	}
}

impl Tree for Document {
	type Node = Element;

	fn walk(&mut self, visit: &mut dyn FnMut(&mut Element)) {
		for child in &mut self.children {
			if let Content::Element(element) = child {
				element.walk_mut(visit);
			}
		}
	}
}

impl Tree for Element {
	type Node = Element;

	fn walk(&mut self, visit: &mut dyn FnMut(&mut Element)) {
		self.walk_mut(visit);
	}
}

fn write_escaped(f: &mut fmt::Formatter, text: &str, in_attr: bool) -> fmt::Result {
	for c in text.chars() {
		match c {
			'&' => f.write_str("&amp;")?,
			'"' if in_attr => f.write_str("&quot;")?,
			'<' if !in_attr => f.write_str("&lt;")?,
			'>' if !in_attr => f.write_str("&gt;")?,
			_ => write!(f, "{}", c)?,
		}
	}
	Ok(())
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "<{}", self.tag)?;
		for (name, value) in &self.attrs {
			write!(f, " {}=\"", name)?;
			write_escaped(f, value, true)?;
			f.write_str("\"")?;
		}
		f.write_str(">")?;
		for child in &self.children {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.tag)
	}
}

impl fmt::Display for Content {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Content::Element(element) => write!(f, "{}", element),
			Content::Text(text) => write_escaped(f, text, false),
		}
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for child in &self.children {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_nested_document() {
		let doc = Document::new().with_child(
			Element::new("body")
				.with_child(Element::new("script").with_attr("src", "index.js"))
				.with_child("hi"),
		);
		assert_eq!(
			doc.to_string(),
			r#"<body><script src="index.js"></script>hi</body>"#
		);
	}

	#[test]
	fn test_render_escapes() {
		let doc = Document::new().with_child(
			Element::new("p")
				.with_attr("title", r#"a "b" & c"#)
				.with_child("1 < 2 & 3 > 2"),
		);
		assert_eq!(
			doc.to_string(),
			r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3 &gt; 2</p>"#
		);
	}

	#[test]
	fn test_remove_attr_keeps_order() {
		let mut element = Element::new("t")
			.with_attr("a", "1")
			.with_attr("b", "2")
			.with_attr("c", "3");
		element.remove_attr("b");
		element.set_attr("a", "x");

		let attrs: Vec<_> = element.attrs().collect();
		assert_eq!(attrs, vec![("a", "x"), ("c", "3")]);
		assert_eq!(element.attr("b"), None);
	}

	#[test]
	fn test_walk_visits_every_element() {
		let mut doc = Document::new()
			.with_child(Element::new("div").with_child(Element::new("span")))
			.with_child("text")
			.with_child(Element::new("script"));

		let mut tags = Vec::new();
		doc.walk(&mut |node| tags.push(node.tag().to_string()));
		assert_eq!(tags, vec!["div", "span", "script"]);
	}
}
