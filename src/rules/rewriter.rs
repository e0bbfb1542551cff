use crate::rules::matcher::{Replacement, RuleSet};
use crate::tree::Node;

/// Result of processing one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Rewritten,
	Removed,
	Unchanged,
}

/// Apply the first rule matching the attribute's current value.
///
/// At most one rule is applied. The new value is not matched again. A missing
/// attribute or a value no rule matches leaves the node untouched.
pub fn rewrite_attribute<N: Node + ?Sized>(
	rules: &RuleSet,
	node: &mut N,
	attr: &str,
) -> Outcome {
	let Some(value) = node.attr(attr) else {
		return Outcome::Unchanged;
	};
	let Some(rule) = rules.find(value) else {
		return Outcome::Unchanged;
	};

	match &rule.replacement {
		Replacement::Replace(replacement) => {
			tracing::trace!(tag = node.tag(), attr, from = %rule.path, to = %replacement, "Rewrote attribute");
			node.set_attr(attr, replacement);
			Outcome::Rewritten
		}
		Replacement::Remove => {
			tracing::trace!(tag = node.tag(), attr, from = %rule.path, "Removed attribute");
			node.remove_attr(attr);
			Outcome::Removed
		}
	}
}
