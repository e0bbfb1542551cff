//! Path rule compilation and attribute rewriting.
//!
//! This module handles:
//! - Turning a path map into ordered, slash-agnostic matchers
//! - Rewriting or removing a single attribute with the first matching rule

pub mod matcher;
pub mod rewriter;

pub use matcher::{PathRule, Replacement, RuleSet};
pub use rewriter::{Outcome, rewrite_attribute};
