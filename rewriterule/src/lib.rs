//! Ordered, table-driven string rewriting.
//!
//! A [`RewriteTable`] is an ordered list of literal `(pattern, replacement)`
//! rules. Applying a table runs one left-to-right, non-overlapping
//! replacement pass per rule, in table order, each pass seeing the output of
//! the one before it. Order is part of a table's identity: compound patterns
//! have to come before the shorter patterns they contain.

pub mod normalize;
pub mod rule;
pub mod tableparse;

pub use rule::{apply_all, ConfigurationError, RewriteRule, RewriteTable};
