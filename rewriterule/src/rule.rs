use std::borrow::Cow;

use log::trace;
use thiserror::Error;

/// Problems with the shape of a rewrite table.
///
/// These are detected when a table is built, never while it is applied.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("rule {position} of table '{table}' has an empty pattern")]
    EmptyPattern { table: String, position: usize },

    #[error("could not read rewrite table: {0}")]
    Csv(#[from] csv::Error),

    #[error("no private-use placeholder left for rule {0}")]
    Placeholder(usize),
}

/// A single literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pattern: Cow<'static, str>,
    replacement: Cow<'static, str>,
}

impl RewriteRule {
    /// Build a rule from static literals.
    ///
    /// Intended for `const` tables, where an empty pattern becomes a
    /// compile-time error.
    ///
    /// # Panics
    /// If `pattern` is empty.
    pub const fn fixed(pattern: &'static str, replacement: &'static str) -> Self {
        assert!(!pattern.is_empty(), "rewrite rule pattern must not be empty");
        Self {
            pattern: Cow::Borrowed(pattern),
            replacement: Cow::Borrowed(replacement),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping occurrence of the pattern, scanning left to right.
    pub fn apply(&self, text: &str) -> String {
        text.replace(&*self.pattern, &self.replacement)
    }
}

/// An ordered sequence of [`RewriteRule`]s forming one conversion phase.
#[derive(Debug, Clone)]
pub struct RewriteTable {
    name: Cow<'static, str>,
    rules: Cow<'static, [RewriteRule]>,
}

impl RewriteTable {
    /// Wrap a static rule slice. The rules were validated by [`RewriteRule::fixed`].
    pub const fn fixed(name: &'static str, rules: &'static [RewriteRule]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            rules: Cow::Borrowed(rules),
        }
    }

    /// Build a table from owned `(pattern, replacement)` pairs, kept in the
    /// order given.
    ///
    /// Fails with [`ConfigurationError::EmptyPattern`] (1-based position) if
    /// any pattern is empty.
    pub fn from_pairs<I, P, R>(name: impl Into<String>, pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let name = name.into();
        let mut rules = Vec::new();
        for (i, (pattern, replacement)) in pairs.into_iter().enumerate() {
            let pattern = pattern.into();
            if pattern.is_empty() {
                return Err(ConfigurationError::EmptyPattern {
                    table: name,
                    position: i + 1,
                });
            }
            rules.push(RewriteRule {
                pattern: Cow::Owned(pattern),
                replacement: Cow::Owned(replacement.into()),
            });
        }
        Ok(Self {
            name: Cow::Owned(name),
            rules: Cow::Owned(rules),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over the text in table order.
    ///
    /// Rule *n+1* sees the output of rule *n*. A rule with no match leaves
    /// the text alone.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in self.rules.iter() {
            if !current.contains(rule.pattern()) {
                continue;
            }
            let next = rule.apply(&current);
            trace!(
                "{}: {} -> {} rewrote '{}' as '{}'",
                self.name,
                rule.pattern(),
                rule.replacement(),
                current,
                next
            );
            current = next;
        }
        current
    }
}

/// Apply several tables one after another.
pub fn apply_all(tables: &[&RewriteTable], text: &str) -> String {
    tables
        .iter()
        .fold(text.to_string(), |acc, table| table.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SH_RULES: &[RewriteRule] = &[
        RewriteRule::fixed("sh", "ʃ"),
        RewriteRule::fixed("s", "z"),
        RewriteRule::fixed("h", "x"),
    ];

    static SH_TABLE: RewriteTable = RewriteTable::fixed("sh", SH_RULES);

    #[test]
    fn test_fixed_table_applies_in_order() {
        assert_eq!(SH_TABLE.apply("shash"), "ʃaʃ");
        assert_eq!(SH_TABLE.apply("shas"), "ʃaz");
        assert_eq!(SH_TABLE.apply("hash"), "xaʃ");
        assert_eq!(SH_TABLE.len(), 3);
        assert_eq!(SH_TABLE.name(), "sh");
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let table = RewriteTable::from_pairs("chain", [("a", "b"), ("b", "c")])
            .expect("Failed to build table in test");
        assert_eq!(table.apply("ab"), "cc");
    }

    #[test]
    fn test_compound_pattern_must_come_first() {
        let digraph_first = RewriteTable::from_pairs("ok", [("sh", "ʃ"), ("s", "z"), ("h", "x")])
            .expect("Failed to build table in test");
        let components_first =
            RewriteTable::from_pairs("bad", [("s", "z"), ("h", "x"), ("sh", "ʃ")])
                .expect("Failed to build table in test");
        assert_eq!(digraph_first.apply("sh"), "ʃ");
        assert_eq!(components_first.apply("sh"), "zx");
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let table = RewriteTable::from_pairs("aa", [("aa", "b")])
            .expect("Failed to build table in test");
        assert_eq!(table.apply("aaa"), "ba");
    }

    #[test]
    fn test_no_match_is_noop() {
        assert_eq!(SH_TABLE.apply("qqq"), "qqq");
        assert_eq!(SH_TABLE.apply(""), "");
    }

    #[test]
    fn test_empty_replacement_deletes() {
        let table = RewriteTable::from_pairs("del", [("x", "")])
            .expect("Failed to build table in test");
        assert_eq!(table.apply("axbx"), "ab");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = RewriteTable::from_pairs("broken", [("a", "b"), ("", "c")]).unwrap_err();
        match err {
            ConfigurationError::EmptyPattern { table, position } => {
                assert_eq!(table, "broken");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_fixed_rule_rejects_empty_pattern() {
        let pattern = String::new().leak();
        let _ = RewriteRule::fixed(pattern, "x");
    }

    #[test]
    fn test_apply_all() {
        let first = RewriteTable::from_pairs("first", [("a", "b")]).expect("table");
        let second = RewriteTable::from_pairs("second", [("b", "c")]).expect("table");
        assert_eq!(apply_all(&[&first, &second], "ab"), "cc");
        assert_eq!(apply_all(&[&second, &first], "ab"), "bc");
    }
}
