use csv::Reader;
use serde::Deserialize;

use crate::normalize::nfc_normalize;
use crate::rule::{ConfigurationError, RewriteTable};

#[derive(Debug, Deserialize, PartialEq)]
struct Rule {
    pattern: String,
    replacement: String,
}

/// Read a rewrite table from CSV data with the headers `pattern` and
/// `replacement`.
///
/// Rows keep their file order. Both columns are NFC-normalized. An empty
/// pattern is reported with its 1-based row number.
pub fn parse_table(name: &str, data: &str) -> Result<RewriteTable, ConfigurationError> {
    let mut reader = Reader::from_reader(data.as_bytes());
    let mut pairs = Vec::new();
    for result in reader.deserialize() {
        let record: Rule = result?;
        pairs.push((
            nfc_normalize(&record.pattern),
            nfc_normalize(&record.replacement),
        ));
    }
    RewriteTable::from_pairs(name, pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let data = "pattern,replacement\nsh,ʃ\ns,z\nx,\n";
        let table = parse_table("demo", data).expect("Failed to parse table in test");
        assert_eq!(table.name(), "demo");
        let pairs: Vec<(&str, &str)> = table
            .rules()
            .iter()
            .map(|r| (r.pattern(), r.replacement()))
            .collect();
        assert_eq!(pairs, vec![("sh", "ʃ"), ("s", "z"), ("x", "")]);
        assert_eq!(table.apply("shasx"), "ʃaz");
    }

    #[test]
    fn test_parse_table_normalizes() {
        let data = "pattern,replacement\ne\u{0301},e\n";
        let table = parse_table("nfc", data).expect("Failed to parse table in test");
        assert_eq!(table.rules()[0].pattern(), "é");
    }

    #[test]
    fn test_parse_table_empty_pattern() {
        let data = "pattern,replacement\na,b\n,c\n";
        match parse_table("bad", data) {
            Err(ConfigurationError::EmptyPattern { table, position }) => {
                assert_eq!(table, "bad");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_missing_column() {
        let data = "pattern\na\n";
        assert!(matches!(
            parse_table("short", data),
            Err(ConfigurationError::Csv(_))
        ));
    }

    #[test]
    fn test_parse_table_headers_only() {
        let table = parse_table("empty", "pattern,replacement\n").expect("Failed to parse table");
        assert!(table.is_empty());
        assert_eq!(table.apply("abc"), "abc");
    }
}
