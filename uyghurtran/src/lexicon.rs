//! Lexicon rows and dictionary glosses.
//!
//! Input rows look like `48,生气，发怒`: an index, a comma, and a cell with
//! one or more terms. Output rows look like
//! `48;angry (生气), (literary) to become angry (发怒), `. Fetching glosses
//! from a dictionary is left to a [`GlossSource`]; this module only splits
//! rows into searchable terms, tidies raw glosses, and renders the result.

use std::collections::HashMap;
use std::io::{self, BufRead};

use csv::Reader;
use itertools::Itertools;
use nom::{
    character::complete::{char, digit1, space0},
    combinator::{map_res, rest},
    sequence::{delimited, separated_pair},
    IResult,
};
use serde::Deserialize;
use thiserror::Error;

/// Characters that separate terms inside a lexicon cell.
const TERM_SEPARATORS: &[char] = &['；', '，', '（', '）', ';', ',', '(', ')', '"', '\''];

/// Prefixes dictionaries put in front of a definition that carry no meaning here.
const LEVEL_PREFIXES: &[&str] = &[
    "(Advanced Mandarin) ",
    "(Elementary Mandarin) ",
    "(Beginning Mandarin) ",
];

const OBSOLETE_MARK: &str = "† ";

const DEFINITION_STUB: &str = "This entry needs a definition. Please add one, then remove";

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("could not read lexicon: {0}")]
    Io(#[from] io::Error),

    #[error("could not read glosses: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconRow {
    pub index: usize,
    pub cell: String,
}

fn index_and_cell(input: &str) -> IResult<&str, (usize, &str)> {
    separated_pair(
        map_res(delimited(space0, digit1, space0), str::parse::<usize>),
        char(','),
        rest,
    )(input)
}

impl LexiconRow {
    /// Parse one line. Header lines (starting with `Index`) give `None`.
    ///
    /// A line without a numeric index becomes index 0 with an empty cell.
    pub fn parse(line: &str) -> Option<Self> {
        if line.starts_with("Index") {
            return None;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let (index, cell) = match index_and_cell(line) {
            Ok((_, (index, cell))) => (index, cell.to_string()),
            Err(_) => (0, String::new()),
        };
        Some(Self { index, cell })
    }

    /// Terms to look up, most specific first: the whole cell, the cell with
    /// separators turned into spaces, then each separate term. Duplicates
    /// and empty strings are dropped.
    pub fn searchable(&self) -> Vec<String> {
        let stripped: String = self
            .cell
            .chars()
            .map(|c| if TERM_SEPARATORS.contains(&c) { ' ' } else { c })
            .collect();
        let tokens: Vec<String> = stripped
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        std::iter::once(self.cell.clone())
            .chain(std::iter::once(stripped))
            .chain(tokens)
            .filter(|term| !term.trim().is_empty())
            .unique()
            .collect()
    }
}

/// Read every non-header row of a lexicon.
pub fn read_lexicon<R: BufRead>(reader: R) -> Result<Vec<LexiconRow>, LexiconError> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        if let Some(row) = LexiconRow::parse(&line?) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Something that can give the first dictionary definition of a term.
pub trait GlossSource {
    fn first_definition(&self, term: &str) -> Option<String>;
}

/// Glosses held in memory, e.g. from an earlier scrape.
#[derive(Debug, Default, Clone)]
pub struct StaticGlosses {
    glosses: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct GlossRecord {
    term: String,
    gloss: String,
}

impl StaticGlosses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: impl Into<String>, gloss: impl Into<String>) {
        self.glosses.insert(term.into(), gloss.into());
    }

    /// Load CSV data with the headers `term` and `gloss`. Later rows replace
    /// earlier ones for the same term.
    pub fn from_csv(data: &str) -> Result<Self, LexiconError> {
        let mut glosses = Self::new();
        let mut reader = Reader::from_reader(data.as_bytes());
        for result in reader.deserialize() {
            let record: GlossRecord = result?;
            glosses.insert(record.term, record.gloss);
        }
        Ok(glosses)
    }

    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }
}

impl GlossSource for StaticGlosses {
    fn first_definition(&self, term: &str) -> Option<String> {
        self.glosses.get(term).cloned()
    }
}

/// Tidy a raw definition for output, or `None` if there is nothing usable.
///
/// Only the first line is kept, `;` becomes `,`, learner-level prefixes are
/// removed and a leading `† ` becomes a trailing ` [obsolete]`.
pub fn clean_gloss(raw: &str) -> Option<String> {
    let mut gloss = raw.lines().next().unwrap_or("").replace(';', ",");
    for prefix in LEVEL_PREFIXES {
        if let Some(rest) = gloss.strip_prefix(prefix) {
            gloss = rest.to_string();
        }
    }
    if let Some(rest) = gloss.strip_prefix(OBSOLETE_MARK) {
        gloss = format!("{rest} [obsolete]");
    }
    if gloss.is_empty() || gloss.starts_with(DEFINITION_STUB) {
        None
    } else {
        Some(gloss)
    }
}

/// Render `<index>;<gloss> (<term>), ...` for a row.
pub fn gloss_row<S: GlossSource + ?Sized>(row: &LexiconRow, source: &S) -> String {
    let mut line = format!("{};", row.index);
    for term in row.searchable() {
        if let Some(gloss) = source.first_definition(&term).as_deref().and_then(clean_gloss) {
            line.push_str(&format!("{gloss} ({term}), "));
        }
    }
    line
}
