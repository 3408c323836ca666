//! Conversion between the registered orthographies
//!
//! A (source, target) pair is compiled on first use into two rewrite
//! tables: *encode* turns source graphemes into private-use placeholders,
//! longest first, and *decode* turns placeholders into target graphemes.
//! Private-use characters already in the input are copied through.

use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, trace};
use once_cell::sync::OnceCell;
use rewriterule::normalize::nfc_normalize;
use rewriterule::{ConfigurationError, RewriteTable};
use strum::EnumCount;
use thiserror::Error;

use crate::orthography::{Orthography, UnknownSystemError, ORTHOGRAPHY_TABLE};

/// Start of Supplementary Private Use Area-A; placeholders count up from here.
const PLACEHOLDER_BASE: u32 = 0xF_0000;
const PLACEHOLDER_LAST: u32 = 0xF_FFFD;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    UnknownSystem(#[from] UnknownSystemError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Compiled rewrite tables for one (source, target) pair.
#[derive(Debug, Clone)]
pub struct Converter {
    source: Orthography,
    target: Orthography,
    pairs: Vec<(&'static str, &'static str)>,
    encode: RewriteTable,
    decode: RewriteTable,
}

static CONVERTERS: [OnceCell<Converter>; Orthography::COUNT * Orthography::COUNT] =
    [const { OnceCell::new() }; Orthography::COUNT * Orthography::COUNT];

impl Converter {
    /// Compile the correspondence rows for `source` → `target`.
    ///
    /// Rows where either cell is undefined are left out, so an undefined
    /// form never turns into a deletion. An empty source grapheme can't be
    /// matched and is left out too. When several rows share a source
    /// grapheme, the first one wins.
    pub fn compile(source: Orthography, target: Orthography) -> Result<Self, ConfigurationError> {
        let mut pairs: Vec<(&'static str, &'static str)> = ORTHOGRAPHY_TABLE
            .iter()
            .filter_map(|row| Some((row.cell(source)?, row.cell(target)?)))
            .filter(|(from, _)| !from.is_empty())
            .unique_by(|(from, _)| *from)
            .collect();
        pairs.sort_by_key(|(from, _)| Reverse(from.chars().count()));

        let mut encode = Vec::with_capacity(pairs.len());
        let mut decode = Vec::with_capacity(pairs.len());
        for (i, (from, to)) in pairs.iter().enumerate() {
            let mark = placeholder(i)?.to_string();
            encode.push((*from, mark.clone()));
            decode.push((mark, *to));
        }

        debug!(
            "compiled {} correspondences for {} -> {}",
            pairs.len(),
            source,
            target
        );
        Ok(Self {
            source,
            target,
            pairs,
            encode: RewriteTable::from_pairs(format!("{source} encode"), encode)?,
            decode: RewriteTable::from_pairs(format!("{target} decode"), decode)?,
        })
    }

    /// The cached converter for a pair, compiled on first use.
    pub fn between(source: Orthography, target: Orthography) -> Result<&'static Self, ConfigurationError> {
        let slot = &CONVERTERS[source.column() * Orthography::COUNT + target.column()];
        slot.get_or_try_init(|| Self::compile(source, target))
    }

    pub fn source(&self) -> Orthography {
        self.source
    }

    pub fn target(&self) -> Orthography {
        self.target
    }

    /// The `(source grapheme, target grapheme)` pairs in application order.
    pub fn pairs(&self) -> &[(&'static str, &'static str)] {
        &self.pairs
    }

    /// Rewrite `text` from the source into the target system.
    ///
    /// Text is lower-cased first when the target has no case distinction.
    /// Case is not mapped per character between case-sensitive systems.
    /// Anything without a correspondence passes through unchanged.
    pub fn convert(&self, text: &str) -> String {
        let text = if self.target.is_case_sensitive() {
            nfc_normalize(text)
        } else {
            nfc_normalize(&text.to_lowercase())
        };
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (start, reserved) in text.match_indices(is_placeholder) {
            trace!("copying private-use character at byte {start}");
            out.push_str(&self.rewrite(&text[last..start]));
            out.push_str(reserved);
            last = start + reserved.len();
        }
        out.push_str(&self.rewrite(&text[last..]));
        out
    }

    /// Rewrite a stretch of text that holds no private-use characters.
    fn rewrite(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.decode.apply(&self.encode.apply(text))
    }
}

fn placeholder(index: usize) -> Result<char, ConfigurationError> {
    u32::try_from(index)
        .ok()
        .and_then(|i| PLACEHOLDER_BASE.checked_add(i))
        .filter(|code| *code <= PLACEHOLDER_LAST)
        .and_then(char::from_u32)
        .ok_or(ConfigurationError::Placeholder(index))
}

fn is_placeholder(c: char) -> bool {
    (PLACEHOLDER_BASE..=PLACEHOLDER_LAST).contains(&(c as u32))
}

/// Convert `text` between two systems given by their registered names.
///
/// # Example
/// ```
/// use uyghurtran::convert::convert;
///
/// let cyrillic = convert("yashliq", "UyLatin", "UyCyrillic").expect("registered names");
/// assert_eq!(cyrillic, "йашлик");
/// assert!(convert("yashliq", "UyLatin", "Klingon").is_err());
/// ```
pub fn convert(text: &str, source: &str, target: &str) -> Result<String, ConvertError> {
    let source: Orthography = source.parse()?;
    let target: Orthography = target.parse()?;
    convert_between(text, source, target)
}

/// Typed form of [`convert`].
pub fn convert_between(
    text: &str,
    source: Orthography,
    target: Orthography,
) -> Result<String, ConvertError> {
    Ok(Converter::between(source, target)?.convert(text))
}
