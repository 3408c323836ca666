//! Newline-delimited word lists in, `<original>;<transcription>` records out.

use std::io::{BufRead, Write};

use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;

use crate::transcribe::transcribe;

/// One transcribed entry of a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscribedEntry {
    pub original: String,
    pub transcription: String,
}

impl TranscribedEntry {
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            transcription: transcribe(original),
        }
    }
}

/// Split a line into entries.
///
/// Entries are separated by any whitespace except the plain space, so a
/// multi-word entry such as `ish qil-` stays together. Surrounding spaces
/// are trimmed and empty entries dropped.
///
/// ```
/// use uyghurtran::wordlist::entries;
///
/// assert_eq!(entries("ish qil-\tbala"), vec!["ish qil-", "bala"]);
/// ```
pub fn entries(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() && c != ' ')
        .map(|entry| entry.trim_matches(' '))
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Transcribe every entry of a line.
pub fn transcribe_line(line: &str) -> Vec<TranscribedEntry> {
    entries(line).into_iter().map(TranscribedEntry::new).collect()
}

/// Read a word list and write one `;`-delimited record per entry.
///
/// Returns the number of records written.
pub fn transcribe_lines<R: BufRead, W: Write>(reader: R, writer: W) -> csv::Result<usize> {
    let mut out = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);
    let mut count = 0;
    for line in reader.lines() {
        for entry in transcribe_line(&line?) {
            out.serialize(&entry)?;
            count += 1;
        }
    }
    out.flush()?;
    Ok(count)
}
