//! Uyghur transcription and transliteration
//!
//! - [`transcribe`]: Latin-orthography Uyghur words to broad IPA
//! - [`convert`]: text between any two of nine Uyghur orthographies
//! - [`wordlist`] and [`lexicon`]: the line-oriented file formats around them

pub mod convert;
pub mod lexicon;
pub mod orthography;
pub mod transcribe;
pub mod wordlist;

pub use convert::{convert, convert_between, ConvertError, Converter};
pub use orthography::{Orthography, UnknownSystemError};
pub use transcribe::transcribe;
