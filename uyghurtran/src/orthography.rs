//! The nine registered Uyghur writing systems and the grapheme
//! correspondences between them.

use std::fmt;
use std::str::FromStr;

use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// An orthography name that is not one of the registered systems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown orthography '{name}' (expected one of: {})", Orthography::names().join(", "))]
pub struct UnknownSystemError {
    pub name: String,
}

/// A registered writing system. The declaration order is the column order
/// of [`ORTHOGRAPHY_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
pub enum Orthography {
    #[strum(serialize = "IPA")]
    Ipa,
    UyArabic,
    UyLatin,
    UyCyrillic,
    ChineseLatin,
    MengesLatin,
    JarringLatin,
    JarringArabic,
    MalovLatin,
}

impl Orthography {
    /// Column of this system in a [`Correspondence`] row.
    pub fn column(self) -> usize {
        self as usize
    }

    /// The selector name, e.g. `UyLatin`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the script distinguishes upper and lower case.
    pub fn is_case_sensitive(self) -> bool {
        !matches!(
            self,
            Orthography::Ipa | Orthography::UyArabic | Orthography::JarringArabic
        )
    }

    pub fn names() -> Vec<&'static str> {
        Orthography::iter().map(Orthography::name).collect()
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orthography {
    type Err = UnknownSystemError;

    /// Exact, case-sensitive match against the registered names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orthography::iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| UnknownSystemError {
                name: s.to_string(),
            })
    }
}

/// One phoneme's written form in every registered system. `None` means the
/// system has no attested form for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correspondence(pub [Option<&'static str>; Orthography::COUNT]);

impl Correspondence {
    pub fn cell(&self, system: Orthography) -> Option<&'static str> {
        self.0[system.column()]
    }

    pub fn is_defined(&self, system: Orthography) -> bool {
        self.cell(system).is_some()
    }
}

macro_rules! cell {
    (_) => {
        None
    };
    ($grapheme:literal) => {
        Some($grapheme)
    };
}

macro_rules! row {
    ($($cell:tt),+ $(,)?) => {
        Correspondence([$(cell!($cell)),+])
    };
}

/// Grapheme correspondences, one row per phoneme. Columns follow
/// [`Orthography`]: IPA, UyArabic, UyLatin, UyCyrillic, ChineseLatin,
/// MengesLatin, JarringLatin, JarringArabic, MalovLatin. `_` is undefined.
pub static ORTHOGRAPHY_TABLE: &[Correspondence] = &[
    row!("a", "\u{0627}", "a", "а", "a", "a", "a", _, "а"),
    row!("ɑ", "\u{0627}", "a", "а", "a", "á", "a", _, _),
    row!("aː", "\u{0627}", "a", "а", "a", "ā", "aː", "\u{0627}", _),
    row!("ɛ", "\u{06D5}", "e", "е", "e", "ä", "ɛ", "\u{06D5}", "ӓ"),
    row!("æ", "\u{06D5}", "e", "е", "e", "ä", "æ", "\u{06D5}", _),
    row!("b", "\u{0628}", "b", "б", "b", "b", "b", "\u{0628}", "б"),
    row!("d", "\u{062F}", "d", "д", "d", "d", "d", "\u{062F}", "д"),
    row!("e", "\u{06D0}", "ë", "е", "e", "e", "e", _, "е"),
    row!("f", "\u{0641}", "f", "ф", "f", "f", "f", "\u{0641}", _),
    row!("ɡ", "\u{06AF}", "g", "г", "g", "g", "g", "\u{06AF}", "г"),
    row!("ɣ", "\u{063A}", "gh", "ғ", "ƣ", "ɣ", "ɣ", "\u{063A}", "ҕ"),
    row!("h", "\u{0647}", "h", "һ", "ħ", "h", "h", "\u{0647}", _),
    row!("χ", "\u{062E}", "x", "х", "h", "x", "χ", "\u{062E}", "х"),
    row!("i", "\u{0649}", "i", "и", "i", "i", "i", "\u{0649}", "i"),
    row!("ɨ", "\u{0649}", "i", "и", "i", "i", "ï", "\u{0649}", "ы"),
    row!("dʒ", "\u{062C}", "j", "ж", "j", "dž", "dʒ", "\u{062C}", "з"),
    row!("kʰ", "\u{0643}", "k", "k", "k", "k", "k", "\u{0643}", "k"),
    row!("qʰ", "\u{0642}", "q", "к", "ḳ", "q", "q", "\u{0642}", "к"),
    row!("l", "\u{0644}", "l", "л", "l", "l", "l", "\u{0644}", "л"),
    row!("ł", "\u{0644}", "l", "л", "l", "ł", "l", "\u{0644}", "l"),
    row!("m", "\u{0645}", "m", "м", "m", "m", "m", "\u{0645}", "м"),
    row!("n", "\u{0646}", "n", "н", "n", "n", "n", "\u{0646}", "н"),
    row!("ŋ", "\u{06AD}", "ng", "ң", "ng", "ñ", "ŋ", "\u{06AD}", "ң"),
    row!("o", "\u{0648}", "o", "о", "o", "o", "o", "\u{0648}", "о"),
    row!("ø", "\u{06C6}", "ö", "ө", "ɵ", "ö", "ö", "\u{0648}", "ӧ"),
    row!("pʰ", "\u{067E}", "p", "п", "p", "p", "p", "\u{067E}", "п"),
    row!("r", "\u{0631}", "r", "р", "r", "r", "r", "\u{0631}", "р"),
    row!("s", "\u{0633}", "s", "с", "s", "s", "s", "\u{0633}", "с"),
    row!("ʃ", "\u{0634}", "sh", "ш", "x", "š", "š", "\u{0634}", "ш"),
    row!("tʰ", "\u{062A}", "t", "т", "t", "t", "t", "\u{062A}", "т"),
    row!("tʃʰ", "\u{0686}", "ch", "ч", "q", "č", "č", "\u{0686}", "ч"),
    row!("u", "\u{06C7}", "u", "у", "u", "u", "u", "\u{0648}", "у"),
    row!("ɯ", "\u{06C7}", "u", "у", "u", "ŏ", "ɯ", "\u{0648}", _),
    row!("ʏ", "\u{06C7}", "u", "у", "u", "ů", "ů", "\u{0648}", _),
    row!("y", "\u{06C8}", "ü", "ү", "ü", "ü", "ů", "\u{06C8}", _),
    row!("yː", "\u{06C8}", "ü", "ү", "ü", "ṻ", "ůː", "\u{06C8}", "ӱ"),
    row!("ŭ", "\u{06C7}", "u", "у", "u", "u", "ŭ", "\u{06C8}", _),
    row!("w", "\u{06CB}", "w", "в", "w", "w", "v", "\u{06CB}", "в"),
    row!("j", "\u{064A}", "y", "й", "y", "j", "j", _, "ĭ"),
    row!("z", "\u{0632}", "z", "з", "z", "z", "z", "\u{0632}", "z"),
    row!("ʒ", "\u{0698}", "zh", "ж", "zh", "ž", _, _, "з"),
    row!("ʔ", "\u{0621}", "'", _, "'", "'", "'", _, _),
    row!(_, "\u{0626}", "", _, _, _, _, _, _),
    row!(_, "\u{06BE}", "h", _, _, _, _, _, _),
];
