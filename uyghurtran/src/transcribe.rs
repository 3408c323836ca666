//! Broad IPA transcription of Uyghur words written in the Latin orthography.
//!
//! [`PASSES`] runs in order: [`DIGRAPHS`], [`SINGLES`], [`Y_SWAP`],
//! [`U_SWAP`], [`ASPIRATION_BLOCKING`].

use rewriterule::normalize::nfc_normalize;
use rewriterule::{apply_all, RewriteRule, RewriteTable};

/// The aspiration marker introduced by the digraph pass.
pub const ASPIRATION: &str = "ʰ";

/// The marker written at sentence punctuation.
pub const PHRASE_BOUNDARY: &str = " | ";

const DIGRAPH_RULES: &[RewriteRule] = &[
    RewriteRule::fixed("ch", "ʧʰ"),
    RewriteRule::fixed("gh", "ɣ"),
    RewriteRule::fixed("ng", "ŋ"),
    RewriteRule::fixed("sh", "ʃ"),
    RewriteRule::fixed("zh", "ʒ"),
    RewriteRule::fixed("p", "pʰ"),
    RewriteRule::fixed("t", "tʰ"),
    RewriteRule::fixed("q", "qʰ"),
    RewriteRule::fixed("k", "kʰ"),
    RewriteRule::fixed(",", PHRASE_BOUNDARY),
    RewriteRule::fixed(".", PHRASE_BOUNDARY),
    RewriteRule::fixed(":", PHRASE_BOUNDARY),
    RewriteRule::fixed(";", PHRASE_BOUNDARY),
    RewriteRule::fixed("?", PHRASE_BOUNDARY),
    RewriteRule::fixed("!", PHRASE_BOUNDARY),
];

// `e` before `é`: the output of `é → e` must not become `ɛ`.
const SINGLE_RULES: &[RewriteRule] = &[
    RewriteRule::fixed("e", "ɛ"),
    RewriteRule::fixed("é", "e"),
    RewriteRule::fixed("x", "χ"),
    RewriteRule::fixed("j", "ʤ"),
    RewriteRule::fixed("ö", "ø"),
    RewriteRule::fixed("‘", "ˀ"),
    RewriteRule::fixed("'", "ˀ"),
];

const Y_RULES: &[RewriteRule] = &[RewriteRule::fixed("y", "j")];

const U_RULES: &[RewriteRule] = &[RewriteRule::fixed("ü", "y")];

macro_rules! unaspirated_before {
    ($($consonant:literal),+ $(,)?) => {
        &[$(RewriteRule::fixed(concat!("ʰ", $consonant), $consonant)),+]
    };
}

const ASPIRATION_RULES: &[RewriteRule] = unaspirated_before!(
    "b", "d", "g", "ɣ", "h", "χ", "ʤ", "k", "q", "l", "ɫ", "m", "n", "ŋ", "p", "r", "s", "ʃ",
    "t", "ʧ", "w", "j", "z", "ʒ",
);

pub static DIGRAPHS: RewriteTable = RewriteTable::fixed("digraphs", DIGRAPH_RULES);
pub static SINGLES: RewriteTable = RewriteTable::fixed("singles", SINGLE_RULES);
pub static Y_SWAP: RewriteTable = RewriteTable::fixed("y swap", Y_RULES);
pub static U_SWAP: RewriteTable = RewriteTable::fixed("ü swap", U_RULES);
pub static ASPIRATION_BLOCKING: RewriteTable =
    RewriteTable::fixed("aspiration blocking", ASPIRATION_RULES);

/// All transcription passes, in the order they run.
pub static PASSES: [&RewriteTable; 5] = [
    &DIGRAPHS,
    &SINGLES,
    &Y_SWAP,
    &U_SWAP,
    &ASPIRATION_BLOCKING,
];

/// Consonants in front of which aspiration is blocked.
pub fn blocking_consonants() -> impl Iterator<Item = &'static str> {
    ASPIRATION_BLOCKING.rules().iter().map(|rule| rule.replacement())
}

/// Return the broad IPA transcription of a Uyghur word in Latin orthography.
///
/// Characters without a rule pass through unchanged.
///
/// # Example
/// ```
/// use uyghurtran::transcribe::transcribe;
///
/// assert_eq!(transcribe("yashliq"), "jaʃliqʰ");
/// assert_eq!(transcribe("zeple-"), "zɛplɛ-");
/// ```
pub fn transcribe(word: &str) -> String {
    apply_all(&PASSES, &nfc_normalize(word))
}
