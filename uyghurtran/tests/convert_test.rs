use std::thread;

use strum::IntoEnumIterator;
use uyghurtran::orthography::ORTHOGRAPHY_TABLE;
use uyghurtran::{convert, convert_between, transcribe, ConvertError, Orthography};

const SAMPLE: &str = "Yashliq bala, chong tagh! Üzüm, söz, jenggi; xush'";

#[test]
fn test_same_system_identity_up_to_case() {
    for system in Orthography::iter() {
        let converted = convert_between(SAMPLE, system, system).expect("convert");
        if system.is_case_sensitive() {
            assert_eq!(converted, SAMPLE, "{system}");
        } else {
            assert_eq!(converted, SAMPLE.to_lowercase(), "{system}");
        }
    }
}

#[test]
fn test_single_grapheme_converts_to_its_counterpart() {
    for source in Orthography::iter() {
        for target in Orthography::iter() {
            for (i, row) in ORTHOGRAPHY_TABLE.iter().enumerate() {
                let (Some(from), Some(to)) = (row.cell(source), row.cell(target)) else {
                    continue;
                };
                if from.is_empty() {
                    continue;
                }
                // only the first row with this source grapheme (and a
                // defined target) is reachable
                let shadowed = ORTHOGRAPHY_TABLE[..i].iter().any(|earlier| {
                    earlier.cell(source) == Some(from) && earlier.is_defined(target)
                });
                if shadowed {
                    continue;
                }
                assert_eq!(
                    convert_between(from, source, target).expect("convert"),
                    to,
                    "row {i}: {source} '{from}' -> {target}"
                );
            }
        }
    }
}

#[test]
fn test_unknown_source_and_target() {
    for bad in ["", "ipa", "Arabic", "UyLatin ", "Cyrillic"] {
        assert!(matches!(
            convert("bala", bad, "UyLatin"),
            Err(ConvertError::UnknownSystem(ref e)) if e.name == bad
        ));
        assert!(matches!(
            convert("bala", "UyLatin", bad),
            Err(ConvertError::UnknownSystem(ref e)) if e.name == bad
        ));
    }
}

#[test]
fn test_sentence_latin_to_cyrillic_and_arabic() {
    assert_eq!(
        convert("men üzüm yeymen", "UyLatin", "UyCyrillic").expect("convert"),
        "мен үзүм йеймен"
    );
    assert_eq!(
        convert("bala", "UyCyrillic", "UyLatin").expect("convert"),
        "bala"
    );
    assert_eq!(
        convert("бала", "UyCyrillic", "UyArabic").expect("convert"),
        "\u{0628}\u{0627}\u{0644}\u{0627}"
    );
}

#[test]
fn test_unmapped_text_passes_through() {
    assert_eq!(
        convert("123 ☺ - ", "UyLatin", "UyCyrillic").expect("convert"),
        "123 ☺ - "
    );
}

#[test]
fn test_private_use_characters_are_not_converted() {
    let text = "tagh \u{F0000}\u{F0003} \u{FFFFD}chong";
    for system in Orthography::iter() {
        let converted = convert_between(text, Orthography::UyLatin, system).expect("convert");
        for reserved in ['\u{F0000}', '\u{F0003}', '\u{FFFFD}'] {
            assert_eq!(
                converted.matches(reserved).count(),
                1,
                "UyLatin -> {system} lost {reserved:?}"
            );
        }
    }
    assert_eq!(
        convert_between(text, Orthography::UyLatin, Orthography::UyLatin).expect("convert"),
        text
    );
}

#[test]
fn test_malov_has_no_glottal_stop() {
    assert_eq!(
        convert("'", "UyLatin", "MalovLatin").expect("convert"),
        "'"
    );
}

#[test]
fn test_shared_across_threads() {
    let words = ["yashliq", "chong", "tagh", "üzüm", "söz", "kitab"];
    thread::scope(|scope| {
        let handles: Vec<_> = Orthography::iter()
            .map(|target| {
                scope.spawn(move || {
                    words
                        .iter()
                        .map(|w| convert_between(w, Orthography::UyLatin, target).expect("convert"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for (handle, target) in handles.into_iter().zip(Orthography::iter()) {
            let converted = handle.join().expect("thread panicked");
            let expected: Vec<String> = words
                .iter()
                .map(|w| convert_between(w, Orthography::UyLatin, target).expect("convert"))
                .collect();
            assert_eq!(converted, expected);
        }
    });
    let transcribed: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = words
            .iter()
            .map(|w| scope.spawn(move || transcribe(w)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });
    assert_eq!(transcribed[0], "jaʃliqʰ");
}
