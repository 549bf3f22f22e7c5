//! Behavioral properties of the variant generator.

use std::collections::HashSet;

use variants_core::script::{to_cyrillic, to_latin};
use variants_sr::{VariantGenerator, generate};

/// Words covering plain Latin, Cyrillic, digraphs, mixed script and
/// characters outside both tables.
const WORDS: &[&str] = &[
    "cena", "scena", "zec", "žec", "dj", "đ", "Đorđe", "čačak", "ćevapčići", "kuća", "Niš",
    "shishanje", "chokolada", "Ljubav", "Njegoš", "džem", "цена", "шишање", "Љубав",
    "ме\u{0161}ано", "hello", "123", "", "a-b c",
];

fn set_of(term: &str) -> HashSet<String> {
    generate(term).into_iter().collect()
}

// ---------------------------------------------------------------------------
// Set invariants
// ---------------------------------------------------------------------------

#[test]
fn input_is_always_included() {
    for &word in WORDS {
        let variants = generate(word);
        assert!(variants.contains(word), "{word:?} not in its own variants");
        assert_eq!(variants.original(), word);
    }
}

#[test]
fn no_duplicates() {
    for &word in WORDS {
        let variants = generate(word);
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len(), "duplicates for {word:?}");
    }
}

#[test]
fn generation_is_deterministic() {
    for &word in WORDS {
        assert_eq!(generate(word).into_vec(), generate(word).into_vec());
    }
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = &VariantGenerator::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = WORDS
            .iter()
            .map(|&word| scope.spawn(move || (word, generator.generate(word).into_vec())))
            .collect();
        for handle in handles {
            let (word, variants) = handle.join().unwrap();
            assert_eq!(variants, generate(word).into_vec());
        }
    });
}

#[test]
fn long_ambiguous_words_do_not_exhaust_the_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| generate("cccccccc").len())
        .unwrap();
    assert_eq!(handle.join().unwrap(), 17_514);
}

// ---------------------------------------------------------------------------
// Script conversion
// ---------------------------------------------------------------------------

#[test]
fn latin_round_trips_through_cyrillic() {
    for word in [
        "cena", "Ljubav", "ljiljan", "Njegoš", "džem", "Džamija", "Đorđe", "ćevapčići", "ČAČAK",
    ] {
        assert_eq!(to_latin(&to_cyrillic(word)), word);
    }
}

#[test]
fn every_latin_variant_has_its_cyrillic_form() {
    for &word in WORDS {
        let variants = generate(word);
        for variant in &variants {
            let cyrillic = to_cyrillic(variant);
            assert!(
                variants.contains(&cyrillic),
                "{word:?}: {variant:?} has no Cyrillic form {cyrillic:?}"
            );
        }
    }
}

#[test]
fn uppercase_letters_are_only_transliterated() {
    assert_eq!(generate("Cena").as_slice(), ["Cena", "Цена"]);
    assert_eq!(generate("ČAČAK").as_slice(), ["ČAČAK", "ЧАЧАК"]);
}

// ---------------------------------------------------------------------------
// Ambiguity expansion
// ---------------------------------------------------------------------------

#[test]
fn cena_scenario() {
    let variants = set_of("cena");
    for expected in ["cena", "ćena", "čena", "цена", "ћена", "чена"] {
        assert!(variants.contains(expected), "missing {expected}");
    }
    assert_eq!(variants.len(), 6);
}

#[test]
fn simple_substitutions_are_symmetric() {
    assert!(set_of("zec").contains("žec"));
    assert!(set_of("žec").contains("zec"));
    assert!(set_of("sto").contains("što"));
    assert!(set_of("što").contains("sto"));
    assert!(set_of("kuca").contains("kuća"));
    assert!(set_of("kuća").contains("kuca"));
}

#[test]
fn ambiguous_letters_compound() {
    let variants = set_of("scena");
    for expected in ["šcena", "sćena", "sčena", "šćena", "ščena"] {
        assert!(variants.contains(expected), "missing {expected}");
    }
    // Three ambiguous letters: 3 * 3 * 3 Latin spellings, each also in Cyrillic.
    assert_eq!(generate("ćevapčići").len(), 54);
}

#[test]
fn digraphs_and_letters_reach_each_other() {
    assert!(set_of("dj").contains("đ"));
    assert!(set_of("đ").contains("dj"));
    assert!(set_of("chokolada").contains("čokolada"));
    assert!(set_of("chokolada").contains("ćokolada"));
    assert!(set_of("zhurka").contains("žurka"));
    assert!(set_of("cyevap").contains("ćevap"));
}

// ---------------------------------------------------------------------------
// Bounded expansion
// ---------------------------------------------------------------------------

#[test]
fn single_letter_ambiguity_is_closed() {
    for word in ["cena", "zec", "scena", "čačak", "ćevapčići", "kuća", "Đorđe"] {
        let variants = set_of(word);
        for member in &variants {
            let again = set_of(member);
            assert!(
                again.is_subset(&variants),
                "{word:?}: variants of {member:?} escape the set"
            );
        }
    }
}

#[test]
fn digraph_heavy_words_are_not_closed() {
    // Two rounds stop before every combination is reached: regenerating from
    // a member finds spellings the original call did not.
    let variants = set_of("shishanje");
    assert!(variants.contains("šishanje"));
    assert!(!variants.contains("šisanje"));
    let again = set_of("šishanje");
    assert!(again.contains("šisanje"));
    assert!(again.contains("сисање"));
}
