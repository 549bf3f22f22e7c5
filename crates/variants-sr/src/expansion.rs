// Ambiguity expansion: substitute alternate spellings chunk by chunk
//
// A term is split into fixed-width chunks from position 0 (a stride split,
// not a sliding window). Every chunk that is a rule trigger yields one new
// candidate per replacement, with only that chunk substituted. Candidates
// found by a single-character scan are themselves re-scanned character by
// character, which is what lets ambiguous letters at different positions
// combine ("scena" -> "šcena" -> "šćena").

use crate::rules::replacements_for;
use crate::variant_set::VariantSet;

/// Chunk width used for one expansion scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One character per chunk; matches single-letter triggers.
    Single,
    /// Two characters per chunk; matches digraph triggers.
    Pair,
}

impl Granularity {
    /// Number of characters per chunk.
    pub fn chunk_len(self) -> usize {
        match self {
            Granularity::Single => 1,
            Granularity::Pair => 2,
        }
    }
}

/// Run one expansion scan of `term` and add every new candidate to
/// `variants`.
///
/// With [`Granularity::Single`], each candidate that was not already in the
/// set is immediately expanded again at single-character granularity before
/// the scan moves on.
pub fn expand(term: &str, granularity: Granularity, variants: &mut VariantSet) {
    let chars: Vec<char> = term.chars().collect();
    expand_chars(&chars, granularity, variants);
}

/// A term being scanned, with a cursor at the next (chunk, replacement) pair.
struct Scan {
    term: Vec<char>,
    chunk: usize,
    replacement: usize,
}

impl Scan {
    fn new(term: Vec<char>) -> Self {
        Scan {
            term,
            chunk: 0,
            replacement: 0,
        }
    }
}

fn expand_chars(term: &[char], granularity: Granularity, variants: &mut VariantSet) {
    let width = granularity.chunk_len();
    // Depth-first over new candidates; frames live on the heap.
    let mut stack = vec![Scan::new(term.to_vec())];
    while let Some(scan) = stack.last_mut() {
        let start = scan.chunk * width;
        if start >= scan.term.len() {
            stack.pop();
            continue;
        }
        let end = (start + width).min(scan.term.len());
        let Some(replacement) = replacements_for(&scan.term[start..end]).get(scan.replacement)
        else {
            scan.chunk += 1;
            scan.replacement = 0;
            continue;
        };
        scan.replacement += 1;

        let mut candidate = Vec::with_capacity(scan.term.len() + 1);
        candidate.extend_from_slice(&scan.term[..start]);
        candidate.extend(replacement.chars());
        candidate.extend_from_slice(&scan.term[end..]);

        let text: String = candidate.iter().collect();
        if variants.insert(text) && granularity == Granularity::Single {
            stack.push(Scan::new(candidate));
        }
    }
}

/// Expand every term currently in `variants`, first per character and then
/// per character pair.
///
/// Only the terms present when the call starts are scanned; terms discovered
/// during the call are added to the set but not visited by this round.
pub fn expand_all(variants: &mut VariantSet) {
    let snapshot = variants.len();
    for index in 0..snapshot {
        let term = variants.as_slice()[index].clone();
        expand(&term, Granularity::Single, variants);
        expand(&term, Granularity::Pair, variants);
    }
}
