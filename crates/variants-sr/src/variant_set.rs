// Insertion-ordered, deduplicated set of spelling variants

use std::slice;

use hashbrown::HashSet;

/// The set of variants generated for one term.
///
/// Terms are kept in the order they were discovered, starting with the
/// original term, so output is deterministic. Equality is exact text
/// equality; no normalization is applied.
#[derive(Debug, Clone)]
pub struct VariantSet {
    /// Variants in discovery order. `terms[0]` is the original term.
    terms: Vec<String>,
    /// Set of already-seen terms for deduplication.
    seen: HashSet<String>,
}

impl VariantSet {
    /// Create a set containing only `original`.
    pub fn new(original: &str) -> Self {
        let mut seen = HashSet::new();
        seen.insert(original.to_string());
        Self {
            terms: vec![original.to_string()],
            seen,
        }
    }

    /// Add a term. Returns `false` (and drops the term) if it is already
    /// present.
    pub fn insert(&mut self, term: String) -> bool {
        if !self.seen.insert(term.clone()) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Add every term from `terms`, returning how many were new.
    pub fn merge<I>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for term in terms {
            if self.insert(term) {
                added += 1;
            }
        }
        added
    }

    /// Return the term the set was created for.
    pub fn original(&self) -> &str {
        &self.terms[0]
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    /// Return the number of variants, the original included.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false`: the original term is a member.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.terms.iter()
    }

    /// Return the variants in discovery order.
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Consume the set and return the variants in discovery order.
    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
