//! Orthographic variant generation for Serbian words.
//!
//! A Serbian word can be written in Latin or Cyrillic, and Latin text is
//! often typed without diacritics ("cevapcici", "chevapchichi" for
//! "ćevapčići"). Given one spelling, this crate produces the set of spellings
//! a reader would treat as the same word, so that a search index or matcher
//! can treat them as equivalent.
//!
//! ```
//! let variants = variants_sr::generate("cena");
//! assert!(variants.contains("čena"));
//! assert!(variants.contains("цена"));
//! assert_eq!(variants.original(), "cena");
//! ```
//!
//! # Architecture
//!
//! - [`rules`] -- the ambiguity rule table (trigger -> alternate spellings)
//! - [`variant_set`] -- insertion-ordered, deduplicated result set
//! - [`expansion`] -- one expansion scan of a term at a chunk granularity
//! - [`generator`] -- options and the driver that alternates script
//!   conversion with expansion rounds
//!
//! Script conversion itself lives in the `variants-core` crate.

pub mod expansion;
pub mod generator;
pub mod rules;
pub mod variant_set;

pub use expansion::{Granularity, expand, expand_all};
pub use generator::{
    DEFAULT_EXPANSION_ROUNDS, MAX_EXPANSION_ROUNDS, VariantError, VariantGenerator,
};
pub use variant_set::VariantSet;

/// Generate all variants of `term` with the default options.
///
/// Equivalent to `VariantGenerator::new().generate(term)`.
pub fn generate(term: &str) -> VariantSet {
    VariantGenerator::new().generate(term)
}
