// VariantGenerator: script conversion plus bounded ambiguity expansion
//
// The generator alternates two kinds of pass over a growing VariantSet:
//
//   1. script conversion: every variant to Cyrillic, then every variant to Latin
//   2. expansion rounds: every variant scanned per character and per pair
//   3. script conversion again, for the variants found in step 2
//
// The number of expansion rounds is fixed (two by default) rather than run to
// a fixed point, so the work per term is bounded and the output for a given
// term is stable.

use tracing::{debug, trace};
use variants_core::script::{Script, convert};

use crate::expansion::expand_all;
use crate::variant_set::VariantSet;

/// Default number of expansion rounds.
pub const DEFAULT_EXPANSION_ROUNDS: usize = 2;

/// Upper limit for [`VariantGenerator::set_expansion_rounds`].
pub const MAX_EXPANSION_ROUNDS: usize = 8;

/// Error type for invalid generator options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    /// The requested number of expansion rounds is out of range.
    #[error("expansion rounds must be between 1 and {max}, got {requested}")]
    ExpansionRounds { requested: usize, max: usize },
}

/// Generates the orthographic variants of Serbian words.
///
/// The generator holds only options; it has no per-term state and can be
/// shared freely between threads. The default options reproduce the
/// standard two-round algorithm exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGenerator {
    /// Number of expansion rounds between the two script conversion passes.
    expansion_rounds: usize,

    /// Whether to add Cyrillic and Latin transliterations of every variant.
    script_conversion: bool,
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantGenerator {
    /// Create a generator with default options.
    pub fn new() -> Self {
        Self {
            expansion_rounds: DEFAULT_EXPANSION_ROUNDS,
            script_conversion: true,
        }
    }

    /// Set the number of expansion rounds (1..=`MAX_EXPANSION_ROUNDS`).
    /// Default: 2.
    pub fn set_expansion_rounds(&mut self, rounds: usize) -> Result<(), VariantError> {
        if !(1..=MAX_EXPANSION_ROUNDS).contains(&rounds) {
            return Err(VariantError::ExpansionRounds {
                requested: rounds,
                max: MAX_EXPANSION_ROUNDS,
            });
        }
        self.expansion_rounds = rounds;
        Ok(())
    }

    pub fn expansion_rounds(&self) -> usize {
        self.expansion_rounds
    }

    /// Enable or disable the Latin/Cyrillic conversion passes. With
    /// conversion disabled only spelling variants are generated, in whatever
    /// script the input uses. Default: true.
    pub fn set_script_conversion(&mut self, value: bool) {
        self.script_conversion = value;
    }

    pub fn script_conversion(&self) -> bool {
        self.script_conversion
    }

    /// Generate all variants of `term`.
    ///
    /// The returned set always contains `term` itself, first. Any input is
    /// accepted: characters outside the tables pass through conversion
    /// unchanged and never trigger expansion. An empty term yields a set
    /// holding only the empty string.
    pub fn generate(&self, term: &str) -> VariantSet {
        let mut variants = VariantSet::new(term);

        self.convert_scripts(&mut variants);
        for round in 1..=self.expansion_rounds {
            expand_all(&mut variants);
            trace!(round, variants = variants.len(), "expansion round finished");
        }
        self.convert_scripts(&mut variants);

        debug!(
            term,
            rounds = self.expansion_rounds,
            variants = variants.len(),
            "generated variants"
        );
        variants
    }

    fn convert_scripts(&self, variants: &mut VariantSet) {
        if !self.script_conversion {
            return;
        }
        for target in [Script::Cyrillic, Script::Latin] {
            let converted: Vec<String> = variants.iter().map(|term| convert(term, target)).collect();
            let added = variants.merge(converted);
            trace!(?target, added, "script conversion pass finished");
        }
    }
}
