//! Script data and transliteration for Serbian text.
//!
//! Serbian is written in two alphabets, Latin (gajica) and Cyrillic
//! (vukovica), which map onto each other almost letter for letter. This crate
//! holds that mapping as static data and the small amount of logic needed to
//! transliterate text with it.
//!
//! # Modules
//!
//! - [`script`] -- the Latin/Cyrillic table and transliteration

pub mod script;

pub use script::{Script, to_cyrillic, to_latin};
