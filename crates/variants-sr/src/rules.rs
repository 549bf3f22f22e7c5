// Ambiguity rules: alternate spellings of letters with diacritics
//
// Serbian Latin text typed without diacritics is written with plain ASCII
// letters ("cevapcici") or with ASCII digraphs ("chevapchichi", "cxevapcxicxi").
// Each rule maps one such trigger to the spellings it may stand for.

/// A trigger (one letter or a two-letter digraph) and the spellings that may
/// replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguityRule {
    pub trigger: &'static str,
    pub replacements: &'static [&'static str],
}

const fn rule(trigger: &'static str, replacements: &'static [&'static str]) -> AmbiguityRule {
    AmbiguityRule {
        trigger,
        replacements,
    }
}

/// All ambiguity rules. Only lowercase triggers are listed; uppercase letters
/// are never expanded.
pub const RULES: &[AmbiguityRule] = &[
    // single letters
    rule("c", &["ć", "č"]),
    rule("ć", &["c", "č"]),
    rule("č", &["c", "ć"]),
    rule("z", &["ž"]),
    rule("ž", &["z"]),
    rule("s", &["š"]),
    rule("š", &["s"]),
    rule("đ", &["dj"]),
    // ASCII digraphs
    rule("ch", &["č"]),
    rule("cx", &["č"]),
    rule("cc", &["č"]),
    rule("cy", &["ć"]),
    rule("dj", &["đ"]),
    rule("dx", &["đ"]),
    rule("zh", &["ž"]),
    rule("zx", &["ž"]),
    rule("zz", &["ž"]),
    rule("sx", &["š"]),
    rule("sh", &["š"]),
    rule("ss", &["š"]),
];

/// Return the replacements for a chunk of text, or an empty slice if the
/// chunk is not a trigger.
pub fn replacements_for(chunk: &[char]) -> &'static [&'static str] {
    RULES
        .iter()
        .find(|rule| rule.trigger.chars().eq(chunk.iter().copied()))
        .map(|rule| rule.replacements)
        .unwrap_or(&[])
}
