// Latin <-> Cyrillic transliteration for Serbian

/// One of the two alphabets Serbian is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
}

// ---------------------------------------------------------------------------
// Alphabet table
// ---------------------------------------------------------------------------

/// The Serbian alphabet as Latin/Cyrillic pairs, uppercase first, in
/// Cyrillic alphabetical order.
///
/// Each Latin side is a single letter or one of the digraphs Lj, Nj and Dž,
/// which correspond to a single Cyrillic letter (Љ, Њ, Џ). Digraphs are only
/// listed in lowercase and title case; "LJ" is not an entry.
pub const ALPHABET: [(&str, char); 60] = [
    ("A", 'А'), ("B", 'Б'), ("V", 'В'), ("G", 'Г'), ("D", 'Д'),
    ("Đ", 'Ђ'), ("E", 'Е'), ("Ž", 'Ж'), ("Z", 'З'), ("I", 'И'),
    ("J", 'Ј'), ("K", 'К'), ("L", 'Л'), ("Lj", 'Љ'), ("M", 'М'),
    ("N", 'Н'), ("Nj", 'Њ'), ("O", 'О'), ("P", 'П'), ("R", 'Р'),
    ("S", 'С'), ("T", 'Т'), ("Ć", 'Ћ'), ("U", 'У'), ("F", 'Ф'),
    ("H", 'Х'), ("C", 'Ц'), ("Č", 'Ч'), ("Dž", 'Џ'), ("Š", 'Ш'),
    ("a", 'а'), ("b", 'б'), ("v", 'в'), ("g", 'г'), ("d", 'д'),
    ("đ", 'ђ'), ("e", 'е'), ("ž", 'ж'), ("z", 'з'), ("i", 'и'),
    ("j", 'ј'), ("k", 'к'), ("l", 'л'), ("lj", 'љ'), ("m", 'м'),
    ("n", 'н'), ("nj", 'њ'), ("o", 'о'), ("p", 'п'), ("r", 'р'),
    ("s", 'с'), ("t", 'т'), ("ć", 'ћ'), ("u", 'у'), ("f", 'ф'),
    ("h", 'х'), ("c", 'ц'), ("č", 'ч'), ("dž", 'џ'), ("š", 'ш'),
];

/// Find the Cyrillic letter for a Latin letter (`second == None`) or a Latin
/// digraph (`second == Some(..)`).
fn lookup_latin(first: char, second: Option<char>) -> Option<char> {
    ALPHABET.iter().find_map(|&(latin, cyrillic)| {
        let mut letters = latin.chars();
        (letters.next() == Some(first) && letters.next() == second).then_some(cyrillic)
    })
}

/// Return the Cyrillic letter for a Latin letter or digraph, if the table
/// has one.
pub fn cyrillic_for(latin: &str) -> Option<char> {
    let mut letters = latin.chars();
    let first = letters.next()?;
    let second = letters.next();
    if letters.next().is_some() {
        return None;
    }
    lookup_latin(first, second)
}

/// Return the Latin spelling (one letter or a digraph) of a Cyrillic letter,
/// if the table has one.
pub fn latin_for(cyrillic: char) -> Option<&'static str> {
    ALPHABET
        .iter()
        .find_map(|&(latin, c)| (c == cyrillic).then_some(latin))
}

// ---------------------------------------------------------------------------
// Transliteration
// ---------------------------------------------------------------------------

/// Transliterate a term to Cyrillic.
///
/// The term is scanned left to right. At each position a two-letter digraph
/// entry is preferred over a single-letter one, so "ljubav" becomes "љубав"
/// rather than "лјубав". Characters without an entry (digits, punctuation,
/// Cyrillic letters, letters such as `q` or `w`) are copied unchanged.
pub fn to_cyrillic(term: &str) -> String {
    let chars: Vec<char> = term.chars().collect();
    let mut result = String::with_capacity(term.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(c) = chars
            .get(i + 1)
            .and_then(|&next| lookup_latin(chars[i], Some(next)))
        {
            result.push(c);
            i += 2;
            continue;
        }
        result.push(lookup_latin(chars[i], None).unwrap_or(chars[i]));
        i += 1;
    }
    result
}

/// Transliterate a term to Latin.
///
/// Љ, Њ and Џ expand to the two-letter digraphs Lj, Nj and Dž (in the case of
/// the source letter). Characters without an entry are copied unchanged.
pub fn to_latin(term: &str) -> String {
    let mut result = String::with_capacity(term.len());
    for c in term.chars() {
        match latin_for(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }
    result
}

/// Transliterate a term into the given script.
pub fn convert(term: &str, target: Script) -> String {
    match target {
        Script::Latin => to_latin(term),
        Script::Cyrillic => to_cyrillic(term),
    }
}
