// Text Normalizer
// Folds raw text into a canonical form so obfuscated spellings compare equal

use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Punctuation and separator characters removed before look-alike folding.
/// Whitespace (any `char::is_whitespace`) is removed as well.
const SEPARATORS: &[char] = &[
    '-', '_', '.', ',', ';', ':', '\'', '"', '`', '´', '~', '!', '¡', '¿',
    '?', '(', ')', '[', ']', '{', '}', '/', '\\', '*', '+', '=', '#', '&',
    '%', '^', '<', '>', '|',
];

/// Look-alike table: accented letters, digits and symbols used as letter
/// stand-ins, and Greek letters, each mapped to a base Latin letter.
/// Entries whose key is consumed by an earlier pipeline step (separators,
/// accent decomposition) are carried as data; they simply never fire.
const LOOKALIKES: &[(char, char)] = &[
    // vowels
    ('á', 'a'), ('à', 'a'), ('â', 'a'), ('ä', 'a'), ('ã', 'a'), ('å', 'a'),
    ('@', 'a'), ('4', 'a'), ('α', 'a'), ('ₐ', 'a'),
    ('é', 'e'), ('è', 'e'), ('ê', 'e'), ('ë', 'e'), ('3', 'e'), ('€', 'e'),
    ('ε', 'e'), ('ₑ', 'e'), ('℮', 'e'),
    ('í', 'i'), ('ì', 'i'), ('î', 'i'), ('ï', 'i'), ('1', 'i'), ('!', 'i'),
    ('|', 'i'), ('l', 'i'), ('ι', 'i'), ('ⁱ', 'i'), ('ℓ', 'i'),
    ('ó', 'o'), ('ò', 'o'), ('ô', 'o'), ('ö', 'o'), ('õ', 'o'), ('0', 'o'),
    ('ο', 'o'), ('θ', 'o'), ('º', 'o'), ('°', 'o'),
    ('ú', 'u'), ('ù', 'u'), ('û', 'u'), ('ü', 'u'), ('ũ', 'u'), ('µ', 'u'),
    ('υ', 'u'),
    // consonants
    ('ñ', 'n'), ('ń', 'n'), ('ň', 'n'), ('η', 'n'),
    ('ç', 'c'), ('ć', 'c'), ('č', 'c'), ('¢', 'c'),
    ('$', 's'), ('5', 's'), ('ß', 's'), ('ş', 's'), ('š', 's'), ('ς', 's'),
    ('σ', 's'),
    ('7', 't'), ('†', 't'), ('τ', 't'),
    ('8', 'b'), ('β', 'b'), ('&', 'b'),
    ('9', 'g'), ('6', 'g'), ('ğ', 'g'),
    ('2', 'z'), ('ž', 'z'), ('ź', 'z'), ('ζ', 'z'),
    ('ł', 'l'), ('λ', 'l'),
    ('ķ', 'k'), ('κ', 'k'),
    ('ṗ', 'p'), ('ρ', 'p'),
    ('ŗ', 'r'), ('ř', 'r'),
    ('ṃ', 'm'), ('μ', 'm'),
    ('ḋ', 'd'), ('δ', 'd'),
    ('ḟ', 'f'), ('φ', 'f'),
    ('ẃ', 'w'), ('ω', 'w'),
    ('ẏ', 'y'), ('γ', 'y'), ('ψ', 'y'),
    ('ḣ', 'h'),
    ('ṽ', 'v'), ('ν', 'v'),
    ('ẋ', 'x'), ('χ', 'x'),
    ('ǰ', 'j'),
];

/// Canonicalizes text for lexicon comparison. Lexicon entries and live
/// tokens go through the same instance, so every comparison is
/// canonical-vs-canonical.
pub struct Normalizer {
    table: HashMap<char, char>,
}

impl Normalizer {
    pub fn new() -> Self {
        let mut table: HashMap<char, char> = LOOKALIKES.iter().copied().collect();

        // Collapse chains like `ł -> l -> i` so a single folding pass
        // reaches the fixed point and normalization stays idempotent.
        let keys: Vec<char> = table.keys().copied().collect();
        for key in keys {
            let mut target = table[&key];
            while let Some(&next) = table.get(&target) {
                if next == target {
                    break;
                }
                target = next;
            }
            table.insert(key, target);
        }

        Self { table }
    }

    /// Canonical form: lowercase, accent marks stripped (NFD), whitespace
    /// and separators removed, look-alike characters folded.
    /// Total and idempotent; empty input yields empty output.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .filter(|c| !c.is_whitespace() && !SEPARATORS.contains(c))
            .map(|c| self.table.get(&c).copied().unwrap_or(c))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_fold_to_ascii() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("Á"), "a");
        assert_eq!(n.normalize("años"), "anos");
        assert_eq!(n.normalize("maricón"), "maricon");
    }

    #[test]
    fn test_separators_removed() {
        let n = Normalizer::new();
        assert_eq!(n.normalize(" p-e.n,d!e?jo "), "pendejo");
        assert_eq!(n.normalize("i_d_i_o_t_a"), "idiota");
    }

    #[test]
    fn test_lookalikes_fold() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("z0rr4"), "zorra");
        assert_eq!(n.normalize("p3ndej0"), "pendejo");
        // leet reading of `l` as an i stand-in
        assert_eq!(n.normalize("l0co"), "ioco");
        assert_eq!(n.normalize("loco"), "ioco");
    }

    #[test]
    fn test_idempotent() {
        let n = Normalizer::new();
        for input in ["Hola MUNDO", "ł0c0", "café", " p-e.n,d!e?jo ", "", "ñoño"] {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        let n = Normalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \t\n"), "");
    }
}
