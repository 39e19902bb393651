//! Compatibility characters: vulgar fractions, ligatures, small forms,
//! text-mode letters and typographic punctuation.

use phf::phf_map;

/// Vulgar fractions as (numerator, denominator)
pub static FRACTIONS: phf::Map<char, (&'static str, &'static str)> = phf_map! {
    '¼' => ("1", "4"),
    '½' => ("1", "2"),
    '¾' => ("3", "4"),
    '⅐' => ("1", "7"),
    '⅑' => ("1", "9"),
    '⅒' => ("1", "10"),
    '⅓' => ("1", "3"),
    '⅔' => ("2", "3"),
    '⅕' => ("1", "5"),
    '⅖' => ("2", "5"),
    '⅗' => ("3", "5"),
    '⅘' => ("4", "5"),
    '⅙' => ("1", "6"),
    '⅚' => ("5", "6"),
    '⅛' => ("1", "8"),
    '⅜' => ("3", "8"),
    '⅝' => ("5", "8"),
    '⅞' => ("7", "8"),
    '⅟' => ("1", ""),
    '↉' => ("0", "3"),
};

/// Ligatures and digraphs, expanded to their component letters
pub static LIGATURES: phf::Map<char, &'static str> = phf_map! {
    'ﬀ' => "ff",
    'ﬁ' => "fi",
    'ﬂ' => "fl",
    'ﬃ' => "ffi",
    'ﬄ' => "ffl",
    'ﬅ' => "st",
    'ﬆ' => "st",
    'Ĳ' => "IJ",
    'ĳ' => "ij",
    'Ǆ' => "DŽ",
    'ǅ' => "Dž",
    'ǆ' => "dž",
    'Ǉ' => "LJ",
    'ǈ' => "Lj",
    'ǉ' => "lj",
    'Ǌ' => "NJ",
    'ǋ' => "Nj",
    'ǌ' => "nj",
    'Ǳ' => "DZ",
    'ǲ' => "Dz",
    'ǳ' => "dz",
};

/// Small Form Variants, rendered as `{\scriptsize{x}}`
pub static SMALL_FORMS: phf::Map<char, char> = phf_map! {
    '\u{FE50}' => ',',
    '\u{FE52}' => '.',
    '\u{FE54}' => ';',
    '\u{FE55}' => ':',
    '\u{FE56}' => '?',
    '\u{FE57}' => '!',
    '\u{FE58}' => '—',
    '\u{FE59}' => '(',
    '\u{FE5A}' => ')',
    '\u{FE5F}' => '#',
    '\u{FE60}' => '&',
    '\u{FE61}' => '*',
    '\u{FE62}' => '+',
    '\u{FE63}' => '-',
    '\u{FE64}' => '<',
    '\u{FE65}' => '>',
    '\u{FE66}' => '=',
    '\u{FE69}' => '$',
    '\u{FE6A}' => '%',
    '\u{FE6B}' => '@',
};

/// Letters without a decomposition that LaTeX spells as text commands
pub static TEXT_LETTERS: phf::Map<char, &'static str> = phf_map! {
    'Æ' => "\\AE",
    'æ' => "\\ae",
    'Œ' => "\\OE",
    'œ' => "\\oe",
    'Ø' => "\\O",
    'ø' => "\\o",
    'Ł' => "\\L",
    'ł' => "\\l",
    'ß' => "\\ss",
    'ı' => "\\i",
    'ȷ' => "\\j",
    'Đ' => "\\DJ",
    'đ' => "\\dj",
    'Ŋ' => "\\NG",
    'ŋ' => "\\ng",
    'Þ' => "\\TH",
    'þ' => "\\th",
    'Ð' => "\\DH",
    'ð' => "\\dh",
    '§' => "\\S",
    '¶' => "\\P",
    '©' => "\\copyright",
    '£' => "\\pounds",
    '¿' => "?`",
    '¡' => "!`",
    '†' => "\\dag",
    '‡' => "\\ddag",
    '…' => "\\dots",
};

/// Curly quotes, emitted only when quote conversion is enabled
pub static QUOTES: phf::Map<char, &'static str> = phf_map! {
    '\u{201C}' => "``",
    '\u{201D}' => "''",
    '\u{2018}' => "`",
    '\u{2019}' => "'",
};

/// En dash and no-break space, emitted only when dash conversion is enabled
pub static DASHES: phf::Map<char, &'static str> = phf_map! {
    '\u{2013}' => "--",
    '\u{00A0}' => "~",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_lookup() {
        assert_eq!(FRACTIONS.get(&'½'), Some(&("1", "2")));
        assert_eq!(FRACTIONS.get(&'⅒'), Some(&("1", "10")));
    }

    #[test]
    fn test_ligatures_match_compatibility_decomposition() {
        use unicode_normalization::UnicodeNormalization;
        for (lig, letters) in LIGATURES.entries() {
            let nfkc: String = lig.to_string().nfkc().collect();
            assert_eq!(&nfkc, letters, "ligature {:?}", lig);
        }
    }

    #[test]
    fn test_small_forms_exclude_braces() {
        assert!(SMALL_FORMS.values().all(|c| *c != '{' && *c != '}'));
    }
}
