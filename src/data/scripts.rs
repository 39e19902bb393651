//! Superscript and subscript characters
//!
//! Runs of these are emitted as a single `^{...}` or `_{...}` group.

use phf::phf_map;

pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    '⁰' => '0',
    '¹' => '1',
    '²' => '2',
    '³' => '3',
    '⁴' => '4',
    '⁵' => '5',
    '⁶' => '6',
    '⁷' => '7',
    '⁸' => '8',
    '⁹' => '9',
    '⁺' => '+',
    '⁻' => '-',
    '⁼' => '=',
    '⁽' => '(',
    '⁾' => ')',
    'ⁱ' => 'i',
    'ⁿ' => 'n',
    'ʰ' => 'h',
    'ʲ' => 'j',
    'ʳ' => 'r',
    'ʷ' => 'w',
    'ʸ' => 'y',
    'ˡ' => 'l',
    'ˢ' => 's',
    'ˣ' => 'x',
    'ᵃ' => 'a',
    'ᵇ' => 'b',
    'ᶜ' => 'c',
    'ᵈ' => 'd',
    'ᵉ' => 'e',
    'ᶠ' => 'f',
    'ᵍ' => 'g',
    'ᵏ' => 'k',
    'ᵐ' => 'm',
    'ᵒ' => 'o',
    'ᵖ' => 'p',
    'ᵗ' => 't',
    'ᵘ' => 'u',
    'ᵛ' => 'v',
    'ᶻ' => 'z',
    'ᴬ' => 'A',
    'ᴮ' => 'B',
    'ᴰ' => 'D',
    'ᴱ' => 'E',
    'ᴳ' => 'G',
    'ᴴ' => 'H',
    'ᴵ' => 'I',
    'ᴶ' => 'J',
    'ᴷ' => 'K',
    'ᴸ' => 'L',
    'ᴹ' => 'M',
    'ᴺ' => 'N',
    'ᴼ' => 'O',
    'ᴾ' => 'P',
    'ᴿ' => 'R',
    'ᵀ' => 'T',
    'ᵁ' => 'U',
    'ⱽ' => 'V',
    'ᵂ' => 'W',
    'ᵅ' => 'α',
    'ᵝ' => 'β',
    'ᵞ' => 'γ',
    'ᵟ' => 'δ',
    'ᵋ' => 'ε',
    'ᶿ' => 'θ',
    'ᵠ' => 'φ',
    'ᵡ' => 'χ',
};

pub static SUBSCRIPTS: phf::Map<char, char> = phf_map! {
    '₀' => '0',
    '₁' => '1',
    '₂' => '2',
    '₃' => '3',
    '₄' => '4',
    '₅' => '5',
    '₆' => '6',
    '₇' => '7',
    '₈' => '8',
    '₉' => '9',
    '₊' => '+',
    '₋' => '-',
    '₌' => '=',
    '₍' => '(',
    '₎' => ')',
    'ₐ' => 'a',
    'ₑ' => 'e',
    'ₒ' => 'o',
    'ₓ' => 'x',
    'ₕ' => 'h',
    'ₖ' => 'k',
    'ₗ' => 'l',
    'ₘ' => 'm',
    'ₙ' => 'n',
    'ₚ' => 'p',
    'ₛ' => 's',
    'ₜ' => 't',
    'ᵢ' => 'i',
    'ᵣ' => 'r',
    'ᵤ' => 'u',
    'ᵥ' => 'v',
    'ⱼ' => 'j',
    'ᵦ' => 'β',
    'ᵧ' => 'γ',
    'ᵨ' => 'ρ',
    'ᵩ' => 'φ',
    'ᵪ' => 'χ',
};

/// Vertical placement of a script character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Superscript,
    Subscript,
}

impl ScriptKind {
    /// LaTeX operator introducing the group
    pub fn operator(self) -> char {
        match self {
            ScriptKind::Superscript => '^',
            ScriptKind::Subscript => '_',
        }
    }
}

/// Classify a character as superscript or subscript, returning its base
pub fn lookup_script(c: char) -> Option<(ScriptKind, char)> {
    if let Some(&base) = SUPERSCRIPTS.get(&c) {
        return Some((ScriptKind::Superscript, base));
    }
    SUBSCRIPTS
        .get(&c)
        .map(|&base| (ScriptKind::Subscript, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(lookup_script('²'), Some((ScriptKind::Superscript, '2')));
        assert_eq!(lookup_script('₂'), Some((ScriptKind::Subscript, '2')));
        assert_eq!(lookup_script('2'), None);
    }

    #[test]
    fn test_no_character_is_both() {
        for key in SUPERSCRIPTS.keys() {
            assert!(!SUBSCRIPTS.contains_key(key), "{:?} in both tables", key);
        }
    }

    #[test]
    fn test_operator() {
        assert_eq!(ScriptKind::Superscript.operator(), '^');
        assert_eq!(ScriptKind::Subscript.operator(), '_');
    }
}
