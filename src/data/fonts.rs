//! Mathematical font styles
//!
//! Maps the Mathematical Alphanumeric Symbols block (U+1D400–U+1D7FF) and the
//! styled letters of the Letterlike Symbols block back to a plain base
//! character plus a [`FontStyle`].

use phf::phf_map;

/// A mathematical alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Bold,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Fraktur,
    BoldFraktur,
    DoubleStruck,
    DoubleStruckItalic,
    SansSerif,
    SansSerifBold,
    SansSerifItalic,
    SansSerifBoldItalic,
    Monospace,
}

impl FontStyle {
    /// Style wrapper command, e.g. `\symbf`
    pub fn command(self) -> &'static str {
        match self {
            FontStyle::Bold => "\\symbf",
            FontStyle::Italic => "\\symit",
            FontStyle::BoldItalic => "\\symbfit",
            FontStyle::Script => "\\symscr",
            FontStyle::BoldScript => "\\symbfscr",
            FontStyle::Fraktur => "\\symfrak",
            FontStyle::BoldFraktur => "\\symbffrak",
            FontStyle::DoubleStruck => "\\symbb",
            FontStyle::DoubleStruckItalic => "\\symbbit",
            FontStyle::SansSerif => "\\symsf",
            FontStyle::SansSerifBold => "\\symbfsf",
            FontStyle::SansSerifItalic => "\\symsfit",
            FontStyle::SansSerifBoldItalic => "\\symbfsfit",
            FontStyle::Monospace => "\\symtt",
        }
    }

    /// Prefix of the unicode-math per-glyph commands (`\mbfA`, `\BbbR`)
    pub fn glyph_prefix(self) -> &'static str {
        match self {
            FontStyle::Bold => "mbf",
            FontStyle::Italic => "mit",
            FontStyle::BoldItalic => "mbfit",
            FontStyle::Script => "mscr",
            FontStyle::BoldScript => "mbfscr",
            FontStyle::Fraktur => "mfrak",
            FontStyle::BoldFraktur => "mbffrak",
            FontStyle::DoubleStruck => "Bbb",
            FontStyle::DoubleStruckItalic => "mitBbb",
            FontStyle::SansSerif => "msans",
            FontStyle::SansSerifBold => "mbfsans",
            FontStyle::SansSerifItalic => "mitsans",
            FontStyle::SansSerifBoldItalic => "mbfitsans",
            FontStyle::Monospace => "mtt",
        }
    }

    /// unicode-math per-glyph command for a base glyph name
    pub fn glyph_command(self, base_name: &str) -> String {
        format!("\\{}{}", self.glyph_prefix(), base_name)
    }
}

/// A styled code point split into style and plain base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    pub style: FontStyle,
    pub base: char,
}

const fn styled(style: FontStyle, base: char) -> StyledChar {
    StyledChar { style, base }
}

/// Order of the 52-letter Latin runs starting at U+1D400
const LATIN_STYLES: [FontStyle; 13] = [
    FontStyle::Bold,
    FontStyle::Italic,
    FontStyle::BoldItalic,
    FontStyle::Script,
    FontStyle::BoldScript,
    FontStyle::Fraktur,
    FontStyle::DoubleStruck,
    FontStyle::BoldFraktur,
    FontStyle::SansSerif,
    FontStyle::SansSerifBold,
    FontStyle::SansSerifItalic,
    FontStyle::SansSerifBoldItalic,
    FontStyle::Monospace,
];

/// Order of the 58-glyph Greek runs starting at U+1D6A8
const GREEK_STYLES: [FontStyle; 5] = [
    FontStyle::Bold,
    FontStyle::Italic,
    FontStyle::BoldItalic,
    FontStyle::SansSerifBold,
    FontStyle::SansSerifBoldItalic,
];

/// Order of the 10-digit runs starting at U+1D7CE
const DIGIT_STYLES: [FontStyle; 5] = [
    FontStyle::Bold,
    FontStyle::DoubleStruck,
    FontStyle::SansSerif,
    FontStyle::SansSerifBold,
    FontStyle::Monospace,
];

/// Layout of one mathematical Greek run
pub const MATH_GREEK: [char; 58] = [
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Ζ', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Ο', 'Π', 'Ρ', 'ϴ', 'Σ',
    'Τ', 'Υ', 'Φ', 'Χ', 'Ψ', 'Ω', '∇', 'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ',
    'ν', 'ξ', 'ο', 'π', 'ρ', 'ς', 'σ', 'τ', 'υ', 'φ', 'χ', 'ψ', 'ω', '∂', 'ϵ', 'ϑ', 'ϰ', 'ϕ', 'ϱ',
    'ϖ',
];

const LATIN_START: u32 = 0x1D400;
const GREEK_START: u32 = 0x1D6A8;
const DIGIT_START: u32 = 0x1D7CE;
const ITALIC_GREEK_START: u32 = GREEK_START + 58;

/// Styled letters living in the Letterlike Symbols block
static LETTERLIKE: phf::Map<char, StyledChar> = phf_map! {
    'ℂ' => styled(FontStyle::DoubleStruck, 'C'),
    'ℊ' => styled(FontStyle::Script, 'g'),
    'ℋ' => styled(FontStyle::Script, 'H'),
    'ℌ' => styled(FontStyle::Fraktur, 'H'),
    'ℍ' => styled(FontStyle::DoubleStruck, 'H'),
    'ℎ' => styled(FontStyle::Italic, 'h'),
    'ℐ' => styled(FontStyle::Script, 'I'),
    'ℑ' => styled(FontStyle::Fraktur, 'I'),
    'ℒ' => styled(FontStyle::Script, 'L'),
    'ℓ' => styled(FontStyle::Script, 'l'),
    'ℕ' => styled(FontStyle::DoubleStruck, 'N'),
    'ℙ' => styled(FontStyle::DoubleStruck, 'P'),
    'ℚ' => styled(FontStyle::DoubleStruck, 'Q'),
    'ℛ' => styled(FontStyle::Script, 'R'),
    'ℜ' => styled(FontStyle::Fraktur, 'R'),
    'ℝ' => styled(FontStyle::DoubleStruck, 'R'),
    'ℤ' => styled(FontStyle::DoubleStruck, 'Z'),
    'ℨ' => styled(FontStyle::Fraktur, 'Z'),
    'ℬ' => styled(FontStyle::Script, 'B'),
    'ℭ' => styled(FontStyle::Fraktur, 'C'),
    'ℯ' => styled(FontStyle::Script, 'e'),
    'ℰ' => styled(FontStyle::Script, 'E'),
    'ℱ' => styled(FontStyle::Script, 'F'),
    'ℳ' => styled(FontStyle::Script, 'M'),
    'ℴ' => styled(FontStyle::Script, 'o'),
    'ℼ' => styled(FontStyle::DoubleStruck, 'π'),
    'ℽ' => styled(FontStyle::DoubleStruck, 'γ'),
    'ℾ' => styled(FontStyle::DoubleStruck, 'Γ'),
    'ℿ' => styled(FontStyle::DoubleStruck, 'Π'),
    '⅀' => styled(FontStyle::DoubleStruck, '∑'),
    'ⅅ' => styled(FontStyle::DoubleStruckItalic, 'D'),
    'ⅆ' => styled(FontStyle::DoubleStruckItalic, 'd'),
    'ⅇ' => styled(FontStyle::DoubleStruckItalic, 'e'),
    'ⅈ' => styled(FontStyle::DoubleStruckItalic, 'i'),
    'ⅉ' => styled(FontStyle::DoubleStruckItalic, 'j'),
};

fn latin_letter(index: u32) -> Option<char> {
    if index < 26 {
        char::from_u32('A' as u32 + index)
    } else {
        char::from_u32('a' as u32 + index - 26)
    }
}

/// Split a styled mathematical letter into style and base character
pub fn lookup_styled(c: char) -> Option<StyledChar> {
    let cp = c as u32;
    match cp {
        0x1D400..=0x1D6A3 => {
            let offset = cp - LATIN_START;
            let base = latin_letter(offset % 52)?;
            Some(styled(LATIN_STYLES[(offset / 52) as usize], base))
        }
        0x1D6A4 => Some(styled(FontStyle::Italic, 'ı')),
        0x1D6A5 => Some(styled(FontStyle::Italic, 'ȷ')),
        0x1D6A8..=0x1D7C9 => {
            let offset = (cp - GREEK_START) as usize;
            Some(styled(GREEK_STYLES[offset / 58], MATH_GREEK[offset % 58]))
        }
        0x1D7CA => Some(styled(FontStyle::Bold, 'Ϝ')),
        0x1D7CB => Some(styled(FontStyle::Bold, 'ϝ')),
        0x1D7CE..=0x1D7FF => {
            let offset = cp - DIGIT_START;
            let base = char::from_digit(offset % 10, 10)?;
            Some(styled(DIGIT_STYLES[(offset / 10) as usize], base))
        }
        _ => LETTERLIKE.get(&c).copied(),
    }
}

/// Mathematical italic form of a Greek letter (`α` → `𝛼`)
pub fn italic_greek(c: char) -> Option<char> {
    let index = MATH_GREEK.iter().position(|&g| g == c)?;
    char::from_u32(ITALIC_GREEK_START + index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_runs() {
        assert_eq!(
            lookup_styled('𝐀'),
            Some(styled(FontStyle::Bold, 'A'))
        );
        assert_eq!(lookup_styled('𝐴'), Some(styled(FontStyle::Italic, 'A')));
        assert_eq!(lookup_styled('𝔄'), Some(styled(FontStyle::Fraktur, 'A')));
        assert_eq!(lookup_styled('𝒜'), Some(styled(FontStyle::Script, 'A')));
        assert_eq!(lookup_styled('𝚣'), Some(styled(FontStyle::Monospace, 'z')));
        assert_eq!(
            lookup_styled('𝘼'),
            Some(styled(FontStyle::SansSerifBoldItalic, 'A'))
        );
    }

    #[test]
    fn test_greek_and_digit_runs() {
        assert_eq!(lookup_styled('𝛂'), Some(styled(FontStyle::Bold, 'α')));
        assert_eq!(lookup_styled('𝜔'), Some(styled(FontStyle::Italic, 'ω')));
        assert_eq!(lookup_styled('𝟙'), Some(styled(FontStyle::DoubleStruck, '1')));
        assert_eq!(lookup_styled('𝟿'), Some(styled(FontStyle::Monospace, '9')));
    }

    #[test]
    fn test_letterlike_holes() {
        assert_eq!(lookup_styled('ℝ'), Some(styled(FontStyle::DoubleStruck, 'R')));
        assert_eq!(lookup_styled('ℭ'), Some(styled(FontStyle::Fraktur, 'C')));
        assert_eq!(
            lookup_styled('ⅅ'),
            Some(styled(FontStyle::DoubleStruckItalic, 'D'))
        );
        assert_eq!(lookup_styled('R'), None);
    }

    #[test]
    fn test_glyph_commands() {
        assert_eq!(FontStyle::Bold.glyph_command("A"), "\\mbfA");
        assert_eq!(FontStyle::DoubleStruck.glyph_command("R"), "\\BbbR");
        assert_eq!(FontStyle::SansSerifBold.command(), "\\symbfsf");
    }

    #[test]
    fn test_italic_greek() {
        assert_eq!(italic_greek('α'), Some('𝛼'));
        assert_eq!(italic_greek('Γ'), Some('𝛤'));
        assert_eq!(italic_greek('a'), None);
    }
}
