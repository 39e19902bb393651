//! Options, output buffer and per-call state for Unicode → LaTeX conversion

use crate::data::AccentMode;
use crate::utils::diagnostics::{Diagnostic, Position};

/// Recursion limit for nested rendering and for accents stacked on one base
pub const MAX_NESTING_DEPTH: usize = 16;

// =============================================================================
// Unicode → LaTeX Conversion Options
// =============================================================================

/// Options for Unicode to LaTeX conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct U2LOptions {
    /// Turn combining marks into accent commands (`é` → `\'{e}`)
    /// Default: true
    pub convert_accents: bool,

    /// Wrap mathematical styled letters in a font command (`𝐀` → `\symbf{A}`)
    /// Default: true
    pub add_font_modifiers: bool,

    /// Prefer unicode-math commands: consult the math table first and emit
    /// per-glyph commands (`\mbfA`) for styled letters
    /// Default: false
    pub prefer_unicode_math: bool,

    /// Text or math accent commands
    /// Default: text
    pub accent_mode: AccentMode,

    /// Curly quotes to TeX quote ligatures
    /// Default: false
    pub convert_quotes: bool,

    /// En dash to `--`, no-break space to `~`
    /// Default: false
    pub convert_dashes: bool,
}

impl Default for U2LOptions {
    fn default() -> Self {
        Self {
            convert_accents: true,
            add_font_modifiers: true,
            prefer_unicode_math: false,
            accent_mode: AccentMode::Text,
            convert_quotes: false,
            convert_dashes: false,
        }
    }
}

impl U2LOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave accents and styled letters as they are
    pub fn verbatim() -> Self {
        Self {
            convert_accents: false,
            add_font_modifiers: false,
            ..Self::default()
        }
    }

    /// Output aimed at unicode-math documents
    pub fn unicode_math() -> Self {
        Self {
            prefer_unicode_math: true,
            accent_mode: AccentMode::Math,
            ..Self::default()
        }
    }

    /// Also convert typographic quotes and dashes
    pub fn typographic() -> Self {
        Self {
            convert_quotes: true,
            convert_dashes: true,
            ..Self::default()
        }
    }
}

// =============================================================================
// Output fragments
// =============================================================================

/// One rendered unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Input copied through unchanged
    Verbatim(String),
    /// Generated LaTeX
    Latex(String),
    /// Generated LaTeX inside a font-style wrapper; adjacent fragments with
    /// the same command share one wrapper
    Styled {
        command: &'static str,
        inner: String,
    },
}

impl Fragment {
    pub fn verbatim(c: char) -> Self {
        Fragment::Verbatim(c.to_string())
    }

    /// Standalone text of this fragment
    pub fn render(&self) -> String {
        match self {
            Fragment::Verbatim(s) | Fragment::Latex(s) => s.clone(),
            Fragment::Styled { command, inner } => format!("{}{{{}}}", command, inner),
        }
    }
}

/// Whether `text` ends in a control word such as `\alpha`
pub(crate) fn ends_with_control_word(text: &str) -> bool {
    let head = text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if head.len() == text.len() {
        return false;
    }
    let backslashes = head.len() - head.trim_end_matches('\\').len();
    backslashes % 2 == 1
}

/// Append `piece`, separating it from a preceding control word if needed
fn append_after(dest: &mut String, pending_control_word: bool, piece: &str) {
    // XeTeX and LuaTeX read any letter as part of a control word
    if pending_control_word && piece.starts_with(char::is_alphabetic) {
        dest.push(' ');
    }
    dest.push_str(piece);
}

#[derive(Debug)]
struct OpenStyle {
    command: &'static str,
    inner: String,
    pending_control_word: bool,
}

/// Output accumulator
///
/// Tracks the open font-style wrapper and whether the text so far ends in a
/// generated control word, so `αb` becomes `\alpha b` and not `\alphab`.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    text: String,
    open_style: Option<OpenStyle>,
    pending_control_word: bool,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Styled { command, inner } => {
                if let Some(open) = self
                    .open_style
                    .as_mut()
                    .filter(|open| open.command == command)
                {
                    append_after(&mut open.inner, open.pending_control_word, &inner);
                    open.pending_control_word = ends_with_control_word(&inner);
                    return;
                }
                self.close_style();
                self.open_style = Some(OpenStyle {
                    command,
                    pending_control_word: ends_with_control_word(&inner),
                    inner,
                });
            }
            Fragment::Latex(text) => {
                self.close_style();
                append_after(&mut self.text, self.pending_control_word, &text);
                self.pending_control_word = ends_with_control_word(&text);
            }
            Fragment::Verbatim(text) => {
                self.close_style();
                append_after(&mut self.text, self.pending_control_word, &text);
                self.pending_control_word = false;
            }
        }
    }

    /// Name of the font-style wrapper currently open
    pub fn active_style(&self) -> Option<&'static str> {
        self.open_style.as_ref().map(|open| open.command)
    }

    fn close_style(&mut self) {
        if let Some(open) = self.open_style.take() {
            self.text.push_str(open.command);
            self.text.push('{');
            self.text.push_str(&open.inner);
            self.text.push('}');
            self.pending_control_word = false;
        }
    }

    pub fn finish(mut self) -> String {
        self.close_style();
        self.text
    }
}

// =============================================================================
// Conversion state
// =============================================================================

/// State of one conversion call; never shared between calls
#[derive(Debug)]
pub struct ConversionState<'a> {
    input: &'a [char],
    cursor: usize,
    /// Position of the code point under the cursor
    position: Position,
    pub output: OutputBuffer,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ConversionState<'a> {
    pub fn new(input: &'a [char]) -> Self {
        Self {
            input,
            cursor: 0,
            position: Position::default(),
            output: OutputBuffer::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Next code point without consuming it
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Consume one code point, returning it with its position
    pub fn advance(&mut self) -> Option<(char, Position)> {
        let c = self.peek()?;
        let position = self.position;
        self.cursor += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some((c, position))
    }

    /// Consume code points while `pred` holds
    pub fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) -> Vec<(char, Position)> {
        let mut taken = Vec::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            if let Some(item) = self.advance() {
                taken.push(item);
            }
        }
        taken
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_word_detection() {
        assert!(ends_with_control_word("\\alpha"));
        assert!(ends_with_control_word("x\\i"));
        assert!(!ends_with_control_word("\\\\a"));
        assert!(!ends_with_control_word("\\'{e}"));
        assert!(!ends_with_control_word("abc"));
        assert!(!ends_with_control_word("---"));
    }

    #[test]
    fn test_space_after_control_word() {
        let mut out = OutputBuffer::new();
        out.push(Fragment::Latex("\\alpha".into()));
        out.push(Fragment::verbatim('b'));
        out.push(Fragment::Latex("\\beta".into()));
        out.push(Fragment::verbatim('2'));
        assert_eq!(out.finish(), "\\alpha b\\beta2");
    }

    #[test]
    fn test_space_before_non_ascii_letter() {
        let mut out = OutputBuffer::new();
        out.push(Fragment::Latex("\\alpha".into()));
        out.push(Fragment::verbatim('ж'));
        out.push(Fragment::Latex("\\times".into()));
        out.push(Fragment::verbatim('\u{05D0}'));
        out.push(Fragment::Latex("\\beta".into()));
        out.push(Fragment::verbatim('·'));
        assert_eq!(out.finish(), "\\alpha ж\\times \u{05D0}\\beta·");
    }

    #[test]
    fn test_verbatim_text_never_separated() {
        let mut out = OutputBuffer::new();
        for c in "\\ab".chars() {
            out.push(Fragment::verbatim(c));
        }
        assert_eq!(out.finish(), "\\ab");
    }

    #[test]
    fn test_styles_merge() {
        let mut out = OutputBuffer::new();
        let bold = |s: &str| Fragment::Styled {
            command: "\\symbf",
            inner: s.to_string(),
        };
        out.push(bold("A"));
        out.push(bold("B"));
        assert_eq!(out.active_style(), Some("\\symbf"));
        out.push(Fragment::verbatim(' '));
        assert_eq!(out.active_style(), None);
        out.push(bold("\\alpha"));
        out.push(bold("x"));
        assert_eq!(out.finish(), "\\symbf{AB} \\symbf{\\alpha x}");
    }

    #[test]
    fn test_state_positions() {
        let input: Vec<char> = "a\nb".chars().collect();
        let mut state = ConversionState::new(&input);
        assert_eq!(state.advance(), Some(('a', Position::new(1, 1))));
        assert_eq!(state.advance(), Some(('\n', Position::new(1, 2))));
        assert_eq!(state.advance(), Some(('b', Position::new(2, 1))));
        assert_eq!(state.advance(), None);
    }

    #[test]
    fn test_presets() {
        assert!(U2LOptions::new().convert_accents);
        assert!(!U2LOptions::verbatim().add_font_modifiers);
        assert_eq!(U2LOptions::unicode_math().accent_mode, AccentMode::Math);
        assert!(U2LOptions::typographic().convert_quotes);
    }
}
