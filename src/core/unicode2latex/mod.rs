//! Unicode to LaTeX conversion module
//!
//! The [`Decomposer`] walks a code-point sequence once, with one code point of
//! lookahead, and renders each unit (a character plus any combining marks
//! that follow it, or a run of sub/superscripts) as LaTeX.
//!
//! # Module Structure
//!
//! - `context`: Options, output buffer and per-call state
//!
//! # Example
//!
//! ```rust
//! use unicode2latex::core::unicode2latex::{Decomposer, U2LOptions};
//! use unicode2latex::data::MappingTables;
//!
//! let decomposer = Decomposer::new(MappingTables::builtin(), U2LOptions::default());
//! let output = decomposer.decompose_str("Çα²");
//! assert_eq!(output.content, "\\c{C}\\alpha^{2}");
//! ```

pub mod context;

use tracing::{debug, trace};
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::data::{AccentSpec, MappingTables, ScriptKind, StyledChar};
use crate::utils::diagnostics::{Diagnostic, DiagnosticKind, Position};
use crate::utils::error::ConversionOutput;

pub use crate::data::AccentMode;
pub use context::{ConversionState, Fragment, OutputBuffer, U2LOptions, MAX_NESTING_DEPTH};

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn record(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    debug!(
        line = diagnostic.position.line,
        column = diagnostic.position.column,
        kind = ?diagnostic.kind,
        detail = %diagnostic.detail,
        "diagnostic"
    );
    diagnostics.push(diagnostic);
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Forward converter
///
/// Holds only the injected tables and options, so one instance can serve any
/// number of concurrent calls; every call builds its own [`ConversionState`].
#[derive(Debug, Clone)]
pub struct Decomposer<'t> {
    tables: &'t MappingTables,
    options: U2LOptions,
}

impl Decomposer<'static> {
    /// Decomposer over the built-in tables
    pub fn with_options(options: U2LOptions) -> Self {
        Self::new(MappingTables::builtin(), options)
    }
}

impl<'t> Decomposer<'t> {
    pub fn new(tables: &'t MappingTables, options: U2LOptions) -> Self {
        Self { tables, options }
    }

    pub fn options(&self) -> &U2LOptions {
        &self.options
    }

    /// Convert a string
    pub fn decompose_str(&self, text: &str) -> ConversionOutput {
        let code_points: Vec<char> = text.chars().collect();
        self.decompose(&code_points)
    }

    /// Convert a code-point sequence; never fails, problems become diagnostics
    #[tracing::instrument(level = "debug", skip_all, fields(len = code_points.len()))]
    pub fn decompose(&self, code_points: &[char]) -> ConversionOutput {
        let mut state = ConversionState::new(code_points);

        while let Some((c, position)) = state.advance() {
            trace!(
                code_point = format_args!("U+{:04X}", c as u32),
                line = position.line,
                column = position.column,
                "decompose"
            );

            if is_combining_mark(c) {
                self.stray_marks(&mut state, c, position);
                continue;
            }

            let unit = match self.tables.structural().script(c) {
                Some((kind, base)) => self.script_run(&mut state, kind, base, position),
                None => self.render_char(c, position, 0, &mut state.diagnostics),
            };

            if is_line_break(c) {
                state.output.push(unit);
                continue;
            }

            let marks = state.advance_while(is_combining_mark);
            if marks.is_empty() {
                state.output.push(unit);
            } else {
                let unit = self.apply_marks(unit, &marks, &mut state.diagnostics);
                state.output.push(unit);
            }
        }

        debug!(diagnostics = state.diagnostics.len(), "decompose finished");
        ConversionOutput::with_diagnostics(state.output.finish(), state.diagnostics)
    }

    /// Combining marks with nothing to attach to
    fn stray_marks(&self, state: &mut ConversionState<'_>, first: char, position: Position) {
        let mut marks = vec![(first, position)];
        marks.extend(state.advance_while(is_combining_mark));

        for &(mark, at) in &marks {
            record(
                &mut state.diagnostics,
                Diagnostic::new(DiagnosticKind::MalformedAccentSequence, at).with_char(mark),
            );
        }

        let placeholder = Fragment::verbatim(' ');
        let unit = self.apply_marks(placeholder, &marks, &mut state.diagnostics);
        state.output.push(unit);
    }

    /// A run of same-kind sub/superscripts as one `^{...}` or `_{...}` group
    fn script_run(
        &self,
        state: &mut ConversionState<'_>,
        kind: ScriptKind,
        first: char,
        position: Position,
    ) -> Fragment {
        let structural = self.tables.structural();
        let mut bases = vec![first];
        let rest = state.advance_while(|c| matches!(structural.script(c), Some((k, _)) if k == kind));
        bases.extend(
            rest.into_iter()
                .filter_map(|(c, _)| structural.script(c).map(|(_, base)| base)),
        );

        let inner = self.render_run(&bases, position, 1, &mut state.diagnostics);
        Fragment::Latex(format!("{}{{{}}}", kind.operator(), inner))
    }

    /// Render characters into a standalone string
    fn render_run(
        &self,
        chars: &[char],
        position: Position,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        let mut out = OutputBuffer::new();
        let mut i = 0;
        while i < chars.len() {
            let unit = self.render_char(chars[i], position, depth, diagnostics);
            let marks_end = chars[i + 1..]
                .iter()
                .position(|&c| !is_combining_mark(c))
                .map_or(chars.len(), |n| i + 1 + n);
            let marks: Vec<(char, Position)> = chars[i + 1..marks_end]
                .iter()
                .map(|&mark| (mark, position))
                .collect();
            if marks.is_empty() {
                out.push(unit);
            } else {
                out.push(self.apply_marks(unit, &marks, diagnostics));
            }
            i = marks_end;
        }
        out.finish()
    }

    /// Wrap `unit` with `marks`, the first mark innermost
    fn apply_marks(
        &self,
        unit: Fragment,
        marks: &[(char, Position)],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Fragment {
        if !self.options.convert_accents {
            let mut text = unit.render();
            text.extend(marks.iter().map(|&(mark, _)| mark));
            return match unit {
                Fragment::Verbatim(_) => Fragment::Verbatim(text),
                _ => Fragment::Latex(text),
            };
        }

        let mut text = unit.render();
        let mut applied = 0;
        for (i, &(mark, position)) in marks.iter().enumerate() {
            match self.accents_for(mark) {
                Some(specs) => {
                    for spec in specs {
                        if applied == MAX_NESTING_DEPTH {
                            record(
                                diagnostics,
                                Diagnostic::new(DiagnosticKind::NestingTooDeep, position)
                                    .with_detail(format!(
                                        "more than {} accents on one character",
                                        MAX_NESTING_DEPTH
                                    )),
                            );
                            text.extend(marks[i..].iter().map(|&(mark, _)| mark));
                            return Fragment::Latex(text);
                        }
                        text = spec.wrap(&text, self.options.accent_mode);
                        applied += 1;
                    }
                }
                None => {
                    record(
                        diagnostics,
                        Diagnostic::new(DiagnosticKind::UnconvertibleCharacter, position)
                            .with_char(mark),
                    );
                    text.push(mark);
                }
            }
        }
        Fragment::Latex(text)
    }

    /// Accent commands for a mark, going through its canonical decomposition
    /// when the mark itself has no entry (U+0344 → U+0308 U+0301)
    fn accents_for(&self, mark: char) -> Option<Vec<&'static AccentSpec>> {
        let structural = self.tables.structural();
        if let Some(spec) = structural.accent(mark) {
            return Some(vec![spec]);
        }
        let mut parts = Vec::new();
        decompose_canonical(mark, |d| parts.push(d));
        if parts == [mark] {
            return None;
        }
        parts.into_iter().map(|d| structural.accent(d)).collect()
    }

    /// Render one character (no following marks)
    fn render_char(
        &self,
        c: char,
        position: Position,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Fragment {
        if depth > MAX_NESTING_DEPTH {
            record(
                diagnostics,
                Diagnostic::new(DiagnosticKind::NestingTooDeep, position).with_char(c),
            );
            return Fragment::verbatim(c);
        }

        if let Some(latex) = self.tables.override_for(c) {
            return Fragment::Latex(latex.to_string());
        }

        if self.options.prefer_unicode_math && !c.is_ascii() {
            if let Some(command) = self.tables.math().to_latex(c) {
                return Fragment::Latex(command.to_string());
            }
        }

        if let Some(fragment) = self.render_canonical(c, position, depth, diagnostics) {
            return fragment;
        }

        let structural = self.tables.structural();

        if let Some(styled) = structural.styled(c) {
            return self.render_styled(styled, position, depth, diagnostics);
        }

        if let Some((kind, base)) = structural.script(c) {
            let inner = self.render_run(&[base], position, depth + 1, diagnostics);
            return Fragment::Latex(format!("{}{{{}}}", kind.operator(), inner));
        }

        if let Some((numerator, denominator)) = structural.fraction(c) {
            return Fragment::Latex(format!("\\sfrac{{{}}}{{{}}}", numerator, denominator));
        }

        if let Some(letters) = structural.ligature(c) {
            let letters: Vec<char> = letters.chars().collect();
            return Fragment::Latex(self.render_run(&letters, position, depth + 1, diagnostics));
        }

        if let Some(base) = structural.small_form(c) {
            let inner = self.render_run(&[base], position, depth + 1, diagnostics);
            return Fragment::Latex(format!("{{\\scriptsize{{{}}}}}", inner));
        }

        if let Some(command) = structural.text_letter(c) {
            return Fragment::Latex(command.to_string());
        }

        if self.options.convert_quotes {
            if let Some(quote) = structural.quote(c) {
                return Fragment::Latex(quote.to_string());
            }
        }

        if self.options.convert_dashes {
            if let Some(dash) = structural.dash(c) {
                return Fragment::Latex(dash.to_string());
            }
        }

        if let Some(command) = self.tables.greek().to_latex(c) {
            return Fragment::Latex(command.to_string());
        }

        if let Some(command) = self.tables.math().to_latex(c) {
            return Fragment::Latex(command.to_string());
        }

        if c.is_ascii() {
            return Fragment::verbatim(c);
        }

        record(
            diagnostics,
            Diagnostic::new(DiagnosticKind::UnconvertibleCharacter, position).with_char(c),
        );
        Fragment::verbatim(c)
    }

    /// Precomposed letters and canonical singletons
    fn render_canonical(
        &self,
        c: char,
        position: Position,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<Fragment> {
        let mut parts = Vec::new();
        decompose_canonical(c, |d| parts.push(d));
        let (&base, marks) = parts.split_first()?;
        if base == c || is_combining_mark(base) || !marks.iter().all(|&m| is_combining_mark(m)) {
            return None;
        }
        // Negated relations (≠ is = U+0338) belong to the symbol tables
        if !base.is_alphabetic() && !marks.iter().all(|&m| self.accents_for(m).is_some()) {
            return None;
        }

        let unit = self.render_char(base, position, depth + 1, diagnostics);
        if marks.is_empty() {
            return Some(unit);
        }
        let marks: Vec<(char, Position)> = marks.iter().map(|&mark| (mark, position)).collect();
        Some(self.apply_marks(unit, &marks, diagnostics))
    }

    fn render_styled(
        &self,
        styled: StyledChar,
        position: Position,
        depth: usize,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Fragment {
        if !self.options.add_font_modifiers {
            return self.render_char(styled.base, position, depth + 1, diagnostics);
        }

        if self.options.prefer_unicode_math {
            if let Some(name) = self.glyph_name(styled.base) {
                return Fragment::Latex(styled.style.glyph_command(&name));
            }
        }

        let inner = self
            .render_char(styled.base, position, depth + 1, diagnostics)
            .render();
        Fragment::Styled {
            command: styled.style.command(),
            inner,
        }
    }

    /// Name used in unicode-math per-glyph commands (`A`, `zero`, `alpha`)
    fn glyph_name(&self, base: char) -> Option<String> {
        if base.is_ascii_alphabetic() {
            return Some(base.to_string());
        }
        if let Some(digit) = base.to_digit(10) {
            return Some(DIGIT_NAMES[digit as usize].to_string());
        }
        let command = self
            .tables
            .greek()
            .to_latex(base)
            .or_else(|| self.tables.math().to_latex(base))?;
        let name = command.strip_prefix('\\')?;
        name.chars()
            .all(|ch| ch.is_ascii_alphabetic())
            .then(|| name.to_string())
    }
}

/// Convert code points with the built-in tables
pub fn decompose(code_points: &[char], options: &U2LOptions) -> ConversionOutput {
    Decomposer::with_options(options.clone()).decompose(code_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        Decomposer::with_options(U2LOptions::default())
            .decompose_str(input)
            .content
    }

    fn convert_with(input: &str, options: U2LOptions) -> ConversionOutput {
        Decomposer::with_options(options).decompose_str(input)
    }

    #[test]
    fn test_plain_ascii_untouched() {
        assert_eq!(convert("Hello, world! \\x {y}"), "Hello, world! \\x {y}");
    }

    #[test]
    fn test_precomposed_accents() {
        assert_eq!(convert("é"), "\\'{e}");
        assert_eq!(convert("Ç"), "\\c{C}");
        assert_eq!(convert("ñ"), "\\~{n}");
        assert_eq!(convert("ő"), "\\H{o}");
        assert_eq!(convert("ǎ"), "\\v{a}");
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(convert("C\u{0327}"), "\\c{C}");
        assert_eq!(convert("e\u{0301}"), convert("é"));
    }

    #[test]
    fn test_stacked_accents() {
        assert_eq!(convert("ṩ"), "\\.{\\d{s}}");
        assert_eq!(convert("s\u{0323}\u{0307}"), "\\.{\\d{s}}");
        assert_eq!(convert("é\u{0323}"), "\\d{\\'{e}}");
    }

    #[test]
    fn test_accent_on_converted_base() {
        assert_eq!(convert("ά"), "\\'{\\alpha}");
        assert_eq!(convert("𝐀\u{0301}"), "\\'{\\symbf{A}}");
    }

    #[test]
    fn test_math_accent_mode() {
        let options = U2LOptions {
            accent_mode: AccentMode::Math,
            ..U2LOptions::default()
        };
        assert_eq!(convert_with("é", options.clone()).content, "\\acute{e}");
        assert_eq!(convert_with("ç", options.clone()).content, "\\c{c}");
        assert_eq!(convert_with("ä", options).content, "\\ddot{a}");
    }

    #[test]
    fn test_auto_accent_mode_matches_text() {
        let auto = U2LOptions {
            accent_mode: AccentMode::Auto,
            ..U2LOptions::default()
        };
        assert_eq!(convert_with("ü", auto).content, convert("ü"));
    }

    #[test]
    fn test_accents_disabled() {
        let output = convert_with("é and e\u{0301}", U2LOptions::verbatim());
        assert_eq!(output.content, "e\u{0301} and e\u{0301}");
        assert!(!output.has_diagnostics());
    }

    #[test]
    fn test_decomposing_combining_mark() {
        // U+0344 is diaeresis + acute
        assert_eq!(convert("i\u{0344}"), "\\'{\\\"{i}}");
    }

    #[test]
    fn test_unknown_mark_is_diagnosed() {
        let output = convert_with("a\u{0362}", U2LOptions::default());
        assert_eq!(output.content, "a\u{0362}");
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::UnconvertibleCharacter
        );
    }

    #[test]
    fn test_mark_diagnostics_use_mark_position() {
        let output = convert_with("ab\u{0362}", U2LOptions::default());
        assert_eq!(output.diagnostics[0].position, Position::new(1, 3));

        let input = format!("x\na{}", "\u{0301}".repeat(MAX_NESTING_DEPTH + 1));
        let output = convert_with(&input, U2LOptions::default());
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::NestingTooDeep);
        assert_eq!(
            output.diagnostics[0].position,
            Position::new(2, MAX_NESTING_DEPTH + 2)
        );
    }

    #[test]
    fn test_stray_mark() {
        let output = convert_with("\u{0301}a", U2LOptions::default());
        assert_eq!(output.content, "\\'{ }a");
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::MalformedAccentSequence
        );
        assert_eq!(output.diagnostics[0].position, Position::new(1, 1));
    }

    #[test]
    fn test_stray_mark_after_newline() {
        let output = convert_with("ab\n\u{0300}", U2LOptions::default());
        assert_eq!(output.content, "ab\n\\`{ }");
        assert_eq!(output.diagnostics[0].position, Position::new(2, 1));
    }

    #[test]
    fn test_too_many_accents() {
        let input = format!("a{}", "\u{0301}".repeat(MAX_NESTING_DEPTH + 2));
        let output = convert_with(&input, U2LOptions::default());
        assert!(output.content.ends_with("}\u{0301}\u{0301}"));
        assert_eq!(output.content.matches("\\'{").count(), MAX_NESTING_DEPTH);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::NestingTooDeep);
    }

    #[test]
    fn test_greek() {
        assert_eq!(convert("α"), "\\alpha");
        assert_eq!(convert("αβ"), "\\alpha\\beta");
        assert_eq!(convert("αb"), "\\alpha b");
        assert_eq!(convert("α1"), "\\alpha1");
        assert_eq!(convert("ε ϵ φ ϕ"), "\\varepsilon \\epsilon \\varphi \\phi");
    }

    #[test]
    fn test_math_symbols() {
        assert_eq!(convert("a×b"), "a\\times b");
        assert_eq!(convert("∞"), "\\infty");
        assert_eq!(convert("x→y"), "x\\rightarrow y");
        assert_eq!(convert("a—b"), "a---b");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(convert("⅖"), "\\sfrac{2}{5}");
        assert_eq!(convert("1½"), "1\\sfrac{1}{2}");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(convert("x²"), "x^{2}");
        assert_eq!(convert("x²³"), "x^{23}");
        assert_eq!(convert("H₂O"), "H_{2}O");
        assert_eq!(convert("x²₃"), "x^{2}_{3}");
        assert_eq!(convert("eᵅ"), "e^{\\alpha}");
        assert_eq!(convert("xᵅᵇ"), "x^{\\alpha b}");
    }

    #[test]
    fn test_ligatures() {
        assert_eq!(convert("ﬁne"), "fine");
        assert_eq!(convert("ǅ"), "D\\v{z}");
    }

    #[test]
    fn test_small_forms() {
        assert_eq!(convert("\u{FE56}"), "{\\scriptsize{?}}");
    }

    #[test]
    fn test_text_letters() {
        assert_eq!(convert("Straße"), "Stra\\ss e");
        assert_eq!(convert("Æon"), "\\AE on");
        assert_eq!(convert("ø."), "\\o.");
    }

    #[test]
    fn test_font_styles() {
        assert_eq!(convert("𝐀"), "\\symbf{A}");
        assert_eq!(convert("𝐀𝐁"), "\\symbf{AB}");
        assert_eq!(convert("𝐀𝐴"), "\\symbf{A}\\symit{A}");
        assert_eq!(convert("ℝ"), "\\symbb{R}");
        assert_eq!(convert("𝔄"), "\\symfrak{A}");
        assert_eq!(convert("𝛂𝛃"), "\\symbf{\\alpha\\beta}");
        assert_eq!(convert("𝟙"), "\\symbb{1}");
    }

    #[test]
    fn test_font_modifiers_disabled() {
        let options = U2LOptions {
            add_font_modifiers: false,
            ..U2LOptions::default()
        };
        assert_eq!(convert_with("𝐀𝛂", options).content, "A\\alpha");
    }

    #[test]
    fn test_prefer_unicode_math() {
        let options = U2LOptions {
            prefer_unicode_math: true,
            ..U2LOptions::default()
        };
        assert_eq!(convert_with("𝐀", options.clone()).content, "\\mbfA");
        assert_eq!(convert_with("ℝ", options.clone()).content, "\\BbbR");
        assert_eq!(convert_with("𝛼", options.clone()).content, "\\mitalpha");
        assert_eq!(convert_with("𝟘", options.clone()).content, "\\Bbbzero");
        assert_eq!(convert_with("ℜ", options).content, "\\Re");
    }

    #[test]
    fn test_quotes_and_dashes() {
        let input = "\u{201C}a\u{201D} 1\u{2013}2";
        assert_eq!(convert_with(input, U2LOptions::typographic()).content, "``a'' 1--2");
        let output = convert_with(input, U2LOptions::default());
        assert_eq!(output.content, input);
        assert_eq!(output.diagnostics.len(), 3);
    }

    #[test]
    fn test_canonical_singleton() {
        assert_eq!(convert("\u{2126}"), "\\Omega");
        assert_eq!(convert("\u{212B}"), "\\r{A}");
    }

    #[test]
    fn test_override_beats_tables() {
        let tables = MappingTables::new().with_override('α', "\\upalpha");
        let decomposer = Decomposer::new(&tables, U2LOptions::default());
        assert_eq!(decomposer.decompose_str("αx").content, "\\upalpha x");
    }

    #[test]
    fn test_emoji_passes_through() {
        let output = convert_with("hi 😀", U2LOptions::default());
        assert_eq!(output.content, "hi 😀");
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::UnconvertibleCharacter
        );
        assert_eq!(output.diagnostics[0].position, Position::new(1, 4));
    }

    #[test]
    fn test_positions_track_lines() {
        let output = convert_with("a\nbc\u{4E2D}", U2LOptions::default());
        assert_eq!(output.diagnostics[0].position, Position::new(2, 3));
    }

    #[test]
    fn test_free_function() {
        let chars: Vec<char> = "α".chars().collect();
        assert_eq!(decompose(&chars, &U2LOptions::default()).content, "\\alpha");
    }
}
