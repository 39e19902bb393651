//! Conversion diagnostics
//!
//! The decomposer never aborts on bad input. Each character it cannot handle
//! cleanly produces a position-tagged [`Diagnostic`]; printing them is left to
//! the caller.
//!
//! ## Example
//!
//! ```rust
//! use unicode2latex::{unicode_to_latex_with_options, DiagnosticKind, U2LOptions};
//!
//! let output = unicode_to_latex_with_options("\u{0301}e", &U2LOptions::default());
//! assert_eq!(output.diagnostics[0].kind, DiagnosticKind::MalformedAccentSequence);
//! ```

use std::fmt;

/// Line/column in the input, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Kind of conversion problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// No rule applies and the character is not ASCII; passed through verbatim
    UnconvertibleCharacter,
    /// A combining mark with no base character
    MalformedAccentSequence,
    /// Recursion limit hit; the rest of the unit is passed through verbatim
    NestingTooDeep,
}

impl DiagnosticKind {
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::UnconvertibleCharacter => "could not convert character",
            DiagnosticKind::MalformedAccentSequence => "combining mark without a base character",
            DiagnosticKind::NestingTooDeep => "nesting too deep",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub position: Position,
    pub kind: DiagnosticKind,
    /// Free-form detail, usually the offending code point
    pub detail: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Self {
            position,
            kind,
            detail: String::new(),
        }
    }

    /// Add detail text
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Describe the offending character as `'x' (U+XXXX)`
    pub fn with_char(self, c: char) -> Self {
        self.with_detail(describe_char(c))
    }
}

/// `'é' (U+00E9)`; combining marks are shown on a dotted circle
pub fn describe_char(c: char) -> String {
    if unicode_normalization::char::is_combining_mark(c) {
        format!("'\u{25CC}{}' (U+{:04X})", c, c as u32)
    } else if c.is_control() {
        format!("U+{:04X}", c as u32)
    } else {
        format!("'{}' (U+{:04X})", c, c as u32)
    }
}

impl Diagnostic {
    /// Display form with the location given as `source:line:column`
    pub fn located<'a>(&'a self, source: &'a str) -> impl fmt::Display + 'a {
        Located {
            diag: self,
            source: Some(source),
        }
    }
}

struct Located<'a> {
    diag: &'a Diagnostic,
    source: Option<&'a str>,
}

impl fmt::Display for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: warning: message: detail
        //           --> [source:]line L:C
        let diag = self.diag;
        write!(f, "warning: {}", diag.kind)?;
        if !diag.detail.is_empty() {
            write!(f, ": {}", diag.detail)?;
        }
        match self.source {
            Some(source) => write!(f, "\n  --> {}:{}", source, diag.position),
            None => write!(f, "\n  --> line {}", diag.position),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let located = Located {
            diag: self,
            source: None,
        };
        fmt::Display::fmt(&located, f)
    }
}

/// Diagnostics of one conversion with per-kind counts
#[derive(Debug, Default)]
pub struct DiagnosticReport {
    pub diagnostics: Vec<Diagnostic>,
    pub unconvertible: usize,
    pub malformed: usize,
    pub too_deep: usize,
}

impl DiagnosticReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut report = Self::new();
        for diag in diagnostics {
            report.add(diag.clone());
        }
        report
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.kind {
            DiagnosticKind::UnconvertibleCharacter => self.unconvertible += 1,
            DiagnosticKind::MalformedAccentSequence => self.malformed += 1,
            DiagnosticKind::NestingTooDeep => self.too_deep += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        fn plural(n: usize, what: &str) -> String {
            format!("{} {}{}", n, what, if n == 1 { "" } else { "s" })
        }

        let mut parts = Vec::new();
        if self.unconvertible > 0 {
            parts.push(plural(self.unconvertible, "unconvertible character"));
        }
        if self.malformed > 0 {
            parts.push(plural(self.malformed, "malformed accent"));
        }
        if self.too_deep > 0 {
            parts.push(plural(self.too_deep, "nesting overflow"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Format diagnostics for terminal output
pub fn format_diagnostics(diagnostics: &[Diagnostic], use_color: bool) -> String {
    render_report(diagnostics, None, use_color)
}

/// Format diagnostics for terminal output, tagging each with the input name
pub fn format_diagnostics_in(
    diagnostics: &[Diagnostic],
    source: &str,
    use_color: bool,
) -> String {
    render_report(diagnostics, Some(source), use_color)
}

fn render_report(diagnostics: &[Diagnostic], source: Option<&str>, use_color: bool) -> String {
    let report = DiagnosticReport::from_diagnostics(diagnostics);
    let mut output = String::new();

    for diag in &report.diagnostics {
        let located = Located { diag, source };
        if use_color {
            let color = match diag.kind {
                DiagnosticKind::MalformedAccentSequence => "\x1b[31m",
                _ => "\x1b[33m",
            };
            output.push_str(color);
            output.push_str(&located.to_string());
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", located));
        }
    }

    if use_color {
        output.push_str(if report.is_empty() {
            "\x1b[32m"
        } else {
            "\x1b[33m"
        });
    }

    output.push_str(&format!("Summary: {}", report.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_layout() {
        let diag = Diagnostic::new(DiagnosticKind::UnconvertibleCharacter, Position::new(2, 5))
            .with_char('😀');
        let text = diag.to_string();
        assert!(text.starts_with("warning: could not convert character"));
        assert!(text.contains("U+1F600"));
        assert!(text.ends_with("--> line 2:5"));
    }

    #[test]
    fn test_combining_mark_description() {
        assert_eq!(describe_char('\u{0301}'), "'\u{25CC}\u{0301}' (U+0301)");
        assert_eq!(describe_char('\n'), "U+000A");
    }

    #[test]
    fn test_summary_format() {
        let mut report = DiagnosticReport::new();
        assert_eq!(report.summary(), "no issues found");
        report.add(Diagnostic::new(
            DiagnosticKind::UnconvertibleCharacter,
            Position::default(),
        ));
        report.add(Diagnostic::new(
            DiagnosticKind::UnconvertibleCharacter,
            Position::default(),
        ));
        report.add(Diagnostic::new(
            DiagnosticKind::MalformedAccentSequence,
            Position::default(),
        ));
        let summary = report.summary();
        assert!(summary.contains("2 unconvertible characters"));
        assert!(summary.contains("1 malformed accent"));
    }

    #[test]
    fn test_format_without_color() {
        let diags = vec![Diagnostic::new(
            DiagnosticKind::NestingTooDeep,
            Position::new(1, 1),
        )];
        let text = format_diagnostics(&diags, false);
        assert!(!text.contains("\x1b["));
        assert!(text.ends_with("Summary: 1 nesting overflow"));
    }

    #[test]
    fn test_format_with_source() {
        let diags = vec![Diagnostic::new(
            DiagnosticKind::UnconvertibleCharacter,
            Position::new(3, 7),
        )
        .with_char('😀')];
        let text = format_diagnostics_in(&diags, "notes.txt", false);
        assert!(text.contains("--> notes.txt:3:7"));
        assert!(!text.contains("line 3"));
        assert_eq!(
            diags[0].located("a.txt").to_string(),
            "warning: could not convert character: '😀' (U+1F600)\n  --> a.txt:3:7"
        );
    }
}
