//! # unicode2latex
//!
//! Bidirectional transliteration between Unicode text and LaTeX commands.
//!
//! ## Features
//!
//! - **Accents**: precomposed letters and combining marks, stacked in
//!   encounter order (`ṩ` → `\.{\d{s}}`), as text or math accents
//! - **Math fonts**: the Mathematical Alphanumeric Symbols block as
//!   `\symbf{...}`-style wrappers or unicode-math glyph commands
//! - **Symbols**: Greek letters, ~250 math symbols, fractions, ligatures,
//!   sub/superscripts
//! - **Reverse direction**: tokenizes LaTeX and maps Greek and math commands
//!   back to code points, echoing everything else unchanged
//! - **Diagnostics**: unconvertible input is reported with its line and column,
//!   never fatal
//!
//! ## Usage Examples
//!
//! ```rust
//! use unicode2latex::{latex_to_unicode, unicode_to_latex};
//!
//! // Unicode → LaTeX
//! assert_eq!(unicode_to_latex("Ça × ½"), r"\c{C}a \times \sfrac{1}{2}");
//!
//! // LaTeX → Unicode
//! assert_eq!(latex_to_unicode(r"\alpha \to \infty").unwrap(), "α→∞");
//! ```
//!
//! ### Options and diagnostics
//!
//! ```rust
//! use unicode2latex::{unicode_to_latex_with_options, AccentMode, U2LOptions};
//!
//! let options = U2LOptions {
//!     accent_mode: AccentMode::Math,
//!     ..U2LOptions::default()
//! };
//! let output = unicode_to_latex_with_options("é😀", &options);
//! assert_eq!(output.content, "\\acute{e}😀");
//! assert_eq!(output.diagnostics.len(), 1);
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core conversion types
pub use crate::core::latex2unicode::{reconstruct, tokenize, L2UOptions, Reconstructor, Token};
pub use crate::core::unicode2latex::{decompose, AccentMode, Decomposer, U2LOptions};

// Re-export data types
pub use data::{Direction, MappingEntry, MappingTables};

// Re-export utilities
pub use utils::diagnostics::{
    format_diagnostics, format_diagnostics_in, Diagnostic, DiagnosticKind, Position,
};
pub use utils::error::{ConversionError, ConversionOutput, ConversionResult};

/// Convert Unicode text to LaTeX with default options
///
/// Diagnostics are dropped; use [`unicode_to_latex_with_options`] to see them.
pub fn unicode_to_latex(input: &str) -> String {
    unicode_to_latex_with_options(input, &U2LOptions::default()).content
}

/// Convert Unicode text to LaTeX with custom options
///
/// # Arguments
/// * `input` - Unicode text
/// * `options` - Conversion options
///
/// # Returns
/// LaTeX text and the diagnostics collected along the way
pub fn unicode_to_latex_with_options(input: &str, options: &U2LOptions) -> ConversionOutput {
    Decomposer::with_options(options.clone()).decompose_str(input)
}

/// Convert LaTeX to Unicode with Greek and math conversion enabled
pub fn latex_to_unicode(input: &str) -> ConversionResult<String> {
    latex_to_unicode_with_options(input, &L2UOptions::all())
}

/// Convert LaTeX to Unicode with custom options
///
/// # Errors
/// Unbalanced braces in `input`
pub fn latex_to_unicode_with_options(
    input: &str,
    options: &L2UOptions,
) -> ConversionResult<String> {
    let tokens = tokenize(input)?;
    Ok(reconstruct(&tokens, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_to_latex_basic() {
        assert_eq!(unicode_to_latex("naïve café"), "na\\\"{i}ve caf\\'{e}");
    }

    #[test]
    fn test_unicode_to_latex_math() {
        assert_eq!(unicode_to_latex("x² ≤ ∞"), "x^{2} \\leq \\infty");
    }

    #[test]
    fn test_latex_to_unicode_basic() {
        assert_eq!(latex_to_unicode("\\alpha+\\beta").unwrap(), "α+β");
    }

    #[test]
    fn test_latex_to_unicode_error() {
        let err = latex_to_unicode("\\frac{1}{2").unwrap_err();
        assert!(matches!(err, ConversionError::UnterminatedGroup { .. }));
    }

    #[test]
    fn test_latex_to_unicode_options() {
        let result = latex_to_unicode_with_options("\\alpha\\leq", &L2UOptions::new()).unwrap();
        assert_eq!(result, "\\alpha\\leq");
    }

    #[test]
    fn test_greek_round_trip() {
        for letter in "αβγδζηθικλμνξπρστυχψωΓΔΘΛΞΠΣΥΦΨΩ".chars() {
            let latex = unicode_to_latex(&letter.to_string());
            let back = latex_to_unicode(&latex).unwrap();
            assert_eq!(back, letter.to_string(), "round trip of {} via {}", letter, latex);
        }
    }

    #[test]
    fn test_round_trip_with_separator() {
        let latex = unicode_to_latex("αb");
        assert_eq!(latex, "\\alpha b");
        assert_eq!(latex_to_unicode(&latex).unwrap(), "αb");
    }

    #[test]
    fn test_documented_asymmetry() {
        let latex = unicode_to_latex("\u{2016}");
        assert_eq!(latex, "\\Vert");
        let back = latex_to_unicode(&latex).unwrap();
        assert_ne!(back, "\u{2016}");
        assert_eq!(back, "\u{2225}");
    }

    #[test]
    fn test_u2l_options_verbatim() {
        let output = unicode_to_latex_with_options("𝐀é", &U2LOptions::verbatim());
        assert_eq!(output.content, "Ae\u{0301}");
    }
}
