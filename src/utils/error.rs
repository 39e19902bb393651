//! Error handling for conversions
//!
//! The Unicode → LaTeX direction never fails; it reports problems as
//! [`Diagnostic`]s inside a [`ConversionOutput`]. The LaTeX → Unicode
//! direction fails on unbalanced braces with a [`ConversionError`].

use thiserror::Error;

use super::diagnostics::Diagnostic;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// An opening brace was never closed
    #[error("Parse error at line {line}, column {column}: unterminated group")]
    UnterminatedGroup { line: usize, column: usize },
    /// A closing brace without a matching opening brace
    #[error("Parse error at line {line}, column {column}: unmatched '}}'")]
    UnmatchedGroupClose { line: usize, column: usize },
    /// Invalid input or option value
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn unterminated_group(line: usize, column: usize) -> Self {
        ConversionError::UnterminatedGroup { line, column }
    }

    pub fn unmatched_close(line: usize, column: usize) -> Self {
        ConversionError::UnmatchedGroupClose { line, column }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }

    /// Source position of a parse error
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ConversionError::UnterminatedGroup { line, column }
            | ConversionError::UnmatchedGroupClose { line, column } => Some((*line, *column)),
            _ => None,
        }
    }
}

/// Conversion output with diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Problems found during conversion, in input order
    pub diagnostics: Vec<Diagnostic>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(content: String, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            content,
            diagnostics,
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_group_display() {
        let err = ConversionError::unterminated_group(3, 7);
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("column 7"));
        assert!(msg.contains("unterminated group"));
    }

    #[test]
    fn test_unmatched_close_display() {
        let err = ConversionError::unmatched_close(1, 2);
        assert!(err.to_string().contains("unmatched '}'"));
        assert_eq!(err.location(), Some((1, 2)));
    }

    #[test]
    fn test_invalid_input() {
        let err = ConversionError::invalid("bad option");
        assert!(err.to_string().contains("Invalid input"));
        assert_eq!(err.location(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: ConversionError = io.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_output_without_diagnostics() {
        let output = ConversionOutput::new("x".to_string());
        assert!(!output.has_diagnostics());
    }
}
