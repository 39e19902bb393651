//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and error reporting
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    describe_char, format_diagnostics, format_diagnostics_in, Diagnostic, DiagnosticKind,
    DiagnosticReport, Position,
};
pub use error::{ConversionError, ConversionOutput, ConversionResult};
