//! Core conversion modules
//!
//! This module contains the main conversion engines:
//! - `unicode2latex`: Unicode to LaTeX decomposer
//! - `latex2unicode`: LaTeX tokenizer and Unicode reconstructor

pub mod latex2unicode;
pub mod unicode2latex;

// Re-export main types and functions from unicode2latex
pub use unicode2latex::{
    decompose, AccentMode, ConversionState, Decomposer, Fragment, OutputBuffer, U2LOptions,
    MAX_NESTING_DEPTH,
};

// Re-export main types and functions from latex2unicode
pub use latex2unicode::{reconstruct, tokenize, L2UOptions, Reconstructor, Token};
