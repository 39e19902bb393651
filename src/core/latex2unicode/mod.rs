//! LaTeX to Unicode conversion module
//!
//! A flat token-to-text rewrite: escape sequences and active characters that
//! name a Greek letter or math symbol become that code point, and everything
//! else is echoed with its original spelling. Command arguments are not
//! evaluated, so `\'{e}` stays `\'{e}`.
//!
//! # Module Structure
//!
//! - `tokenizer`: LaTeX text → [`Token`]s
//!
//! # Example
//!
//! ```rust
//! use unicode2latex::core::latex2unicode::{reconstruct, tokenize, L2UOptions};
//!
//! let tokens = tokenize(r"\alpha \leq \beta").unwrap();
//! assert_eq!(reconstruct(&tokens, &L2UOptions::all()), "α≤β");
//! ```

pub mod tokenizer;

use crate::data::{italic_greek, MappingTables};

pub use tokenizer::{tokenize, Token, ACTIVE_CHARS, ACTIVE_PREFIX};

// =============================================================================
// LaTeX → Unicode Conversion Options
// =============================================================================

/// Options for LaTeX to Unicode conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L2UOptions {
    /// Replace Greek letter commands (`\alpha` → `α`)
    /// Default: false
    pub convert_greek: bool,

    /// Replace math symbol commands (`\leq` → `≤`)
    /// Default: false
    pub convert_math: bool,

    /// Emit Greek letters from the Mathematical Italic block (`\alpha` → `𝛼`)
    /// Default: false
    pub italic_greek: bool,
}

impl L2UOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Greek and math conversion on
    pub fn all() -> Self {
        Self {
            convert_greek: true,
            convert_math: true,
            italic_greek: false,
        }
    }
}

/// Reverse converter over injected tables
#[derive(Debug, Clone)]
pub struct Reconstructor<'t> {
    tables: &'t MappingTables,
    options: L2UOptions,
}

impl Reconstructor<'static> {
    /// Reconstructor over the built-in tables
    pub fn with_options(options: L2UOptions) -> Self {
        Self::new(MappingTables::builtin(), options)
    }
}

impl<'t> Reconstructor<'t> {
    pub fn new(tables: &'t MappingTables, options: L2UOptions) -> Self {
        Self { tables, options }
    }

    pub fn options(&self) -> &L2UOptions {
        &self.options
    }

    /// Code point for a command or active-character name, if enabled
    pub fn lookup(&self, name: &str) -> Option<char> {
        if self.options.convert_greek {
            if let Some(c) = self.tables.greek().to_unicode(name) {
                if self.options.italic_greek {
                    return Some(italic_greek(c).unwrap_or(c));
                }
                return Some(c);
            }
        }
        if self.options.convert_math {
            return self.tables.math().to_unicode(name);
        }
        None
    }

    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn reconstruct(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        for token in tokens {
            match token {
                // The blanks after a replaced command were only its separator
                Token::EscapeSequence { name, .. } => match self.lookup(name) {
                    Some(c) => out.push(c),
                    None => out.push_str(&token.source()),
                },
                Token::ActiveChar(_) => {
                    let name = token.active_name().unwrap_or_default();
                    match self.lookup(name) {
                        Some(c) => out.push(c),
                        None => out.push_str(&token.source()),
                    }
                }
                _ => out.push_str(&token.source()),
            }
        }
        out
    }
}

/// Reconstruct with the built-in tables
pub fn reconstruct(tokens: &[Token], options: &L2UOptions) -> String {
    Reconstructor::with_options(options.clone()).reconstruct(tokens)
}
