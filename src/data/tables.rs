//! Mapping tables shared by both conversion directions
//!
//! Symbolic tables (Greek, math) are built from [`MappingEntry`] lists. The
//! forward map (code point → command) and the reverse map (command name →
//! code point) are each built from the entries allowed in that direction, so
//! one-way entries never leak into the other side.
//!
//! Structural tables (accents, fonts, scripts, fractions, ligatures) are
//! compile-time `phf` maps and are reached through [`StructuralTables`].

use fxhash::FxHashMap;
use lazy_static::lazy_static;

use super::accents::{lookup_accent, AccentSpec};
use super::compat::{DASHES, FRACTIONS, LIGATURES, QUOTES, SMALL_FORMS, TEXT_LETTERS};
use super::fonts::{lookup_styled, StyledChar};
use super::greek::GREEK_LETTERS;
use super::math::MATH_SYMBOLS;
use super::scripts::{lookup_script, ScriptKind};

/// Which conversions an entry takes part in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Both,
    /// Unicode → LaTeX only
    ForwardOnly,
    /// LaTeX → Unicode only
    ReverseOnly,
}

impl Direction {
    pub fn forward(self) -> bool {
        matches!(self, Direction::Both | Direction::ForwardOnly)
    }

    pub fn reverse(self) -> bool {
        matches!(self, Direction::Both | Direction::ReverseOnly)
    }
}

/// One code point ↔ command pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub code_point: char,
    /// LaTeX spelling, including the backslash for commands
    pub command: &'static str,
    pub direction: Direction,
}

impl MappingEntry {
    pub const fn both(code_point: char, command: &'static str) -> Self {
        Self {
            code_point,
            command,
            direction: Direction::Both,
        }
    }

    pub const fn forward_only(code_point: char, command: &'static str) -> Self {
        Self {
            code_point,
            command,
            direction: Direction::ForwardOnly,
        }
    }

    pub const fn reverse_only(code_point: char, command: &'static str) -> Self {
        Self {
            code_point,
            command,
            direction: Direction::ReverseOnly,
        }
    }

    /// Command name as the tokenizer sees it (`alpha` for `\alpha`)
    pub fn command_name(&self) -> Option<&'static str> {
        self.command.strip_prefix('\\')
    }
}

/// Forward and reverse maps built from one entry list
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    forward: FxHashMap<char, &'static str>,
    reverse: FxHashMap<&'static str, char>,
}

impl SymbolTable {
    /// Build both maps; the first entry for a key wins
    pub fn from_entries(entries: &[MappingEntry]) -> Self {
        let mut table = SymbolTable::default();
        for entry in entries {
            if entry.direction.forward() {
                table
                    .forward
                    .entry(entry.code_point)
                    .or_insert(entry.command);
            }
            if entry.direction.reverse() {
                if let Some(name) = entry.command_name() {
                    table.reverse.entry(name).or_insert(entry.code_point);
                }
            }
        }
        table
    }

    /// LaTeX for a code point
    pub fn to_latex(&self, c: char) -> Option<&'static str> {
        self.forward.get(&c).copied()
    }

    /// Code point for a command name given without the backslash
    pub fn to_unicode(&self, name: &str) -> Option<char> {
        self.reverse.get(name).copied()
    }

    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    pub fn reverse_len(&self) -> usize {
        self.reverse.len()
    }
}

/// Lookups into the compile-time structural maps
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralTables;

impl StructuralTables {
    pub fn accent(&self, mark: char) -> Option<&'static AccentSpec> {
        lookup_accent(mark)
    }

    pub fn styled(&self, c: char) -> Option<StyledChar> {
        lookup_styled(c)
    }

    pub fn script(&self, c: char) -> Option<(ScriptKind, char)> {
        lookup_script(c)
    }

    pub fn fraction(&self, c: char) -> Option<(&'static str, &'static str)> {
        FRACTIONS.get(&c).copied()
    }

    pub fn ligature(&self, c: char) -> Option<&'static str> {
        LIGATURES.get(&c).copied()
    }

    pub fn small_form(&self, c: char) -> Option<char> {
        SMALL_FORMS.get(&c).copied()
    }

    pub fn text_letter(&self, c: char) -> Option<&'static str> {
        TEXT_LETTERS.get(&c).copied()
    }

    pub fn quote(&self, c: char) -> Option<&'static str> {
        QUOTES.get(&c).copied()
    }

    pub fn dash(&self, c: char) -> Option<&'static str> {
        DASHES.get(&c).copied()
    }
}

/// Every table both engines consult
///
/// Immutable once built. The built-in instance is shared process-wide through
/// [`MappingTables::builtin`]; callers wanting overrides build their own.
#[derive(Debug, Clone)]
pub struct MappingTables {
    structural: StructuralTables,
    greek: SymbolTable,
    math: SymbolTable,
    overrides: FxHashMap<char, String>,
}

lazy_static! {
    static ref BUILTIN_TABLES: MappingTables = MappingTables::new();
}

impl MappingTables {
    /// Tables with the built-in Greek and math entries
    pub fn new() -> Self {
        Self::from_entries(GREEK_LETTERS, MATH_SYMBOLS)
    }

    /// Shared built-in tables
    pub fn builtin() -> &'static MappingTables {
        &BUILTIN_TABLES
    }

    /// Tables with caller-supplied symbolic entries
    pub fn from_entries(greek: &[MappingEntry], math: &[MappingEntry]) -> Self {
        Self {
            structural: StructuralTables,
            greek: SymbolTable::from_entries(greek),
            math: SymbolTable::from_entries(math),
            overrides: FxHashMap::default(),
        }
    }

    /// Register a code point → text mapping that beats every other rule
    pub fn with_override(mut self, c: char, latex: impl Into<String>) -> Self {
        self.overrides.insert(c, latex.into());
        self
    }

    pub fn structural(&self) -> &StructuralTables {
        &self.structural
    }

    pub fn greek(&self) -> &SymbolTable {
        &self.greek
    }

    pub fn math(&self) -> &SymbolTable {
        &self.math
    }

    pub fn override_for(&self, c: char) -> Option<&str> {
        self.overrides.get(&c).map(String::as_str)
    }
}

impl Default for MappingTables {
    fn default() -> Self {
        Self::new()
    }
}
