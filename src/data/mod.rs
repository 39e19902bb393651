//! Data layer - Static mappings
//!
//! This module contains all static data used for Unicode ↔ LaTeX conversion:
//! - Accent and font-style tables
//! - Sub/superscripts, fractions, ligatures and other compatibility forms
//! - Greek letter and math symbol mappings

pub mod accents;
pub mod compat;
pub mod fonts;
pub mod greek;
pub mod math;
pub mod scripts;
pub mod tables;

// Re-export commonly used items
pub use accents::{lookup_accent, AccentMode, AccentSpec, ACCENTS};
pub use fonts::{italic_greek, lookup_styled, FontStyle, StyledChar};
pub use greek::GREEK_LETTERS;
pub use math::MATH_SYMBOLS;
pub use scripts::{lookup_script, ScriptKind};
pub use tables::{Direction, MappingEntry, MappingTables, StructuralTables, SymbolTable};
