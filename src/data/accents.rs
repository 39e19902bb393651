//! Combining-mark accent mappings
//!
//! Each combining diacritical mark the converter understands is described by an
//! [`AccentSpec`] holding its text-mode command (`\'{e}`) and, where LaTeX has
//! one, its math-mode command (`\acute{e}`).

use phf::phf_map;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ConversionError;

/// Which family of accent commands the decomposer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentMode {
    /// Text-mode accents, e.g. `\'{e}`
    #[default]
    Text,
    /// Math-mode accents, e.g. `\acute{e}`; falls back to the text command
    /// for marks that have no math counterpart
    Math,
    /// Context detection is not implemented: resolves to [`AccentMode::Text`]
    Auto,
}

impl AccentMode {
    /// The mode actually used when emitting commands
    pub fn resolve(self) -> AccentMode {
        match self {
            AccentMode::Auto => AccentMode::Text,
            mode => mode,
        }
    }
}

impl fmt::Display for AccentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccentMode::Text => write!(f, "text"),
            AccentMode::Math => write!(f, "math"),
            AccentMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for AccentMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(AccentMode::Text),
            "math" => Ok(AccentMode::Math),
            "auto" => Ok(AccentMode::Auto),
            other => Err(ConversionError::invalid(format!(
                "accent mode must be 'text', 'math', or 'auto', got '{}'",
                other
            ))),
        }
    }
}

/// A combining mark and the commands that express it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentSpec {
    pub combining_mark: char,
    /// Text-mode command name without the backslash (`'` for `\'`)
    pub text_command: &'static str,
    /// Math-mode command name without the backslash (`acute` for `\acute`)
    pub math_command: Option<&'static str>,
}

impl AccentSpec {
    /// Command name for the requested mode
    pub fn command(&self, mode: AccentMode) -> &'static str {
        match mode.resolve() {
            AccentMode::Math => self.math_command.unwrap_or(self.text_command),
            _ => self.text_command,
        }
    }

    /// Wrap an already rendered base as `\cmd{base}`
    pub fn wrap(&self, base: &str, mode: AccentMode) -> String {
        format!("\\{}{{{}}}", self.command(mode), base)
    }
}

const fn accent(
    combining_mark: char,
    text_command: &'static str,
    math_command: Option<&'static str>,
) -> AccentSpec {
    AccentSpec {
        combining_mark,
        text_command,
        math_command,
    }
}

/// Combining Diacritical Marks with a LaTeX accent command
pub static ACCENTS: phf::Map<char, AccentSpec> = phf_map! {
    '\u{0300}' => accent('\u{0300}', "`", Some("grave")),
    '\u{0301}' => accent('\u{0301}', "'", Some("acute")),
    '\u{0302}' => accent('\u{0302}', "^", Some("hat")),
    '\u{0303}' => accent('\u{0303}', "~", Some("tilde")),
    '\u{0304}' => accent('\u{0304}', "=", Some("bar")),
    '\u{0306}' => accent('\u{0306}', "u", Some("breve")),
    '\u{0307}' => accent('\u{0307}', ".", Some("dot")),
    '\u{0308}' => accent('\u{0308}', "\"", Some("ddot")),
    '\u{030A}' => accent('\u{030A}', "r", None),
    '\u{030B}' => accent('\u{030B}', "H", None),
    '\u{030C}' => accent('\u{030C}', "v", Some("check")),
    '\u{0323}' => accent('\u{0323}', "d", None),
    '\u{0327}' => accent('\u{0327}', "c", None),
    '\u{0328}' => accent('\u{0328}', "k", None),
    '\u{0331}' => accent('\u{0331}', "b", None),
};

/// Look up the accent for a combining mark
pub fn lookup_accent(mark: char) -> Option<&'static AccentSpec> {
    ACCENTS.get(&mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_math_commands() {
        let acute = lookup_accent('\u{0301}').unwrap();
        assert_eq!(acute.command(AccentMode::Text), "'");
        assert_eq!(acute.command(AccentMode::Math), "acute");
        assert_eq!(acute.wrap("e", AccentMode::Math), "\\acute{e}");
    }

    #[test]
    fn test_math_mode_falls_back_to_text() {
        let cedilla = lookup_accent('\u{0327}').unwrap();
        assert_eq!(cedilla.command(AccentMode::Math), "c");
        let ring = lookup_accent('\u{030A}').unwrap();
        assert_eq!(ring.wrap("a", AccentMode::Math), "\\r{a}");
    }

    #[test]
    fn test_auto_mode_is_text() {
        let grave = lookup_accent('\u{0300}').unwrap();
        assert_eq!(grave.command(AccentMode::Auto), "`");
        assert_eq!(AccentMode::Auto.resolve(), AccentMode::Text);
    }

    #[test]
    fn test_accent_mode_parsing() {
        assert_eq!("math".parse::<AccentMode>().unwrap(), AccentMode::Math);
        let err = "invalid".parse::<AccentMode>().unwrap_err();
        assert!(err.to_string().contains("accent mode must be"));
    }

    #[test]
    fn test_every_entry_is_keyed_by_its_mark() {
        for (mark, spec) in ACCENTS.entries() {
            assert_eq!(*mark, spec.combining_mark);
            assert!(unicode_normalization::char::is_combining_mark(*mark));
        }
    }
}
