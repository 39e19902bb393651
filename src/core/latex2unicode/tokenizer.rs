//! LaTeX tokenizer
//!
//! Splits LaTeX text into a flat token list. Braces are tracked only to check
//! that they balance; groups are not built into a tree.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

use crate::utils::error::{ConversionError, ConversionResult};

/// Prefix marking an active character (`active::$`)
pub const ACTIVE_PREFIX: &str = "active::";

/// Characters with a special category code, tokenized as [`Token::ActiveChar`]
pub const ACTIVE_CHARS: [char; 5] = ['$', '&', '^', '_', '~'];

/// A lexical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `\name`, with the blanks that followed it
    EscapeSequence { name: String, trailing: String },
    /// `\` followed by one non-letter
    ControlSymbol(char),
    /// Active character, named `active::X`
    ActiveChar(String),
    GroupOpen,
    GroupClose,
    PlainText(String),
    /// `%` comment body up to (not including) the newline
    Comment(String),
}

impl Token {
    pub fn escape(name: impl Into<String>) -> Self {
        Token::EscapeSequence {
            name: name.into(),
            trailing: String::new(),
        }
    }

    pub fn active(c: char) -> Self {
        Token::ActiveChar(format!("{}{}", ACTIVE_PREFIX, c))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Token::PlainText(s.into())
    }

    /// Text view of the token: `\alpha`, `active::$`, `{`, plain text
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Token::EscapeSequence { name, .. } => Cow::Owned(format!("\\{}", name)),
            Token::ControlSymbol(c) => Cow::Owned(format!("\\{}", c)),
            Token::ActiveChar(name) | Token::PlainText(name) => Cow::Borrowed(name),
            Token::GroupOpen => Cow::Borrowed("{"),
            Token::GroupClose => Cow::Borrowed("}"),
            Token::Comment(text) => Cow::Owned(format!("%{}", text)),
        }
    }

    /// Exact source spelling, so unmatched tokens can be echoed unchanged
    pub fn source(&self) -> Cow<'_, str> {
        match self {
            Token::EscapeSequence { name, trailing } => {
                Cow::Owned(format!("\\{}{}", name, trailing))
            }
            Token::ActiveChar(name) => {
                Cow::Borrowed(name.strip_prefix(ACTIVE_PREFIX).unwrap_or(name))
            }
            _ => self.as_text(),
        }
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.as_text().contains(pattern)
    }

    pub fn split(&self, pattern: &str) -> Vec<String> {
        self.as_text()
            .split(pattern)
            .map(str::to_string)
            .collect()
    }

    /// Command name of an escape sequence
    pub fn macro_name(&self) -> Option<&str> {
        match self {
            Token::EscapeSequence { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Character name of an active character (`$` for `active::$`)
    pub fn active_name(&self) -> Option<&str> {
        match self {
            Token::ActiveChar(name) => name.split(ACTIVE_PREFIX).last(),
            _ => None,
        }
    }
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    text: String,
    open_groups: Vec<(usize, usize)>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            tokens: Vec::new(),
            text: String::new(),
            open_groups: Vec::new(),
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
            taken.push(c);
        }
        taken
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.tokens.push(Token::PlainText(text));
        }
    }

    fn push(&mut self, token: Token) {
        self.flush_text();
        self.tokens.push(token);
    }

    fn escape(&mut self) {
        match self.chars.peek().copied() {
            None => self.text.push('\\'),
            Some(c) if c.is_ascii_alphabetic() => {
                let name = self.bump_while(|c| c.is_ascii_alphabetic());
                // Blanks only; a line break stays text so `\alpha\nb` reads back as `α\nb`
                let trailing = self.bump_while(|c| c == ' ' || c == '\t');
                self.push(Token::EscapeSequence { name, trailing });
            }
            Some(c) => {
                self.bump();
                self.push(Token::ControlSymbol(c));
            }
        }
    }

    fn run(mut self) -> ConversionResult<Vec<Token>> {
        loop {
            let (line, column) = (self.line, self.column);
            let Some(c) = self.bump() else { break };
            match c {
                '\\' => self.escape(),
                '{' => {
                    self.open_groups.push((line, column));
                    self.push(Token::GroupOpen);
                }
                '}' => {
                    if self.open_groups.pop().is_none() {
                        return Err(ConversionError::unmatched_close(line, column));
                    }
                    self.push(Token::GroupClose);
                }
                '%' => {
                    let body = self.bump_while(|c| c != '\n');
                    self.push(Token::Comment(body));
                }
                c if ACTIVE_CHARS.contains(&c) => self.push(Token::active(c)),
                c => self.text.push(c),
            }
        }

        if let Some(&(line, column)) = self.open_groups.last() {
            return Err(ConversionError::unterminated_group(line, column));
        }
        self.flush_text();
        Ok(self.tokens)
    }
}

/// Tokenize LaTeX text
///
/// Fails on a `}` without a matching `{` and on a `{` that is never closed;
/// both errors carry the 1-based position of the offending brace.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn tokenize(text: &str) -> ConversionResult<Vec<Token>> {
    let tokens = Lexer::new(text).run()?;
    tracing::debug!(tokens = tokens.len(), "tokenize finished");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups() {
        assert_eq!(
            tokenize("a{b}c").unwrap(),
            vec![
                Token::text("a"),
                Token::GroupOpen,
                Token::text("b"),
                Token::GroupClose,
                Token::text("c"),
            ]
        );
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(
            tokenize("\\alpha+\\beta  x").unwrap(),
            vec![
                Token::escape("alpha"),
                Token::text("+"),
                Token::EscapeSequence {
                    name: "beta".into(),
                    trailing: "  ".into(),
                },
                Token::text("x"),
            ]
        );
    }

    #[test]
    fn test_line_break_is_not_a_separator() {
        assert_eq!(
            tokenize("\\alpha \nb").unwrap(),
            vec![
                Token::EscapeSequence {
                    name: "alpha".into(),
                    trailing: " ".into(),
                },
                Token::text("\nb"),
            ]
        );
    }

    #[test]
    fn test_control_symbols() {
        assert_eq!(
            tokenize("\\'{e}\\{").unwrap(),
            vec![
                Token::ControlSymbol('\''),
                Token::GroupOpen,
                Token::text("e"),
                Token::GroupClose,
                Token::ControlSymbol('{'),
            ]
        );
    }

    #[test]
    fn test_active_chars() {
        let tokens = tokenize("$x^2$").unwrap();
        assert_eq!(tokens[0], Token::ActiveChar("active::$".into()));
        assert_eq!(tokens[2].active_name(), Some("^"));
        assert!(tokens[4].contains("::"));
    }

    #[test]
    fn test_comment() {
        assert_eq!(
            tokenize("a % {b\nc").unwrap(),
            vec![
                Token::text("a "),
                Token::Comment(" {b".into()),
                Token::text("\nc"),
            ]
        );
    }

    #[test]
    fn test_lone_trailing_backslash() {
        assert_eq!(tokenize("\\").unwrap(), vec![Token::text("\\")]);
    }

    #[test]
    fn test_unterminated_group() {
        let err = tokenize("a{b").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnterminatedGroup { line: 1, column: 2 }
        ));
    }

    #[test]
    fn test_innermost_unterminated_group() {
        let err = tokenize("{x}\n{a{b").unwrap_err();
        assert_eq!(err.location(), Some((2, 3)));
    }

    #[test]
    fn test_unmatched_close() {
        let err = tokenize("a}b").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnmatchedGroupClose { line: 1, column: 2 }
        ));
    }

    #[test]
    fn test_escaped_braces_do_not_group() {
        assert!(tokenize("\\{ a").is_ok());
    }

    #[test]
    fn test_text_views() {
        let token = Token::escape("alpha");
        assert_eq!(token.as_text(), "\\alpha");
        assert_eq!(token.macro_name(), Some("alpha"));
        let active = Token::active('&');
        assert_eq!(active.split("::"), vec!["active", "&"]);
        assert_eq!(active.source(), "&");
        assert_eq!(Token::GroupOpen.macro_name(), None);
    }

    #[test]
    fn test_source_round_trip() {
        let input = "\\foo  {x}$\\%y% note\n\\";
        let tokens = tokenize(input).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.source()).collect();
        assert_eq!(rebuilt, input);
    }
}
