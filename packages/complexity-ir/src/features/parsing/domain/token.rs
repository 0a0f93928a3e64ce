//! Lexical tokens
//!
//! The C-like lexer emits bare lexeme slices (`&str`); the Python-like lexer
//! emits [`Token`]s because its block structure lives in synthesized
//! `Indent`/`Dedent` tokens. Both are consumed through [`Lexeme`], so the
//! cursor and the bound classifier work over either stream.

use serde::Serialize;

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Identifier or keyword
    Name,
    /// Decimal integer literal
    Number,
    /// Arithmetic, comparison or assignment operator
    Operator,
    /// Grouping and separator characters: `( ) { } ; , :`
    Punctuation,
    /// End of a physical line
    Newline,
    /// Indentation level opened
    Indent,
    /// Indentation level closed
    Dedent,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Kinds synthesized by the lexer rather than read from the source.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof
        )
    }
}

/// A single lexical token borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    /// 1-based source line
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, line: usize) -> Self {
        Self { kind, text, line }
    }

    /// Zero-width layout token (`Newline`, `Indent`, `Dedent`, `Eof`)
    pub fn layout(kind: TokenKind, line: usize) -> Self {
        Self {
            kind,
            text: "",
            line,
        }
    }

    pub fn is_name(&self, text: &str) -> bool {
        self.kind == TokenKind::Name && self.text == text
    }
}

/// Anything with lexeme text.
pub trait Lexeme {
    fn text(&self) -> &str;
}

impl Lexeme for &str {
    fn text(&self) -> &str {
        self
    }
}

impl Lexeme for Token<'_> {
    fn text(&self) -> &str {
        self.text
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
