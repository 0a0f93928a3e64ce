//! Python-like lexer
//!
//! Works line by line. Block structure is reconstructed from leading
//! whitespace (space = 1 column, tab = 4) against a stack of open indentation
//! widths. Every line ends in `Newline`; at end of input every open level is
//! closed with `Dedent` before the final `Eof`, so `Indent` and `Dedent` always
//! balance.

use crate::features::parsing::domain::{is_identifier, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

const TAB_WIDTH: usize = 4;

static PY_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[A-Za-z_][A-Za-z0-9_]*",
        r"|\d+",
        r"|//=|//",
        r"|==|!=|<=|>=|\+\+|--|\+=|-=|\*=|/=",
        r"|[-+*/=<>(){};,:]",
    ))
    .expect("Python token pattern is valid")
});

/// Tokenize Python-like source. Never fails.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut indent_stack: Vec<usize> = vec![0];
    let mut last_line = 1;

    for (idx, raw) in source.split('\n').enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let code = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };

        if code.trim().is_empty() {
            tokens.push(Token::layout(TokenKind::Newline, line_no));
            continue;
        }

        let width = indent_width(code);
        let top = indent_stack.last().copied().unwrap_or(0);
        if width > top {
            indent_stack.push(width);
            tokens.push(Token::layout(TokenKind::Indent, line_no));
        } else {
            while width < indent_stack.last().copied().unwrap_or(0) {
                indent_stack.pop();
                tokens.push(Token::layout(TokenKind::Dedent, line_no));
            }
            // Dedent to a width never opened: treat it as a fresh level.
            if width > indent_stack.last().copied().unwrap_or(0) {
                indent_stack.push(width);
                tokens.push(Token::layout(TokenKind::Indent, line_no));
            }
        }

        for m in PY_TOKEN_RE.find_iter(code) {
            tokens.push(Token::new(classify(m.as_str()), m.as_str(), line_no));
        }
        tokens.push(Token::layout(TokenKind::Newline, line_no));
    }

    while indent_stack.len() > 1 {
        indent_stack.pop();
        tokens.push(Token::layout(TokenKind::Dedent, last_line));
    }
    tokens.push(Token::layout(TokenKind::Eof, last_line));
    tokens
}

fn indent_width(line: &str) -> usize {
    line.chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(TAB_WIDTH),
            _ => None,
        })
        .sum()
}

fn classify(lexeme: &str) -> TokenKind {
    if lexeme.bytes().all(|b| b.is_ascii_digit()) {
        TokenKind::Number
    } else if is_identifier(lexeme) {
        TokenKind::Name
    } else if matches!(lexeme, "(" | ")" | "{" | "}" | ";" | "," | ":") {
        TokenKind::Punctuation
    } else {
        TokenKind::Operator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::features::parsing::domain::TokenKind::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_indent_dedent_synthesis() {
        let src = "while i < n:\n    i += 1\nx = 2";
        assert_eq!(
            kinds(src),
            vec![
                Name, Name, Operator, Name, Punctuation, Newline, //
                Indent, Name, Operator, Number, Newline, //
                Dedent, Name, Operator, Number, Newline, //
                Eof,
            ]
        );
    }

    #[test]
    fn test_open_levels_closed_at_end() {
        let src = "def f():\n  for i in range(n):\n\tpass";
        let toks = tokenize(src);
        let indents = toks.iter().filter(|t| t.kind == Indent).count();
        let dedents = toks.iter().filter(|t| t.kind == Dedent).count();
        assert_eq!(indents, 2);
        assert_eq!(indents, dedents);
        assert_eq!(toks.last().map(|t| t.kind), Some(Eof));
    }

    #[test]
    fn test_blank_and_comment_lines_only_newline() {
        let src = "x = 1\n\n    # comment only\ny = 2  # trailing";
        assert_eq!(
            kinds(src),
            vec![
                Name, Operator, Number, Newline, //
                Newline, //
                Newline, //
                Name, Operator, Number, Newline, //
                Eof,
            ]
        );
    }

    #[test]
    fn test_line_numbers_and_text() {
        let toks = tokenize("a = 1\r\nb *= 2\n");
        let b = toks.iter().find(|t| t.text == "b").unwrap();
        assert_eq!(b.line, 2);
        assert!(toks.iter().any(|t| t.text == "*=" && t.kind == Operator));
    }

    #[test]
    fn test_floor_division_operators() {
        let texts: Vec<&str> = tokenize("i //= 2\nj = j // 2")
            .into_iter()
            .map(|t| t.text)
            .filter(|t| !t.is_empty())
            .collect();
        assert_eq!(texts, vec!["i", "//=", "2", "j", "=", "j", "//", "2"]);
    }

    #[test]
    fn test_inconsistent_dedent_stays_balanced() {
        let src = "if a:\n        x = 1\n    y = 2\nz = 3";
        let toks = tokenize(src);
        let indents = toks.iter().filter(|t| t.kind == Indent).count();
        let dedents = toks.iter().filter(|t| t.kind == Dedent).count();
        assert_eq!(indents, dedents);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![Newline, Eof]);
    }
}
