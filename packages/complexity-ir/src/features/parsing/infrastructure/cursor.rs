//! Token cursor shared by both extractors
//!
//! The token buffer is borrowed; only the position moves. Extractor functions
//! take the cursor explicitly (`&mut Cursor`) instead of hiding it in a parser
//! object, and every branch that returns must have advanced it.
//!
//! The cursor also carries the nesting depth of the block being extracted.
//! Extractors stop descending once it reaches [`MAX_NESTING`], which bounds
//! their recursion for any input.

use crate::features::parsing::domain::{Lexeme, MAX_NESTING};
use std::ops::Range;

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t, T> {
    tokens: &'t [T],
    pos: usize,
    depth: usize,
}

impl<'t, T: Lexeme> Cursor<'t, T> {
    pub fn new(tokens: &'t [T]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Cursor over `range` of this buffer, one nesting level deeper
    pub fn nested(&self, range: Range<usize>) -> Self {
        Self {
            tokens: self.slice(range),
            pos: 0,
            depth: self.depth + 1,
        }
    }

    /// Run `f` one nesting level deeper
    pub fn nest<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// No further nesting level may be opened
    pub fn at_nesting_limit(&self) -> bool {
        self.depth >= MAX_NESTING
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'t T> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'t T> {
        self.tokens.get(self.pos + n)
    }

    pub fn peek_text(&self) -> Option<&'t str> {
        self.peek().map(|t| t.text())
    }

    pub fn nth_text(&self, n: usize) -> Option<&'t str> {
        self.peek_nth(n).map(|t| t.text())
    }

    /// Current token has exactly this text
    pub fn at(&self, text: &str) -> bool {
        self.peek_text() == Some(text)
    }

    pub fn advance(&mut self) -> Option<&'t T> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    /// Consume the current token if it has this text
    pub fn eat(&mut self, text: &str) -> bool {
        if self.at(text) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn slice(&self, range: Range<usize>) -> &'t [T] {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        &self.tokens[start..end]
    }

    /// Index of the token closing the group opened at `open_at`, tracking
    /// nesting. `None` when input ends first.
    pub fn matching_close(&self, open_at: usize, open: &str, close: &str) -> Option<usize> {
        let mut depth = 0usize;
        for (idx, tok) in self.tokens.iter().enumerate().skip(open_at) {
            let text = tok.text();
            if text == open {
                depth += 1;
            } else if text == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
        }
        None
    }

    /// Like [`Cursor::matching_close`], but the scan also stops at any token
    /// in `stops`. Returns the index of the closing token, of the stop token,
    /// or the buffer length.
    pub fn group_end(&self, open_at: usize, open: &str, close: &str, stops: &[&str]) -> usize {
        let mut depth = 0usize;
        for (idx, tok) in self.tokens.iter().enumerate().skip(open_at) {
            let text = tok.text();
            if text == open {
                depth += 1;
            } else if text == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return idx;
                }
            } else if stops.contains(&text) {
                return idx;
            }
        }
        self.tokens.len()
    }

    /// Move forward to `pos`, clamped to the end of input. Never moves back.
    pub fn skip_to(&mut self, pos: usize) {
        self.pos = self.pos.max(pos.min(self.tokens.len()));
    }

    /// Consume a delimited group starting at the current `open` token and
    /// return the range of its inner tokens. Unterminated groups run to the
    /// end of input. Returns an empty range without moving when the current
    /// token is not `open`.
    pub fn delimited(&mut self, open: &str, close: &str) -> Range<usize> {
        if !self.at(open) {
            return self.pos..self.pos;
        }
        let start = self.pos + 1;
        match self.matching_close(self.pos, open, close) {
            Some(end) => {
                self.pos = end + 1;
                start..end
            }
            None => {
                self.pos = self.tokens.len();
                start..self.tokens.len()
            }
        }
    }
}
