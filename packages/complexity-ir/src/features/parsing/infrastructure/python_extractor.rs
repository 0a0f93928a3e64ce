//! Python-like structural extractor
//!
//! Blocks are delimited by the lexer's `Indent`/`Dedent` tokens. A `Dedent`
//! closes the innermost open block; `Eof` ends extraction at any depth.
//!
//! Recognized statements:
//! - `def name(...):` (optionally `async def`) → function
//! - `for target in source:` → loop, LINEAR when the source calls `range(...)`
//! - `while cond:` → loop, classified from the body's updates
//! - an indented block under any other header (`if`, `class`, `else`, ...) →
//!   spliced into the parent
//!
//! Every other line is opaque and skipped through its `Newline`. Past the
//! nesting limit, indented blocks and compound statements are skipped whole
//! and any loop inside them is bound as unknown.

use super::cursor::Cursor;
use super::item::Item;
use crate::features::cost_analysis::infrastructure::BoundClassifier;
use crate::features::parsing::domain::{Block, Function, Loop, LoopKind, Program, Token, TokenKind};
use std::ops::Range;

type PyCursor<'t, 's> = Cursor<'t, Token<'s>>;

const LOOP_WORDS: &[(&str, LoopKind)] = &[("for", LoopKind::For), ("while", LoopKind::While)];

/// Build the extraction tree from Python-like tokens
pub fn extract(tokens: &[Token<'_>]) -> Program {
    let mut cursor = Cursor::new(tokens);
    Program::new(parse_block(&mut cursor, false))
}

fn kind_at(cursor: &PyCursor<'_, '_>, n: usize) -> Option<TokenKind> {
    cursor.peek_nth(n).map(|t| t.kind)
}

/// Parse statements until a `Dedent` (consumed) closes a nested block, or
/// until `Eof`. A `Dedent` at top level is consumed and ignored.
fn parse_block(cursor: &mut PyCursor<'_, '_>, nested: bool) -> Block {
    let mut block = Block::default();
    while let Some(tok) = cursor.peek() {
        match tok.kind {
            TokenKind::Eof => break,
            TokenKind::Dedent => {
                cursor.advance();
                if nested {
                    break;
                }
            }
            _ => parse_statement(cursor).append_to(&mut block),
        }
    }
    block
}

fn parse_statement(cursor: &mut PyCursor<'_, '_>) -> Item {
    let start = cursor.position();
    let Some(tok) = cursor.peek() else {
        return Item::Opaque(start..start);
    };
    if cursor.at_nesting_limit() && opens_nesting(cursor) {
        return skip_nested(cursor);
    }

    match tok.kind {
        TokenKind::Indent => {
            cursor.advance();
            Item::Nested(cursor.nest(|c| parse_block(c, true)))
        }
        TokenKind::Newline => {
            cursor.advance();
            Item::Opaque(start..cursor.position())
        }
        TokenKind::Name => match tok.text {
            "def" if kind_at(cursor, 1) == Some(TokenKind::Name) => parse_def(cursor),
            "for" => Item::Node(parse_for(cursor).into()),
            "while" => Item::Node(parse_while(cursor).into()),
            "async" if cursor.nth_text(1).is_some_and(|t| t == "def" || t == "for") => {
                cursor.advance();
                parse_statement(cursor)
            }
            _ => skip_line(cursor),
        },
        _ => skip_line(cursor),
    }
}

fn parse_def(cursor: &mut PyCursor<'_, '_>) -> Item {
    cursor.advance();
    let name = cursor.advance().map(|t| t.text).unwrap_or_default();
    cursor.delimited("(", ")");
    // Return annotation, if any, up to the `:`
    header(cursor);
    let (body, _) = parse_suite(cursor);
    tracing::trace!(name, "extracted function");
    Item::Node(Function::new(name, body).into())
}

fn parse_for(cursor: &mut PyCursor<'_, '_>) -> Loop {
    cursor.advance();
    let header = header(cursor);
    let header = cursor.slice(header);
    let source = match header.iter().position(|t| t.is_name("in")) {
        Some(idx) => &header[idx + 1..],
        None => &[],
    };
    let bound = BoundClassifier::new().classify_range(source);
    let (body, _) = parse_suite(cursor);
    Loop::new(LoopKind::For, bound, body)
}

fn parse_while(cursor: &mut PyCursor<'_, '_>) -> Loop {
    cursor.advance();
    let cond = header(cursor);
    let cond = cursor.slice(cond);
    let (body, span) = parse_suite(cursor);
    let bound = BoundClassifier::new().classify_while(cond, cursor.slice(span));
    Loop::new(LoopKind::While, bound, body)
}

/// Collect a compound-statement header up to its top-level `:` (consumed).
/// Stops without consuming at the end of the line when no `:` appears.
fn header(cursor: &mut PyCursor<'_, '_>) -> Range<usize> {
    let start = cursor.position();
    let mut depth = 0usize;
    while let Some(tok) = cursor.peek() {
        if tok.kind.is_layout() {
            break;
        }
        match tok.text {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            ":" if depth == 0 => {
                let end = cursor.position();
                cursor.advance();
                return start..end;
            }
            _ => {}
        }
        cursor.advance();
    }
    start..cursor.position()
}

/// Body after a header's `:`. Either an indented block on the following
/// lines or the rest of the current line. Returns the extracted block and
/// its flat token span.
fn parse_suite(cursor: &mut PyCursor<'_, '_>) -> (Block, Range<usize>) {
    if kind_at(cursor, 0) == Some(TokenKind::Newline) && kind_at(cursor, 1) == Some(TokenKind::Indent) {
        cursor.advance();
        cursor.advance();
        let start = cursor.position();
        let block = cursor.nest(|c| parse_block(c, true));
        return (block, start..cursor.position());
    }

    let start = cursor.position();
    let span = match skip_line(cursor) {
        Item::Opaque(span) => span,
        _ => start..cursor.position(),
    };
    (Block::default(), span)
}

fn opens_nesting(cursor: &PyCursor<'_, '_>) -> bool {
    match cursor.peek() {
        Some(tok) if tok.kind == TokenKind::Indent => true,
        Some(tok) if tok.kind == TokenKind::Name => match tok.text {
            "for" | "while" => true,
            "def" => kind_at(cursor, 1) == Some(TokenKind::Name),
            "async" => cursor.nth_text(1).is_some_and(|t| t == "def" || t == "for"),
            _ => false,
        },
        _ => false,
    }
}

/// Consume an indented block, or a compound statement with its suite,
/// without descending into it.
fn skip_nested(cursor: &mut PyCursor<'_, '_>) -> Item {
    let start = cursor.position();
    if kind_at(cursor, 0) == Some(TokenKind::Indent) {
        skip_indented(cursor);
    } else {
        header(cursor);
        if kind_at(cursor, 0) == Some(TokenKind::Newline) && kind_at(cursor, 1) == Some(TokenKind::Indent) {
            cursor.advance();
            skip_indented(cursor);
        } else {
            skip_line(cursor);
        }
    }
    let span = start..cursor.position();
    Item::beyond_limit(span.clone(), cursor.slice(span), LOOP_WORDS)
}

/// From an `Indent` through its matching `Dedent`, or to `Eof`
fn skip_indented(cursor: &mut PyCursor<'_, '_>) {
    let mut depth = 0usize;
    while let Some(tok) = cursor.peek() {
        match tok.kind {
            TokenKind::Eof => return,
            TokenKind::Indent => depth += 1,
            TokenKind::Dedent => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    cursor.advance();
                    return;
                }
            }
            _ => {}
        }
        cursor.advance();
    }
}

/// Skip through the end of the current line. Stops before `Indent`,
/// `Dedent` and `Eof`, which belong to the enclosing block.
fn skip_line(cursor: &mut PyCursor<'_, '_>) -> Item {
    let start = cursor.position();
    while let Some(tok) = cursor.peek() {
        match tok.kind {
            TokenKind::Newline => {
                let end = cursor.position();
                cursor.advance();
                return Item::Opaque(start..end);
            }
            TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof => break,
            _ => {
                cursor.advance();
            }
        }
    }
    Item::Opaque(start..cursor.position())
}
