//! C-like structural extractor
//!
//! Recognizes only function definitions and loop headers. Everything else is
//! an opaque statement skipped to its `;`.
//!
//! Dispatch per statement position:
//! - `for` / `while` / `do` → loop, bound classified from the header
//! - `ident ident ( ... ) {` → function (no keyword needed)
//! - `{` → bare block, statements spliced into the parent
//! - anything else → opaque
//!
//! Loop bodies are first collected as a flat, brace-balanced token span so a
//! `while` classifier can scan the body for updates, then extracted from that
//! span. Past [`MAX_NESTING`](crate::features::parsing::domain::MAX_NESTING)
//! levels, loops and blocks are consumed flat and bound as unknown.

use super::cursor::Cursor;
use super::item::Item;
use crate::features::cost_analysis::infrastructure::BoundClassifier;
use crate::features::parsing::domain::{is_identifier, Block, Function, Loop, LoopKind, Program};
use std::ops::Range;

type CCursor<'t, 's> = Cursor<'t, &'s str>;

/// Words that may precede `(` but never name a function
const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "return", "sizeof", "goto",
];

/// Tokens that cannot occur inside a parameter list or call arguments
const GROUP_STOPS: &[&str] = &[";", "{", "}", "for", "while", "do"];

const LOOP_WORDS: &[(&str, LoopKind)] = &[
    ("for", LoopKind::For),
    ("while", LoopKind::While),
    ("do", LoopKind::While),
];

/// Build the extraction tree from C-like lexemes
pub fn extract(tokens: &[&str]) -> Program {
    let mut cursor = Cursor::new(tokens);
    Program::new(parse_block(&mut cursor, false))
}

/// Parse statements until the closing `}` of a nested block (consumed) or
/// end of input. A stray `}` at top level is consumed and ignored.
fn parse_block(cursor: &mut CCursor<'_, '_>, nested: bool) -> Block {
    let mut block = Block::default();
    while let Some(tok) = cursor.peek_text() {
        if tok == "}" {
            cursor.advance();
            if nested {
                return block;
            }
            continue;
        }
        parse_statement(cursor).append_to(&mut block);
    }
    block
}

fn parse_statement(cursor: &mut CCursor<'_, '_>) -> Item {
    if cursor.at_nesting_limit() && opens_nesting(cursor) {
        return skip_nested(cursor);
    }
    match cursor.peek_text() {
        Some("for") => Item::Node(parse_for(cursor).into()),
        Some("while") => Item::Node(parse_while(cursor).into()),
        Some("do") => Item::Node(parse_do_while(cursor).into()),
        Some("{") => {
            cursor.advance();
            Item::Nested(cursor.nest(|c| parse_block(c, true)))
        }
        _ if looks_like_function(cursor) => parse_function(cursor),
        _ => skip_statement(cursor),
    }
}

fn parse_for(cursor: &mut CCursor<'_, '_>) -> Loop {
    cursor.advance();
    let header = cursor.delimited("(", ")");
    let (_init, cond, update) = split_for_header(cursor.slice(header));
    let bound = BoundClassifier::new().classify_for(cond, update);
    let (body, _) = parse_loop_body(cursor);
    Loop::new(LoopKind::For, bound, body)
}

fn parse_while(cursor: &mut CCursor<'_, '_>) -> Loop {
    cursor.advance();
    let cond = cursor.delimited("(", ")");
    let cond = cursor.slice(cond);
    let (body, span) = parse_loop_body(cursor);
    let bound = BoundClassifier::new().classify_while(cond, cursor.slice(span));
    Loop::new(LoopKind::While, bound, body)
}

/// `do body while (cond);` is classified like a `while` loop.
fn parse_do_while(cursor: &mut CCursor<'_, '_>) -> Loop {
    cursor.advance();
    let (body, span) = parse_loop_body(cursor);
    let cond = if cursor.eat("while") {
        let cond = cursor.delimited("(", ")");
        cursor.eat(";");
        cond
    } else {
        cursor.position()..cursor.position()
    };
    let bound = BoundClassifier::new().classify_while(cursor.slice(cond), cursor.slice(span));
    Loop::new(LoopKind::While, bound, body)
}

/// Returns the body and the token span it was extracted from.
fn parse_loop_body(cursor: &mut CCursor<'_, '_>) -> (Block, Range<usize>) {
    if cursor.at("{") {
        let span = cursor.delimited("{", "}");
        let mut inner = cursor.nested(span.clone());
        return (parse_block(&mut inner, false), span);
    }
    if cursor.at("}") {
        let pos = cursor.position();
        return (Block::default(), pos..pos);
    }
    let start = cursor.position();
    let block = cursor.nest(parse_single_statement);
    (block, start..cursor.position())
}

/// Unbraced body: `x++;`, `for (...) ...`, or `if (c) { ... } else ...`.
/// A control header is skipped only up to its own body, so that body and any
/// `else` clause are taken in here as well.
fn parse_single_statement(cursor: &mut CCursor<'_, '_>) -> Block {
    let mut block = Block::default();
    loop {
        let item = parse_statement(cursor);
        let unterminated = match &item {
            Item::Opaque(span) => cursor.slice(span.clone()).last() != Some(&";"),
            _ => false,
        };
        item.append_to(&mut block);

        if cursor.eat("else") {
            continue;
        }
        if !unterminated || cursor.at("}") || cursor.is_at_end() {
            return block;
        }
    }
}

fn parse_function(cursor: &mut CCursor<'_, '_>) -> Item {
    let start = cursor.position();
    let name = cursor.nth_text(1).unwrap_or_default();
    cursor.advance();
    cursor.advance();
    cursor.delimited("(", ")");
    if !cursor.eat("{") {
        return Item::Opaque(start..cursor.position());
    }
    let body = cursor.nest(|c| parse_block(c, true));
    tracing::trace!(name, "extracted function");
    Item::Node(Function::new(name, body).into())
}

/// `identifier identifier ( ... ) {` at the cursor. The parameter scan ends
/// at the first statement boundary.
fn looks_like_function(cursor: &CCursor<'_, '_>) -> bool {
    let (Some(ret), Some(name)) = (cursor.nth_text(0), cursor.nth_text(1)) else {
        return false;
    };
    if !is_identifier(ret) || !is_identifier(name) || cursor.nth_text(2) != Some("(") {
        return false;
    }
    if KEYWORDS.contains(&ret) || KEYWORDS.contains(&name) {
        return false;
    }
    let close = cursor.group_end(cursor.position() + 2, "(", ")", GROUP_STOPS);
    matches!(cursor.slice(close..close + 2), [")", "{"])
}

fn opens_nesting(cursor: &CCursor<'_, '_>) -> bool {
    matches!(cursor.peek_text(), Some("for" | "while" | "do" | "{")) || looks_like_function(cursor)
}

/// Consume a loop, block or function without descending into it.
fn skip_nested(cursor: &mut CCursor<'_, '_>) -> Item {
    let start = cursor.position();
    loop {
        match cursor.peek_text() {
            Some("for" | "while") => {
                cursor.advance();
                cursor.delimited("(", ")");
            }
            Some("do") => {
                cursor.advance();
            }
            Some("{") => {
                cursor.delimited("{", "}");
                break;
            }
            Some("}") | None => break,
            _ if looks_like_function(cursor) => {
                cursor.advance();
                cursor.advance();
                cursor.delimited("(", ")");
            }
            _ => {
                if let Item::Opaque(span) = skip_statement(cursor) {
                    if cursor.slice(span).last() == Some(&";") {
                        break;
                    }
                }
            }
        }
    }
    let span = start..cursor.position();
    Item::beyond_limit(span.clone(), cursor.slice(span), LOOP_WORDS)
}

/// Skip one statement: through its `;`, or up to (not including) a token
/// that starts something the extractor recognizes. Never consumes `}`.
/// Parenthesized groups are skipped whole.
fn skip_statement(cursor: &mut CCursor<'_, '_>) -> Item {
    let start = cursor.position();
    while let Some(tok) = cursor.peek_text() {
        let moved = cursor.position() > start;
        match tok {
            ";" => {
                cursor.advance();
                break;
            }
            "}" => break,
            "{" | "for" | "while" | "do" if moved => break,
            "(" => {
                let end = cursor.group_end(cursor.position(), "(", ")", GROUP_STOPS);
                let closed = matches!(cursor.slice(end..end + 1), [")"]);
                cursor.skip_to(if closed { end + 1 } else { end });
            }
            _ if moved && looks_like_function(cursor) => break,
            _ => {
                cursor.advance();
            }
        }
    }
    Item::Opaque(start..cursor.position())
}

/// Split `init; cond; update` on the first two top-level semicolons.
fn split_for_header<'t, 's>(header: &'t [&'s str]) -> (&'t [&'s str], &'t [&'s str], &'t [&'s str]) {
    let mut depth = 0usize;
    let mut cuts = Vec::with_capacity(2);
    for (idx, tok) in header.iter().enumerate() {
        match *tok {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            ";" if depth == 0 && cuts.len() < 2 => cuts.push(idx),
            _ => {}
        }
    }
    match cuts.as_slice() {
        [first, second] => (
            &header[..*first],
            &header[first + 1..*second],
            &header[second + 1..],
        ),
        [first] => (&header[..*first], &header[first + 1..], &[]),
        _ => (header, &[], &[]),
    }
}
