//! Result of extracting one statement

use crate::features::cost_analysis::domain::LoopBound;
use crate::features::parsing::domain::{Block, Lexeme, Loop, LoopKind, Statement};
use std::ops::Range;

/// What an extractor produced for one statement position
#[derive(Debug)]
pub enum Item {
    /// A loop or function node
    Node(Statement),
    /// A bare nested block; its statements are spliced into the parent
    Nested(Block),
    /// Any other statement. The token span is consumed and discarded.
    Opaque(Range<usize>),
}

impl Item {
    /// Append this item to `block`. Opaque spans contribute nothing.
    pub fn append_to(self, block: &mut Block) {
        match self {
            Item::Node(stmt) => block.push(stmt),
            Item::Nested(nested) => block.splice(nested),
            Item::Opaque(span) => {
                tracing::trace!(start = span.start, end = span.end, "skipped opaque statement");
            }
        }
    }

    /// A construct consumed flat at the nesting limit. When `tokens` (the
    /// span's tokens) hold a loop keyword from `loop_words`, the construct
    /// becomes an unknown-bound loop; otherwise it is opaque.
    pub fn beyond_limit<T: Lexeme>(
        span: Range<usize>,
        tokens: &[T],
        loop_words: &[(&str, LoopKind)],
    ) -> Item {
        let kind = tokens.iter().find_map(|tok| {
            loop_words
                .iter()
                .find(|(word, _)| *word == tok.text())
                .map(|(_, kind)| *kind)
        });
        tracing::debug!(start = span.start, end = span.end, "nesting limit reached, construct skipped");
        match kind {
            Some(kind) => Item::Node(Loop::new(kind, LoopBound::Unknown, Block::default()).into()),
            None => Item::Opaque(span),
        }
    }

    /// Wrap as a standalone block (bodies written without delimiters)
    pub fn into_block(self) -> Block {
        let mut block = Block::default();
        self.append_to(&mut block);
        block
    }
}
