//! Extraction tree
//!
//! Only function definitions and loops become nodes. Every other statement is
//! discarded by the extractors because it contributes no growth.

use crate::features::cost_analysis::domain::LoopBound;
use serde::Serialize;

/// Deepest nesting of blocks that extraction descends into and analysis
/// folds. Constructs below it are consumed flat and bound as unknown.
pub const MAX_NESTING: usize = 128;

/// Root of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub body: Block,
}

impl Program {
    pub fn new(body: Block) -> Self {
        Self { body }
    }

    /// Number of loop nodes at any depth
    pub fn loop_count(&self) -> usize {
        let mut count = 0;
        self.body.walk(&mut |stmt| {
            if matches!(stmt, Statement::Loop(_)) {
                count += 1;
            }
        });
        count
    }

    /// Number of function nodes at any depth
    pub fn function_count(&self) -> usize {
        let mut count = 0;
        self.body.walk(&mut |stmt| {
            if matches!(stmt, Statement::Function(_)) {
                count += 1;
            }
        });
        count
    }
}

/// Ordered statement sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn push(&mut self, stmt: Statement) {
        self.statements.push(stmt);
    }

    /// Splice the statements of a bare nested block into this one.
    pub fn splice(&mut self, nested: Block) {
        self.statements.extend(nested.statements);
    }

    /// Pre-order visit of every statement down to [`MAX_NESTING`] levels
    pub fn walk<'a, F: FnMut(&'a Statement)>(&'a self, visit: &mut F) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a, F: FnMut(&'a Statement)>(&'a self, depth: usize, visit: &mut F) {
        for stmt in &self.statements {
            visit(stmt);
            if depth < MAX_NESTING {
                stmt.body().walk_at(depth + 1, visit);
            }
        }
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Statement {
    Function(Function),
    Loop(Loop),
}

impl Statement {
    pub fn body(&self) -> &Block {
        match self {
            Statement::Function(func) => &func.body,
            Statement::Loop(lp) => &lp.body,
        }
    }
}

impl From<Function> for Statement {
    fn from(func: Function) -> Self {
        Statement::Function(func)
    }
}

impl From<Loop> for Statement {
    fn from(lp: Loop) -> Self {
        Statement::Loop(lp)
    }
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    /// Never empty; extractors only build a function once a name token is seen.
    pub name: String,
    pub body: Block,
}

impl Function {
    pub fn new(name: impl Into<String>, body: Block) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Syntactic loop form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    For,
    While,
}

impl LoopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::For => "for",
            Self::While => "while",
        }
    }
}

/// Loop with its bound fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loop {
    pub kind: LoopKind,
    pub bound: LoopBound,
    pub body: Block,
}

impl Loop {
    pub fn new(kind: LoopKind, bound: LoopBound, body: Block) -> Self {
        Self { kind, bound, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_loop(body: Block) -> Statement {
        Loop::new(LoopKind::For, LoopBound::Linear, body).into()
    }

    #[test]
    fn test_counts_walk_nested_nodes() {
        let inner = Block::new(vec![linear_loop(Block::default())]);
        let func = Function::new("main", Block::new(vec![linear_loop(inner)]));
        let program = Program::new(Block::new(vec![func.into()]));

        assert_eq!(program.loop_count(), 2);
        assert_eq!(program.function_count(), 1);
    }

    #[test]
    fn test_walk_stops_at_nesting_limit() {
        let mut block = Block::default();
        for _ in 0..MAX_NESTING + 10 {
            block = Block::new(vec![linear_loop(block)]);
        }
        let program = Program::new(block);

        assert_eq!(program.loop_count(), MAX_NESTING + 1);
    }

    #[test]
    fn test_splice_keeps_order() {
        let mut block = Block::new(vec![linear_loop(Block::default())]);
        block.splice(Block::new(vec![Function::new("f", Block::default()).into()]));

        assert_eq!(block.statements.len(), 2);
        assert!(matches!(block.statements[1], Statement::Function(_)));
    }
}
