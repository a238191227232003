//! Basic block and edge models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::models::{Expr, Stmt};

/// Opaque handle identifying a basic block within one graph instance.
///
/// Stable for the graph's lifetime and never reused. Blocks reference each
/// other only through ids, never through owning pointers, so loop
/// back-edges form cycles in the graph without forming ownership cycles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockId(pub(crate) u32);

impl BlockId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for BlockId {
    fn from(raw: u32) -> Self {
        BlockId(raw)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classifies a block's role in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Entry,
    Exit,
    Normal,
    /// Holds a test expression and, once construction completes, exactly
    /// one true-branch and one false-branch outgoing edge.
    Condition,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Entry => "entry",
            BlockKind::Exit => "exit",
            BlockKind::Normal => "normal",
            BlockKind::Condition => "condition",
        }
    }
}

/// Semantic label on an outgoing connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Unconditional,
    TrueBranch,
    FalseBranch,
    Exceptional,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Unconditional => "unconditional",
            EdgeKind::TrueBranch => "true",
            EdgeKind::FalseBranch => "false",
            EdgeKind::Exceptional => "exception",
        }
    }
}

/// Typed outgoing connection to another block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub kind: EdgeKind,
    pub target: BlockId,
}

/// A maximal straight-line region of code with no internal branching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub id: BlockId,
    pub kind: BlockKind,
    /// Statements physically placed in this block, in order. Empty for
    /// pure control blocks.
    pub statements: Vec<Stmt>,
    /// Test expression; filled only for condition blocks.
    pub condition: Option<Expr>,
    /// Outgoing edges, in insertion order.
    pub successors: Vec<Edge>,
    /// Incoming block ids, maintained as the inverse of successors.
    /// Traversal convenience only; construction never reads these.
    pub predecessors: Vec<BlockId>,
}

impl BasicBlock {
    pub(crate) fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            statements: Vec::new(),
            condition: None,
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    /// The success exit: the unconditional or true-branch successor.
    pub fn success_exit(&self) -> Option<BlockId> {
        self.successors
            .iter()
            .find(|e| matches!(e.kind, EdgeKind::Unconditional | EdgeKind::TrueBranch))
            .map(|e| e.target)
    }

    /// The false-branch successor of a condition block.
    pub fn false_exit(&self) -> Option<BlockId> {
        self.successors
            .iter()
            .find(|e| e.kind == EdgeKind::FalseBranch)
            .map(|e| e.target)
    }

    /// The exceptional successor, when one exists.
    pub fn exception_exit(&self) -> Option<BlockId> {
        self.successors
            .iter()
            .find(|e| e.kind == EdgeKind::Exceptional)
            .map(|e| e.target)
    }
}
