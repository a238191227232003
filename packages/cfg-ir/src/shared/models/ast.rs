//! Input statement/expression grammar
//!
//! The builder consumes a tree of these nodes produced by an external
//! parser front-end. Dispatch is by variant only; for control constructs
//! the builder additionally reads the sub-nodes (test, consequent,
//! alternate, init/update/body). Richer semantic information is out of
//! scope.

use serde::{Deserialize, Serialize};

/// Expression node.
///
/// A minimal opaque carrier: the builder never looks inside an expression,
/// it only places one into a condition block's test slot or wraps one as a
/// statement. Expression forms that introduce control flow themselves
/// (ternaries, short-circuit operators) are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal constant, stored as written (`"true"`, `"42"`).
    Literal(String),
    /// Plain identifier reference.
    Ident(String),
    /// Any other expression, carried as raw text.
    Raw(String),
}

impl Expr {
    /// The always-true literal substituted for a missing `for` test.
    pub fn truth() -> Self {
        Expr::Literal("true".to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            Expr::Literal(s) | Expr::Ident(s) | Expr::Raw(s) => s,
        }
    }
}

/// Statement node.
///
/// A closed, tagged dispatch surface: adding a statement kind means adding
/// a variant and a builder handler, checked exhaustively at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// Grouping only; creates no blocks of its own.
    Block(Vec<Stmt>),
    If {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },
    While {
        test: Expr,
        body: Box<Stmt>,
    },
    For {
        init: Option<Box<Stmt>>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    Expr(Expr),
    VarDecl {
        name: String,
        init: Option<Expr>,
    },
    /// Nested function declaration. The declaration itself is straight-line
    /// code; the body is not traversed into the same graph and gets its own
    /// graph on demand.
    FunctionDecl {
        name: String,
        body: Vec<Stmt>,
    },
    /// Catch-all for constructs the builder does not understand. Degrades
    /// to a straight-line statement; no control-flow edges are assumed.
    Other(String),
}

impl Stmt {
    /// Stable kind tag, used by the export adapters.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "Block",
            Stmt::If { .. } => "If",
            Stmt::While { .. } => "While",
            Stmt::For { .. } => "For",
            Stmt::Return(_) => "Return",
            Stmt::Break => "Break",
            Stmt::Continue => "Continue",
            Stmt::Expr(_) => "Expression",
            Stmt::VarDecl { .. } => "VariableDeclaration",
            Stmt::FunctionDecl { .. } => "FunctionDeclaration",
            Stmt::Other(_) => "Other",
        }
    }
}
