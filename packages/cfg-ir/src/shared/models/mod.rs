//! Shared models

mod ast;

pub use ast::{Expr, Stmt};
