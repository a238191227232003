//! CFG builder: recursive statement dispatch
//!
//! A depth-first walk of the statement tree carrying one piece of explicit
//! state (the current insertion point) plus the loop-target stacks. Each
//! statement-kind handler reads and updates the traversal context and
//! leaves it pointing at the correct insertion point; graph side effects
//! go through the store operations only.

use tracing::{debug, trace};

use super::traversal::TraversalContext;
use crate::errors::{CfgError, Result};
use crate::features::flow_graph::domain::{BlockId, BlockKind, Cfg, EdgeKind};
use crate::shared::models::{Expr, Stmt};

/// Recursive-descent CFG builder.
///
/// One builder produces one graph. A build either fully succeeds and
/// returns an immutable [`Cfg`], or fails and returns no graph; there is
/// no partial recovery.
pub struct CfgBuilder {
    graph: Cfg,
    ctx: TraversalContext,
}

impl CfgBuilder {
    pub fn new() -> Self {
        let graph = Cfg::new();
        let entry = graph.entry;
        Self {
            graph,
            ctx: TraversalContext::new(entry),
        }
    }

    /// Builds the graph for a whole statement sequence.
    pub fn build(mut self, program: &[Stmt]) -> Result<Cfg> {
        let first = self.graph.create_block(BlockKind::Normal);
        let entry = self.graph.entry;
        self.graph.add_edge(entry, first, EdgeKind::Unconditional)?;
        self.ctx.set_current(first);

        for stmt in program {
            self.visit_stmt(stmt)?;
        }

        // Post-pass: the last live block falls through into exit unless it
        // already terminates.
        let exit = self.graph.exit;
        self.add_fallthrough(exit)?;

        debug!(blocks = self.graph.block_count(), "cfg build complete");
        Ok(self.graph)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        trace!(kind = stmt.kind_name(), "visit statement");
        match stmt {
            Stmt::Block(body) => {
                for s in body {
                    self.visit_stmt(s)?;
                }
                Ok(())
            }
            Stmt::If {
                test,
                consequent,
                alternate,
            } => self.visit_if(test, consequent, alternate.as_deref()),
            Stmt::While { test, body } => self.visit_while(test, body),
            Stmt::For {
                init,
                test,
                update,
                body,
            } => self.visit_for(init.as_deref(), test.as_ref(), update.as_ref(), body),
            Stmt::Return(_) => self.visit_return(stmt),
            Stmt::Break => self.visit_break(stmt),
            Stmt::Continue => self.visit_continue(stmt),
            // Straight-line statements. Nested function declarations stay
            // opaque here; their bodies get an independent graph on demand.
            // Unrecognized kinds degrade to the same conservative default.
            Stmt::Expr(_) | Stmt::VarDecl { .. } | Stmt::FunctionDecl { .. } | Stmt::Other(_) => {
                self.graph.add_statement(self.ctx.current(), stmt.clone())
            }
        }
    }

    /// Fallthrough rule: connect the current block to `to` only when the
    /// preceding visitation left it without an outgoing edge.
    fn add_fallthrough(&mut self, to: BlockId) -> Result<()> {
        let current = self.ctx.current();
        if self.graph.block(current)?.successors.is_empty() {
            self.graph.add_edge(current, to, EdgeKind::Unconditional)?;
        }
        Ok(())
    }

    fn visit_if(&mut self, test: &Expr, consequent: &Stmt, alternate: Option<&Stmt>) -> Result<()> {
        let cond = self.graph.create_block(BlockKind::Condition);
        self.graph
            .add_edge(self.ctx.current(), cond, EdgeKind::Unconditional)?;
        self.graph.set_condition(cond, test.clone())?;

        let then_block = self.graph.create_block(BlockKind::Normal);
        self.graph.add_edge(cond, then_block, EdgeKind::TrueBranch)?;

        let else_block = if alternate.is_some() {
            let b = self.graph.create_block(BlockKind::Normal);
            self.graph.add_edge(cond, b, EdgeKind::FalseBranch)?;
            Some(b)
        } else {
            None
        };

        let after = self.graph.create_block(BlockKind::Normal);

        self.ctx.set_current(then_block);
        self.visit_stmt(consequent)?;
        self.add_fallthrough(after)?;

        if let (Some(alt), Some(else_block)) = (alternate, else_block) {
            self.ctx.set_current(else_block);
            self.visit_stmt(alt)?;
            self.add_fallthrough(after)?;
        } else {
            // No else arm: the false branch skips straight to the join.
            self.graph.add_edge(cond, after, EdgeKind::FalseBranch)?;
        }

        self.ctx.set_current(after);
        Ok(())
    }

    fn visit_while(&mut self, test: &Expr, body: &Stmt) -> Result<()> {
        let cond = self.graph.create_block(BlockKind::Condition);
        self.graph
            .add_edge(self.ctx.current(), cond, EdgeKind::Unconditional)?;
        self.graph.set_condition(cond, test.clone())?;

        let body_block = self.graph.create_block(BlockKind::Normal);
        let after = self.graph.create_block(BlockKind::Normal);
        self.graph.add_edge(cond, body_block, EdgeKind::TrueBranch)?;
        self.graph.add_edge(cond, after, EdgeKind::FalseBranch)?;

        self.ctx.push_loop_targets(after, cond);
        self.ctx.set_current(body_block);
        self.visit_stmt(body)?;
        // Close the loop when the body does not already terminate.
        self.add_fallthrough(cond)?;
        self.ctx.pop_loop_targets();

        self.ctx.set_current(after);
        Ok(())
    }

    fn visit_for(
        &mut self,
        init: Option<&Stmt>,
        test: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
    ) -> Result<()> {
        // The initializer is plain straight-line code in the preceding
        // block, not a block of its own.
        if let Some(init) = init {
            self.graph.add_statement(self.ctx.current(), init.clone())?;
        }

        let cond = self.graph.create_block(BlockKind::Condition);
        self.graph
            .add_edge(self.ctx.current(), cond, EdgeKind::Unconditional)?;
        self.graph
            .set_condition(cond, test.cloned().unwrap_or_else(Expr::truth))?;

        let body_block = self.graph.create_block(BlockKind::Normal);
        let after = self.graph.create_block(BlockKind::Normal);
        // `continue` re-runs the update first when one exists; otherwise
        // it jumps straight back to the test.
        let update_block = match update {
            Some(_) => self.graph.create_block(BlockKind::Normal),
            None => cond,
        };

        self.graph.add_edge(cond, body_block, EdgeKind::TrueBranch)?;
        self.graph.add_edge(cond, after, EdgeKind::FalseBranch)?;

        self.ctx.push_loop_targets(after, update_block);
        self.ctx.set_current(body_block);
        self.visit_stmt(body)?;
        self.add_fallthrough(update_block)?;
        self.ctx.pop_loop_targets();

        if let Some(update) = update {
            self.graph
                .add_statement(update_block, Stmt::Expr(update.clone()))?;
            self.graph.add_edge(update_block, cond, EdgeKind::Unconditional)?;
        }

        self.ctx.set_current(after);
        Ok(())
    }

    fn visit_return(&mut self, stmt: &Stmt) -> Result<()> {
        self.graph.add_statement(self.ctx.current(), stmt.clone())?;
        let exit = self.graph.exit;
        self.graph
            .add_edge(self.ctx.current(), exit, EdgeKind::Unconditional)?;
        self.start_dead_continuation();
        Ok(())
    }

    fn visit_break(&mut self, stmt: &Stmt) -> Result<()> {
        // Resolve before touching the graph so a failed build leaves no
        // half-written edge behind.
        let target = self.ctx.break_target().ok_or(CfgError::BreakOutsideLoop)?;
        self.graph.add_statement(self.ctx.current(), stmt.clone())?;
        self.graph
            .add_edge(self.ctx.current(), target, EdgeKind::Unconditional)?;
        self.start_dead_continuation();
        Ok(())
    }

    fn visit_continue(&mut self, stmt: &Stmt) -> Result<()> {
        let target = self
            .ctx
            .continue_target()
            .ok_or(CfgError::ContinueOutsideLoop)?;
        self.graph.add_statement(self.ctx.current(), stmt.clone())?;
        self.graph
            .add_edge(self.ctx.current(), target, EdgeKind::Unconditional)?;
        self.start_dead_continuation();
        Ok(())
    }

    /// Statements textually following a jump still need somewhere to
    /// attach. The fresh block stays disconnected from entry, which is
    /// intentional: the graph represents dead code instead of rejecting it.
    fn start_dead_continuation(&mut self) {
        let cont = self.graph.create_block(BlockKind::Normal);
        self.ctx.set_current(cont);
    }
}

impl Default for CfgBuilder {
    fn default() -> Self {
        Self::new()
    }
}
