//! Build-time traversal state

use crate::errors::Result;
use crate::features::flow_graph::domain::{BlockId, BlockKind, Cfg, EdgeKind};

/// Mutable state threaded by reference through the builder's recursion.
///
/// Owns no graph data, only the active insertion point and the
/// break/continue target stacks for the lexically enclosing loops,
/// innermost last. Target resolution is dynamic scoping: a push on loop
/// entry is paired with exactly one pop after the loop body has been fully
/// visited, including all nested recursive visits.
#[derive(Debug)]
pub struct TraversalContext {
    current: BlockId,
    break_targets: Vec<BlockId>,
    continue_targets: Vec<BlockId>,
}

impl TraversalContext {
    pub fn new(current: BlockId) -> Self {
        Self {
            current,
            break_targets: Vec::new(),
            continue_targets: Vec::new(),
        }
    }

    /// The block new statements and edges are being attached to.
    pub fn current(&self) -> BlockId {
        self.current
    }

    pub fn set_current(&mut self, id: BlockId) {
        self.current = id;
    }

    pub fn push_loop_targets(&mut self, break_to: BlockId, continue_to: BlockId) {
        self.break_targets.push(break_to);
        self.continue_targets.push(continue_to);
    }

    pub fn pop_loop_targets(&mut self) {
        self.break_targets.pop();
        self.continue_targets.pop();
    }

    /// The innermost break destination, or `None` outside any loop.
    pub fn break_target(&self) -> Option<BlockId> {
        self.break_targets.last().copied()
    }

    /// The innermost continue destination, or `None` outside any loop.
    pub fn continue_target(&self) -> Option<BlockId> {
        self.continue_targets.last().copied()
    }

    /// Allocates a new block, connects the current block to it with an
    /// unconditional edge, and moves the insertion point there. Used when
    /// control must continue after a block that can no longer receive
    /// statements.
    pub fn split_current(&mut self, graph: &mut Cfg) -> Result<BlockId> {
        let next = graph.create_block(BlockKind::Normal);
        graph.add_edge(self.current, next, EdgeKind::Unconditional)?;
        self.current = next;
        Ok(next)
    }
}
