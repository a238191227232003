//! Graph store: an arena-indexed control flow graph
//!
//! The arena exclusively owns all block data; `BlockId` is the only
//! externally held reference. Blocks are appended monotonically during one
//! build pass and the graph becomes an immutable value once the builder
//! returns (the mutating operations are crate-internal).

use serde::{Deserialize, Serialize};

use super::block::{BasicBlock, BlockId, BlockKind, Edge, EdgeKind};
use crate::errors::{CfgError, Result};
use crate::shared::models::{Expr, Stmt};

/// A control flow graph over one statement tree.
///
/// `entry` and `exit` are always present. Every block the builder creates
/// on a live path is reachable from `entry`; continuation blocks allocated
/// after `return`/`break`/`continue` stay disconnected on purpose, so dead
/// code is represented rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cfg {
    pub entry: BlockId,
    pub exit: BlockId,
    blocks: Vec<BasicBlock>,
}

impl Cfg {
    /// Creates a graph containing only the entry and exit blocks.
    pub(crate) fn new() -> Self {
        let mut cfg = Cfg {
            entry: BlockId(0),
            exit: BlockId(0),
            blocks: Vec::new(),
        };
        cfg.entry = cfg.create_block(BlockKind::Entry);
        cfg.exit = cfg.create_block(BlockKind::Exit);
        cfg
    }

    /// Allocates a fresh block and appends it to the arena. Always succeeds.
    pub(crate) fn create_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(BasicBlock::new(id, kind));
        id
    }

    /// Appends a typed edge and maintains the predecessor inverse.
    ///
    /// No edge-count validation happens here; that discipline belongs to
    /// the builder.
    pub(crate) fn add_edge(&mut self, from: BlockId, to: BlockId, kind: EdgeKind) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        self.blocks[from.index()]
            .successors
            .push(Edge { kind, target: to });
        self.blocks[to.index()].predecessors.push(from);
        Ok(())
    }

    /// Appends a statement node to the named block.
    pub(crate) fn add_statement(&mut self, id: BlockId, stmt: Stmt) -> Result<()> {
        self.block_mut(id)?.statements.push(stmt);
        Ok(())
    }

    /// Fills a condition block's test slot.
    pub(crate) fn set_condition(&mut self, id: BlockId, test: Expr) -> Result<()> {
        self.block_mut(id)?.condition = Some(test);
        Ok(())
    }

    /// Read access to a block.
    pub fn block(&self, id: BlockId) -> Result<&BasicBlock> {
        self.blocks.get(id.index()).ok_or(CfgError::InvalidBlock(id))
    }

    pub(crate) fn block_mut(&mut self, id: BlockId) -> Result<&mut BasicBlock> {
        self.blocks
            .get_mut(id.index())
            .ok_or(CfgError::InvalidBlock(id))
    }

    /// All blocks in arena order.
    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn check(&self, id: BlockId) -> Result<()> {
        if id.index() < self.blocks.len() {
            Ok(())
        } else {
            Err(CfgError::InvalidBlock(id))
        }
    }
}
