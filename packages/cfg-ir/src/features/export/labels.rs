//! Deterministic block labeling
//!
//! Labels are a pure projection computed alongside one fixed traversal;
//! naming never touches the graph itself. Both adapters share this pass so
//! the same graph always serializes the same way.

use rustc_hash::FxHashMap;

use crate::features::flow_graph::domain::{BlockId, Cfg};

pub(super) struct BlockLabels {
    order: Vec<BlockId>,
    names: FxHashMap<BlockId, String>,
}

impl BlockLabels {
    pub fn get(&self, id: BlockId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Labeled blocks in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &str)> {
        self.order.iter().map(|&id| (id, self.names[&id].as_str()))
    }
}

/// Visits blocks depth-first from entry, following the success exit, then
/// the false exit, then the exception exit, skipping already-visited
/// blocks. Entry and exit keep their literal labels; every other block is
/// named `b1`, `b2`, ... in visitation order.
///
/// Blocks not reachable from entry (dead continuations after a jump) are
/// not visited and therefore not labeled.
pub(super) fn assign_labels(cfg: &Cfg) -> BlockLabels {
    let mut labels = BlockLabels {
        order: Vec::new(),
        names: FxHashMap::default(),
    };
    let mut counter = 0u32;
    visit(cfg, cfg.entry, &mut labels, &mut counter);
    labels
}

fn visit(cfg: &Cfg, id: BlockId, labels: &mut BlockLabels, counter: &mut u32) {
    if labels.names.contains_key(&id) {
        return;
    }

    let name = if id == cfg.entry {
        "entry".to_string()
    } else if id == cfg.exit {
        "exit".to_string()
    } else {
        *counter += 1;
        format!("b{counter}")
    };
    labels.names.insert(id, name);
    labels.order.push(id);

    let Ok(block) = cfg.block(id) else {
        return;
    };
    let exits = [
        block.success_exit(),
        block.false_exit(),
        block.exception_exit(),
    ];
    for next in exits.into_iter().flatten() {
        visit(cfg, next, labels, counter);
    }
}
