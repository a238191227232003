mod block;
mod cfg;

pub use block::{BasicBlock, BlockId, BlockKind, Edge, EdgeKind};
pub use cfg::Cfg;
