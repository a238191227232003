pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{build_flow_graph, build_function_flow_graphs};
pub use domain::{BasicBlock, BlockId, BlockKind, Cfg, Edge, EdgeKind};
pub use infrastructure::{CfgBuilder, TraversalContext};
