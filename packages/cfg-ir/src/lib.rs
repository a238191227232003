//! cfg-ir: control flow graph construction from procedural ASTs
//!
//! Converts a statement tree (blocks, conditionals, loops, returns,
//! break/continue) into a directed graph of basic blocks connected by
//! typed edges, suitable for dataflow analysis, dead-code detection, or
//! visualization.
//!
//! Parsing is an external collaborator: the builder consumes a [`Stmt`]
//! tree produced elsewhere and depends only on node kinds and their
//! sub-nodes. The finished [`Cfg`] is an immutable value; the export
//! adapters project it into Graphviz DOT text or a structured JSON record.

pub mod errors;
pub mod features;
pub mod shared;

pub use errors::{CfgError, Result};
pub use features::export::{to_dot, to_json, to_record, BlockRecord, CfgRecord, ExitRecord};
pub use features::flow_graph::application::{build_flow_graph, build_function_flow_graphs};
pub use features::flow_graph::domain::{BasicBlock, BlockId, BlockKind, Cfg, Edge, EdgeKind};
pub use features::flow_graph::infrastructure::{CfgBuilder, TraversalContext};
pub use shared::models::{Expr, Stmt};
