//! Export adapters
//!
//! Thin projections from a finished graph to interchange formats. Neither
//! adapter mutates the graph; consumers doing soundness-critical analysis
//! should note that `Other` statement kinds pass through unchecked.

mod dot;
mod labels;
mod record;

pub use dot::to_dot;
pub use record::{to_json, to_record, BlockRecord, CfgRecord, ExitRecord};
