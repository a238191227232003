//! Graphviz DOT export

use super::labels::assign_labels;
use crate::features::flow_graph::domain::{Cfg, EdgeKind};

/// Renders a finished graph as Graphviz DOT text.
///
/// One node declaration per labeled block, one edge declaration per
/// outgoing edge. Condition-block branches are annotated `true`/`false`,
/// exceptional edges `exception`, everything else is unlabeled. Output is
/// byte-identical across runs for the same graph.
pub fn to_dot(cfg: &Cfg) -> String {
    let labels = assign_labels(cfg);
    let mut dot = String::from("digraph CFG {\n");

    for (id, label) in labels.iter() {
        dot.push_str(&format!("  \"{label}\" [label=\"{label}\"];\n"));

        let Ok(block) = cfg.block(id) else {
            continue;
        };
        for edge in &block.successors {
            let Some(target) = labels.get(edge.target) else {
                continue;
            };
            let annotation = match edge.kind {
                EdgeKind::TrueBranch => " [label=\"true\"]",
                EdgeKind::FalseBranch => " [label=\"false\"]",
                EdgeKind::Exceptional => " [label=\"exception\"]",
                EdgeKind::Unconditional => "",
            };
            dot.push_str(&format!("  \"{label}\" -> \"{target}\"{annotation};\n"));
        }
    }

    dot.push_str("}\n");
    dot
}
