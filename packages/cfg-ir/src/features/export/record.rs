//! Structured record export

use serde::{Deserialize, Serialize};

use super::labels::{assign_labels, BlockLabels};
use crate::errors::Result;
use crate::features::flow_graph::domain::{BasicBlock, Cfg};

/// Structured record for a finished graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfgRecord {
    pub entry: String,
    pub exit: String,
    pub blocks: Vec<BlockRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    pub label: String,
    pub statement_kinds: Vec<String>,
    pub exits: ExitRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitRecord {
    pub success: Option<String>,
    pub false_branch: Option<String>,
    pub exceptional: Option<String>,
}

/// Projects a finished graph into its structured record.
///
/// Deterministic for a given graph: blocks appear in labeling order, and
/// only blocks reachable from entry are included.
pub fn to_record(cfg: &Cfg) -> CfgRecord {
    let labels = assign_labels(cfg);

    let blocks = labels
        .iter()
        .filter_map(|(id, label)| {
            let block = cfg.block(id).ok()?;
            Some(block_record(block, label, &labels))
        })
        .collect();

    CfgRecord {
        entry: "entry".to_string(),
        exit: "exit".to_string(),
        blocks,
    }
}

/// Serializes the structured record as pretty-printed JSON.
pub fn to_json(cfg: &Cfg) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_record(cfg))?)
}

fn block_record(block: &BasicBlock, label: &str, labels: &BlockLabels) -> BlockRecord {
    let name_of = |id| labels.get(id).map(str::to_string);

    BlockRecord {
        label: label.to_string(),
        statement_kinds: block
            .statements
            .iter()
            .map(|s| s.kind_name().to_string())
            .collect(),
        exits: ExitRecord {
            success: block.success_exit().and_then(name_of),
            false_branch: block.false_exit().and_then(name_of),
            exceptional: block.exception_exit().and_then(name_of),
        },
    }
}
