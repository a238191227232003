//! Flow graph build use-cases

use tracing::debug;

use crate::errors::Result;
use crate::features::flow_graph::domain::Cfg;
use crate::features::flow_graph::infrastructure::CfgBuilder;
use crate::shared::models::Stmt;

/// Builds one control flow graph for a program or function body.
///
/// Construction is a synchronous depth-first recursion with no I/O; the
/// returned graph is an immutable value and may be shared freely for
/// read-only analysis.
pub fn build_flow_graph(program: &[Stmt]) -> Result<Cfg> {
    CfgBuilder::new().build(program)
}

/// Builds an independent graph for every function declaration in the tree,
/// depth-first. Each function body gets its own store; no mutable state is
/// shared across graphs.
pub fn build_function_flow_graphs(program: &[Stmt]) -> Result<Vec<(String, Cfg)>> {
    let mut graphs = Vec::new();
    collect_functions(program, &mut graphs)?;
    Ok(graphs)
}

fn collect_functions(stmts: &[Stmt], graphs: &mut Vec<(String, Cfg)>) -> Result<()> {
    for stmt in stmts {
        match stmt {
            Stmt::FunctionDecl { name, body } => {
                debug!(function = %name, "building function flow graph");
                graphs.push((name.clone(), build_flow_graph(body)?));
                collect_functions(body, graphs)?;
            }
            Stmt::Block(body) => collect_functions(body, graphs)?,
            Stmt::If {
                consequent,
                alternate,
                ..
            } => {
                collect_functions(std::slice::from_ref(consequent), graphs)?;
                if let Some(alt) = alternate {
                    collect_functions(std::slice::from_ref(alt), graphs)?;
                }
            }
            Stmt::While { body, .. } | Stmt::For { body, .. } => {
                collect_functions(std::slice::from_ref(body), graphs)?;
            }
            _ => {}
        }
    }
    Ok(())
}
