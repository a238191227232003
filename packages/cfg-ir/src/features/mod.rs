pub mod export;
pub mod flow_graph;
