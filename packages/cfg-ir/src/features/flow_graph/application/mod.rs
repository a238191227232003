mod build_flow_graph;

pub use build_flow_graph::{build_flow_graph, build_function_flow_graphs};
