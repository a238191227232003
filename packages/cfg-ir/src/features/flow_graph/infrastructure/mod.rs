//! Flow graph infrastructure

pub mod builder;
pub mod traversal;

pub use builder::CfgBuilder;
pub use traversal::TraversalContext;
