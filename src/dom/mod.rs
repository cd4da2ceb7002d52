//! DOM arena: slotmap-backed element tree with class/attribute queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{NodeId, NodeData};
pub use tree::Dom;
