pub mod aig;
pub mod edge_list;
pub mod index_list;
pub mod pickle;

#[cfg(test)]
mod random;

// Re-exporting symbols and modules.
pub use aig::dfs;
pub use aig::{Aig, AigError, AigNode, DecodeError, NodeId, Result, Signal};
pub use edge_list::{Edge, EdgeList, EdgeWeights};
pub use index_list::IndexList;
pub use pickle::PickledAig;
