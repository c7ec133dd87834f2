//! Weighted directed edge list of an [`Aig`], for graph libraries and learning pipelines.
//!
//! Every connection of the network becomes one [`Edge`]:
//! - a fanin `f` of node `n` gives `(node of f, n)`,
//! - the primary output at position `i` gives `(node of the output, aig.size() + i)`, a virtual
//!   target that cannot collide with a real node,
//! - a register gives `(node of its register input, its register output)`, closing the loop.
//!
//! The weight of an edge tells regular and complemented connections apart, see [`EdgeWeights`].
//!
//! ```rust
//! use canaig::{Aig, edge_list::{Edge, to_edge_list}};
//! let mut aig = Aig::new();
//! let a = aig.create_pi();
//! let b = aig.create_pi();
//! let f = aig.create_and(a, !b);
//! aig.create_po(f);
//!
//! let edges = to_edge_list(&aig);
//! assert_eq!(edges.len(), 3);
//! assert_eq!(edges.get(1).unwrap(), Edge::new(2, 3, 1));
//! assert_eq!(edges.get(2).unwrap(), Edge::new(3, 4, 0));
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Aig, AigError, NodeId, Result, Signal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: i64,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, weight: i64) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

impl From<Edge> for (NodeId, NodeId, i64) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target, edge.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge(s:{},t:{},w:{})", self.source, self.target, self.weight)
    }
}

/// Weights given to the edges, depending on the polarity of the connection.
///
/// Defaults to `0` for regular edges and `1` for complemented ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeWeights {
    pub regular: i64,
    pub inverted: i64,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        EdgeWeights {
            regular: 0,
            inverted: 1,
        }
    }
}

impl EdgeWeights {
    pub fn weight(&self, signal: Signal) -> i64 {
        if signal.is_complemented() {
            self.inverted
        } else {
            self.regular
        }
    }
}

/// An ordered list of edges. Parallel edges are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl From<Vec<Edge>> for EdgeList {
    fn from(edges: Vec<Edge>) -> Self {
        EdgeList { edges }
    }
}

impl EdgeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn get(&self, index: usize) -> Result<Edge> {
        self.edges
            .get(index)
            .copied()
            .ok_or(AigError::IndexOutOfRange {
                collection: "edge list",
                index,
                len: self.edges.len(),
            })
    }

    pub fn set(&mut self, index: usize, edge: Edge) -> Result<()> {
        let len = self.edges.len();
        let slot = self
            .edges
            .get_mut(index)
            .ok_or(AigError::IndexOutOfRange {
                collection: "edge list",
                index,
                len,
            })?;
        *slot = edge;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl IntoIterator for EdgeList {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl fmt::Display for EdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeList([")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "])")
    }
}

/// Edge list of the AIG with the default weights (regular `0`, complemented `1`).
pub fn to_edge_list(aig: &Aig) -> EdgeList {
    to_edge_list_with(aig, EdgeWeights::default())
}

/// Edge list of the AIG: fanin edges in node order, then primary output edges,
/// then register edges.
pub fn to_edge_list_with(aig: &Aig, weights: EdgeWeights) -> EdgeList {
    let mut edges = EdgeList::new();

    for id in aig.nodes() {
        for fanin in aig.fanins(id) {
            edges.push(Edge::new(fanin.get_node(), id, weights.weight(fanin)));
        }
    }

    let size = aig.size() as NodeId;
    for (i, po) in aig.pos().enumerate() {
        edges.push(Edge::new(
            po.get_node(),
            size + i as NodeId,
            weights.weight(po),
        ));
    }

    for (ri, ro) in aig.registers() {
        edges.push(Edge::new(ri.get_node(), ro, weights.weight(ri)));
    }

    debug!(
        "edge list of AIG with {} nodes: {} edges",
        aig.size(),
        edges.len()
    );
    edges
}

impl Aig {
    /// See [`to_edge_list`].
    pub fn to_edge_list(&self) -> EdgeList {
        to_edge_list(self)
    }

    /// See [`to_edge_list_with`].
    pub fn to_edge_list_with(&self, weights: EdgeWeights) -> EdgeList {
        to_edge_list_with(self, weights)
    }
}
