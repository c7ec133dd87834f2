//! A [`Signal`] points at a node and can be complemented (indicates the presence of a NOT gate).

use std::{fmt::Display, ops::Not};

use super::NodeId;

/// A reference to a node output, possibly inverted.
///
/// Inverting a signal is free: it flips one bit, both polarities share the same node.
/// Signals are plain values, they only make sense within the [`Aig`] that produced them.
///
/// ```rust
/// use canaig::{Aig, Signal};
/// let aig = Aig::new();
/// let cst_false = aig.get_constant(false);
/// let cst_true = aig.get_constant(true);
/// assert_eq!(cst_false, !cst_true);
/// assert_eq!(cst_true, Signal::from_literal(1));
/// ```
///
/// [`Aig`]: super::Aig
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signal {
    /// The node the signal is referring to.
    pub(super) node: NodeId,
    /// Set to true if signal should be inverted.
    pub(super) complement: bool,
}

impl Not for Signal {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.complement = !self.complement;
        self
    }
}

impl From<Signal> for (NodeId, bool) {
    fn from(signal: Signal) -> Self {
        (signal.node, signal.complement)
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.complement {
            write!(f, "~{}", self.node)
        } else {
            write!(f, "{}", self.node)
        }
    }
}

impl Signal {
    pub fn new(node: NodeId, complement: bool) -> Self {
        Signal { node, complement }
    }

    /// Decodes a literal `2 * node + complement`.
    pub fn from_literal(literal: u32) -> Self {
        Signal {
            node: literal >> 1,
            complement: literal & 1 == 1,
        }
    }

    /// Encodes the signal as a literal `2 * node + complement`.
    pub fn literal(&self) -> u32 {
        (self.node << 1) | self.complement as u32
    }

    pub fn get_node(&self) -> NodeId {
        self.node
    }

    pub fn get_complement(&self) -> bool {
        self.complement
    }

    pub fn is_complemented(&self) -> bool {
        self.complement
    }

    /// The same signal with the complement bit cleared.
    pub fn positive(&self) -> Self {
        Signal::new(self.node, false)
    }

    pub fn is_cst_false(&self) -> bool {
        self.node == 0 && !self.complement
    }

    pub fn is_cst_true(&self) -> bool {
        self.node == 0 && self.complement
    }

    pub fn is_complement_of(&self, other: &Signal) -> bool {
        self.node == other.node && self.complement ^ other.complement
    }
}
