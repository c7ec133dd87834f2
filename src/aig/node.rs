use super::Signal;

/// A node id.
///
/// Nodes live in a contiguous arena owned by the [`Aig`] and are addressed by their position.
/// The constant node [`AigNode::False`] has id 0 by convention.
///
/// [`Aig`]: super::Aig
pub type NodeId = u32;

/// An AIG node.
///
/// The id of a node is its index in the arena, so it is not stored in the node itself.
/// Fanins of an [`AigNode::And`] always point at nodes with a strictly smaller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AigNode {
    /// The constant low/false signal.
    False,
    /// A primary input.
    Input,
    /// A register output (for sequential circuits).
    ///
    /// Its next-state function is not stored here: it is the register input with the same
    /// position, see [`Aig::ro_to_ri`].
    ///
    /// [`Aig::ro_to_ri`]: super::Aig::ro_to_ri
    Register,
    /// An AND gate with two fanins.
    And { fanin0: Signal, fanin1: Signal },
}

impl AigNode {
    pub fn is_false(&self) -> bool {
        matches!(self, AigNode::False)
    }

    pub fn is_input(&self) -> bool {
        matches!(self, AigNode::Input)
    }

    pub fn is_register(&self) -> bool {
        matches!(self, AigNode::Register)
    }

    pub fn is_and(&self) -> bool {
        matches!(self, AigNode::And { .. })
    }

    /// Combinational inputs are primary inputs and register outputs.
    pub fn is_ci(&self) -> bool {
        self.is_input() || self.is_register()
    }

    /// Returns the fanins of the node, in order. Only AND gates have fanins.
    pub fn get_fanins(&self) -> Vec<Signal> {
        match *self {
            AigNode::And { fanin0, fanin1 } => vec![fanin0, fanin1],
            _ => vec![],
        }
    }

    pub fn fanin_size(&self) -> usize {
        match self {
            AigNode::And { .. } => 2,
            _ => 0,
        }
    }
}
