//! Module defining the [`Aig`] struct, as well as [`AigNode`], [`Signal`] and some others relevant structs.
//!
//! To move a network across a process boundary, check [`crate::index_list`] and [`crate::pickle`].

mod cleanup;
pub mod dfs;
pub mod error;
mod integrity;
pub mod node;
pub mod signal;
mod simulation;
mod strash;

use std::collections::HashMap;

use log::trace;

pub use error::{AigError, DecodeError, Result};
pub use node::{AigNode, NodeId};
pub use signal::Signal;
use strash::{Normalized, StrashKey, normalize_and};

/// A whole AIG.
///
/// Nodes are stored in a growable arena and addressed by their [`NodeId`]. The arena only grows:
/// a new node always gets the next free id, and the fanins of an AND gate always refer to older
/// nodes, so creation order is a topological order. The only way to get rid of nodes is
/// [`Aig::cleanup_dangling`], which builds a fresh, renumbered network.
///
/// Gate creation is structurally hashed: asking twice for the same AND gate (up to operand order)
/// returns the same signal, and trivial gates such as `x ∧ ¬x` never allocate a node.
///
/// ```rust
/// use canaig::Aig;
/// let mut aig = Aig::new();
/// let a = aig.create_pi();
/// let b = aig.create_pi();
/// let f = aig.create_and(a, b);
/// assert_eq!(aig.create_and(b, a), f);
/// assert_eq!(aig.create_and(a, !a), aig.get_constant(false));
/// aig.create_po(f);
/// assert_eq!(aig.num_gates(), 1);
/// ```
///
/// Sequential circuits are supported through registers: [`Aig::create_ro`] creates the register
/// output (a combinational input holding the state), [`Aig::create_ri`] registers its next-state
/// function. The i-th register input is paired with the i-th register output.
///
/// [`Aig::clone`] performs a deep copy, the two networks share nothing afterwards.
#[derive(Debug, Clone)]
pub struct Aig {
    nodes: Vec<AigNode>,
    /// Canonical fanins of every AND gate, see [`strash`].
    strash: HashMap<StrashKey, NodeId>,
    inputs: Vec<NodeId>,
    outputs: Vec<Signal>,
    register_outputs: Vec<NodeId>,
    register_inputs: Vec<Signal>,
    /// Initial value of each register, by register output position (`None` if unknown).
    register_inits: Vec<Option<bool>>,
    num_gates: usize,
}

impl Default for Aig {
    fn default() -> Self {
        Self::new()
    }
}

/// Positional access shared by [`Aig::pi_at`], [`Aig::po_at`] and friends.
fn at<T: Copy>(items: &[T], collection: &'static str, index: usize) -> Result<T> {
    items
        .get(index)
        .copied()
        .ok_or(AigError::IndexOutOfRange {
            collection,
            index,
            len: items.len(),
        })
}

impl Aig {
    /// Create a brand new AIG (constant node [`AigNode::False`] included).
    pub fn new() -> Self {
        Aig {
            nodes: vec![AigNode::False],
            strash: HashMap::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            register_outputs: Vec::new(),
            register_inputs: Vec::new(),
            register_inits: Vec::new(),
            num_gates: 0,
        }
    }

    fn push_node(&mut self, node: AigNode) -> NodeId {
        assert!(
            self.nodes.len() < NodeId::MAX as usize,
            "AIG node ids exhausted"
        );
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Signals are only meaningful in the network that produced them.
    fn check_signal(&self, signal: Signal) {
        debug_assert!(
            (signal.node as usize) < self.nodes.len(),
            "signal {} does not belong to this AIG ({} nodes)",
            signal,
            self.nodes.len()
        );
    }

    /// Number of nodes, constant node included.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_gates(&self) -> usize {
        self.num_gates
    }

    pub fn num_pis(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_pos(&self) -> usize {
        self.outputs.len()
    }

    pub fn num_registers(&self) -> usize {
        self.register_outputs.len()
    }

    /// Number of combinational inputs (primary inputs and register outputs).
    pub fn num_cis(&self) -> usize {
        self.inputs.len() + self.register_outputs.len()
    }

    /// Number of combinational outputs (primary outputs and register inputs).
    pub fn num_cos(&self) -> usize {
        self.outputs.len() + self.register_inputs.len()
    }

    pub fn is_combinational(&self) -> bool {
        self.register_outputs.is_empty() && self.register_inputs.is_empty()
    }

    /// Retrieves a node from its id.
    pub fn node(&self, id: NodeId) -> Option<&AigNode> {
        self.nodes.get(id as usize)
    }

    pub fn get_node(&self, signal: Signal) -> NodeId {
        signal.node
    }

    pub fn make_signal(&self, id: NodeId) -> Signal {
        Signal::new(id, false)
    }

    pub fn is_complemented(&self, signal: Signal) -> bool {
        signal.complement
    }

    pub fn get_constant(&self, value: bool) -> Signal {
        Signal::new(0, value)
    }

    pub fn is_constant(&self, id: NodeId) -> bool {
        id == 0
    }

    pub fn is_pi(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(AigNode::is_input)
    }

    pub fn is_ro(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(AigNode::is_register)
    }

    pub fn is_ci(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(AigNode::is_ci)
    }

    pub fn is_and(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(AigNode::is_and)
    }

    pub fn fanin_size(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, AigNode::fanin_size)
    }

    /// Appends a new primary input and returns its positive signal.
    pub fn create_pi(&mut self) -> Signal {
        let id = self.push_node(AigNode::Input);
        self.inputs.push(id);
        Signal::new(id, false)
    }

    /// Marks a signal as a primary output and returns the output position.
    /// The same signal may be an output several times.
    pub fn create_po(&mut self, f: Signal) -> usize {
        self.check_signal(f);
        self.outputs.push(f);
        self.outputs.len() - 1
    }

    /// Appends a new register output and returns its positive signal.
    pub fn create_ro(&mut self) -> Signal {
        let id = self.push_node(AigNode::Register);
        self.register_outputs.push(id);
        self.register_inits.push(None);
        Signal::new(id, false)
    }

    /// Appends a register input (the next-state function of the register with the same position)
    /// and returns its position.
    pub fn create_ri(&mut self, f: Signal) -> usize {
        self.check_signal(f);
        self.register_inputs.push(f);
        self.register_inputs.len() - 1
    }

    pub fn create_not(&self, a: Signal) -> Signal {
        !a
    }

    /// Create a new and gate (or retrieve it if an equivalent gate already exists).
    pub fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        self.check_signal(a);
        self.check_signal(b);

        let key = match normalize_and(a, b) {
            Normalized::Trivial(signal) => return signal,
            Normalized::Gate(key) => key,
        };

        if let Some(&id) = self.strash.get(&key) {
            trace!("strash hit: and({}, {}) = {}", key.0, key.1, id);
            return Signal::new(id, false);
        }

        let id = self.push_node(AigNode::And {
            fanin0: key.0,
            fanin1: key.1,
        });
        self.strash.insert(key, id);
        self.num_gates += 1;
        trace!("new and gate {} = and({}, {})", id, key.0, key.1);
        Signal::new(id, false)
    }

    pub fn create_nand(&mut self, a: Signal, b: Signal) -> Signal {
        !self.create_and(a, b)
    }

    pub fn create_or(&mut self, a: Signal, b: Signal) -> Signal {
        !self.create_and(!a, !b)
    }

    pub fn create_nor(&mut self, a: Signal, b: Signal) -> Signal {
        self.create_and(!a, !b)
    }

    /// `a < b`, ie `¬a ∧ b`.
    pub fn create_lt(&mut self, a: Signal, b: Signal) -> Signal {
        self.create_and(!a, b)
    }

    /// `a ≤ b`, ie `¬(a ∧ ¬b)`.
    pub fn create_le(&mut self, a: Signal, b: Signal) -> Signal {
        !self.create_and(a, !b)
    }

    /// Built from three AND gates. Complemented operands are pushed to the output.
    pub fn create_xor(&mut self, a: Signal, b: Signal) -> Signal {
        let output_complement = a.complement ^ b.complement;
        let (a, b) = (a.positive(), b.positive());
        let c1 = self.create_and(a, !b);
        let c2 = self.create_and(b, !a);
        let xnor = self.create_and(!c1, !c2);
        if output_complement { xnor } else { !xnor }
    }

    pub fn create_xnor(&mut self, a: Signal, b: Signal) -> Signal {
        !self.create_xor(a, b)
    }

    /// If-then-else: `cond ? then : otherwise`.
    pub fn create_ite(&mut self, cond: Signal, then: Signal, otherwise: Signal) -> Signal {
        let t = self.create_and(cond, then);
        let e = self.create_and(!cond, otherwise);
        self.create_or(t, e)
    }

    /// Majority of three: `ab ∨ c(a ∨ b)`.
    pub fn create_maj(&mut self, a: Signal, b: Signal, c: Signal) -> Signal {
        let ab = self.create_and(a, b);
        let a_or_b = self.create_or(a, b);
        let c_ab = self.create_and(c, a_or_b);
        self.create_or(ab, c_ab)
    }

    /// Reduces the signals pairwise, level by level, into a balanced tree.
    fn tree_reduce(
        &mut self,
        signals: &[Signal],
        empty: Signal,
        op: fn(&mut Self, Signal, Signal) -> Signal,
    ) -> Signal {
        let mut level = signals.to_vec();
        if level.is_empty() {
            return empty;
        }
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            for pair in level.chunks(2) {
                match *pair {
                    [a, b] => next.push(op(self, a, b)),
                    [a] => next.push(a),
                    _ => unreachable!(),
                }
            }
            level = next;
        }
        level[0]
    }

    /// AND of all signals, constant true if there is none.
    pub fn create_nary_and(&mut self, signals: &[Signal]) -> Signal {
        let one = self.get_constant(true);
        self.tree_reduce(signals, one, Self::create_and)
    }

    /// OR of all signals, constant false if there is none.
    pub fn create_nary_or(&mut self, signals: &[Signal]) -> Signal {
        let zero = self.get_constant(false);
        self.tree_reduce(signals, zero, Self::create_or)
    }

    /// XOR of all signals, constant false if there is none.
    pub fn create_nary_xor(&mut self, signals: &[Signal]) -> Signal {
        let zero = self.get_constant(false);
        self.tree_reduce(signals, zero, Self::create_xor)
    }

    pub fn pi_at(&self, index: usize) -> Result<NodeId> {
        at(&self.inputs, "primary inputs", index)
    }

    pub fn po_at(&self, index: usize) -> Result<Signal> {
        at(&self.outputs, "primary outputs", index)
    }

    pub fn ro_at(&self, index: usize) -> Result<NodeId> {
        at(&self.register_outputs, "register outputs", index)
    }

    pub fn ri_at(&self, index: usize) -> Result<Signal> {
        at(&self.register_inputs, "register inputs", index)
    }

    /// Position of a node among the primary inputs.
    pub fn pi_index(&self, id: NodeId) -> Option<usize> {
        self.inputs.iter().position(|&pi| pi == id)
    }

    /// Position of a node among the register outputs.
    pub fn ro_index(&self, id: NodeId) -> Option<usize> {
        self.register_outputs.iter().position(|&ro| ro == id)
    }

    /// Position of the first primary output equal to `signal`.
    pub fn po_index(&self, signal: Signal) -> Option<usize> {
        self.outputs.iter().position(|&po| po == signal)
    }

    /// Position of the first register input equal to `signal`.
    pub fn ri_index(&self, signal: Signal) -> Option<usize> {
        self.register_inputs.iter().position(|&ri| ri == signal)
    }

    /// Combinational input at `index`: primary inputs first, then register outputs.
    pub fn ci_at(&self, index: usize) -> Result<NodeId> {
        self.cis().nth(index).ok_or(AigError::IndexOutOfRange {
            collection: "combinational inputs",
            index,
            len: self.num_cis(),
        })
    }

    pub fn ci_index(&self, id: NodeId) -> Option<usize> {
        self.cis().position(|ci| ci == id)
    }

    /// Combinational output at `index`: primary outputs first, then register inputs.
    pub fn co_at(&self, index: usize) -> Result<Signal> {
        self.cos().nth(index).ok_or(AigError::IndexOutOfRange {
            collection: "combinational outputs",
            index,
            len: self.num_cos(),
        })
    }

    pub fn co_index(&self, signal: Signal) -> Option<usize> {
        self.cos().position(|co| co == signal)
    }

    /// Register output fed by the first register input equal to `ri`.
    pub fn ri_to_ro(&self, ri: Signal) -> Option<NodeId> {
        let index = self.register_inputs.iter().position(|&s| s == ri)?;
        self.register_outputs.get(index).copied()
    }

    /// Register input feeding the register output `ro`.
    pub fn ro_to_ri(&self, ro: NodeId) -> Option<Signal> {
        let index = self.ro_index(ro)?;
        self.register_inputs.get(index).copied()
    }

    pub fn register_init(&self, index: usize) -> Result<Option<bool>> {
        at(&self.register_inits, "registers", index)
    }

    pub fn set_register_init(&mut self, index: usize, init: Option<bool>) -> Result<()> {
        let len = self.register_inits.len();
        let slot = self
            .register_inits
            .get_mut(index)
            .ok_or(AigError::IndexOutOfRange {
                collection: "registers",
                index,
                len,
            })?;
        *slot = init;
        Ok(())
    }

    /// All node ids, constant node first, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.nodes.len() as NodeId
    }

    /// AND gates, in creation order.
    pub fn gates(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(|&id| self.nodes[id as usize].is_and())
    }

    pub fn pis(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inputs.iter().copied()
    }

    pub fn pos(&self) -> impl Iterator<Item = Signal> + '_ {
        self.outputs.iter().copied()
    }

    pub fn ros(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.register_outputs.iter().copied()
    }

    pub fn ris(&self) -> impl Iterator<Item = Signal> + '_ {
        self.register_inputs.iter().copied()
    }

    /// Combinational inputs: primary inputs, then register outputs.
    pub fn cis(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pis().chain(self.ros())
    }

    /// Combinational outputs: primary outputs, then register inputs.
    pub fn cos(&self) -> impl Iterator<Item = Signal> + '_ {
        self.pos().chain(self.ris())
    }

    /// Pairs of (register input, register output). Unpaired registers are skipped.
    pub fn registers(&self) -> impl Iterator<Item = (Signal, NodeId)> + '_ {
        self.ris().zip(self.ros())
    }

    /// Fanins of a node, in order.
    pub fn fanins(&self, id: NodeId) -> std::vec::IntoIter<Signal> {
        self.node(id)
            .map(AigNode::get_fanins)
            .unwrap_or_default()
            .into_iter()
    }

    /// Gates having `id` as a fanin, in creation order. Outputs are not counted.
    pub fn fanouts(&self, id: NodeId) -> Vec<NodeId> {
        self.gates()
            .filter(|&gate| self.fanins(gate).any(|f| f.get_node() == id))
            .collect()
    }

    /// Number of references to `id`, from gates as well as from combinational outputs.
    ///
    /// A node driving the same output twice is counted twice.
    pub fn fanout_size(&self, id: NodeId) -> usize {
        let from_gates = self
            .nodes
            .iter()
            .flat_map(AigNode::get_fanins)
            .filter(|f| f.get_node() == id)
            .count();
        from_gates + self.cos().filter(|co| co.get_node() == id).count()
    }

    /// Level of every node, indexed by id. The constant and the combinational inputs are
    /// at level 0, an AND gate is one level above its deepest fanin.
    pub fn levels(&self) -> Vec<u32> {
        let mut levels = vec![0; self.nodes.len()];
        for (id, node) in self.nodes.iter().enumerate() {
            if let AigNode::And { fanin0, fanin1 } = *node {
                levels[id] =
                    1 + levels[fanin0.get_node() as usize].max(levels[fanin1.get_node() as usize]);
            }
        }
        levels
    }

    /// Level of a single node, see [`Aig::levels`] to query many of them.
    pub fn level(&self, id: NodeId) -> Option<u32> {
        self.levels().get(id as usize).copied()
    }

    /// Depth of the network: the highest level of a combinational output, 0 without outputs.
    pub fn num_levels(&self) -> u32 {
        let levels = self.levels();
        self.cos()
            .map(|co| levels[co.get_node() as usize])
            .max()
            .unwrap_or(0)
    }
}

impl PartialEq for Aig {
    /// Compares the two AIGs structurally. They are equal iff their nodes (with fanins),
    /// their inputs, outputs and registers are equal, node ids included.
    /// The structural hash table is derived from the nodes, so it is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
            && self.inputs == other.inputs
            && self.outputs == other.outputs
            && self.register_outputs == other.register_outputs
            && self.register_inputs == other.register_inputs
            && self.register_inits == other.register_inits
    }
}

impl Eq for Aig {}
