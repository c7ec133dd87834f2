//! Depth-first traversal of an [`Aig`] and the node order the codecs rely on.

use crate::{Aig, NodeId};

/// Preorder depth-first visitor over the fanin cone of one node ([`Dfs::from_node`]) or of all
/// combinational outputs ([`Dfs::from_outputs`]).
///
/// With several outputs, the cone of the first output is walked entirely before moving on to the
/// nodes of the second one which were not reached yet, and so on. Primary outputs come first,
/// then register inputs. Within a gate, `fanin0` is walked before `fanin1`.
///
/// The visitor only borrows the AIG while yielding a node:
///
/// ```rust
/// use canaig::{Aig, dfs::Dfs};
/// let mut aig = Aig::new();
/// let a = aig.create_pi();
/// let b = aig.create_pi();
/// let f = aig.create_and(a, !b);
/// aig.create_po(f);
///
/// let mut dfs = Dfs::from_outputs(&aig);
/// let mut order = Vec::new();
/// while let Some(id) = dfs.next(&aig) {
///     order.push(id);
/// }
/// assert_eq!(order, vec![3, 1, 2]);
/// ```
pub struct Dfs {
    /// Nodes waiting to be yielded. They are flagged in `seen` as soon as they are pushed,
    /// so a node is never pushed twice.
    stack: Vec<NodeId>,
    seen: Vec<bool>,
    /// Roots still to process, next one on top. A root may already be seen when popped.
    roots: Vec<NodeId>,
}

impl Dfs {
    /// Walks the fanin cone of `start` only.
    pub fn from_node(aig: &Aig, start: NodeId) -> Self {
        let mut seen = vec![false; aig.size()];
        if let Some(flag) = seen.get_mut(start as usize) {
            *flag = true;
        }
        Dfs {
            stack: vec![start],
            seen,
            roots: Vec::new(),
        }
    }

    /// Walks the fanin cones of all combinational outputs, in order.
    pub fn from_outputs(aig: &Aig) -> Self {
        let mut roots: Vec<NodeId> = aig.cos().map(|s| s.get_node()).collect();
        roots.reverse();
        let mut dfs = Dfs {
            stack: Vec::new(),
            seen: vec![false; aig.size()],
            roots,
        };
        dfs.next_root();
        dfs
    }

    /// Pushes the next unseen root on the empty stack. Returns false once all roots are done.
    fn next_root(&mut self) -> bool {
        debug_assert!(self.stack.is_empty());

        while let Some(id) = self.roots.pop() {
            if !self.seen[id as usize] {
                self.seen[id as usize] = true;
                self.stack.push(id);
                return true;
            }
        }
        false
    }

    /// Next node in preorder, `None` when the traversal is over.
    pub fn next(&mut self, aig: &Aig) -> Option<NodeId> {
        loop {
            if let Some(id) = self.stack.pop() {
                // Reversed so that fanin0 is popped first
                for child in aig.fanins(id).rev() {
                    let child_id = child.get_node() as usize;
                    if !self.seen[child_id] {
                        self.seen[child_id] = true;
                        self.stack.push(child.get_node());
                    }
                }
                return Some(id);
            }

            if !self.next_root() {
                return None;
            }
        }
    }
}

impl Aig {
    fn reached_from_outputs(&self) -> Vec<bool> {
        let mut reached = vec![false; self.size()];
        let mut dfs = Dfs::from_outputs(self);
        while let Some(id) = dfs.next(self) {
            reached[id as usize] = true;
        }
        reached
    }

    /// AND gates which are not in the transitive fanin of any combinational output.
    pub fn dangling_gates(&self) -> Vec<NodeId> {
        let reached = self.reached_from_outputs();
        self.gates().filter(|&id| !reached[id as usize]).collect()
    }

    /// Returns the reachable nodes in topological order:
    /// - the constant node,
    /// - all combinational inputs (primary inputs, then register outputs), reachable or not,
    /// - the AND gates in the transitive fanin of the combinational outputs, by increasing id.
    ///
    /// Fanins are always older than the gate using them, so increasing ids are a valid
    /// topological order. Dangling gates are not part of the order.
    /// Register outputs break the sequential loops, so the order is always well defined.
    pub fn topological_order(&self) -> Vec<NodeId> {
        let reached = self.reached_from_outputs();
        let mut order = Vec::with_capacity(self.size());
        order.push(0);
        order.extend(self.cis());
        order.extend(self.gates().filter(|&id| reached[id as usize]));
        order
    }
}
