use log::debug;

use crate::{Aig, AigNode, Signal};

impl Aig {
    /// Returns a new AIG without dangling gates.
    ///
    /// The strategy to rebuild the network is the one used by all the decoders:
    /// - create inputs
    /// - create register outputs (initial values included)
    /// - create and gates in topological order, only those reachable from an output
    /// - register outputs and register inputs, in order and with their polarity
    ///
    /// Nodes are renumbered densely. All inputs and registers are kept even if nothing
    /// depends on them, so the interface of the network does not change.
    /// Calling it on an already clean network yields the same network.
    pub fn cleanup_dangling(&self) -> Aig {
        let mut aig = Aig::new();
        let mut map = vec![aig.get_constant(false); self.size()];

        for pi in self.pis() {
            map[pi as usize] = aig.create_pi();
        }
        for (ro, &init) in self.ros().zip(&self.register_inits) {
            map[ro as usize] = aig.create_ro();
            let index = aig.register_inits.len() - 1;
            aig.register_inits[index] = init;
        }

        let translate = |map: &[Signal], s: Signal| {
            let new = map[s.node as usize];
            if s.complement { !new } else { new }
        };

        for id in self.topological_order() {
            if let AigNode::And { fanin0, fanin1 } = self.nodes[id as usize] {
                let new_fanin0 = translate(&map, fanin0);
                let new_fanin1 = translate(&map, fanin1);
                map[id as usize] = aig.create_and(new_fanin0, new_fanin1);
            }
        }

        for po in self.pos() {
            aig.create_po(translate(&map, po));
        }
        for ri in self.ris() {
            aig.create_ri(translate(&map, ri));
        }

        debug!(
            "cleanup_dangling: {} -> {} nodes, {} -> {} gates",
            self.size(),
            aig.size(),
            self.num_gates(),
            aig.num_gates()
        );

        aig
    }
}
