use crate::{Aig, AigError, AigNode, NodeId, Result, Signal};

impl Aig {
    fn check_terminal(
        &self,
        id: NodeId,
        expected: fn(&AigNode) -> bool,
        what: &str,
    ) -> Result<()> {
        match self.node(id) {
            None => Err(AigError::NodeDoesNotExist(id)),
            Some(node) if expected(node) => Ok(()),
            Some(node) => Err(AigError::InvalidState(format!(
                "{} {} is a {:?} node",
                what, id, node
            ))),
        }
    }

    fn check_signal_exists(&self, signal: Signal, what: &str) -> Result<()> {
        if self.node(signal.node).is_none() {
            return Err(AigError::InvalidState(format!(
                "{} {} refers to node {} which is not in the AIG",
                what, signal, signal.node
            )));
        }
        Ok(())
    }

    /// Checking if the AIG structure is correct, that is:
    /// - only node 0 is the constant node
    /// - fanins of every AND gate refer to strictly older nodes, in canonical order
    /// - every AND gate is registered in the structural hash table (and nothing else is)
    /// - inputs, register outputs, outputs and register inputs refer to nodes of the right kind
    ///
    /// This function is meant for debug purposes, as the library is supposed to maintain
    /// integrity of the AIG at any moment.
    pub fn check_integrity(&self) -> Result<()> {
        if self.nodes.first() != Some(&AigNode::False) {
            return Err(AigError::InvalidState(
                "node 0 is not the constant node".to_string(),
            ));
        }

        let mut num_gates = 0;
        let mut num_inputs = 0;
        let mut num_registers = 0;
        for (id, node) in self.nodes.iter().enumerate() {
            let id = id as NodeId;
            match *node {
                AigNode::False => {
                    if id != 0 {
                        return Err(AigError::InvalidState(format!(
                            "node {} is a second constant node",
                            id
                        )));
                    }
                }
                AigNode::Input => num_inputs += 1,
                AigNode::Register => num_registers += 1,
                AigNode::And { fanin0, fanin1 } => {
                    num_gates += 1;
                    if fanin0.node >= id || fanin1.node >= id {
                        return Err(AigError::InvalidState(format!(
                            "and gate {} has fanins ({}, {}) which are not strictly older",
                            id, fanin0, fanin1
                        )));
                    }
                    if fanin0.node >= fanin1.node || fanin0.node == 0 {
                        return Err(AigError::InvalidState(format!(
                            "and gate {} has non canonical fanins ({}, {})",
                            id, fanin0, fanin1
                        )));
                    }
                    if self.strash.get(&(fanin0, fanin1)) != Some(&id) {
                        return Err(AigError::InvalidState(format!(
                            "and gate {} is missing from the structural hash table",
                            id
                        )));
                    }
                }
            }
        }

        if num_gates != self.num_gates || self.strash.len() != self.num_gates {
            return Err(AigError::InvalidState(format!(
                "{} and gates in the arena, {} counted and {} hashed",
                num_gates,
                self.num_gates,
                self.strash.len()
            )));
        }

        if num_inputs != self.inputs.len() || num_registers != self.register_outputs.len() {
            return Err(AigError::InvalidState(
                "inputs or register outputs are not all registered".to_string(),
            ));
        }
        for &pi in &self.inputs {
            self.check_terminal(pi, AigNode::is_input, "input")?;
        }
        for &ro in &self.register_outputs {
            self.check_terminal(ro, AigNode::is_register, "register output")?;
        }
        if self.register_inits.len() != self.register_outputs.len() {
            return Err(AigError::InvalidState(format!(
                "{} register initial values for {} register outputs",
                self.register_inits.len(),
                self.register_outputs.len()
            )));
        }

        for &po in &self.outputs {
            self.check_signal_exists(po, "output")?;
        }
        for &ri in &self.register_inputs {
            self.check_signal_exists(ri, "register input")?;
        }

        Ok(())
    }
}
