use crate::{Aig, AigError, AigNode, Result, Signal};

/// Truth tables of the first 6 variables, on 64 bits.
const PROJECTIONS: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

impl Aig {
    /// Bit-parallel simulation of the AIG.
    ///
    /// `patterns` holds one 64 bits word per combinational input (primary inputs first,
    /// then register outputs): bit `k` of each word makes up the `k`-th input assignment.
    /// Returns one word per combinational output (primary outputs first, then register inputs).
    pub fn simulate(&self, patterns: &[u64]) -> Result<Vec<u64>> {
        if patterns.len() != self.num_cis() {
            return Err(AigError::PatternCount {
                expected: self.num_cis(),
                got: patterns.len(),
            });
        }

        let mut values = vec![0u64; self.size()];
        for (ci, &pattern) in self.cis().zip(patterns) {
            values[ci as usize] = pattern;
        }

        let value = |values: &[u64], s: Signal| {
            let v = values[s.node as usize];
            if s.complement { !v } else { v }
        };

        // Creation order is a topological order
        for (id, node) in self.nodes.iter().enumerate() {
            if let AigNode::And { fanin0, fanin1 } = *node {
                values[id] = value(&values, fanin0) & value(&values, fanin1);
            }
        }

        Ok(self.cos().map(|co| value(&values, co)).collect())
    }

    /// Complete truth table of every combinational output, the `i`-th combinational input being
    /// the `i`-th variable. Only bits below `2^num_cis` are meaningful, the others are cleared.
    pub fn simulate_exhaustive(&self) -> Result<Vec<u64>> {
        let n = self.num_cis();
        if n > PROJECTIONS.len() {
            return Err(AigError::TooManyInputs(n));
        }
        let mask = if n == 6 { u64::MAX } else { (1u64 << (1 << n)) - 1 };

        let outputs = self.simulate(&PROJECTIONS[..n])?;
        Ok(outputs.into_iter().map(|word| word & mask).collect())
    }
}
