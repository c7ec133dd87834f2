//! Compact linear encoding of an [`Aig`], the index list.
//!
//! The list is a flat sequence of `u32` values:
//!
//! ```text
//! [num_pis, num_pos, num_gates, lit0, lit1, ..., lit0, lit1, po_lit, ..., po_lit]
//! ```
//!
//! Nodes of the list are numbered the usual way: 0 is the constant node, `1..=num_pis` are the
//! inputs, and the `k`-th gate is node `num_pis + 1 + k`. A literal is `2 * node + complement`.
//!
//! The kind of a gate is carried by the order of its two literals: `lit0 < lit1` is an AND gate,
//! `lit0 > lit1` is a XOR gate. [`IndexList::add_and`] and [`IndexList::add_xor`] take care of
//! ordering the literals. Two equal literals are read as an AND gate.
//!
//! ```rust
//! use canaig::{Aig, index_list::{decode, encode}};
//! let mut aig = Aig::new();
//! let a = aig.create_pi();
//! let b = aig.create_pi();
//! let f = aig.create_and(a, b);
//! aig.create_po(f);
//!
//! let il = encode(&aig);
//! assert_eq!(il.raw(), &[2, 1, 1, 2, 4, 6]);
//! assert_eq!(decode(&il).unwrap(), aig);
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Aig, AigError, AigNode, DecodeError, NodeId, Result, Signal};

const HEADER_LEN: usize = 3;

/// Highest input count [`IndexList::validate`] accepts.
///
/// Gates and outputs take room in the list itself, inputs only take a header value. Without a
/// bound, a three values list could ask the decoder for billions of nodes.
pub const MAX_INPUTS: u32 = 1 << 20;

/// Kind of a gate, read from the order of its two literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Xor,
}

/// Kind of the gate encoded by the literal pair `(lit0, lit1)`.
pub fn gate_kind(lit0: u32, lit1: u32) -> GateKind {
    if lit0 > lit1 {
        GateKind::Xor
    } else {
        GateKind::And
    }
}

/// An AIG (or anything with AND and XOR gates) as a flat list of literals.
///
/// The builder methods keep the list well formed. Raw values can also be set directly
/// through [`From<Vec<u32>>`] or [`IndexList::set`], in which case nothing is checked
/// until [`IndexList::validate`] (or [`decode`]) is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexList {
    values: Vec<u32>,
}

impl Default for IndexList {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<Vec<u32>> for IndexList {
    fn from(values: Vec<u32>) -> Self {
        IndexList { values }
    }
}

impl From<IndexList> for Vec<u32> {
    fn from(il: IndexList) -> Self {
        il.values
    }
}

impl IndexList {
    /// An index list with `num_pis` inputs, no gate and no output.
    pub fn new(num_pis: u32) -> Self {
        IndexList {
            values: vec![num_pis, 0, 0],
        }
    }

    pub fn raw(&self) -> &[u32] {
        &self.values
    }

    /// Number of raw values, header included.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    fn header(&self, index: usize) -> u32 {
        self.values.get(index).copied().unwrap_or(0)
    }

    pub fn num_pis(&self) -> u32 {
        self.header(0)
    }

    pub fn num_pos(&self) -> u32 {
        self.header(1)
    }

    pub fn num_gates(&self) -> u32 {
        self.header(2)
    }

    /// Raw lists may be too short to hold a header, builders start by completing it.
    fn complete_header(&mut self) {
        if self.values.len() < HEADER_LEN {
            self.values.resize(HEADER_LEN, 0);
        }
    }

    /// Adds `n` inputs. Must be called before any gate is added,
    /// as gates are numbered after the inputs.
    pub fn add_inputs(&mut self, n: u32) {
        assert_eq!(
            self.num_gates(),
            0,
            "inputs must be added before the gates of an index list"
        );
        self.complete_header();
        self.values[0] += n;
    }

    fn add_gate(&mut self, lit0: u32, lit1: u32) -> u32 {
        assert_eq!(
            self.num_pos(),
            0,
            "gates must be added before the outputs of an index list"
        );
        self.complete_header();
        self.values[2] += 1;
        self.values.push(lit0);
        self.values.push(lit1);
        (self.num_pis() + self.num_gates()) << 1
    }

    /// Adds an AND gate and returns the (positive) literal of the new gate.
    pub fn add_and(&mut self, lit0: u32, lit1: u32) -> u32 {
        self.add_gate(lit0.min(lit1), lit0.max(lit1))
    }

    /// Adds a XOR gate and returns the (positive) literal of the new gate.
    ///
    /// # Panics
    ///
    /// If both literals are equal, as such a pair reads as an AND gate.
    pub fn add_xor(&mut self, lit0: u32, lit1: u32) -> u32 {
        assert_ne!(lit0, lit1, "a XOR gate needs two different literals");
        self.add_gate(lit0.max(lit1), lit0.min(lit1))
    }

    pub fn add_output(&mut self, lit: u32) {
        self.complete_header();
        self.values[1] += 1;
        self.values.push(lit);
    }

    /// Removes all gates and outputs. Inputs are kept.
    pub fn clear(&mut self) {
        let num_pis = self.num_pis();
        self.values = vec![num_pis, 0, 0];
    }

    pub fn get(&self, index: usize) -> Result<u32> {
        self.values
            .get(index)
            .copied()
            .ok_or(AigError::IndexOutOfRange {
                collection: "index list",
                index,
                len: self.values.len(),
            })
    }

    /// Overwrites a raw value. The list is not checked again.
    pub fn set(&mut self, index: usize, value: u32) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(AigError::IndexOutOfRange {
                collection: "index list",
                index,
                len,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    fn gate_values(&self) -> &[u32] {
        let end = (HEADER_LEN + 2 * self.num_gates() as usize).min(self.values.len());
        self.values.get(HEADER_LEN..end).unwrap_or(&[])
    }

    /// Literal pairs of the gates, in order. Use [`gate_kind`] to tell AND and XOR gates apart.
    pub fn gates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.gate_values()
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
    }

    /// Output literals, in order.
    pub fn pos(&self) -> impl Iterator<Item = u32> + '_ {
        let start = (HEADER_LEN + self.gate_values().len()).min(self.values.len());
        self.values[start..]
            .iter()
            .copied()
            .take(self.num_pos() as usize)
    }

    /// The raw values, as `{4, 1, 3, ...}`.
    pub fn to_raw_string(&self) -> String {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        format!("{{{}}}", values.join(", "))
    }

    /// Checks that the list can be decoded:
    /// - the header is there and the declared counts match the length of the list
    /// - every node fits in a [`NodeId`], and there are at most [`MAX_INPUTS`] inputs
    /// - every literal only refers to the constant, an input or an earlier gate
    pub fn validate(&self) -> std::result::Result<(), DecodeError> {
        if self.values.len() < HEADER_LEN {
            return Err(DecodeError::MissingHeader(self.values.len()));
        }

        let (num_pis, num_pos, num_gates) = (self.num_pis(), self.num_pos(), self.num_gates());
        let expected = HEADER_LEN as u64 + 2 * num_gates as u64 + num_pos as u64;
        if expected != self.values.len() as u64 {
            return Err(DecodeError::LengthMismatch {
                num_gates,
                num_pos,
                expected: expected as usize,
                actual: self.values.len(),
            });
        }

        let num_nodes = 1 + num_pis as u64 + num_gates as u64;
        if num_nodes >= NodeId::MAX as u64 {
            return Err(DecodeError::TooManyNodes { num_nodes });
        }
        if num_pis > MAX_INPUTS {
            return Err(DecodeError::TooManyInputs {
                num_pis,
                limit: MAX_INPUTS,
            });
        }

        let check = |position: usize, frontier: u32| {
            let literal = self.values[position];
            let node = literal >> 1;
            if node >= frontier {
                return Err(DecodeError::ForwardReference {
                    literal,
                    position,
                    node,
                    frontier,
                });
            }
            Ok(())
        };

        for k in 0..num_gates {
            let frontier = num_pis + 1 + k;
            let position = HEADER_LEN + 2 * k as usize;
            check(position, frontier)?;
            check(position + 1, frontier)?;
        }
        let frontier = num_pis + 1 + num_gates;
        for position in HEADER_LEN + 2 * num_gates as usize..self.values.len() {
            check(position, frontier)?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a IndexList {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gates: Vec<(u32, u32)> = self.gates().collect();
        let pos: Vec<u32> = self.pos().collect();
        write!(
            f,
            "#PIs: {}, #POs: {}, #Gates: {}, Gates: {:?}, POs: {:?}",
            self.num_pis(),
            self.num_pos(),
            self.num_gates(),
            gates,
            pos
        )
    }
}

/// Encodes the AIG into an index list.
///
/// Only gates in the transitive fanin of an output are encoded, following
/// [`Aig::topological_order`], and they are renumbered densely.
/// A sequential AIG is encoded through its combinational view: register outputs are
/// inputs placed after the primary inputs, register inputs are outputs placed after the
/// primary outputs. Use [`decode_sequential`] to get the registers back.
pub fn encode(aig: &Aig) -> IndexList {
    let mut il = IndexList::new(aig.num_cis() as u32);
    let mut map: Vec<NodeId> = vec![0; aig.size()];
    for (i, ci) in aig.cis().enumerate() {
        map[ci as usize] = i as NodeId + 1;
    }

    let literal = |map: &[NodeId], s: Signal| {
        Signal::new(map[s.get_node() as usize], s.get_complement()).literal()
    };

    for id in aig.topological_order() {
        if let Some(&AigNode::And { fanin0, fanin1 }) = aig.node(id) {
            let lit = il.add_and(literal(&map, fanin0), literal(&map, fanin1));
            map[id as usize] = lit >> 1;
        }
    }

    for co in aig.cos() {
        il.add_output(literal(&map, co));
    }

    debug!(
        "encoded AIG with {} nodes into index list: {} inputs, {} gates, {} outputs",
        aig.size(),
        il.num_pis(),
        il.num_gates(),
        il.num_pos()
    );
    il
}

/// Decodes an index list into a new combinational AIG.
///
/// The list is validated first: on error, no AIG is built.
/// AND gates map to [`Aig::create_and`] and XOR gates to [`Aig::create_xor`], so the decoded
/// network is structurally hashed and may have fewer gates than the list.
pub fn decode(il: &IndexList) -> std::result::Result<Aig, DecodeError> {
    decode_sequential(il, 0)
}

/// Decodes an index list into a new AIG, turning the last `num_registers` inputs into
/// register outputs and the last `num_registers` outputs into the matching register inputs.
///
/// This reverses [`encode`] on a sequential AIG. Initial values of registers are not part of an
/// index list, they are all unknown after decoding.
pub fn decode_sequential(il: &IndexList, num_registers: u32) -> std::result::Result<Aig, DecodeError> {
    il.validate()?;
    if num_registers > il.num_pis() || num_registers > il.num_pos() {
        return Err(DecodeError::RegisterCountMismatch {
            num_registers,
            num_cis: il.num_pis(),
            num_cos: il.num_pos(),
        });
    }

    let mut aig = Aig::new();
    let mut map: Vec<Signal> = vec![aig.get_constant(false)];
    for _ in 0..il.num_pis() - num_registers {
        map.push(aig.create_pi());
    }
    for _ in 0..num_registers {
        map.push(aig.create_ro());
    }

    // Validated: literals only refer to already mapped nodes
    let signal = |map: &[Signal], lit: u32| {
        let s = map[(lit >> 1) as usize];
        if lit & 1 == 1 { !s } else { s }
    };

    for (lit0, lit1) in il.gates() {
        let a = signal(&map, lit0);
        let b = signal(&map, lit1);
        let s = match gate_kind(lit0, lit1) {
            GateKind::And => aig.create_and(a, b),
            GateKind::Xor => aig.create_xor(a, b),
        };
        map.push(s);
    }

    let num_pos = (il.num_pos() - num_registers) as usize;
    for (i, lit) in il.pos().enumerate() {
        let s = signal(&map, lit);
        if i < num_pos {
            aig.create_po(s);
        } else {
            aig.create_ri(s);
        }
    }

    debug_assert!(aig.check_integrity().is_ok());
    debug!(
        "decoded index list of {} values into AIG: {} inputs, {} registers, {} gates, {} outputs",
        il.size(),
        aig.num_pis(),
        aig.num_registers(),
        aig.num_gates(),
        aig.num_pos()
    );
    Ok(aig)
}

impl Aig {
    /// See [`encode`].
    pub fn to_index_list(&self) -> IndexList {
        encode(self)
    }

    /// See [`decode`].
    pub fn from_index_list(il: &IndexList) -> std::result::Result<Aig, DecodeError> {
        decode(il)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    #[test]
    fn empty() {
        let il = encode(&Aig::new());
        assert_eq!(il.raw(), &[0, 0, 0]);
        assert_eq!(il.size(), 3);
        assert_eq!(il.to_raw_string(), "{0, 0, 0}");
        assert_eq!(il, IndexList::default());

        let aig = decode(&IndexList::default()).unwrap();
        assert_eq!(aig.num_gates(), 0);
        assert_eq!(aig.num_pis(), 0);
        assert_eq!(aig.num_pos(), 0);
        assert!(aig.simulate_exhaustive().unwrap().is_empty());
    }

    #[test]
    fn inputs_only() {
        let mut aig = Aig::new();
        for _ in 0..4 {
            aig.create_pi();
        }
        let il = encode(&aig);
        assert_eq!(il.raw(), &[4, 0, 0]);
        assert_eq!(il.to_raw_string(), "{4, 0, 0}");

        let mut il = IndexList::default();
        il.add_inputs(4);
        assert_eq!(il.num_pis(), 4);
        let decoded = decode(&il).unwrap();
        assert_eq!(decoded.num_pis(), 4);
        assert_eq!(decoded.num_gates(), 0);
        assert_eq!(decoded.num_pos(), 0);
    }

    #[test]
    fn single_and() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let b = aig.create_pi();
        let f = aig.create_and(a, b);
        aig.create_po(f);

        let il = encode(&aig);
        assert_eq!(il.raw(), &[2, 1, 1, 2, 4, 6]);
        assert_eq!(il.gates().collect::<Vec<_>>(), vec![(2, 4)]);
        assert_eq!(il.pos().collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn encode_with_xor() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let b = aig.create_pi();
        let c = aig.create_pi();
        let d = aig.create_pi();
        let t0 = aig.create_and(a, b);
        let t1 = aig.create_and(c, d);
        let t2 = aig.create_xor(t0, t1);
        aig.create_po(t2);

        let il = encode(&aig);
        assert_eq!(
            il.raw(),
            &[4, 1, 5, 2, 4, 6, 8, 10, 13, 11, 12, 15, 17, 19]
        );
        assert_eq!(
            il.to_raw_string(),
            "{4, 1, 5, 2, 4, 6, 8, 10, 13, 11, 12, 15, 17, 19}"
        );
        assert_eq!(
            il.to_string(),
            "#PIs: 4, #POs: 1, #Gates: 5, Gates: [(2, 4), (6, 8), (10, 13), (11, 12), (15, 17)], POs: [19]"
        );
    }

    #[test]
    fn encode_decode_inverted_signals() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let b = aig.create_pi();
        let c = aig.create_pi();
        let t0 = aig.create_and(a, b);
        let t1 = aig.create_and(b, !c);
        let t2 = aig.create_and(!t0, !t1);
        aig.create_po(!t1);
        aig.create_po(t2);

        let il = encode(&aig);
        assert_eq!(il.num_pis(), 3);
        assert_eq!(il.num_pos(), 2);
        assert_eq!(il.num_gates(), 3);
        assert_eq!(il.size(), 11);
        assert_eq!(il.raw(), &[3, 2, 3, 2, 4, 4, 7, 9, 11, 11, 12]);

        let decoded = decode(&il).unwrap();
        assert_eq!(decoded.num_pis(), 3);
        assert_eq!(decoded.num_pos(), 2);
        assert_eq!(decoded.num_gates(), 3);
        assert_eq!(
            decoded.simulate_exhaustive().unwrap(),
            aig.simulate_exhaustive().unwrap()
        );
        assert_eq!(decoded, aig);
    }

    #[test]
    fn decode_with_xor() {
        let il = IndexList::from(vec![4, 1, 3, 2, 4, 6, 8, 12, 10, 14]);
        assert_eq!(il.num_pis(), 4);
        assert_eq!(il.num_pos(), 1);
        assert_eq!(il.num_gates(), 3);
        assert_eq!(
            il.gates().collect::<Vec<_>>(),
            vec![(2, 4), (6, 8), (12, 10)]
        );
        assert_eq!(gate_kind(12, 10), GateKind::Xor);
        assert_eq!(il.pos().collect::<Vec<_>>(), vec![14]);

        let aig = decode(&il).unwrap();
        assert_eq!(aig.num_gates(), 5);
        assert_eq!(aig.num_pis(), 4);
        assert_eq!(aig.num_pos(), 1);
        assert_eq!(aig.simulate_exhaustive().unwrap(), vec![0x7888]);
    }

    #[test]
    fn builder() {
        let mut il = IndexList::new(3);
        assert_eq!(il.num_pis(), 3);

        assert_eq!(il.add_and(1, 2), 8);
        assert_eq!(il.add_and(3, 2), 10);
        il.add_output(5);
        assert_eq!(il.num_gates(), 2);
        assert_eq!(il.num_pos(), 1);
        assert_eq!(il.gates().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
        assert_eq!(il.pos().collect::<Vec<_>>(), vec![5]);
        assert_eq!(il.size(), 8);
        assert_eq!(il.iter().count(), il.size());
        assert!(il.validate().is_ok());

        il.clear();
        assert_eq!(il.raw(), &[3, 0, 0]);

        assert_eq!(il.add_xor(2, 6), 8);
        assert_eq!(il.gates().collect::<Vec<_>>(), vec![(6, 2)]);
        il.add_output(9);
        let aig = decode(&il).unwrap();
        // a xnor c
        assert_eq!(aig.simulate_exhaustive().unwrap(), vec![0xa5]);
    }

    #[test]
    #[should_panic]
    fn xor_needs_different_literals() {
        IndexList::new(2).add_xor(2, 2);
    }

    #[test]
    #[should_panic]
    fn gates_after_outputs() {
        let mut il = IndexList::new(2);
        il.add_output(2);
        il.add_and(2, 4);
    }

    #[test]
    fn get_set() {
        let mut il = IndexList::from(vec![4, 1, 3, 2, 4, 6, 8, 12, 10, 14]);
        let values: Vec<u32> = (&il).into_iter().copied().collect();
        assert_eq!(values, vec![4, 1, 3, 2, 4, 6, 8, 12, 10, 14]);
        assert_eq!(il.get(0).unwrap(), 4);
        assert_eq!(il.get(2).unwrap(), 3);

        il.set(2, 99).unwrap();
        assert_eq!(il.get(2).unwrap(), 99);
        assert!(il.validate().is_err());
        il.set(2, 3).unwrap();
        assert!(il.validate().is_ok());

        assert!(matches!(
            il.get(100),
            Err(AigError::IndexOutOfRange {
                index: 100,
                len: 10,
                ..
            })
        ));
        assert!(il.set(100, 1).is_err());
    }

    #[test]
    fn equal_literals_are_and() {
        let il = IndexList::from(vec![1, 1, 1, 3, 3, 4]);
        let aig = decode(&il).unwrap();
        assert_eq!(aig.num_gates(), 0);
        assert_eq!(aig.po_at(0).unwrap(), !aig.make_signal(1));
    }

    #[test]
    fn reject_malformed() {
        assert!(matches!(
            decode(&IndexList::from(vec![2, 1])),
            Err(DecodeError::MissingHeader(2))
        ));
        assert!(matches!(
            decode(&IndexList::from(vec![2, 1, 1, 2, 4])),
            Err(DecodeError::LengthMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
        assert!(matches!(
            decode(&IndexList::from(vec![2, 1, 1, 2, 4, 6, 8])),
            Err(DecodeError::LengthMismatch { .. })
        ));
        // Gate referring to itself
        assert!(matches!(
            decode(&IndexList::from(vec![2, 1, 1, 2, 6, 6])),
            Err(DecodeError::ForwardReference {
                literal: 6,
                position: 4,
                node: 3,
                frontier: 3
            })
        ));
        // Output referring to a missing gate
        assert!(matches!(
            decode(&IndexList::from(vec![2, 1, 1, 2, 4, 8])),
            Err(DecodeError::ForwardReference { position: 5, .. })
        ));
        assert!(matches!(
            decode(&IndexList::from(vec![u32::MAX, 0, 0])),
            Err(DecodeError::TooManyNodes { .. })
        ));
        assert!(matches!(
            decode(&IndexList::from(vec![MAX_INPUTS + 1, 0, 0])),
            Err(DecodeError::TooManyInputs {
                num_pis,
                limit: MAX_INPUTS
            }) if num_pis == MAX_INPUTS + 1
        ));
        assert!(IndexList::new(MAX_INPUTS).validate().is_ok());
    }

    #[test]
    fn accessors_on_short_lists() {
        let il = IndexList::from(vec![5]);
        assert_eq!(il.num_pis(), 5);
        assert_eq!(il.num_pos(), 0);
        assert_eq!(il.num_gates(), 0);
        assert_eq!(il.gates().count(), 0);
        assert_eq!(il.pos().count(), 0);

        // Declared counts larger than the list
        let il = IndexList::from(vec![2, 3, 4, 2, 4]);
        assert_eq!(il.gates().collect::<Vec<_>>(), vec![(2, 4)]);
        assert_eq!(il.pos().count(), 0);
        assert!(il.validate().is_err());
    }

    #[test]
    fn dangling_gates_are_not_encoded() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let b = aig.create_pi();
        let _dead = aig.create_and(a, !b);
        let f = aig.create_and(!a, b);
        aig.create_po(f);

        let il = aig.to_index_list();
        assert_eq!(il.raw(), &[2, 1, 1, 3, 4, 6]);
        assert_eq!(Aig::from_index_list(&il).unwrap(), aig.cleanup_dangling());
    }

    #[test]
    fn round_trip() {
        let mut aig = Aig::new();
        let a = aig.create_pi();
        let b = aig.create_pi();
        let c = aig.create_pi();
        let m = aig.create_maj(a, b, c);
        let x = aig.create_nary_xor(&[a, b, c]);
        let i = aig.create_ite(a, !b, c);
        aig.create_po(x);
        aig.create_po(!m);
        aig.create_po(i);
        aig.create_po(x);
        aig.create_po(aig.get_constant(true));

        let decoded = decode(&encode(&aig)).unwrap();
        assert_eq!(decoded.num_pis(), aig.num_pis());
        assert_eq!(decoded.num_pos(), aig.num_pos());
        assert_eq!(
            decoded.simulate_exhaustive().unwrap(),
            aig.simulate_exhaustive().unwrap()
        );
        // Already canonical: the second round trip changes nothing
        assert_eq!(encode(&decoded), encode(&aig));
    }

    #[test]
    fn sequential() {
        let mut aig = Aig::new();
        let x = aig.create_pi(); // 1
        let ro = aig.create_ro(); // 2
        let y = aig.create_pi(); // 3
        let next = aig.create_and(x, !ro);
        let out = aig.create_and(ro, y);
        aig.create_po(out);
        aig.create_ri(next);

        let il = encode(&aig);
        // Inputs x, y, ro are list nodes 1, 2, 3
        assert_eq!(il.raw(), &[3, 2, 2, 2, 7, 4, 6, 10, 8]);

        let combinational = decode(&il).unwrap();
        assert!(combinational.is_combinational());
        assert_eq!(combinational.num_pis(), 3);
        assert_eq!(combinational.num_pos(), 2);

        let decoded = decode_sequential(&il, 1).unwrap();
        assert_eq!(decoded.num_pis(), 2);
        assert_eq!(decoded.num_registers(), 1);
        assert_eq!(decoded.num_pos(), 1);
        assert_eq!(
            decoded.simulate_exhaustive().unwrap(),
            combinational.simulate_exhaustive().unwrap()
        );
        assert_eq!(encode(&decoded), il);

        assert!(matches!(
            decode_sequential(&il, 3),
            Err(DecodeError::RegisterCountMismatch {
                num_registers: 3,
                ..
            })
        ));
    }
}
