//! Structural hashing of AND gates.
//!
//! Every two-input gate the network builds goes through [`normalize_and`], so operand order and
//! trivial identities are decided in exactly one place.

use super::Signal;

/// Key of the structural hash table: the two fanins of an AND gate, in canonical order.
pub(super) type StrashKey = (Signal, Signal);

/// Outcome of normalizing the operands of an AND gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Normalized {
    /// The gate simplifies to an already existing signal.
    Trivial(Signal),
    /// The gate is a real AND gate with these canonically ordered fanins.
    Gate(StrashKey),
}

/// Canonicalizes `a ∧ b`:
/// - fanins are ordered so that `fanin0` has the smaller node id,
/// - `x ∧ x = x`, `x ∧ ¬x = 0`, `x ∧ 1 = x` and `x ∧ 0 = 0` are resolved without a gate.
pub(super) fn normalize_and(a: Signal, b: Signal) -> Normalized {
    let (a, b) = if a.node > b.node { (b, a) } else { (a, b) };

    if a.node == b.node {
        return if a.complement == b.complement {
            Normalized::Trivial(a)
        } else {
            Normalized::Trivial(Signal::new(0, false))
        };
    }

    // Only `a` can be the constant now
    if a.node == 0 {
        return if a.complement {
            Normalized::Trivial(b)
        } else {
            Normalized::Trivial(Signal::new(0, false))
        };
    }

    Normalized::Gate((a, b))
}
