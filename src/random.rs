//! Seeded random networks, to check properties which must hold for any AIG.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::{Aig, Signal};

fn pick(rng: &mut ChaCha8Rng, pool: &[Signal]) -> Signal {
    let s = pool[rng.random_range(0..pool.len())];
    if rng.random_bool(0.5) { !s } else { s }
}

/// A random AIG with at most 4 primary inputs and 2 registers, small enough to be simulated
/// exhaustively.
///
/// Inputs, register outputs and gates are created in a random interleaving, and the outputs
/// only use some of the gates, so the network usually has dangling gates.
pub(crate) fn random_aig(seed: u64) -> Aig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut aig = Aig::new();

    let mut pending_pis = rng.random_range(0..=4usize);
    let num_registers = rng.random_range(0..=2usize);
    let mut pending_ros = num_registers;
    let num_gates = rng.random_range(0..24usize);

    let mut pool = vec![aig.get_constant(false)];
    let mut created = 0;
    while pending_pis + pending_ros > 0 || created < num_gates {
        let pending = pending_pis + pending_ros > 0;
        if pending && (pool.len() == 1 || created == num_gates || rng.random_bool(0.4)) {
            if pending_ros == 0 || (pending_pis > 0 && rng.random_bool(0.5)) {
                pending_pis -= 1;
                pool.push(aig.create_pi());
            } else {
                pending_ros -= 1;
                pool.push(aig.create_ro());
            }
            continue;
        }

        created += 1;
        let a = pick(&mut rng, &pool);
        let b = pick(&mut rng, &pool);
        let c = pick(&mut rng, &pool);
        let s = match rng.random_range(0..5) {
            0 => aig.create_and(a, b),
            1 => aig.create_or(a, b),
            2 => aig.create_xor(a, b),
            3 => aig.create_maj(a, b, c),
            _ => aig.create_ite(a, b, c),
        };
        pool.push(s);
    }

    for _ in 0..rng.random_range(1..=3) {
        let s = pick(&mut rng, &pool);
        aig.create_po(s);
    }
    for _ in 0..num_registers {
        let s = pick(&mut rng, &pool);
        aig.create_ri(s);
    }
    aig
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::random_aig;
    use crate::Aig;
    use crate::edge_list::to_edge_list;
    use crate::index_list::{decode_sequential, encode};

    #[test]
    fn generator_is_deterministic() {
        assert_eq!(random_aig(7), random_aig(7));
        assert!((0..20).any(|seed| !random_aig(seed).dangling_gates().is_empty()));
        assert!((0..20).any(|seed| !random_aig(seed).is_combinational()));
    }

    #[test]
    fn properties_of_random_networks() {
        for seed in 0..300 {
            let aig = random_aig(seed);
            let reference = aig.simulate_exhaustive().unwrap();

            // Index list round trip
            let num_registers = aig.num_registers() as u32;
            let decoded = decode_sequential(&encode(&aig), num_registers).unwrap();
            assert_eq!(decoded.num_pis(), aig.num_pis(), "seed {seed}");
            assert_eq!(decoded.num_pos(), aig.num_pos(), "seed {seed}");
            assert_eq!(decoded.num_registers(), aig.num_registers(), "seed {seed}");
            assert_eq!(decoded.simulate_exhaustive().unwrap(), reference, "seed {seed}");

            // Pickling reaches a fixed point after the first round trip
            let once = Aig::unpickle(&aig.pickle()).unwrap();
            let twice = Aig::unpickle(&once.pickle()).unwrap();
            assert_eq!(once.simulate_exhaustive().unwrap(), reference, "seed {seed}");
            assert_eq!(once.pickle(), twice.pickle(), "seed {seed}");
            assert_eq!(once, twice, "seed {seed}");

            // Cleanup keeps the function, drops every dangling gate, and is idempotent
            let clean = aig.cleanup_dangling();
            assert!(clean.dangling_gates().is_empty(), "seed {seed}");
            assert_eq!(clean.cleanup_dangling(), clean, "seed {seed}");
            assert_eq!(clean.simulate_exhaustive().unwrap(), reference, "seed {seed}");

            // One edge per fanin, per primary output and per register
            assert_eq!(
                to_edge_list(&aig).len(),
                2 * aig.num_gates() + aig.num_pos() + aig.num_registers(),
                "seed {seed}"
            );
        }
    }
}
