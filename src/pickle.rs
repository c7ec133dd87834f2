//! Pickling, to move an [`Aig`] across a process boundary.
//!
//! A [`PickledAig`] is the primary input count together with the raw index list of the network
//! (see [`crate::index_list`]). The index list stores a sequential network through its
//! combinational view, and the primary input count is what tells register outputs apart from
//! primary inputs when unpickling.
//!
//! Unpickling never trusts its input: the literals are fully validated before any node is built.
//! Round trips preserve the function and the outputs order, not node ids. After the first round
//! trip the network is canonical and pickling it again gives the same result.
//!
//! ```rust
//! use canaig::{Aig, pickle::PickledAig};
//! let mut aig = Aig::new();
//! let a = aig.create_pi();
//! let b = aig.create_pi();
//! let f = aig.create_xor(a, b);
//! aig.create_po(f);
//!
//! let bytes = aig.pickle().to_bytes().unwrap();
//! let restored = Aig::unpickle(&PickledAig::from_bytes(&bytes).unwrap()).unwrap();
//! assert_eq!(restored, aig);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::index_list::{self, IndexList};
use crate::{Aig, DecodeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickledAig {
    /// Number of primary inputs. Any other input of the index list is a register output.
    pub num_pis: u32,
    /// Raw values of the index list.
    pub literals: Vec<u32>,
}

impl PickledAig {
    /// Opaque byte form of the pickle.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Reads back the output of [`PickledAig::to_bytes`]. The literals are only checked
    /// by [`Aig::unpickle`].
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Aig {
    /// # Panics
    ///
    /// If the numbers of register outputs and register inputs differ,
    /// as registers are paired by position.
    pub fn pickle(&self) -> PickledAig {
        assert_eq!(
            self.num_registers(),
            self.ris().count(),
            "cannot pickle an AIG with unpaired registers"
        );
        let il = index_list::encode(self);
        debug!(
            "pickled AIG: {} primary inputs, {} registers, {} literals",
            self.num_pis(),
            self.num_registers(),
            il.size()
        );
        PickledAig {
            num_pis: self.num_pis() as u32,
            literals: il.into(),
        }
    }

    /// Rebuilds an AIG from its pickle. On malformed input, an error is returned and no AIG is built.
    pub fn unpickle(pickled: &PickledAig) -> std::result::Result<Aig, DecodeError> {
        let il = IndexList::from(pickled.literals.clone());
        il.validate()?;
        if pickled.num_pis > il.num_pis() {
            return Err(DecodeError::InputCountMismatch {
                num_pis: pickled.num_pis,
                num_cis: il.num_pis(),
            });
        }
        index_list::decode_sequential(&il, il.num_pis() - pickled.num_pis)
    }
}
