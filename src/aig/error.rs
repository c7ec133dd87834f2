use thiserror::Error;

use super::NodeId;

/// The result of an AIG operation.
pub type Result<T> = std::result::Result<T, AigError>;

/// Error returned when an AIG operation failed.
///
/// Misusing the construction API (eg. mixing signals of two different networks) is a programming
/// error and panics instead.
#[derive(Debug, Error)]
pub enum AigError {
    /// A positional accessor was called with a position past the end of the collection.
    #[error("index {index} out of range for {collection} of length {len}")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// The node with given id does not exist.
    #[error("node with id={0} does not exist")]
    NodeDoesNotExist(NodeId),

    /// Simulation was given the wrong number of pattern words.
    #[error("expected {expected} simulation patterns (one per combinational input), got {got}")]
    PatternCount { expected: usize, got: usize },

    /// Exhaustive simulation only fits networks with at most 6 combinational inputs.
    #[error("exhaustive simulation supports at most 6 combinational inputs, got {0}")]
    TooManyInputs(usize),

    /// The AIG has reached an invalid state. This should never happen.
    /// For example, a fanin refers to a node which is not strictly older than the gate using it.
    #[error("the AIG has reached an invalid state - this should not happen - error: {0}")]
    InvalidState(String),

    /// Turning a pickled AIG into bytes failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] bincode::Error),

    /// Just forwarding a [`DecodeError`].
    #[error("{0}")]
    DecodeError(#[from] DecodeError),
}

/// Error returned when an index list or a pickled AIG could not be decoded.
///
/// A failed decode never exposes a partially built network.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The sequence is too short to hold the `[num_pis, num_pos, num_gates]` header.
    #[error("index list is truncated: expected a 3 values header, got {0} values")]
    MissingHeader(usize),

    /// The declared gate and output counts do not match the sequence length.
    #[error(
        "index list declares {num_gates} gates and {num_pos} outputs ({expected} values), got {actual} values"
    )]
    LengthMismatch {
        num_gates: u32,
        num_pos: u32,
        expected: usize,
        actual: usize,
    },

    /// A literal refers to a node which does not exist yet at this point of the list.
    #[error(
        "literal {literal} at position {position} refers to node {node}, but only nodes below {frontier} exist there"
    )]
    ForwardReference {
        literal: u32,
        position: usize,
        node: u32,
        frontier: u32,
    },

    /// The index list would need more nodes than a [`NodeId`] can address.
    #[error("index list declares {num_nodes} nodes, which exceeds the node id range")]
    TooManyNodes { num_nodes: u64 },

    /// The header declares more inputs than a decoder accepts to create.
    #[error("index list declares {num_pis} inputs, more than the limit of {limit}")]
    TooManyInputs { num_pis: u32, limit: u32 },

    /// The declared primary input count does not fit the encoded header.
    #[error("{num_pis} primary inputs declared, but the index list only has {num_cis} inputs")]
    InputCountMismatch { num_pis: u32, num_cis: u32 },

    /// More registers than combinational inputs or outputs to hold them.
    #[error(
        "{num_registers} registers declared, but the index list only has {num_cis} inputs and {num_cos} outputs"
    )]
    RegisterCountMismatch {
        num_registers: u32,
        num_cis: u32,
        num_cos: u32,
    },

    /// The bytes are not a pickled AIG at all.
    #[error("malformed pickle: {0}")]
    Malformed(#[from] bincode::Error),
}
