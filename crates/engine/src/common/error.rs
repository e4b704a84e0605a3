//! Construction and interchange error definitions.
//!
//! Every violation a circuit builder or document decoder can produce is a
//! variant here, reported fast with a descriptive message. Evaluation itself
//! has no error class: a malformed or oscillating circuit is a valid,
//! observable simulation outcome, not a failure of the engine.

use thiserror::Error;

use super::constants::{
    MAX_GATES, MAX_GATE_INPUTS, MAX_GATE_OUTPUTS, MAX_MODULES, MAX_NAME_LEN, MAX_WIRES,
    MAX_WIRE_WIDTH,
};

/// Errors raised while building a circuit or decoding a circuit document.
#[derive(Debug, Error)]
pub enum CircuitError {
    /// The circuit already holds [`MAX_WIRES`] wires.
    #[error("too many wires (limit {MAX_WIRES})")]
    TooManyWires,

    /// The circuit already holds [`MAX_GATES`] gates.
    #[error("too many gates (limit {MAX_GATES})")]
    TooManyGates,

    /// The circuit already holds [`MAX_MODULES`] module definitions.
    #[error("too many module definitions (limit {MAX_MODULES})")]
    TooManyModules,

    /// A name exceeds [`MAX_NAME_LEN`] characters or is empty.
    #[error("invalid name `{0}` (must be 1..={MAX_NAME_LEN} characters)")]
    InvalidName(String),

    /// A wire with this name already exists.
    #[error("duplicate wire name `{0}`")]
    DuplicateWire(String),

    /// A gate with this name already exists.
    #[error("duplicate gate name `{0}`")]
    DuplicateGate(String),

    /// Requested wire width is outside `1..=`[`MAX_WIRE_WIDTH`].
    #[error("invalid wire width {0} (must be 1..={MAX_WIRE_WIDTH})")]
    InvalidWidth(usize),

    /// A gate already has [`MAX_GATE_INPUTS`] input connections.
    #[error("gate `{0}` exceeds {MAX_GATE_INPUTS} inputs")]
    TooManyInputs(String),

    /// A gate already has [`MAX_GATE_OUTPUTS`] output connections.
    #[error("gate `{0}` exceeds {MAX_GATE_OUTPUTS} outputs")]
    TooManyOutputs(String),

    /// A connection references a wire index that does not exist.
    #[error("reference to unknown wire index {0}")]
    UnknownWire(usize),

    /// An operation references a gate index that does not exist.
    #[error("reference to unknown gate index {0}")]
    UnknownGate(usize),

    /// A module instance references a module definition that does not exist.
    #[error("reference to unknown module index {0}")]
    UnknownModule(usize),

    /// A connection addresses a bit outside the target wire's width.
    #[error("bit {bit} out of range for wire `{wire}` of width {width}")]
    BitOutOfRange {
        /// Name of the referenced wire.
        wire: String,
        /// Requested bit index.
        bit: usize,
        /// Actual width of the wire.
        width: usize,
    },

    /// An operation requires a gate kind the target gate does not have.
    #[error("gate `{gate}` is not a {expected} gate")]
    KindMismatch {
        /// Name of the gate the operation addressed.
        gate: String,
        /// Gate kind the operation requires.
        expected: &'static str,
    },

    /// A document used a gate type name outside the fixed set.
    #[error("unknown gate type `{0}`")]
    UnknownGateKind(String),

    /// A document used a state integer outside `0..=3`.
    #[error("invalid state value {0} (must be 0..=3)")]
    InvalidState(u8),

    /// A document's per-bit state array does not match the wire's width.
    #[error("state array of wire `{wire}` has {len} entries, expected {width}")]
    StateWidthMismatch {
        /// Name of the wire being decoded.
        wire: String,
        /// Number of entries in the document's state array.
        len: usize,
        /// Declared width of the wire.
        width: usize,
    },

    /// The document is not valid JSON for the interchange schema.
    #[error("malformed circuit document: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a document file failed.
    #[error("circuit document i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
