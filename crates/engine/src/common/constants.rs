//! Structural limits of a circuit.
//!
//! These bounds are enforced at construction and deserialization time, never
//! silently truncated. They match the reference simulator so documents remain
//! interchangeable in both directions.

/// Maximum number of wires in a circuit.
pub const MAX_WIRES: usize = 1024;

/// Maximum number of gates in a circuit.
pub const MAX_GATES: usize = 2048;

/// Maximum number of module definitions in a circuit.
pub const MAX_MODULES: usize = 128;

/// Maximum length of a wire, gate, or module name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum number of input connections on a single gate.
pub const MAX_GATE_INPUTS: usize = 16;

/// Maximum number of output connections on a single gate.
pub const MAX_GATE_OUTPUTS: usize = 8;

/// Maximum width of a wire in bits.
///
/// Bus values are exposed as `u64`, which caps the usable width.
pub const MAX_WIRE_WIDTH: usize = 64;
