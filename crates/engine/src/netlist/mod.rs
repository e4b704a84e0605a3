//! The circuit data model: wires, gates, modules, and the circuit itself.
//!
//! This module family holds everything a netlist is made of and the
//! simulation algorithms that drive it:
//! 1. **Wires:** Named fixed-width buses with double-buffered state.
//! 2. **Gates:** Kind-tagged instances with exhaustive evaluation rules.
//! 3. **Modules:** Hierarchical interface definitions for interchange.
//! 4. **Circuit:** The aggregate, with construction, propagation, and
//!    clocking.

/// Circuit aggregate, propagation, and clocking.
pub mod circuit;

/// Gate instances and per-kind evaluation.
pub mod gate;

/// Hierarchical module definitions.
pub mod module;

/// Named signal buses with double-buffered state.
pub mod wire;

pub use circuit::{Circuit, GateEvaluation, IterationReport, PropagationOutcome, WireChange};
pub use gate::{Gate, GateId, GateKind, PortConnection};
pub use module::{ModuleDef, ModuleId, PortSpec};
pub use wire::{Wire, WireId};
