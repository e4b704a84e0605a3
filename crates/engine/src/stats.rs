//! Structural circuit statistics.
//!
//! This module analyzes a circuit's composition rather than its behavior.
//! It reports:
//! 1. **Counts:** Gates, sequential elements, and an estimated transistor
//!    total from a per-kind cost table.
//! 2. **Critical path:** The longest combinational dependency chain in gate
//!    delays, computed by iterative level relaxation over the netlist.

use std::fmt;

use crate::netlist::{Circuit, GateKind};

/// Estimated transistor cost of one gate of the given kind.
///
/// CMOS-style estimates: complex gates (XOR, MUX) cost transmission-gate
/// networks, sequential elements cost master-slave structures. MODULE
/// instances are free here; their contents are counted once flattened.
pub const fn transistor_count(kind: GateKind) -> usize {
    match kind {
        GateKind::Not => 2,
        GateKind::Buf => 4,
        GateKind::And | GateKind::Or => 6,
        GateKind::Nand | GateKind::Nor => 4,
        GateKind::Xor | GateKind::Xnor | GateKind::Mux2 => 12,
        GateKind::Dff => 40,
        GateKind::Dlatch => 20,
        GateKind::Nmos | GateKind::Pmos => 1,
        GateKind::Const | GateKind::Module => 0,
    }
}

/// Structural summary of a circuit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CircuitStats {
    /// Total gate count.
    pub gates: usize,
    /// Estimated transistor count.
    pub transistors: usize,
    /// Number of sequential elements (DFF and DLATCH).
    pub flip_flops: usize,
    /// Longest combinational path in gate delays.
    pub critical_path_depth: usize,
}

impl CircuitStats {
    /// Analyzes a circuit's structure.
    pub fn analyze(circuit: &Circuit) -> Self {
        let mut stats = Self {
            gates: circuit.gates().len(),
            ..Self::default()
        };
        for gate in circuit.gates() {
            stats.transistors += transistor_count(gate.kind());
            if gate.kind().is_sequential() {
                stats.flip_flops += 1;
            }
        }
        stats.critical_path_depth = critical_path_depth(circuit);
        stats
    }
}

/// Longest combinational chain, in gate delays.
///
/// Each wire's level relaxes to `max(input levels) + 1` across its driving
/// gate; sequential gates break the chain, so registered feedback does not
/// count as combinational depth. Relaxation is bounded by the gate count,
/// which suffices for any acyclic chain; a combinational cycle stops
/// contributing once the bound is hit.
fn critical_path_depth(circuit: &Circuit) -> usize {
    let mut wire_levels = vec![0usize; circuit.wires().len()];

    for _ in 0..=circuit.gates().len() {
        let mut changed = false;
        for gate in circuit.gates() {
            if gate.kind().is_sequential() {
                continue;
            }
            let input_level = gate
                .inputs()
                .iter()
                .filter_map(|conn| wire_levels.get(conn.wire.0).copied())
                .max()
                .unwrap_or(0);
            for conn in gate.outputs() {
                if let Some(level) = wire_levels.get_mut(conn.wire.0) {
                    if input_level + 1 > *level {
                        *level = input_level + 1;
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    wire_levels.into_iter().max().unwrap_or(0)
}

impl fmt::Display for CircuitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gates:         {}", self.gates)?;
        writeln!(f, "transistors:  ~{}", self.transistors)?;
        writeln!(f, "flip-flops:    {}", self.flip_flops)?;
        write!(f, "critical path: {} gate delays", self.critical_path_depth)
    }
}
