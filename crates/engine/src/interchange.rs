//! Circuit interchange: the JSON description format.
//!
//! Serializes circuits to the wire/gate document layout shared with the
//! reference simulator and decodes such documents back, re-validating every
//! limit and reference on the way in. Wires are referenced by position in
//! the `wires` array; states are the integer encoding 0=LOW, 1=HIGH,
//! 2=UNKNOWN, 3=HIGHZ.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{CircuitError, WireState};
use crate::netlist::{Circuit, GateKind, ModuleId, WireId};

/// A whole circuit as a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitDoc {
    /// Clock edges fired so far.
    #[serde(default)]
    pub cycle: u64,
    /// Whether the circuit was at a fixed point.
    #[serde(default)]
    pub stable: bool,
    /// Wires, in creation order; gates reference them by position.
    #[serde(default)]
    pub wires: Vec<WireDoc>,
    /// Gates, in creation order.
    #[serde(default)]
    pub gates: Vec<GateDoc>,
}

/// One wire of a circuit document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDoc {
    /// Wire name.
    pub name: String,
    /// Width in bits.
    pub width: usize,
    /// External input flag.
    #[serde(default)]
    pub is_input: bool,
    /// External output flag.
    #[serde(default)]
    pub is_output: bool,
    /// Per-bit state integers, LSB first; length must equal `width`.
    #[serde(default)]
    pub state: Vec<u8>,
}

/// One gate of a circuit document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDoc {
    /// Gate name.
    pub name: String,
    /// Gate type name, e.g. `"NAND"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered input connections.
    #[serde(default)]
    pub inputs: Vec<PortDoc>,
    /// Ordered output connections.
    #[serde(default)]
    pub outputs: Vec<PortDoc>,
    /// Stored state integer; DFF/DLATCH only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored: Option<u8>,
    /// Driven state integer; CONST only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub const_value: Option<u8>,
    /// Referenced module definition index; MODULE only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_ref: Option<usize>,
}

/// One port connection of a gate document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDoc {
    /// Position of the referenced wire in the `wires` array.
    pub wire: usize,
    /// Bit of the wire, 0 = LSB.
    pub bit: usize,
}

/// Captures a circuit as a document.
pub fn to_document(circuit: &Circuit) -> CircuitDoc {
    let wires = circuit
        .wires()
        .iter()
        .map(|wire| WireDoc {
            name: wire.name().to_owned(),
            width: wire.width(),
            is_input: wire.is_input,
            is_output: wire.is_output,
            state: wire.states().iter().map(|s| s.to_int()).collect(),
        })
        .collect();

    let gates = circuit
        .gates()
        .iter()
        .map(|gate| GateDoc {
            name: gate.name().to_owned(),
            kind: gate.kind().name().to_owned(),
            inputs: gate
                .inputs()
                .iter()
                .map(|conn| PortDoc {
                    wire: conn.wire.0,
                    bit: conn.bit,
                })
                .collect(),
            outputs: gate
                .outputs()
                .iter()
                .map(|conn| PortDoc {
                    wire: conn.wire.0,
                    bit: conn.bit,
                })
                .collect(),
            stored: gate
                .kind()
                .is_sequential()
                .then_some(gate.stored().to_int()),
            const_value: (gate.kind() == GateKind::Const).then_some(gate.const_value().to_int()),
            module_ref: gate.module_ref().map(|m| m.0),
        })
        .collect();

    CircuitDoc {
        cycle: circuit.cycle_count(),
        stable: circuit.is_stable(),
        wires,
        gates,
    }
}

/// Rebuilds a circuit from a document, re-validating every limit and
/// reference.
///
/// # Errors
///
/// Fails on any violation a builder call would reject: limits, bad names or
/// widths, dangling references, out-of-range bits, unknown gate type names,
/// state integers outside `0..=3`, or a state array not matching its wire's
/// width.
pub fn from_document(doc: CircuitDoc) -> Result<Circuit, CircuitError> {
    let mut circuit = Circuit::new();

    for wire_doc in doc.wires {
        let id = circuit.add_wire(&wire_doc.name, wire_doc.width)?;
        if wire_doc.state.len() != wire_doc.width {
            return Err(CircuitError::StateWidthMismatch {
                wire: wire_doc.name,
                len: wire_doc.state.len(),
                width: wire_doc.width,
            });
        }
        for (bit, raw) in wire_doc.state.iter().enumerate() {
            let state = WireState::from_int(*raw).ok_or(CircuitError::InvalidState(*raw))?;
            circuit.drive(id, bit, state);
        }
        if wire_doc.is_input {
            circuit.mark_input(id)?;
        }
        if wire_doc.is_output {
            circuit.mark_output(id)?;
        }
    }

    for gate_doc in doc.gates {
        let kind = GateKind::from_name(&gate_doc.kind)
            .ok_or(CircuitError::UnknownGateKind(gate_doc.kind))?;
        let id = circuit.add_gate(kind, &gate_doc.name)?;
        for port in gate_doc.inputs {
            circuit.connect_input(id, WireId(port.wire), port.bit)?;
        }
        for port in gate_doc.outputs {
            circuit.connect_output(id, WireId(port.wire), port.bit)?;
        }
        if let Some(raw) = gate_doc.stored {
            let state = WireState::from_int(raw).ok_or(CircuitError::InvalidState(raw))?;
            circuit.restore_stored(id, state);
        }
        if let Some(raw) = gate_doc.const_value {
            let state = WireState::from_int(raw).ok_or(CircuitError::InvalidState(raw))?;
            circuit.set_const_value(id, state)?;
        }
        if let Some(index) = gate_doc.module_ref {
            circuit.restore_module_ref(id, ModuleId(index));
        }
    }

    circuit.restore_sim_state(doc.cycle, doc.stable);
    Ok(circuit)
}

/// Serializes a circuit to pretty-printed JSON.
///
/// # Errors
///
/// Fails only if JSON encoding itself fails.
pub fn to_json(circuit: &Circuit) -> Result<String, CircuitError> {
    Ok(serde_json::to_string_pretty(&to_document(circuit))?)
}

/// Parses a circuit from JSON.
///
/// # Errors
///
/// Fails on malformed JSON or any violation [`from_document`] rejects.
pub fn from_json(json: &str) -> Result<Circuit, CircuitError> {
    from_document(serde_json::from_str(json)?)
}

/// Writes a circuit as JSON to any writer.
///
/// # Errors
///
/// Fails on an i/o or encoding failure.
pub fn write_json<W: Write>(circuit: &Circuit, writer: W) -> Result<(), CircuitError> {
    serde_json::to_writer_pretty(writer, &to_document(circuit))?;
    Ok(())
}

/// Reads a circuit from JSON on any reader.
///
/// # Errors
///
/// Fails on an i/o failure, malformed JSON, or any violation
/// [`from_document`] rejects.
pub fn read_json<R: Read>(reader: R) -> Result<Circuit, CircuitError> {
    from_document(serde_json::from_reader(reader)?)
}

/// Saves a circuit as a JSON file.
///
/// # Errors
///
/// Fails on an i/o or encoding failure.
pub fn save(circuit: &Circuit, path: impl AsRef<Path>) -> Result<(), CircuitError> {
    let file = File::create(path)?;
    write_json(circuit, BufWriter::new(file))
}

/// Loads a circuit from a JSON file.
///
/// # Errors
///
/// Fails on an i/o failure, malformed JSON, or any violation
/// [`from_document`] rejects.
pub fn load(path: impl AsRef<Path>) -> Result<Circuit, CircuitError> {
    let file = File::open(path)?;
    read_json(BufReader::new(file))
}
