//! Circuit aggregate: construction, propagation, and clocking.
//!
//! A circuit owns its wires, gates, and module definitions, and drives them
//! with the two-phase settle algorithm. It provides:
//! 1. **Construction:** Fail-fast builder operations with every structural
//!    limit enforced up front.
//! 2. **Propagation:** Repeated simultaneous-update iterations to a fixed
//!    point, or a reported timeout at the iteration cap.
//! 3. **Clocking:** Edge capture for flip-flops followed by a fresh settle,
//!    so no flip-flop observes its own downstream feedback within a tick.
//! 4. **Stimulus:** Defensive drive/sample access for external callers.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::common::constants::{
    MAX_GATES, MAX_GATE_INPUTS, MAX_GATE_OUTPUTS, MAX_MODULES, MAX_NAME_LEN, MAX_WIRES,
    MAX_WIRE_WIDTH,
};
use crate::common::{CircuitError, WireState};
use crate::config::Config;
use crate::netlist::gate::{Gate, GateId, GateKind, PortConnection};
use crate::netlist::module::{ModuleDef, ModuleId};
use crate::netlist::wire::{Wire, WireId};

/// One bit of one wire changing value during an iteration commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireChange {
    /// Wire that changed.
    pub wire: WireId,
    /// Bit that changed, 0 = LSB.
    pub bit: usize,
    /// Value before the commit.
    pub from: WireState,
    /// Value after the commit.
    pub to: WireState,
}

/// One gate's evaluation result during an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateEvaluation {
    /// Gate that was evaluated.
    pub gate: GateId,
    /// Value the gate produced.
    pub output: WireState,
}

/// Everything observable about a single propagation iteration.
#[derive(Clone, Debug)]
pub struct IterationReport {
    /// Every gate evaluation, in gate order.
    pub evaluations: Vec<GateEvaluation>,
    /// Every wire bit that changed at the commit, in wire order.
    pub changes: Vec<WireChange>,
    /// Whether the iteration left the circuit at a fixed point.
    pub stable: bool,
}

/// Outcome of driving a circuit toward a fixed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// The circuit reached a fixed point.
    Settled {
        /// Iterations executed, including the final no-change pass.
        iterations: usize,
    },
    /// The circuit was still changing at the iteration cap.
    ///
    /// The circuit is left flagged unstable; callers must treat this as a
    /// reported condition, never as success.
    TimedOut {
        /// Iterations executed (the cap).
        iterations: usize,
    },
}

impl PropagationOutcome {
    /// Whether the circuit reached a fixed point.
    #[inline]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Settled { .. })
    }

    /// Iterations the settle attempt executed.
    #[inline]
    pub const fn iterations(self) -> usize {
        match self {
            Self::Settled { iterations } | Self::TimedOut { iterations } => iterations,
        }
    }
}

/// A gate-level circuit: wires, gates, module definitions, and simulation
/// state.
#[derive(Clone, Debug)]
pub struct Circuit {
    wires: Vec<Wire>,
    gates: Vec<Gate>,
    modules: Vec<ModuleDef>,
    stable: bool,
    cycle_count: u64,
    max_iterations: usize,
}

impl Circuit {
    /// Creates an empty circuit with the default iteration cap.
    pub fn new() -> Self {
        Self {
            wires: Vec::new(),
            gates: Vec::new(),
            modules: Vec::new(),
            stable: false,
            cycle_count: 0,
            max_iterations: crate::config::defaults::MAX_ITERATIONS,
        }
    }

    /// Creates an empty circuit configured from `config`.
    pub fn with_config(config: &Config) -> Self {
        let mut circuit = Self::new();
        circuit.set_max_iterations(config.sim.max_iterations);
        circuit
    }

    fn validate_name(name: &str) -> Result<(), CircuitError> {
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(CircuitError::InvalidName(name.to_owned()));
        }
        Ok(())
    }

    /// Adds a named wire of the given bit width, every bit UNKNOWN.
    ///
    /// # Errors
    ///
    /// Fails on a width outside `1..=64`, an invalid or duplicate name, or
    /// when the wire limit is reached.
    pub fn add_wire(&mut self, name: &str, width: usize) -> Result<WireId, CircuitError> {
        if self.wires.len() >= MAX_WIRES {
            return Err(CircuitError::TooManyWires);
        }
        Self::validate_name(name)?;
        if !(1..=MAX_WIRE_WIDTH).contains(&width) {
            return Err(CircuitError::InvalidWidth(width));
        }
        if self.find_wire(name).is_some() {
            return Err(CircuitError::DuplicateWire(name.to_owned()));
        }
        let id = WireId(self.wires.len());
        self.wires.push(Wire::new(name.to_owned(), width));
        Ok(id)
    }

    /// Adds a named gate of the given kind, initially disconnected.
    ///
    /// # Errors
    ///
    /// Fails on an invalid or duplicate name, or when the gate limit is
    /// reached.
    pub fn add_gate(&mut self, kind: GateKind, name: &str) -> Result<GateId, CircuitError> {
        if self.gates.len() >= MAX_GATES {
            return Err(CircuitError::TooManyGates);
        }
        Self::validate_name(name)?;
        if self.find_gate(name).is_some() {
            return Err(CircuitError::DuplicateGate(name.to_owned()));
        }
        let id = GateId(self.gates.len());
        self.gates.push(Gate::new(name, kind));
        Ok(id)
    }

    /// Registers a module definition.
    ///
    /// # Errors
    ///
    /// Fails on an invalid name, port-cardinality or port-width violations,
    /// or when the module limit is reached.
    pub fn add_module(&mut self, def: ModuleDef) -> Result<ModuleId, CircuitError> {
        if self.modules.len() >= MAX_MODULES {
            return Err(CircuitError::TooManyModules);
        }
        Self::validate_name(&def.name)?;
        if def.inputs.len() > MAX_GATE_INPUTS {
            return Err(CircuitError::TooManyInputs(def.name));
        }
        if def.outputs.len() > MAX_GATE_OUTPUTS {
            return Err(CircuitError::TooManyOutputs(def.name));
        }
        for port in def.inputs.iter().chain(&def.outputs) {
            Self::validate_name(&port.name)?;
            if !(1..=MAX_WIRE_WIDTH).contains(&port.width) {
                return Err(CircuitError::InvalidWidth(port.width));
            }
        }
        let id = ModuleId(self.modules.len());
        self.modules.push(def);
        Ok(id)
    }

    fn check_port(&self, wire: WireId, bit: usize) -> Result<(), CircuitError> {
        let target = self
            .wires
            .get(wire.0)
            .ok_or(CircuitError::UnknownWire(wire.0))?;
        if bit >= target.width() {
            return Err(CircuitError::BitOutOfRange {
                wire: target.name().to_owned(),
                bit,
                width: target.width(),
            });
        }
        Ok(())
    }

    /// Connects the next input port of `gate` to `(wire, bit)`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown gate or wire, a bit outside the wire's width, or
    /// when the gate already has its maximum number of inputs.
    pub fn connect_input(
        &mut self,
        gate: GateId,
        wire: WireId,
        bit: usize,
    ) -> Result<(), CircuitError> {
        self.check_port(wire, bit)?;
        let target = self
            .gates
            .get_mut(gate.0)
            .ok_or(CircuitError::UnknownGate(gate.0))?;
        if target.inputs().len() >= MAX_GATE_INPUTS {
            return Err(CircuitError::TooManyInputs(target.name().to_owned()));
        }
        target.push_input(PortConnection { wire, bit });
        Ok(())
    }

    /// Connects the next output port of `gate` to `(wire, bit)`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown gate or wire, a bit outside the wire's width, or
    /// when the gate already has its maximum number of outputs.
    pub fn connect_output(
        &mut self,
        gate: GateId,
        wire: WireId,
        bit: usize,
    ) -> Result<(), CircuitError> {
        self.check_port(wire, bit)?;
        let target = self
            .gates
            .get_mut(gate.0)
            .ok_or(CircuitError::UnknownGate(gate.0))?;
        if target.outputs().len() >= MAX_GATE_OUTPUTS {
            return Err(CircuitError::TooManyOutputs(target.name().to_owned()));
        }
        target.push_output(PortConnection { wire, bit });
        Ok(())
    }

    /// Configures the value a CONST gate drives.
    ///
    /// # Errors
    ///
    /// Fails on an unknown gate or a gate that is not CONST.
    pub fn set_const_value(&mut self, gate: GateId, value: WireState) -> Result<(), CircuitError> {
        let target = self
            .gates
            .get_mut(gate.0)
            .ok_or(CircuitError::UnknownGate(gate.0))?;
        if target.kind() != GateKind::Const {
            return Err(CircuitError::KindMismatch {
                gate: target.name().to_owned(),
                expected: "CONST",
            });
        }
        target.set_const_value(value);
        Ok(())
    }

    /// Points a MODULE instance at a registered module definition.
    ///
    /// # Errors
    ///
    /// Fails on an unknown gate or module, or a gate that is not MODULE.
    pub fn set_module_ref(&mut self, gate: GateId, module: ModuleId) -> Result<(), CircuitError> {
        if module.0 >= self.modules.len() {
            return Err(CircuitError::UnknownModule(module.0));
        }
        let target = self
            .gates
            .get_mut(gate.0)
            .ok_or(CircuitError::UnknownGate(gate.0))?;
        if target.kind() != GateKind::Module {
            return Err(CircuitError::KindMismatch {
                gate: target.name().to_owned(),
                expected: "MODULE",
            });
        }
        target.set_module_ref(module);
        Ok(())
    }

    /// Restores sequential storage while decoding a document. Non-sequential
    /// kinds ignore the value.
    pub(crate) fn restore_stored(&mut self, gate: GateId, value: WireState) {
        if let Some(target) = self.gates.get_mut(gate.0) {
            if target.kind().is_sequential() {
                target.restore_stored(value);
            }
        }
    }

    /// Restores a MODULE instance's reference without consulting the module
    /// table; interchange documents carry instances but not definitions.
    pub(crate) fn restore_module_ref(&mut self, gate: GateId, module: ModuleId) {
        if let Some(target) = self.gates.get_mut(gate.0) {
            if target.kind() == GateKind::Module {
                target.set_module_ref(module);
            }
        }
    }

    pub(crate) fn restore_sim_state(&mut self, cycle_count: u64, stable: bool) {
        self.cycle_count = cycle_count;
        self.stable = stable;
    }

    /// Marks a wire as an external input.
    ///
    /// # Errors
    ///
    /// Fails on an unknown wire.
    pub fn mark_input(&mut self, wire: WireId) -> Result<(), CircuitError> {
        let target = self
            .wires
            .get_mut(wire.0)
            .ok_or(CircuitError::UnknownWire(wire.0))?;
        target.is_input = true;
        Ok(())
    }

    /// Marks a wire as an external output.
    ///
    /// # Errors
    ///
    /// Fails on an unknown wire.
    pub fn mark_output(&mut self, wire: WireId) -> Result<(), CircuitError> {
        let target = self
            .wires
            .get_mut(wire.0)
            .ok_or(CircuitError::UnknownWire(wire.0))?;
        target.is_output = true;
        Ok(())
    }

    /// Looks a wire up by name.
    pub fn find_wire(&self, name: &str) -> Option<WireId> {
        self.wires
            .iter()
            .position(|w| w.name() == name)
            .map(WireId)
    }

    /// Looks a gate up by name.
    pub fn find_gate(&self, name: &str) -> Option<GateId> {
        self.gates
            .iter()
            .position(|g| g.name() == name)
            .map(GateId)
    }

    /// The wire behind an id, if it exists.
    #[inline]
    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.get(id.0)
    }

    /// The gate behind an id, if it exists.
    #[inline]
    pub fn gate(&self, id: GateId) -> Option<&Gate> {
        self.gates.get(id.0)
    }

    /// All wires, in creation order.
    #[inline]
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// All gates, in creation order.
    #[inline]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// All module definitions, in registration order.
    #[inline]
    pub fn modules(&self) -> &[ModuleDef] {
        &self.modules
    }

    /// Drives one bit of a wire from outside the simulation.
    ///
    /// Out-of-range references are ignored, matching the reference engine's
    /// runtime behavior; construction-time references are validated instead.
    pub fn drive(&mut self, wire: WireId, bit: usize, value: WireState) {
        if let Some(target) = self.wires.get_mut(wire.0) {
            target.drive(bit, value);
        }
    }

    /// Samples one bit of a wire; UNKNOWN for out-of-range references.
    #[inline]
    pub fn sample(&self, wire: WireId, bit: usize) -> WireState {
        self.wires
            .get(wire.0)
            .map_or(WireState::Unknown, |w| w.state(bit))
    }

    /// Reads a whole wire as an unsigned integer; `None` if the wire does
    /// not exist or any bit is indeterminate.
    pub fn wire_u64(&self, wire: WireId) -> Option<u64> {
        self.wires.get(wire.0).and_then(Wire::to_u64)
    }

    /// Drives a whole wire from an unsigned integer, LSB first.
    pub fn drive_u64(&mut self, wire: WireId, value: u64) {
        if let Some(target) = self.wires.get_mut(wire.0) {
            target.drive_u64(value);
        }
    }

    /// Executes exactly one two-phase iteration.
    ///
    /// Phase one evaluates every gate against *current* wire values only,
    /// staging results into the write buffers; phase two commits every wire
    /// at once. The report carries each evaluation and each changed bit so
    /// callers can narrate the iteration without re-simulating it.
    pub fn step_once(&mut self) -> IterationReport {
        let mut evaluations = Vec::with_capacity(self.gates.len());
        let mut scratch = [WireState::Unknown; MAX_GATE_INPUTS];

        for index in 0..self.gates.len() {
            let arity = self.gates[index].inputs().len();
            for slot in 0..arity {
                let conn = self.gates[index].inputs()[slot];
                scratch[slot] = self.sample(conn.wire, conn.bit);
            }
            let output = self.gates[index].evaluate(&scratch[..arity]);
            evaluations.push(GateEvaluation {
                gate: GateId(index),
                output,
            });
            if let Some(conn) = self.gates[index].outputs().first().copied() {
                if let Some(target) = self.wires.get_mut(conn.wire.0) {
                    target.stage(conn.bit, output);
                }
            }
        }

        let mut changes = Vec::new();
        for (index, wire) in self.wires.iter_mut().enumerate() {
            wire.commit(|bit, from, to| {
                changes.push(WireChange {
                    wire: WireId(index),
                    bit,
                    from,
                    to,
                });
            });
        }

        self.stable = changes.is_empty();
        IterationReport {
            evaluations,
            changes,
            stable: self.stable,
        }
    }

    /// Drives the circuit to a fixed point, or reports a timeout at the
    /// iteration cap. The cap is a convergence safeguard, not a time limit;
    /// a circuit that hits it is left flagged unstable.
    pub fn propagate(&mut self) -> PropagationOutcome {
        for iteration in 1..=self.max_iterations {
            let report = self.step_once();
            trace!(iteration, changes = report.changes.len(), "settle iteration");
            if report.stable {
                debug!(iterations = iteration, "circuit settled");
                return PropagationOutcome::Settled {
                    iterations: iteration,
                };
            }
        }
        warn!(cap = self.max_iterations, "circuit failed to settle");
        PropagationOutcome::TimedOut {
            iterations: self.max_iterations,
        }
    }

    /// Fires one clock edge: every flip-flop captures its D input's present
    /// value, then a fresh settle ripples the captured values downstream.
    ///
    /// Capture happens for all flip-flops before any propagation, so a
    /// flip-flop can never observe its own just-updated feedback within the
    /// same tick.
    pub fn clock_edge(&mut self) -> PropagationOutcome {
        let captures: Vec<(usize, WireState)> = self
            .gates
            .iter()
            .enumerate()
            .filter(|(_, gate)| gate.kind() == GateKind::Dff)
            .filter_map(|(index, gate)| {
                gate.inputs()
                    .first()
                    .map(|conn| (index, self.sample(conn.wire, conn.bit)))
            })
            .collect();
        for (index, d) in captures {
            self.gates[index].capture(d);
        }
        self.cycle_count += 1;
        debug!(cycle = self.cycle_count, "clock edge");
        self.propagate()
    }

    /// Runs one full cycle: settle, clock edge, settle.
    ///
    /// The edge fires even if the pre-edge settle timed out, matching the
    /// reference engine; the first non-convergent outcome is the one
    /// reported.
    pub fn step_cycle(&mut self) -> PropagationOutcome {
        let before_edge = self.propagate();
        let after_edge = self.clock_edge();
        if before_edge.is_stable() {
            after_edge
        } else {
            before_edge
        }
    }

    /// Runs up to `cycles` full cycles, stopping early on non-convergence.
    pub fn run(&mut self, cycles: usize) -> PropagationOutcome {
        let mut outcome = PropagationOutcome::Settled { iterations: 0 };
        for _ in 0..cycles {
            outcome = self.step_cycle();
            if !outcome.is_stable() {
                break;
            }
        }
        outcome
    }

    /// Returns every wire to UNKNOWN and sequential storage to LOW, and
    /// clears the cycle counter. CONST gates re-drive on the next settle.
    pub fn reset(&mut self) {
        for wire in &mut self.wires {
            wire.reset();
        }
        for gate in &mut self.gates {
            gate.reset();
        }
        self.cycle_count = 0;
        self.stable = false;
    }

    /// Whether the last settle attempt reached a fixed point.
    #[inline]
    pub const fn is_stable(&self) -> bool {
        self.stable
    }

    /// Clock edges fired since construction or the last reset.
    #[inline]
    pub const fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Iteration cap per settle attempt.
    #[inline]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Overrides the iteration cap per settle attempt.
    pub fn set_max_iterations(&mut self, cap: usize) {
        self.max_iterations = cap.max(1);
    }
}

/// High-level gate creation: one call builds a gate and its single-bit
/// connections. Multi-bit wiring goes through [`Circuit::connect_input`] and
/// [`Circuit::connect_output`] directly.
impl Circuit {
    fn add_unary(
        &mut self,
        kind: GateKind,
        name: &str,
        input: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        let gate = self.add_gate(kind, name)?;
        self.connect_input(gate, input, 0)?;
        self.connect_output(gate, output, 0)?;
        Ok(gate)
    }

    fn add_binary(
        &mut self,
        kind: GateKind,
        name: &str,
        a: WireId,
        b: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        let gate = self.add_gate(kind, name)?;
        self.connect_input(gate, a, 0)?;
        self.connect_input(gate, b, 0)?;
        self.connect_output(gate, output, 0)?;
        Ok(gate)
    }

    /// Adds an inverter between two single-bit wires.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_not(
        &mut self,
        name: &str,
        input: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_unary(GateKind::Not, name, input, output)
    }

    /// Adds a buffer between two single-bit wires.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_buf(
        &mut self,
        name: &str,
        input: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_unary(GateKind::Buf, name, input, output)
    }

    /// Adds a two-input AND gate.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_and(
        &mut self,
        name: &str,
        a: WireId,
        b: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_binary(GateKind::And, name, a, b, output)
    }

    /// Adds a two-input OR gate.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_or(
        &mut self,
        name: &str,
        a: WireId,
        b: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_binary(GateKind::Or, name, a, b, output)
    }

    /// Adds a two-input NAND gate.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_nand(
        &mut self,
        name: &str,
        a: WireId,
        b: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_binary(GateKind::Nand, name, a, b, output)
    }

    /// Adds a two-input NOR gate.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_nor(
        &mut self,
        name: &str,
        a: WireId,
        b: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_binary(GateKind::Nor, name, a, b, output)
    }

    /// Adds a two-input XOR gate.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_xor(
        &mut self,
        name: &str,
        a: WireId,
        b: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        self.add_binary(GateKind::Xor, name, a, b, output)
    }

    /// Adds a 2:1 multiplexer with inputs `[a, b, sel]`.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_mux2(
        &mut self,
        name: &str,
        a: WireId,
        b: WireId,
        sel: WireId,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        let gate = self.add_gate(GateKind::Mux2, name)?;
        self.connect_input(gate, a, 0)?;
        self.connect_input(gate, b, 0)?;
        self.connect_input(gate, sel, 0)?;
        self.connect_output(gate, output, 0)?;
        Ok(gate)
    }

    /// Adds a D flip-flop with inputs `[d, clk]` and output `q`.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_dff(
        &mut self,
        name: &str,
        d: WireId,
        clk: WireId,
        q: WireId,
    ) -> Result<GateId, CircuitError> {
        let gate = self.add_gate(GateKind::Dff, name)?;
        self.connect_input(gate, d, 0)?;
        self.connect_input(gate, clk, 0)?;
        self.connect_output(gate, q, 0)?;
        Ok(gate)
    }

    /// Adds a D latch with inputs `[d, en]` and output `q`.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_dlatch(
        &mut self,
        name: &str,
        d: WireId,
        en: WireId,
        q: WireId,
    ) -> Result<GateId, CircuitError> {
        let gate = self.add_gate(GateKind::Dlatch, name)?;
        self.connect_input(gate, d, 0)?;
        self.connect_input(gate, en, 0)?;
        self.connect_output(gate, q, 0)?;
        Ok(gate)
    }

    /// Adds a constant driver for `value` onto a single-bit wire.
    ///
    /// # Errors
    ///
    /// Fails as [`Circuit::add_gate`] or the connection calls would.
    pub fn add_const(
        &mut self,
        name: &str,
        value: WireState,
        output: WireId,
    ) -> Result<GateId, CircuitError> {
        let gate = self.add_gate(GateKind::Const, name)?;
        self.set_const_value(gate, value)?;
        self.connect_output(gate, output, 0)?;
        Ok(gate)
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    /// Diagnostic dump: simulation state, then every wire and gate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "cycle {}  stable {}",
            self.cycle_count,
            if self.stable { "yes" } else { "no" }
        )?;
        writeln!(f, "wires ({}):", self.wires.len())?;
        for (index, wire) in self.wires.iter().enumerate() {
            write!(f, "  [{index:4}] {:<20} {wire}", wire.name())?;
            if wire.is_input {
                write!(f, " (input)")?;
            }
            if wire.is_output {
                write!(f, " (output)")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "gates ({}):", self.gates.len())?;
        for (index, gate) in self.gates.iter().enumerate() {
            writeln!(f, "  [{index:4}] {gate}")?;
        }
        Ok(())
    }
}
