//! Gate instances and the per-kind evaluation rules.
//!
//! This module defines the closed set of gate kinds and their four-state
//! semantics. It provides:
//! 1. **Kinds:** The fixed fifteen-variant tagged union, matched exhaustively
//!    so adding a kind is a compile error until every rule exists.
//! 2. **Evaluation:** Pure combination rules over current input values, with
//!    persistent internal state for the sequential kinds.
//! 3. **Connections:** Ordered (wire, bit) port references, validated at
//!    construction time by the circuit builder.

use std::fmt;

use crate::common::WireState;
use crate::netlist::module::ModuleId;
use crate::netlist::wire::WireId;

/// Index of a gate within its circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateId(pub usize);

/// A gate port's attachment to one bit of one wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortConnection {
    /// Referenced wire.
    pub wire: WireId,
    /// Bit of the wire, 0 = LSB.
    pub bit: usize,
}

/// The closed set of gate kinds the evaluator understands.
///
/// Input ordering conventions, where it matters:
/// - `Mux2`: inputs are `[a, b, sel]`.
/// - `Dff`: inputs are `[d, clk]`; the clk connection is carried in the
///   netlist but edges are delivered by the circuit's clocking operation.
/// - `Dlatch`: inputs are `[d, en]`.
/// - `Nmos`/`Pmos`: inputs are `[gate, source]`; the output is the drain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Inverter.
    Not,
    /// N-ary AND.
    And,
    /// N-ary OR.
    Or,
    /// N-ary NAND.
    Nand,
    /// N-ary NOR.
    Nor,
    /// N-ary exclusive OR (parity of HIGH inputs).
    Xor,
    /// N-ary exclusive NOR.
    Xnor,
    /// Buffer (passthrough).
    Buf,
    /// 2:1 multiplexer.
    Mux2,
    /// Rising-edge D flip-flop.
    Dff,
    /// Level-sensitive D latch, transparent while enable is HIGH.
    Dlatch,
    /// N-channel pass transistor.
    Nmos,
    /// P-channel pass transistor.
    Pmos,
    /// Constant driver.
    Const,
    /// Instance of a module definition; opaque to the core evaluator.
    Module,
}

impl GateKind {
    /// Interchange name of the kind, e.g. `"NAND"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Xnor => "XNOR",
            Self::Buf => "BUF",
            Self::Mux2 => "MUX2",
            Self::Dff => "DFF",
            Self::Dlatch => "DLATCH",
            Self::Nmos => "NMOS",
            Self::Pmos => "PMOS",
            Self::Const => "CONST",
            Self::Module => "MODULE",
        }
    }

    /// Parses an interchange name; `None` outside the fixed set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NOT" => Some(Self::Not),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NAND" => Some(Self::Nand),
            "NOR" => Some(Self::Nor),
            "XOR" => Some(Self::Xor),
            "XNOR" => Some(Self::Xnor),
            "BUF" => Some(Self::Buf),
            "MUX2" => Some(Self::Mux2),
            "DFF" => Some(Self::Dff),
            "DLATCH" => Some(Self::Dlatch),
            "NMOS" => Some(Self::Nmos),
            "PMOS" => Some(Self::Pmos),
            "CONST" => Some(Self::Const),
            "MODULE" => Some(Self::Module),
            _ => None,
        }
    }

    /// Whether this kind carries persistent stored state across iterations.
    #[inline]
    pub const fn is_sequential(self) -> bool {
        matches!(self, Self::Dff | Self::Dlatch)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named gate instance with ordered port connections.
#[derive(Clone, Debug)]
pub struct Gate {
    name: String,
    kind: GateKind,
    inputs: Vec<PortConnection>,
    outputs: Vec<PortConnection>,
    stored: WireState,
    const_value: WireState,
    module_ref: Option<ModuleId>,
}

impl Gate {
    /// Creates a disconnected gate.
    ///
    /// Gates inside a circuit are created through `Circuit::add_gate`, which
    /// also enforces naming rules and limits; a free-standing gate is useful
    /// for exercising evaluation rules directly.
    pub fn new(name: impl Into<String>, kind: GateKind) -> Self {
        Self {
            name: name.into(),
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
            stored: WireState::Low,
            const_value: WireState::Low,
            module_ref: None,
        }
    }

    /// Name of the gate.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind tag of the gate.
    #[inline]
    pub const fn kind(&self) -> GateKind {
        self.kind
    }

    /// Ordered input connections.
    #[inline]
    pub fn inputs(&self) -> &[PortConnection] {
        &self.inputs
    }

    /// Ordered output connections.
    #[inline]
    pub fn outputs(&self) -> &[PortConnection] {
        &self.outputs
    }

    /// Stored value of a sequential gate (LOW for combinational kinds).
    #[inline]
    pub const fn stored(&self) -> WireState {
        self.stored
    }

    /// Configured value of a CONST gate.
    #[inline]
    pub const fn const_value(&self) -> WireState {
        self.const_value
    }

    /// Referenced module definition, for MODULE instances.
    #[inline]
    pub const fn module_ref(&self) -> Option<ModuleId> {
        self.module_ref
    }

    pub(crate) fn push_input(&mut self, conn: PortConnection) {
        self.inputs.push(conn);
    }

    pub(crate) fn push_output(&mut self, conn: PortConnection) {
        self.outputs.push(conn);
    }

    pub(crate) fn set_const_value(&mut self, value: WireState) {
        self.const_value = value;
    }

    pub(crate) fn set_module_ref(&mut self, module: ModuleId) {
        self.module_ref = Some(module);
    }

    /// Captures a flip-flop's D input at a clock edge.
    pub(crate) fn capture(&mut self, d: WireState) {
        self.stored = d;
    }

    pub(crate) fn restore_stored(&mut self, value: WireState) {
        self.stored = value;
    }

    /// Returns sequential storage to its power-on value.
    pub(crate) fn reset(&mut self) {
        self.stored = WireState::Low;
    }

    /// Evaluates the gate against the given resolved input values.
    ///
    /// `inputs` holds the current value of each declared input, in port
    /// order; an input index beyond the slice reads as UNKNOWN, so an
    /// under-wired gate degrades instead of erroring. Only DLATCH mutates
    /// internal state here (its storage tracks D while enable is HIGH);
    /// DFF storage changes exclusively at clock edges.
    pub fn evaluate(&mut self, inputs: &[WireState]) -> WireState {
        let input = |idx: usize| inputs.get(idx).copied().unwrap_or(WireState::Unknown);

        match self.kind {
            GateKind::Not => !input(0),
            GateKind::Buf => input(0),
            GateKind::And => inputs.iter().skip(1).fold(input(0), |acc, &s| acc & s),
            GateKind::Or => inputs.iter().skip(1).fold(input(0), |acc, &s| acc | s),
            GateKind::Nand => !inputs.iter().skip(1).fold(input(0), |acc, &s| acc & s),
            GateKind::Nor => !inputs.iter().skip(1).fold(input(0), |acc, &s| acc | s),
            GateKind::Xor => inputs.iter().skip(1).fold(input(0), |acc, &s| acc ^ s),
            GateKind::Xnor => !inputs.iter().skip(1).fold(input(0), |acc, &s| acc ^ s),
            GateKind::Mux2 => {
                let (a, b) = (input(0), input(1));
                match input(2) {
                    WireState::Low => a,
                    WireState::High => b,
                    // Indeterminate select: the output is only determined
                    // when both branches carry the same value already.
                    WireState::Unknown | WireState::HighZ => {
                        if a == b {
                            a
                        } else {
                            WireState::Unknown
                        }
                    }
                }
            }
            GateKind::Dff => self.stored,
            GateKind::Dlatch => {
                if input(1) == WireState::High {
                    self.stored = input(0);
                }
                self.stored
            }
            GateKind::Nmos => match input(0) {
                WireState::High => input(1),
                WireState::Low => WireState::HighZ,
                WireState::Unknown | WireState::HighZ => WireState::Unknown,
            },
            GateKind::Pmos => match input(0) {
                WireState::Low => input(1),
                WireState::High => WireState::HighZ,
                WireState::Unknown | WireState::HighZ => WireState::Unknown,
            },
            GateKind::Const => self.const_value,
            GateKind::Module => WireState::Unknown,
        }
    }
}

impl fmt::Display for Gate {
    /// One-line summary: name, kind, and port connections.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.kind)?;
        write!(f, " in:")?;
        for conn in &self.inputs {
            write!(f, " {}[{}]", conn.wire.0, conn.bit)?;
        }
        write!(f, " out:")?;
        for conn in &self.outputs {
            write!(f, " {}[{}]", conn.wire.0, conn.bit)?;
        }
        if self.kind.is_sequential() {
            write!(f, " (stored={})", self.stored)?;
        }
        Ok(())
    }
}
