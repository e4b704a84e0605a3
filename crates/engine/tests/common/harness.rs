//! Fixture circuits and playback test doubles.
//!
//! Fixtures build canonical circuits through the public construction API so
//! every test exercises the same code paths an external circuit compiler
//! would. The doubles let playback tests drive the controller without any
//! event loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gatesim_core::animate::FrameScheduler;
use gatesim_core::{Circuit, PlayerObserver, PlayerState, PropagationEvent, WireId, WireState};

/// Half adder: `sum = a ^ b`, `carry = a & b`.
pub struct HalfAdder {
    pub circuit: Circuit,
    pub a: WireId,
    pub b: WireId,
    pub sum: WireId,
    pub carry: WireId,
}

/// Builds a half adder with marked external ports.
pub fn half_adder() -> HalfAdder {
    let mut circuit = Circuit::new();
    let a = circuit.add_wire("a", 1).unwrap();
    let b = circuit.add_wire("b", 1).unwrap();
    let sum = circuit.add_wire("sum", 1).unwrap();
    let carry = circuit.add_wire("carry", 1).unwrap();
    circuit.mark_input(a).unwrap();
    circuit.mark_input(b).unwrap();
    circuit.mark_output(sum).unwrap();
    circuit.mark_output(carry).unwrap();
    let _ = circuit.add_xor("sum_xor", a, b, sum).unwrap();
    let _ = circuit.add_and("carry_and", a, b, carry).unwrap();
    HalfAdder {
        circuit,
        a,
        b,
        sum,
        carry,
    }
}

/// Full adder over single-bit wires.
pub struct FullAdder {
    pub circuit: Circuit,
    pub a: WireId,
    pub b: WireId,
    pub cin: WireId,
    pub sum: WireId,
    pub cout: WireId,
}

/// Builds a full adder from two XORs, two ANDs, and an OR.
pub fn full_adder() -> FullAdder {
    let mut circuit = Circuit::new();
    let a = circuit.add_wire("a", 1).unwrap();
    let b = circuit.add_wire("b", 1).unwrap();
    let cin = circuit.add_wire("cin", 1).unwrap();
    let sum = circuit.add_wire("sum", 1).unwrap();
    let cout = circuit.add_wire("cout", 1).unwrap();
    let x1 = circuit.add_wire("x1", 1).unwrap();
    let c1 = circuit.add_wire("c1", 1).unwrap();
    let c2 = circuit.add_wire("c2", 1).unwrap();
    let _ = circuit.add_xor("x1_xor", a, b, x1).unwrap();
    let _ = circuit.add_xor("sum_xor", x1, cin, sum).unwrap();
    let _ = circuit.add_and("c1_and", a, b, c1).unwrap();
    let _ = circuit.add_and("c2_and", x1, cin, c2).unwrap();
    let _ = circuit.add_or("cout_or", c1, c2, cout).unwrap();
    FullAdder {
        circuit,
        a,
        b,
        cin,
        sum,
        cout,
    }
}

/// 4-bit ripple-carry adder over bus wires.
pub struct RippleAdder4 {
    pub circuit: Circuit,
    pub a: WireId,
    pub b: WireId,
    pub cin: WireId,
    pub sum: WireId,
    pub cout: WireId,
}

/// Builds a 4-bit ripple-carry adder: four chained full adders over 4-bit
/// `a`, `b`, and `sum` buses.
pub fn ripple_adder4() -> RippleAdder4 {
    let mut circuit = Circuit::new();
    let a = circuit.add_wire("a", 4).unwrap();
    let b = circuit.add_wire("b", 4).unwrap();
    let sum = circuit.add_wire("sum", 4).unwrap();
    let cin = circuit.add_wire("cin", 1).unwrap();
    let cout = circuit.add_wire("cout", 1).unwrap();
    // Carry chain between stages, one bit per link.
    let carries = [
        cin,
        circuit.add_wire("carry0", 1).unwrap(),
        circuit.add_wire("carry1", 1).unwrap(),
        circuit.add_wire("carry2", 1).unwrap(),
        cout,
    ];

    for bit in 0..4 {
        let x1 = circuit.add_wire(&format!("fa{bit}_x1"), 1).unwrap();
        let c1 = circuit.add_wire(&format!("fa{bit}_c1"), 1).unwrap();
        let c2 = circuit.add_wire(&format!("fa{bit}_c2"), 1).unwrap();

        let x1_xor = circuit
            .add_gate(gatesim_core::GateKind::Xor, &format!("fa{bit}_x1_xor"))
            .unwrap();
        circuit.connect_input(x1_xor, a, bit).unwrap();
        circuit.connect_input(x1_xor, b, bit).unwrap();
        circuit.connect_output(x1_xor, x1, 0).unwrap();

        let sum_xor = circuit
            .add_gate(gatesim_core::GateKind::Xor, &format!("fa{bit}_sum_xor"))
            .unwrap();
        circuit.connect_input(sum_xor, x1, 0).unwrap();
        circuit.connect_input(sum_xor, carries[bit], 0).unwrap();
        circuit.connect_output(sum_xor, sum, bit).unwrap();

        let c1_and = circuit
            .add_gate(gatesim_core::GateKind::And, &format!("fa{bit}_c1_and"))
            .unwrap();
        circuit.connect_input(c1_and, a, bit).unwrap();
        circuit.connect_input(c1_and, b, bit).unwrap();
        circuit.connect_output(c1_and, c1, 0).unwrap();

        let c2_and = circuit
            .add_gate(gatesim_core::GateKind::And, &format!("fa{bit}_c2_and"))
            .unwrap();
        circuit.connect_input(c2_and, x1, 0).unwrap();
        circuit.connect_input(c2_and, carries[bit], 0).unwrap();
        circuit.connect_output(c2_and, c2, 0).unwrap();

        let cout_or = circuit
            .add_gate(gatesim_core::GateKind::Or, &format!("fa{bit}_cout_or"))
            .unwrap();
        circuit.connect_input(cout_or, c1, 0).unwrap();
        circuit.connect_input(cout_or, c2, 0).unwrap();
        circuit.connect_output(cout_or, carries[bit + 1], 0).unwrap();
    }

    circuit.mark_input(a).unwrap();
    circuit.mark_input(b).unwrap();
    circuit.mark_input(cin).unwrap();
    circuit.mark_output(sum).unwrap();
    circuit.mark_output(cout).unwrap();
    RippleAdder4 {
        circuit,
        a,
        b,
        cin,
        sum,
        cout,
    }
}

/// Cross-coupled NAND SR latch (active-low set/reset).
pub struct SrLatch {
    pub circuit: Circuit,
    pub s: WireId,
    pub r: WireId,
    pub q: WireId,
    pub qn: WireId,
}

/// Builds an SR latch: `q = NAND(s, qn)`, `qn = NAND(r, q)`.
pub fn sr_latch() -> SrLatch {
    let mut circuit = Circuit::new();
    let s = circuit.add_wire("s", 1).unwrap();
    let r = circuit.add_wire("r", 1).unwrap();
    let q = circuit.add_wire("q", 1).unwrap();
    let qn = circuit.add_wire("qn", 1).unwrap();
    let _ = circuit.add_nand("q_nand", s, qn, q).unwrap();
    let _ = circuit.add_nand("qn_nand", r, q, qn).unwrap();
    SrLatch {
        circuit,
        s,
        r,
        q,
        qn,
    }
}

/// Single D flip-flop with external D, CLK, and Q wires.
pub struct DffCircuit {
    pub circuit: Circuit,
    pub d: WireId,
    pub clk: WireId,
    pub q: WireId,
}

/// Builds a lone D flip-flop.
pub fn dff_circuit() -> DffCircuit {
    let mut circuit = Circuit::new();
    let d = circuit.add_wire("d", 1).unwrap();
    let clk = circuit.add_wire("clk", 1).unwrap();
    let q = circuit.add_wire("q", 1).unwrap();
    let _ = circuit.add_dff("ff", d, clk, q).unwrap();
    DffCircuit { circuit, d, clk, q }
}

/// Builds a NOT gate feeding its own input: the canonical oscillator.
///
/// The loop wire is seeded LOW; left at UNKNOWN it would sit at the X fixed
/// point (`NOT(X) = X`) instead of toggling.
pub fn oscillator() -> (Circuit, WireId) {
    let mut circuit = Circuit::new();
    let w = circuit.add_wire("w", 1).unwrap();
    let _ = circuit.add_not("inv", w, w).unwrap();
    circuit.drive(w, 0, WireState::Low);
    (circuit, w)
}

/// Shared state of a [`ManualScheduler`], inspectable from tests.
#[derive(Default)]
pub struct SchedulerState {
    /// Whether a frame request is pending.
    pub pending: Cell<bool>,
    /// Total `request_frame` calls.
    pub requests: Cell<usize>,
    /// Total `cancel_frame` calls.
    pub cancels: Cell<usize>,
}

/// Frame scheduler double: records requests instead of scheduling anything.
#[derive(Default)]
pub struct ManualScheduler {
    state: Rc<SchedulerState>,
}

impl ManualScheduler {
    /// Creates a scheduler and a handle onto its shared state.
    pub fn new() -> (Self, Rc<SchedulerState>) {
        let state = Rc::new(SchedulerState::default());
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.state.pending.set(true);
        self.state.requests.set(self.state.requests.get() + 1);
    }

    fn cancel_frame(&mut self) {
        self.state.pending.set(false);
        self.state.cancels.set(self.state.cancels.get() + 1);
    }
}

/// Everything a [`RecordingObserver`] saw, inspectable from tests.
#[derive(Default)]
pub struct ObserverLog {
    /// State transitions in order.
    pub transitions: RefCell<Vec<(PlayerState, PlayerState)>>,
    /// Event count of each frame batch.
    pub frame_sizes: RefCell<Vec<usize>>,
    /// Completion notifications (`stable` flag).
    pub completions: RefCell<Vec<bool>>,
}

/// Playback observer double: records every notification.
pub struct RecordingObserver {
    log: Rc<ObserverLog>,
}

impl RecordingObserver {
    /// Creates an observer and a handle onto its recorded log.
    pub fn new() -> (Self, Rc<ObserverLog>) {
        let log = Rc::new(ObserverLog::default());
        (
            Self {
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl PlayerObserver for RecordingObserver {
    fn state_changed(&mut self, from: PlayerState, to: PlayerState) {
        self.log.transitions.borrow_mut().push((from, to));
    }

    fn frame(&mut self, events: &[PropagationEvent]) {
        self.log.frame_sizes.borrow_mut().push(events.len());
    }

    fn completed(&mut self, stable: bool) {
        self.log.completions.borrow_mut().push(stable);
    }
}
