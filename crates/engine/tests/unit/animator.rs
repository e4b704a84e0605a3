//! Animator event-log tests.

use std::collections::HashMap;

use gatesim_core::WireState::{High, Low};
use gatesim_core::{Animator, PropagationEventKind, WireState};

use crate::common::harness::{half_adder, oscillator};

#[test]
fn step_batch_has_iteration_shape() {
    let mut fix = half_adder();
    fix.circuit.drive(fix.a, 0, High);
    fix.circuit.drive(fix.b, 0, High);
    let gate_count = fix.circuit.gates().len();
    let mut animator = Animator::new(fix.circuit);

    let batch = animator.step();
    assert!(matches!(
        batch.first().map(|e| e.kind),
        Some(PropagationEventKind::IterationStart { iteration: 1 })
    ));
    let evaluations = batch
        .iter()
        .filter(|e| matches!(e.kind, PropagationEventKind::GateEvaluated { .. }))
        .count();
    assert_eq!(evaluations, gate_count);
    assert!(batch.iter().any(|e| matches!(
        e.kind,
        PropagationEventKind::IterationEnd { iteration: 1, .. }
    )));
}

#[test]
fn sequence_numbers_are_contiguous_from_zero() {
    let mut fix = half_adder();
    fix.circuit.drive(fix.a, 0, High);
    fix.circuit.drive(fix.b, 0, Low);
    let mut animator = Animator::new(fix.circuit);
    let log = animator.run_to_completion();
    for (index, event) in log.iter().enumerate() {
        assert_eq!(event.seq, index as u64);
    }
}

#[test]
fn completes_with_terminal_event_and_accumulates() {
    let mut fix = half_adder();
    fix.circuit.drive(fix.a, 0, High);
    fix.circuit.drive(fix.b, 0, High);
    let mut animator = Animator::new(fix.circuit);

    let mut collected = Vec::new();
    while !animator.is_complete() {
        collected.extend(animator.step().iter().copied());
    }
    assert_eq!(collected, animator.log());
    assert!(matches!(
        animator.log().last().map(|e| e.kind),
        Some(PropagationEventKind::PropagationComplete { iterations: 2 })
    ));
    assert!(animator.circuit().is_stable());
    assert!(!animator.timed_out());

    // Further steps are inert.
    assert!(animator.step().is_empty());
}

#[test]
fn run_to_completion_preserves_driven_inputs() {
    let mut fix = half_adder();
    fix.circuit.drive(fix.a, 0, High);
    fix.circuit.drive(fix.b, 0, High);
    let sum = fix.sum;
    let carry = fix.carry;
    let mut animator = Animator::new(fix.circuit);
    let _ = animator.run_to_completion();
    assert_eq!(animator.circuit().sample(sum, 0), Low);
    assert_eq!(animator.circuit().sample(carry, 0), High);
}

#[test]
fn oscillator_reports_timeout() {
    let (circuit, _) = oscillator();
    let cap = circuit.max_iterations();
    let mut animator = Animator::new(circuit);
    let log = animator.run_to_completion();
    assert!(matches!(
        log.last().map(|e| e.kind),
        Some(PropagationEventKind::PropagationTimeout { iterations }) if iterations == cap
    ));
    assert!(animator.timed_out());
    assert!(!animator.circuit().is_stable());
    assert_eq!(animator.iteration(), cap);
}

#[test]
fn wire_change_events_replay_to_final_state() {
    let mut fix = half_adder();
    fix.circuit.drive(fix.a, 0, High);
    fix.circuit.drive(fix.b, 0, High);

    // Snapshot the pre-run state, then fold every WireChanged record over it;
    // the log alone must reconstruct the final state.
    let snapshot: Vec<Vec<WireState>> = fix
        .circuit
        .wires()
        .iter()
        .map(|w| w.states().to_vec())
        .collect();

    let mut animator = Animator::new(fix.circuit);
    let log = animator.run_to_completion();

    let mut replayed: HashMap<(usize, usize), WireState> = HashMap::new();
    for event in log {
        if let PropagationEventKind::WireChanged { wire, bit, to, .. } = event.kind {
            let _ = replayed.insert((wire.0, bit), to);
        }
    }

    for (wire_index, wire) in animator.circuit().wires().iter().enumerate() {
        for (bit, state) in wire.states().iter().enumerate() {
            let expected = replayed
                .get(&(wire_index, bit))
                .copied()
                .unwrap_or(snapshot[wire_index][bit]);
            assert_eq!(*state, expected, "wire {wire_index} bit {bit}");
        }
    }
}

#[test]
fn reset_clears_log_and_circuit() {
    let mut fix = half_adder();
    fix.circuit.drive(fix.a, 0, High);
    fix.circuit.drive(fix.b, 0, High);
    let a = fix.a;
    let mut animator = Animator::new(fix.circuit);
    let _ = animator.run_to_completion();
    assert!(!animator.log().is_empty());

    animator.reset();
    assert!(animator.log().is_empty());
    assert_eq!(animator.iteration(), 0);
    assert!(!animator.is_complete());
    assert_eq!(animator.circuit().sample(a, 0), WireState::Unknown);
}

#[test]
fn identical_runs_produce_identical_logs() {
    let build = || {
        let mut fix = half_adder();
        fix.circuit.drive(fix.a, 0, High);
        fix.circuit.drive(fix.b, 0, Low);
        Animator::new(fix.circuit)
    };
    let mut first = build();
    let mut second = build();
    assert_eq!(first.run_to_completion(), second.run_to_completion());
}
