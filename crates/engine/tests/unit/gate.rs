//! Gate evaluation rule tests.
//!
//! Exercises every kind's four-state rule directly on free-standing gates;
//! the input slice stands in for resolved wire values, so no circuit is
//! needed.

use gatesim_core::{Gate, GateKind};
use gatesim_core::WireState::{High, HighZ, Low, Unknown};
use rstest::rstest;

fn eval(kind: GateKind, inputs: &[gatesim_core::WireState]) -> gatesim_core::WireState {
    Gate::new("g", kind).evaluate(inputs)
}

#[rstest]
#[case(Low, High)]
#[case(High, Low)]
#[case(Unknown, Unknown)]
#[case(HighZ, Unknown)]
fn not_inverts(#[case] input: gatesim_core::WireState, #[case] expected: gatesim_core::WireState) {
    assert_eq!(eval(GateKind::Not, &[input]), expected);
}

#[rstest]
#[case(Low, Low)]
#[case(High, High)]
#[case(Unknown, Unknown)]
#[case(HighZ, HighZ)]
fn buf_passes_through(
    #[case] input: gatesim_core::WireState,
    #[case] expected: gatesim_core::WireState,
) {
    assert_eq!(eval(GateKind::Buf, &[input]), expected);
}

#[test]
fn and_folds_across_all_inputs() {
    assert_eq!(eval(GateKind::And, &[High, High, High]), High);
    assert_eq!(eval(GateKind::And, &[High, Low, Unknown]), Low);
    assert_eq!(eval(GateKind::And, &[High, Unknown, High]), Unknown);
    assert_eq!(eval(GateKind::Nand, &[High, High, High]), Low);
    assert_eq!(eval(GateKind::Nand, &[Unknown, Low]), High);
}

#[test]
fn or_folds_across_all_inputs() {
    assert_eq!(eval(GateKind::Or, &[Low, Low, Low]), Low);
    assert_eq!(eval(GateKind::Or, &[Low, High, HighZ]), High);
    assert_eq!(eval(GateKind::Or, &[Low, Unknown, Low]), Unknown);
    assert_eq!(eval(GateKind::Nor, &[Low, Low]), High);
    assert_eq!(eval(GateKind::Nor, &[Unknown, High]), Low);
}

#[test]
fn xor_is_parity_of_high_inputs() {
    assert_eq!(eval(GateKind::Xor, &[High, Low]), High);
    assert_eq!(eval(GateKind::Xor, &[High, High]), Low);
    assert_eq!(eval(GateKind::Xor, &[High, High, High]), High);
    assert_eq!(eval(GateKind::Xor, &[High, Low, High]), Low);
    assert_eq!(eval(GateKind::Xnor, &[High, High]), High);
}

#[test]
fn xor_requires_driven_inputs() {
    assert_eq!(eval(GateKind::Xor, &[High, Unknown]), Unknown);
    assert_eq!(eval(GateKind::Xor, &[HighZ, Low]), Unknown);
    assert_eq!(eval(GateKind::Xor, &[High, High, HighZ]), Unknown);
    assert_eq!(eval(GateKind::Xnor, &[High, Unknown]), Unknown);
}

#[test]
fn mux2_selects() {
    assert_eq!(eval(GateKind::Mux2, &[High, Low, Low]), High);
    assert_eq!(eval(GateKind::Mux2, &[High, Low, High]), Low);
}

#[test]
fn mux2_unknown_select_with_agreeing_branches() {
    assert_eq!(eval(GateKind::Mux2, &[High, High, Unknown]), High);
    assert_eq!(eval(GateKind::Mux2, &[Low, Low, HighZ]), Low);
}

#[test]
fn mux2_unknown_select_with_disagreeing_branches() {
    assert_eq!(eval(GateKind::Mux2, &[High, Low, Unknown]), Unknown);
    assert_eq!(eval(GateKind::Mux2, &[Low, Unknown, HighZ]), Unknown);
}

#[test]
fn dff_outputs_stored_value_not_input() {
    let mut ff = Gate::new("ff", GateKind::Dff);
    // Power-on storage is LOW; the D input must not leak through.
    assert_eq!(ff.evaluate(&[High, High]), Low);
    assert_eq!(ff.evaluate(&[Unknown, Low]), Low);
}

#[test]
fn dlatch_transparent_while_enabled() {
    let mut latch = Gate::new("lat", GateKind::Dlatch);
    assert_eq!(latch.evaluate(&[High, High]), High);
    // Enable dropped: the latch holds through input changes.
    assert_eq!(latch.evaluate(&[Low, Low]), High);
    assert_eq!(latch.evaluate(&[Low, Unknown]), High);
    // Re-enabled: tracks again.
    assert_eq!(latch.evaluate(&[Low, High]), Low);
}

#[rstest]
#[case(High, High, High)]
#[case(High, Low, Low)]
#[case(High, Unknown, Unknown)]
#[case(Low, High, HighZ)]
#[case(Unknown, High, Unknown)]
#[case(HighZ, High, Unknown)]
fn nmos_conducts_only_on_high_gate(
    #[case] gate: gatesim_core::WireState,
    #[case] source: gatesim_core::WireState,
    #[case] expected: gatesim_core::WireState,
) {
    assert_eq!(eval(GateKind::Nmos, &[gate, source]), expected);
}

#[rstest]
#[case(Low, High, High)]
#[case(Low, Low, Low)]
#[case(High, High, HighZ)]
#[case(Unknown, Low, Unknown)]
fn pmos_conducts_only_on_low_gate(
    #[case] gate: gatesim_core::WireState,
    #[case] source: gatesim_core::WireState,
    #[case] expected: gatesim_core::WireState,
) {
    assert_eq!(eval(GateKind::Pmos, &[gate, source]), expected);
}

#[test]
fn const_ignores_inputs() {
    assert_eq!(eval(GateKind::Const, &[High, High]), Low);
}

#[test]
fn module_instance_is_opaque() {
    assert_eq!(eval(GateKind::Module, &[High, Low]), Unknown);
}

#[test]
fn unconnected_inputs_read_unknown() {
    assert_eq!(eval(GateKind::And, &[]), Unknown);
    assert_eq!(eval(GateKind::Not, &[]), Unknown);
    assert_eq!(eval(GateKind::Nmos, &[High]), Unknown);
}

#[test]
fn kind_names_round_trip() {
    for kind in [
        GateKind::Not,
        GateKind::And,
        GateKind::Or,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
        GateKind::Buf,
        GateKind::Mux2,
        GateKind::Dff,
        GateKind::Dlatch,
        GateKind::Nmos,
        GateKind::Pmos,
        GateKind::Const,
        GateKind::Module,
    ] {
        assert_eq!(GateKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(GateKind::from_name("FROB"), None);
    assert_eq!(GateKind::from_name("and"), None);
}
