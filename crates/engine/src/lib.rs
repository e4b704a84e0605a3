//! Gate-level digital logic simulation engine.
//!
//! This crate implements a four-state gate-level circuit simulator with the
//! following:
//! 1. **Data model:** Wires (double-buffered buses), gates (a closed set of
//!    fifteen kinds), and circuits with fail-fast construction.
//! 2. **Propagation:** Two-phase simultaneous-update settling to a fixed
//!    point, with non-convergence reported at an iteration cap.
//! 3. **Clocking:** Capture-then-settle edges for sequential elements.
//! 4. **Events:** Per-iteration typed event logs sufficient to replay a run.
//! 5. **Playback:** A scheduler-injected state machine driving iterations
//!    over host time with subscribed observers.
//! 6. **Interchange:** JSON circuit documents compatible with the reference
//!    simulator.

/// Animated stepping and playback control.
pub mod animate;
/// Common types: signal states, limits, errors.
pub mod common;
/// Engine configuration (defaults, settle loop, playback).
pub mod config;
/// Typed propagation events.
pub mod event;
/// Circuit document serialization.
pub mod interchange;
/// The circuit data model and simulation algorithms.
pub mod netlist;
/// Structural circuit statistics.
pub mod stats;

/// Event-producing circuit wrapper; use [`Animator::step`] to narrate runs.
pub use crate::animate::Animator;
/// Playback controller and its injected-scheduler/observer seams.
pub use crate::animate::{FrameScheduler, Player, PlayerObserver, PlayerState};
/// Construction and interchange error type.
pub use crate::common::CircuitError;
/// Four-state signal value.
pub use crate::common::WireState;
/// Root configuration; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Propagation event records.
pub use crate::event::{PropagationEvent, PropagationEventKind};
/// Core circuit types; construct with [`Circuit::new`] and the builder API.
pub use crate::netlist::{Circuit, Gate, GateId, GateKind, PropagationOutcome, Wire, WireId};
