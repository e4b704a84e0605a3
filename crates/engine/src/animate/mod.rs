//! Animated stepping and playback control.
//!
//! This module family turns raw propagation into something a host can watch
//! and drive over time:
//! 1. **Animator:** One settle iteration per call, narrated as typed events
//!    into a replayable log.
//! 2. **Player:** A state machine scheduling iterations against host time
//!    through an injected frame scheduler, with subscribed observers.

/// Event-producing wrapper around a circuit.
pub mod animator;

/// Playback controller state machine.
pub mod player;

pub use animator::Animator;
pub use player::{FrameScheduler, ObserverId, Player, PlayerObserver, PlayerState};
