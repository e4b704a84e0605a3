//! Common types shared by every layer of the simulation engine.
//!
//! This module provides the fundamental building blocks used across the
//! crate. It includes:
//! 1. **Signal states:** The four-state logic value domain and its laws.
//! 2. **Constants:** Structural limits enforced on every circuit.
//! 3. **Error Handling:** Construction and interchange error definitions.

/// Structural limits enforced on circuits.
pub mod constants;

/// Construction and interchange error definitions.
pub mod error;

/// Four-state signal values and combination laws.
pub mod state;

pub use error::CircuitError;
pub use state::WireState;
