//! Configuration for the simulation engine.
//!
//! This module defines the tunable parameters of simulation and playback.
//! It provides:
//! 1. **Defaults:** Baseline values matching the reference simulator.
//! 2. **Structures:** Hierarchical config for the settle loop and the
//!    playback controller.
//!
//! Configuration is supplied as JSON by embedding hosts, or use
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants.
pub mod defaults {
    /// Iteration cap per settle attempt.
    ///
    /// A correctness safeguard against oscillating circuits, not a time
    /// limit; matches the reference simulator's cap.
    pub const MAX_ITERATIONS: usize = 100;

    /// Playback rate in iterations per second.
    pub const PLAYBACK_HZ: f64 = 10.0;
}

/// Root configuration for the engine.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Settle-loop parameters.
    #[serde(default)]
    pub sim: SimConfig,

    /// Playback controller parameters.
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Settle-loop parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SimConfig {
    /// Iteration cap per settle attempt.
    #[serde(default = "SimConfig::default_max_iterations")]
    pub max_iterations: usize,
}

impl SimConfig {
    /// Returns the default iteration cap.
    fn default_max_iterations() -> usize {
        defaults::MAX_ITERATIONS
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::MAX_ITERATIONS,
        }
    }
}

/// Playback controller parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PlaybackConfig {
    /// Playback rate in iterations per second.
    #[serde(default = "PlaybackConfig::default_speed_hz")]
    pub speed_hz: f64,
}

impl PlaybackConfig {
    /// Returns the default playback rate.
    fn default_speed_hz() -> f64 {
        defaults::PLAYBACK_HZ
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_hz: defaults::PLAYBACK_HZ,
        }
    }
}
