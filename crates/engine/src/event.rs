//! Typed propagation events.
//!
//! Each settle iteration is decomposed into a sequence of records: iteration
//! boundaries, one record per gate evaluation, one per wire-bit change, and
//! a terminal completion or timeout. An accumulated log is sufficient to
//! reconstruct the whole run without re-simulating it.

use std::fmt;

use crate::common::WireState;
use crate::netlist::{GateId, WireId};

/// An immutable record of one observable moment of propagation.
///
/// `seq` is a logical timestamp: strictly increasing across a run, starting
/// at zero. Logical stamps keep event logs byte-identical across runs of the
/// same circuit and stimulus, which wall-clock stamps would break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropagationEvent {
    /// Logical timestamp, unique and increasing within a run.
    pub seq: u64,
    /// What happened.
    pub kind: PropagationEventKind,
}

/// The kinds of observable propagation moments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationEventKind {
    /// A settle iteration began.
    IterationStart {
        /// 1-based iteration number within the run.
        iteration: usize,
    },

    /// A gate was evaluated against current wire values.
    GateEvaluated {
        /// Gate that was evaluated.
        gate: GateId,
        /// Value it produced.
        output: WireState,
    },

    /// A wire bit changed value at the iteration commit.
    WireChanged {
        /// Wire that changed.
        wire: WireId,
        /// Bit that changed, 0 = LSB.
        bit: usize,
        /// Value before the commit.
        from: WireState,
        /// Value after the commit.
        to: WireState,
    },

    /// A settle iteration finished and committed.
    IterationEnd {
        /// 1-based iteration number within the run.
        iteration: usize,
        /// Number of wire bits that changed at the commit.
        changes: usize,
    },

    /// The circuit reached a fixed point; the run is over.
    PropagationComplete {
        /// Total iterations executed.
        iterations: usize,
    },

    /// The iteration cap was reached without a fixed point; the run is over
    /// and the circuit remains flagged unstable.
    PropagationTimeout {
        /// Total iterations executed (the cap).
        iterations: usize,
    },
}

impl fmt::Display for PropagationEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationStart { iteration } => write!(f, "iteration {iteration} start"),
            Self::GateEvaluated { gate, output } => {
                write!(f, "gate {} -> {output}", gate.0)
            }
            Self::WireChanged {
                wire,
                bit,
                from,
                to,
            } => write!(f, "wire {}[{bit}] {from} -> {to}", wire.0),
            Self::IterationEnd { iteration, changes } => {
                write!(f, "iteration {iteration} end ({changes} changes)")
            }
            Self::PropagationComplete { iterations } => {
                write!(f, "complete after {iterations} iterations")
            }
            Self::PropagationTimeout { iterations } => {
                write!(f, "timeout after {iterations} iterations")
            }
        }
    }
}

impl fmt::Display for PropagationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.seq, self.kind)
    }
}
