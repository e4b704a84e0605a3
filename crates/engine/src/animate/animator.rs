//! Event-producing wrapper around a circuit.
//!
//! The animator advances a circuit one settle iteration at a time and
//! narrates each iteration as typed events, accumulating the full log. A run
//! is complete once the circuit settles or the iteration cap is reached.

use crate::event::{PropagationEvent, PropagationEventKind};
use crate::netlist::Circuit;

/// Steps a circuit iteration-by-iteration, producing a replayable event log.
#[derive(Clone, Debug)]
pub struct Animator {
    circuit: Circuit,
    iteration: usize,
    complete: bool,
    timed_out: bool,
    next_seq: u64,
    log: Vec<PropagationEvent>,
}

impl Animator {
    /// Wraps a circuit for animated stepping.
    pub fn new(circuit: Circuit) -> Self {
        Self {
            circuit,
            iteration: 0,
            complete: false,
            timed_out: false,
            next_seq: 0,
            log: Vec::new(),
        }
    }

    /// The wrapped circuit.
    #[inline]
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Mutable access to the wrapped circuit, e.g. to drive inputs between
    /// steps.
    #[inline]
    pub fn circuit_mut(&mut self) -> &mut Circuit {
        &mut self.circuit
    }

    /// Unwraps the circuit, discarding the log.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }

    /// Whether the current run is over (settled or timed out).
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the current run ended at the iteration cap.
    #[inline]
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Iterations executed in the current run.
    #[inline]
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// The full accumulated event log.
    #[inline]
    pub fn log(&self) -> &[PropagationEvent] {
        &self.log
    }

    fn push(&mut self, kind: PropagationEventKind) {
        self.log.push(PropagationEvent {
            seq: self.next_seq,
            kind,
        });
        self.next_seq += 1;
    }

    /// Performs exactly one settle iteration and returns its events.
    ///
    /// The returned slice covers this iteration only; the same events are
    /// appended to [`Self::log`]. Once the run is complete further calls do
    /// nothing and return an empty slice.
    pub fn step(&mut self) -> &[PropagationEvent] {
        let start = self.log.len();
        if self.complete {
            return &self.log[start..];
        }

        self.iteration += 1;
        let iteration = self.iteration;
        self.push(PropagationEventKind::IterationStart { iteration });

        let report = self.circuit.step_once();
        for eval in &report.evaluations {
            self.push(PropagationEventKind::GateEvaluated {
                gate: eval.gate,
                output: eval.output,
            });
        }
        for change in &report.changes {
            self.push(PropagationEventKind::WireChanged {
                wire: change.wire,
                bit: change.bit,
                from: change.from,
                to: change.to,
            });
        }
        self.push(PropagationEventKind::IterationEnd {
            iteration,
            changes: report.changes.len(),
        });

        if report.stable {
            self.complete = true;
            self.push(PropagationEventKind::PropagationComplete {
                iterations: iteration,
            });
        } else if iteration >= self.circuit.max_iterations() {
            self.complete = true;
            self.timed_out = true;
            self.push(PropagationEventKind::PropagationTimeout {
                iterations: iteration,
            });
        }

        &self.log[start..]
    }

    /// Begins a fresh run: clears the log and counters, leaving circuit
    /// state (including externally driven inputs) in place.
    pub fn restart(&mut self) {
        self.iteration = 0;
        self.complete = false;
        self.timed_out = false;
        self.next_seq = 0;
        self.log.clear();
    }

    /// Full reset: a fresh run over a circuit returned to its initial
    /// all-unknown state.
    pub fn reset(&mut self) {
        self.circuit.reset();
        self.restart();
    }

    /// Restarts, then steps until the run is over, returning the full log.
    ///
    /// Circuit state is kept, so inputs driven beforehand hold through the
    /// run; use [`Self::reset`] first for a from-scratch settle.
    pub fn run_to_completion(&mut self) -> &[PropagationEvent] {
        self.restart();
        while !self.complete {
            let _ = self.step();
        }
        &self.log
    }
}
