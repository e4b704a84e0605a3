//! Playback controller: a scheduling state machine over an animator.
//!
//! The player drives settle iterations over host time. It provides:
//! 1. **State machine:** IDLE → RUNNING ⇄ PAUSED, a transient STEPPING, and
//!    terminal IDLE on completion.
//! 2. **Injected scheduling:** The frame scheduler is a trait the host
//!    implements; the stepping core never touches an event loop, so it is
//!    testable synchronously.
//! 3. **Observers:** An explicit subscribe/unsubscribe list notified of
//!    state changes, frames, and completion, synchronously and unqueued.
//!    A slow observer delays the next frame.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::animate::animator::Animator;
use crate::config::PlaybackConfig;
use crate::event::PropagationEvent;

/// Host-side frame scheduling.
///
/// `request_frame` asks the host to invoke [`Player::on_frame`] once, as
/// soon as convenient; `cancel_frame` withdraws a pending request. A test
/// double can satisfy this with two booleans.
pub trait FrameScheduler {
    /// Asks the host for one future [`Player::on_frame`] callback.
    fn request_frame(&mut self);

    /// Withdraws the pending callback request, if any.
    fn cancel_frame(&mut self);
}

/// Observer of playback progress. All methods default to no-ops so
/// implementors override only what they need.
pub trait PlayerObserver {
    /// The controller moved between states.
    fn state_changed(&mut self, from: PlayerState, to: PlayerState) {
        let _ = (from, to);
    }

    /// A settle iteration executed; `events` is that iteration's batch.
    fn frame(&mut self, events: &[PropagationEvent]) {
        let _ = events;
    }

    /// The run finished. `stable` is false when it ended at the cap.
    fn completed(&mut self, stable: bool) {
        let _ = stable;
    }
}

/// Handle for unsubscribing an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Playback controller states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerState {
    /// Not playing; also the terminal state once a run completes.
    #[default]
    Idle,
    /// Iterations are being scheduled against host time.
    Running,
    /// Playback suspended; circuit state held.
    Paused,
    /// Transient state while a single synchronous step executes.
    Stepping,
}

/// Drives an [`Animator`] over host-supplied time through an injected
/// scheduler.
pub struct Player<S> {
    animator: Animator,
    scheduler: S,
    observers: Vec<(ObserverId, Box<dyn PlayerObserver>)>,
    next_observer: u64,
    state: PlayerState,
    frame_interval: Duration,
    last_frame: Option<Duration>,
}

impl<S: FrameScheduler> Player<S> {
    /// Creates a player over `animator` with the given scheduler and
    /// playback settings.
    pub fn new(animator: Animator, scheduler: S, playback: &PlaybackConfig) -> Self {
        Self {
            animator,
            scheduler,
            observers: Vec::new(),
            next_observer: 0,
            state: PlayerState::Idle,
            frame_interval: interval_for(playback.speed_hz),
            last_frame: None,
        }
    }

    /// Current controller state.
    #[inline]
    pub const fn state(&self) -> PlayerState {
        self.state
    }

    /// The underlying animator.
    #[inline]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Mutable access to the underlying animator, e.g. to drive inputs.
    #[inline]
    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Changes the playback rate; takes effect at the next frame.
    pub fn set_speed_hz(&mut self, speed_hz: f64) {
        self.frame_interval = interval_for(speed_hz);
    }

    /// Registers an observer; returns a handle for unsubscription.
    pub fn subscribe(&mut self, observer: Box<dyn PlayerObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer; returns whether it was subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn transition(&mut self, to: PlayerState) {
        if self.state == to {
            return;
        }
        let from = std::mem::replace(&mut self.state, to);
        debug!(?from, ?to, "playback state change");
        for (_, observer) in &mut self.observers {
            observer.state_changed(from, to);
        }
    }

    fn notify_frame(observers: &mut [(ObserverId, Box<dyn PlayerObserver>)], events: &[PropagationEvent]) {
        for (_, observer) in observers {
            observer.frame(events);
        }
    }

    fn notify_completed(&mut self, stable: bool) {
        for (_, observer) in &mut self.observers {
            observer.completed(stable);
        }
    }

    /// Starts or resumes continuous playback.
    ///
    /// IDLE/PAUSED → RUNNING; a frame is requested from the scheduler.
    /// No-op while RUNNING or once the run is complete.
    pub fn play(&mut self) {
        if self.state == PlayerState::Running || self.animator.is_complete() {
            return;
        }
        self.transition(PlayerState::Running);
        self.scheduler.request_frame();
    }

    /// Suspends continuous playback.
    ///
    /// RUNNING → PAUSED; the pending frame request is cancelled. No-op in
    /// any other state.
    pub fn pause(&mut self) {
        if self.state != PlayerState::Running {
            return;
        }
        self.scheduler.cancel_frame();
        self.transition(PlayerState::Paused);
    }

    /// Performs one settle iteration synchronously.
    ///
    /// Only from a non-RUNNING state: transitions through STEPPING, then
    /// lands on IDLE if the run completed, PAUSED otherwise. No-op while
    /// RUNNING or once the run is complete.
    pub fn step(&mut self) {
        if self.state == PlayerState::Running || self.animator.is_complete() {
            return;
        }
        self.transition(PlayerState::Stepping);
        let events = self.animator.step();
        Self::notify_frame(&mut self.observers, events);
        if self.animator.is_complete() {
            let stable = self.animator.circuit().is_stable();
            self.transition(PlayerState::Idle);
            self.notify_completed(stable);
        } else {
            self.transition(PlayerState::Paused);
        }
    }

    /// Stops playback and clears both the controller and the circuit back
    /// to the initial all-unknown state.
    pub fn reset(&mut self) {
        self.scheduler.cancel_frame();
        self.last_frame = None;
        self.animator.reset();
        self.transition(PlayerState::Idle);
    }

    /// Stops playback, leaving circuit state as it stands.
    pub fn stop(&mut self) {
        self.scheduler.cancel_frame();
        self.last_frame = None;
        self.transition(PlayerState::Idle);
    }

    /// Host frame callback with a monotonic timestamp.
    ///
    /// While RUNNING, executes one settle iteration if at least one frame
    /// interval elapsed since the last executed iteration, then requests
    /// the next frame; otherwise just re-requests. Ignored in any other
    /// state. Observer callbacks fire synchronously from here.
    pub fn on_frame(&mut self, now: Duration) {
        if self.state != PlayerState::Running {
            return;
        }
        if let Some(last) = self.last_frame {
            if now.saturating_sub(last) < self.frame_interval {
                self.scheduler.request_frame();
                return;
            }
        }
        self.last_frame = Some(now);
        let events = self.animator.step();
        Self::notify_frame(&mut self.observers, events);
        if self.animator.is_complete() {
            let stable = self.animator.circuit().is_stable();
            self.transition(PlayerState::Idle);
            self.notify_completed(stable);
        } else {
            self.scheduler.request_frame();
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Player<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("state", &self.state)
            .field("scheduler", &self.scheduler)
            .field("frame_interval", &self.frame_interval)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Converts a playback rate to a frame interval, clamping nonsensical rates
/// to one iteration per second.
fn interval_for(speed_hz: f64) -> Duration {
    if speed_hz.is_finite() && speed_hz > 0.0 {
        Duration::from_secs_f64(1.0 / speed_hz)
    } else {
        Duration::from_secs(1)
    }
}
