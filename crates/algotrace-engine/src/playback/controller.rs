//! The playback state machine.

use std::fmt;
use std::time::Duration;

use algotrace_common::utils::error::PlaybackError;
use algotrace_core::{Step, Trace};
use serde::Serialize;

use super::timer::{TickId, TickTimer};
use crate::config::DEFAULT_PLAYBACK_INTERVAL;

/// Where the controller is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No trace loaded.
    Idle,
    /// Trace loaded, not playing.
    Ready,
    /// Auto-advancing on a timer.
    Playing,
    /// At the last step.
    Complete,
}

impl PlaybackState {
    /// Returns the lowercase state name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigates a finished [`Trace`]: step forward and backward, or auto-play
/// on a timer.
///
/// The controller keeps its own clock. [`advance`](Self::advance) moves it
/// forward and fires whatever tick came due; a real-time driver can instead
/// wait for [`pending_tick`](Self::pending_tick) and call
/// [`tick`](Self::tick) with its id. Either way only the tick scheduled last
/// can advance the index; `pause`, `load` and reaching the end all cancel it.
#[derive(Debug)]
pub struct PlaybackController {
    trace: Option<Trace>,
    index: usize,
    state: PlaybackState,
    interval: Duration,
    timer: TickTimer,
    clock: Duration,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYBACK_INTERVAL)
    }
}

impl PlaybackController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            trace: None,
            index: 0,
            state: PlaybackState::Idle,
            interval,
            timer: TickTimer::new(),
            clock: Duration::ZERO,
        }
    }

    // === Accessors ===

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Returns whether auto-play is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Returns the loaded trace.
    #[must_use]
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Returns the number of steps in the loaded trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    /// Returns whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current index, or `None` when no step is available.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// Returns the step to render.
    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.trace.as_ref()?.get(self.index)
    }

    /// Returns the auto-play interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the controller clock.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Returns the pending tick and its deadline on the controller clock.
    #[must_use]
    pub fn pending_tick(&self) -> Option<(TickId, Duration)> {
        self.timer.pending()
    }

    fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            tracing::debug!(from = %self.state, to = %state, index = self.index, "playback state");
            self.state = state;
        }
    }

    fn invalid(&self, action: &'static str) -> PlaybackError {
        PlaybackError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }

    // === Transitions ===

    /// Loads a trace from any state and rewinds to its first step.
    ///
    /// Cancels any pending tick.
    pub fn load(&mut self, trace: Trace) {
        self.timer.cancel();
        self.index = 0;
        self.trace = Some(trace);
        self.set_state(PlaybackState::Ready);
    }

    /// Starts auto-play. Returns the first scheduled tick, or `None` if the
    /// trace is empty (which completes immediately).
    ///
    /// # Errors
    ///
    /// [`PlaybackError::NoTrace`] when idle;
    /// [`PlaybackError::InvalidTransition`] when already playing or complete.
    pub fn play(&mut self) -> Result<Option<TickId>, PlaybackError> {
        match self.state {
            PlaybackState::Idle => Err(PlaybackError::NoTrace),
            PlaybackState::Playing | PlaybackState::Complete => Err(self.invalid("play")),
            PlaybackState::Ready if self.is_empty() => {
                self.set_state(PlaybackState::Complete);
                Ok(None)
            }
            PlaybackState::Ready => {
                self.set_state(PlaybackState::Playing);
                Ok(Some(self.timer.schedule(self.clock + self.interval)))
            }
        }
    }

    /// Stops auto-play, cancelling the pending tick.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::InvalidTransition`] unless playing.
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        if self.state != PlaybackState::Playing {
            return Err(self.invalid("pause"));
        }
        self.timer.cancel();
        self.set_state(PlaybackState::Ready);
        Ok(())
    }

    fn check_scrub(&self) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Idle => Err(PlaybackError::NoTrace),
            PlaybackState::Playing => Err(PlaybackError::Playing),
            PlaybackState::Ready | PlaybackState::Complete => Ok(()),
        }
    }

    /// Moves one step forward. Landing on the last step completes playback.
    /// Returns whether the index moved; at the last step this is a no-op.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::NoTrace`] when idle; [`PlaybackError::Playing`]
    /// while playing.
    pub fn step_forward(&mut self) -> Result<bool, PlaybackError> {
        self.check_scrub()?;
        if self.is_empty() || self.index >= self.last_index() {
            return Ok(false);
        }
        self.index += 1;
        if self.index == self.last_index() {
            self.set_state(PlaybackState::Complete);
        }
        Ok(true)
    }

    /// Moves one step back. Leaving the last step returns to `Ready`.
    /// Returns whether the index moved; at index 0 this is a no-op.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::NoTrace`] when idle; [`PlaybackError::Playing`]
    /// while playing.
    pub fn step_backward(&mut self) -> Result<bool, PlaybackError> {
        self.check_scrub()?;
        if self.index == 0 {
            return Ok(false);
        }
        self.index -= 1;
        self.set_state(PlaybackState::Ready);
        Ok(true)
    }

    /// Changes the auto-play interval. A pending tick keeps its deadline;
    /// the new interval applies from the next scheduled tick.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::InvalidInterval`] for intervals under a millisecond.
    pub fn set_speed(&mut self, interval: Duration) -> Result<(), PlaybackError> {
        if interval < Duration::from_millis(1) {
            return Err(PlaybackError::InvalidInterval(millis(interval)));
        }
        tracing::debug!(interval_ms = millis(interval), "playback speed");
        self.interval = interval;
        Ok(())
    }

    // === Timer ===

    /// Handles a timer tick. Returns whether the index advanced.
    ///
    /// Ticks other than the pending one are ignored. At the last step the
    /// tick completes playback instead of advancing; otherwise the index
    /// moves forward and the next tick is scheduled one interval after this
    /// one's deadline.
    pub fn tick(&mut self, id: TickId) -> bool {
        let Some(deadline) = self.timer.fire(id) else {
            tracing::warn!(tick = id.as_u64(), state = %self.state, "ignoring stale playback tick");
            return false;
        };
        self.clock = self.clock.max(deadline);

        if self.index >= self.last_index() {
            self.set_state(PlaybackState::Complete);
            return false;
        }
        self.index += 1;
        self.timer.schedule(deadline + self.interval);
        true
    }

    /// Moves the controller clock forward by `elapsed`, firing every tick
    /// that comes due. Returns how many steps playback advanced.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let now = self.clock + elapsed;
        let mut advanced = 0;
        while let Some((id, deadline)) = self.timer.pending() {
            if deadline > now {
                break;
            }
            if self.tick(id) {
                advanced += 1;
            }
        }
        self.clock = now;
        advanced
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::{AlgorithmKind, StepKind};

    const MS: Duration = Duration::from_millis(1);

    fn trace(len: usize) -> Trace {
        let steps = (0..len)
            .map(|i| Step::new(StepKind::Visit, format!("step {i}")))
            .collect();
        Trace::new(AlgorithmKind::Bfs, steps)
    }

    fn loaded(len: usize) -> PlaybackController {
        let mut controller = PlaybackController::new(100 * MS);
        controller.load(trace(len));
        controller
    }

    #[test]
    fn test_idle() {
        let mut controller = PlaybackController::default();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert_eq!(controller.current_index(), None);
        assert!(controller.current_step().is_none());
        assert_eq!(controller.play(), Err(PlaybackError::NoTrace));
        assert_eq!(controller.step_forward(), Err(PlaybackError::NoTrace));
    }

    #[test]
    fn test_step_boundaries_are_no_ops() {
        let mut controller = loaded(3);
        assert_eq!(controller.step_backward(), Ok(false));
        assert_eq!(controller.current_index(), Some(0));

        assert_eq!(controller.step_forward(), Ok(true));
        assert_eq!(controller.state(), PlaybackState::Ready);
        assert_eq!(controller.step_forward(), Ok(true));
        assert_eq!(controller.state(), PlaybackState::Complete);
        assert_eq!(controller.step_forward(), Ok(false));
        assert_eq!(controller.current_index(), Some(2));

        assert_eq!(controller.step_backward(), Ok(true));
        assert_eq!(controller.state(), PlaybackState::Ready);
    }

    #[test]
    fn test_auto_play_to_completion() {
        let mut controller = loaded(3);
        controller.play().unwrap();
        assert!(controller.is_playing());

        assert_eq!(controller.advance(99 * MS), 0);
        assert_eq!(controller.advance(MS), 1);
        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.advance(100 * MS), 1);
        assert_eq!(controller.current_index(), Some(2));
        // One more tick notices the end.
        assert_eq!(controller.advance(100 * MS), 0);
        assert_eq!(controller.state(), PlaybackState::Complete);
        assert!(controller.pending_tick().is_none());
    }

    #[test]
    fn test_advance_fires_every_due_tick() {
        let mut controller = loaded(10);
        controller.play().unwrap();
        assert_eq!(controller.advance(350 * MS), 3);
        assert_eq!(controller.current_index(), Some(3));
    }

    #[test]
    fn test_pause_cancels_pending_tick() {
        let mut controller = loaded(5);
        let id = controller.play().unwrap().unwrap();
        controller.pause().unwrap();
        assert_eq!(controller.state(), PlaybackState::Ready);

        assert!(!controller.tick(id));
        assert_eq!(controller.advance(1000 * MS), 0);
        assert_eq!(controller.current_index(), Some(0));
    }

    #[test]
    fn test_stale_tick_does_not_double_advance() {
        let mut controller = loaded(5);
        let first = controller.play().unwrap().unwrap();
        assert!(controller.tick(first));
        // Delivering the same tick twice must not advance again.
        assert!(!controller.tick(first));
        assert_eq!(controller.current_index(), Some(1));
    }

    #[test]
    fn test_load_resets_and_cancels() {
        let mut controller = loaded(5);
        let id = controller.play().unwrap().unwrap();
        controller.tick(id);
        controller.load(trace(2));
        assert_eq!(controller.state(), PlaybackState::Ready);
        assert_eq!(controller.current_index(), Some(0));
        assert!(controller.pending_tick().is_none());
    }

    #[test]
    fn test_scrubbing_while_playing_is_rejected() {
        let mut controller = loaded(5);
        controller.play().unwrap();
        assert_eq!(controller.step_forward(), Err(PlaybackError::Playing));
        assert_eq!(controller.step_backward(), Err(PlaybackError::Playing));
        assert_eq!(
            controller.play(),
            Err(PlaybackError::InvalidTransition {
                action: "play",
                state: "playing"
            })
        );
    }

    #[test]
    fn test_set_speed_applies_to_next_tick() {
        let mut controller = loaded(10);
        controller.play().unwrap();
        controller.set_speed(10 * MS).unwrap();
        // The pending tick still fires at 100 ms.
        assert_eq!(controller.advance(50 * MS), 0);
        assert_eq!(controller.advance(50 * MS), 1);
        // Later ticks use the new interval.
        assert_eq!(controller.advance(30 * MS), 3);

        assert_eq!(
            controller.set_speed(Duration::ZERO),
            Err(PlaybackError::InvalidInterval(0))
        );
    }

    #[test]
    fn test_empty_trace() {
        let mut controller = loaded(0);
        assert_eq!(controller.current_index(), None);
        assert_eq!(controller.step_forward(), Ok(false));
        assert_eq!(controller.play(), Ok(None));
        assert_eq!(controller.state(), PlaybackState::Complete);
    }

    #[test]
    fn test_complete_cannot_play_but_can_reload() {
        let mut controller = loaded(2);
        controller.step_forward().unwrap();
        assert_eq!(controller.state(), PlaybackState::Complete);
        assert!(controller.play().is_err());
        assert!(controller.pause().is_err());

        controller.load(trace(2));
        assert!(controller.play().unwrap().is_some());
    }
}
