//! Real-time playback on tokio.

use std::sync::Arc;

use algotrace_common::utils::error::PlaybackError;
use algotrace_core::Step;
use parking_lot::Mutex;

use super::controller::{PlaybackController, PlaybackState};

/// A controller shared between the player task and whoever issues
/// pause/step/speed commands.
pub type SharedController = Arc<Mutex<PlaybackController>>;

/// Drives a [`PlaybackController`] against the wall clock.
///
/// The player sleeps until the pending tick's deadline and then delivers
/// that tick. Commands issued through [`handle`](Self::handle) in the
/// meantime take effect on the next wake-up: a pause cancels the tick (the
/// late delivery is dropped as stale), a speed change applies from the
/// following tick.
#[derive(Debug, Clone)]
pub struct Player {
    controller: SharedController,
}

impl Player {
    /// Wraps a controller.
    #[must_use]
    pub fn new(controller: PlaybackController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    /// Wraps an already shared controller.
    #[must_use]
    pub fn from_shared(controller: SharedController) -> Self {
        Self { controller }
    }

    /// Returns a handle to the shared controller.
    #[must_use]
    pub fn handle(&self) -> SharedController {
        Arc::clone(&self.controller)
    }

    /// Returns the controller state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.controller.lock().state()
    }

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::InvalidTransition`] unless playing.
    pub fn pause(&self) -> Result<(), PlaybackError> {
        self.controller.lock().pause()
    }

    /// Plays until the trace completes or playback is paused, calling
    /// `on_step` with the index and step shown at start and after every
    /// advance. Returns the state playback stopped in.
    ///
    /// Starts playback if the controller is not already playing.
    ///
    /// # Errors
    ///
    /// Whatever [`PlaybackController::play`] reports.
    pub async fn play<F>(&self, mut on_step: F) -> Result<PlaybackState, PlaybackError>
    where
        F: FnMut(usize, &Step),
    {
        {
            let mut controller = self.controller.lock();
            if !controller.is_playing() {
                controller.play()?;
            }
            if let (Some(index), Some(step)) = (controller.current_index(), controller.current_step())
            {
                on_step(index, step);
            }
        }

        loop {
            let (id, wait) = {
                let controller = self.controller.lock();
                match controller.pending_tick() {
                    Some((id, deadline)) if controller.is_playing() => {
                        (id, deadline.saturating_sub(controller.clock()))
                    }
                    _ => return Ok(controller.state()),
                }
            };

            tokio::time::sleep(wait).await;

            let mut controller = self.controller.lock();
            if controller.tick(id)
                && let (Some(index), Some(step)) =
                    (controller.current_index(), controller.current_step())
            {
                on_step(index, step);
            }
        }
    }
}
