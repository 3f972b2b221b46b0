//! Playback over a finished trace.
//!
//! - [`PlaybackController`] - the state machine: load, play, pause, step,
//!   speed, and timer ticks
//! - [`TickTimer`] - the controller's single pending tick
//! - [`Player`] - drives a shared controller in real time on tokio

mod controller;
mod player;
mod timer;

pub use controller::{PlaybackController, PlaybackState};
pub use player::{Player, SharedController};
pub use timer::{TickId, TickTimer};
