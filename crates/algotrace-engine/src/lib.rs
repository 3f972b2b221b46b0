//! # algotrace-engine
//!
//! The main entry point for Algotrace: configuration, algorithm dispatch,
//! and the playback runtime that walks a finished trace.
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`request`] - Algorithm requests, inputs, and outcomes
//! - [`visualizer`] - The `Visualizer` facade
//! - [`playback`] - Playback controller, tick timer, and async player

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod playback;
pub mod request;
pub mod visualizer;

pub use config::Config;
pub use playback::{PlaybackController, PlaybackState, Player, SharedController, TickId};
pub use request::{AlgorithmInput, AlgorithmRequest, Outcome};
pub use visualizer::Visualizer;
