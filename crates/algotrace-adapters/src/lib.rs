//! # algotrace-adapters
//!
//! Algorithm layer for Algotrace: every engine that turns an input into a
//! step-by-step [`Trace`](algotrace_core::Trace).
//!
//! ## Modules
//!
//! - [`plugins`] - Algorithm plugins and the traits they implement

pub mod plugins;
