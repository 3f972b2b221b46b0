//! Core type definitions for Algotrace.
//!
//! This module contains the fundamental types shared by every layer:
//! - Identifier types ([`VertexId`])
//! - Coloring palette ([`Color`], [`PALETTE`])

mod color;
mod id;

pub use color::{Color, PALETTE};
pub use id::VertexId;
