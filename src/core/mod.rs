//! Core components of the `sidra-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`SidraClient`] and its builder.
//! - The primary [`SidraError`] type.
//! - Internal networking helpers shared by the values and metadata paths.

/// The main client (`SidraClient`), builder, and configuration.
pub mod client;
/// The primary error type (`SidraError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::SidraClient`
pub use client::{SidraClient, SidraClientBuilder};
pub use error::SidraError;
