//! # Ports Layer
//!
//! Trait definitions for inbound and outbound interfaces.

pub mod inbound;
pub mod outbound;

pub use inbound::SigningApi;
pub use outbound::{SigningAlgorithm, TimeSource};
