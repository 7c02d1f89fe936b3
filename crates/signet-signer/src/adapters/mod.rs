//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod algorithm;
pub mod clock;

pub use clock::{ManualTimeSource, SystemTimeSource};
