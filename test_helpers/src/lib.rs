//! Test helpers shared across crates.
//!
//! Provides panic capture for asserting on contract violations and JSON
//! helpers for exercising serde implementations.

pub mod json;
pub mod panic;
