//! Shared utilities for Axle.
//!
//! This crate provides cross-cutting concerns used by the other Axle crates:
//! the unified error type, filesystem helpers and Cargo-style status output.

pub mod errors;
pub mod fs;
pub mod progress;
