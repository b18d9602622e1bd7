//! Configuration resolution engine.
//!
//! Turns a static `Axle.toml` declaration into a resolved build descriptor:
//! axis values are taken from literals or named providers, variants inherit
//! from their base chain, dependency declarations are merged per coordinate,
//! and the result is validated before it is handed to a packaging tool.

pub mod axes;
pub mod dependencies;
pub mod descriptor;
pub mod graph;
pub mod provider;
pub mod resolver;
pub mod validate;
