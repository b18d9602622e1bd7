//! Core data types for Axle.
//!
//! This crate defines the static declaration that Axle resolves: the
//! `Axle.toml` manifest with its configuration axes, build variants,
//! dependency declarations, plugins, value providers and signing configs,
//! plus the per-user global configuration and `.axle.env` properties.
//!
//! Everything here is plain data. Resolution lives in `axle-resolver`.

/// File name of the project declaration.
pub const MANIFEST_FILE: &str = "Axle.toml";

/// File name of the per-project secrets file used for `${env:VAR}` interpolation.
pub const ENV_FILE: &str = ".axle.env";

pub mod axis;
pub mod config;
pub mod dependency;
pub mod manifest;
pub mod properties;
pub mod variant;
