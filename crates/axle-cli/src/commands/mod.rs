//! Command dispatch and handler modules.

mod check;
mod deps;
mod resolve;
mod variants;

use std::path::Path;

use miette::Result;

use axle_ops::Project;
use axle_util::errors::AxleError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let project = load_project(cli.manifest.as_deref())?;
    match cli.command {
        Command::Resolve {
            variant,
            format,
            explain,
        } => resolve::exec(&project, variant, format.as_deref(), explain),
        Command::Variants => variants::exec(&project),
        Command::Deps { variant } => deps::exec(&project, variant.as_deref()),
        Command::Check => check::exec(&project, cli.verbose),
    }
}

fn load_project(explicit: Option<&Path>) -> Result<Project> {
    let cwd = std::env::current_dir().map_err(AxleError::Io)?;
    let path = axle_ops::locate_manifest(explicit, &cwd)?;
    Project::load(&path)
}
