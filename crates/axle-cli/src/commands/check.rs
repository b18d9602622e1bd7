//! Check command implementation.

use miette::Result;

use axle_ops::Project;

pub fn exec(project: &Project, verbose: bool) -> Result<()> {
    axle_ops::ops_check::check(project, verbose)?;
    Ok(())
}
