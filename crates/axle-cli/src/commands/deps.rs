//! Handler for `axle deps`.

use miette::Result;

use axle_ops::Project;

pub fn exec(project: &Project, variant: Option<&str>) -> Result<()> {
    axle_ops::ops_deps::deps(project, variant)
}
