//! Handler for `axle variants`.

use miette::Result;

use axle_ops::Project;

pub fn exec(project: &Project) -> Result<()> {
    axle_ops::ops_variants::variants(project)
}
