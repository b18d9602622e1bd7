//! Handler for `axle resolve`.

use miette::Result;

use axle_core::config::{GlobalConfig, OutputFormat};
use axle_ops::ops_resolve::{self, ResolveOptions};
use axle_ops::Project;

pub fn exec(
    project: &Project,
    variant: Option<String>,
    format: Option<&str>,
    explain: bool,
) -> Result<()> {
    let config = GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!("ignoring global config: {e}");
        GlobalConfig::default()
    });

    let format = match format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => config.resolve.format,
    };
    let opts = ResolveOptions {
        variant: variant.or(config.resolve.default_variant),
        format,
        explain,
    };
    ops_resolve::resolve(project, &opts)
}
