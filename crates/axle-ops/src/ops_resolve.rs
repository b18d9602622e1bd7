//! Operation: print the resolved build descriptor.

use axle_core::config::OutputFormat;
use axle_resolver::descriptor::ResolvedVariant;
use axle_resolver::resolver::{self, Resolver};
use axle_resolver::validate;

use crate::Project;

/// Options for `axle resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Resolve only this variant instead of the whole descriptor.
    pub variant: Option<String>,
    pub format: OutputFormat,
    /// Print each axis with its origin instead of the serialized descriptor.
    pub explain: bool,
}

/// Resolve the project and print the result to stdout.
pub fn resolve(project: &Project, opts: &ResolveOptions) -> miette::Result<()> {
    print!("{}", render(project, opts)?);
    Ok(())
}

/// Resolve the project and render what `axle resolve` prints.
pub fn render(project: &Project, opts: &ResolveOptions) -> miette::Result<String> {
    let resolver = Resolver::load(&project.manifest, project.root())?;

    let mut output = match opts.variant {
        Some(ref name) => {
            let variant = resolver.resolve_variant(name)?;
            for warning in validate::lint(&variant) {
                tracing::warn!("{warning}");
            }
            if opts.explain {
                explain(&variant)
            } else {
                variant.render(opts.format)?
            }
        }
        None => {
            let descriptor = resolver.resolve()?;
            for warning in resolver::warnings(&descriptor) {
                tracing::warn!("{warning}");
            }
            if opts.explain {
                descriptor.variants.values().map(explain).collect::<Vec<_>>().join("\n")
            } else {
                descriptor.render(opts.format)?
            }
        }
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// One line per axis: name, value and where the value came from.
fn explain(variant: &ResolvedVariant) -> String {
    let mut output = format!("{} ({})\n", variant.name, variant.chain.join(" -> "));
    let width = variant.axes.keys().map(String::len).max().unwrap_or(0);
    for (axis, value) in &variant.axes {
        let origin = variant
            .origins
            .get(axis)
            .map(ToString::to_string)
            .unwrap_or_default();
        output.push_str(&format!("  {axis:<width$} = {value}  [{origin}]\n"));
    }
    if let Some(ref signing) = variant.signing {
        output.push_str(&format!("  signed with '{}'\n", signing.name));
    }
    output
}
