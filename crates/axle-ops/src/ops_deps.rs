//! Operation: show merged dependencies grouped by scope.

use axle_core::dependency::DependencyScope;
use axle_core::variant::DEBUG;
use axle_resolver::descriptor::ResolvedVariant;
use axle_resolver::resolver::Resolver;

use crate::Project;

/// Print the dependencies of one variant (default `debug`).
pub fn deps(project: &Project, variant: Option<&str>) -> miette::Result<()> {
    print!("{}", render(project, variant)?);
    Ok(())
}

pub fn render(project: &Project, variant: Option<&str>) -> miette::Result<String> {
    let resolver = Resolver::load(&project.manifest, project.root())?;
    let resolved = resolver.resolve_variant(variant.unwrap_or(DEBUG))?;
    Ok(format_dependencies(&resolved))
}

fn format_dependencies(variant: &ResolvedVariant) -> String {
    if variant.dependencies.is_empty() {
        return format!("{}: no dependencies.\n", variant.name);
    }
    let mut output = format!("{}:\n", variant.name);
    for scope in DependencyScope::ALL {
        let mut deps = variant.dependencies_in(scope).peekable();
        if deps.peek().is_none() {
            continue;
        }
        output.push_str(&format!("[{scope}]\n"));
        for dep in deps {
            let mut notes = Vec::new();
            if scope.on_compile_classpath() {
                notes.push("compile");
            }
            if scope.on_runtime_classpath() {
                notes.push("runtime");
            }
            if scope.is_desugaring() {
                notes.push("desugaring");
            }
            output.push_str(&format!("  {} ({})\n", dep.coordinate, notes.join(", ")));
        }
    }
    output
}
