//! Operation: list build variants and their inheritance.

use axle_resolver::resolver::Resolver;

use crate::Project;

/// Print the variant inheritance tree followed by each variant's chain.
pub fn variants(project: &Project) -> miette::Result<()> {
    print!("{}", render(project)?);
    Ok(())
}

pub fn render(project: &Project) -> miette::Result<String> {
    let resolver = Resolver::load(&project.manifest, project.root())?;
    let graph = resolver.graph();

    let mut output = graph.print_tree();
    output.push('\n');
    for name in graph.names() {
        let chain = resolver.variant_chain(name)?;
        let declared = if project.manifest.variants.contains_key(name) {
            ""
        } else {
            " (built-in)"
        };
        output.push_str(&format!("{name}{declared}: {}\n", chain.join(" -> ")));
    }
    Ok(output)
}
