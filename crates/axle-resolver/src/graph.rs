//! Variant inheritance graph.
//!
//! Each variant has at most one outgoing edge, pointing at its base. The graph
//! is validated on construction, so chains can be walked without cycle checks.

use std::collections::{BTreeMap, HashMap};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use axle_core::variant::VariantDecl;
use axle_util::errors::AxleError;

/// A validated, acyclic variant inheritance graph backed by petgraph.
#[derive(Debug)]
pub struct VariantGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl VariantGraph {
    /// Build the graph, rejecting unknown bases and inheritance cycles.
    pub fn build(variants: &BTreeMap<String, VariantDecl>) -> Result<Self, AxleError> {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        for name in variants.keys() {
            index.insert(name.clone(), graph.add_node(name.clone()));
        }

        for (name, decl) in variants {
            let Some(ref base) = decl.base else {
                continue;
            };
            let to = *index.get(base).ok_or_else(|| AxleError::UnknownBaseVariant {
                variant: name.clone(),
                base: base.clone(),
            })?;
            graph.add_edge(index[name], to, ());
        }

        let this = Self { graph, index };
        if let Some(cycle) = this.first_cycle() {
            return Err(AxleError::CyclicVariantInheritance {
                cycle: cycle.join(" -> "),
            });
        }
        Ok(this)
    }

    /// The lexicographically first inheritance cycle, closed on its start
    /// (`a -> b -> a`).
    fn first_cycle(&self) -> Option<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .filter_map(|scc| {
                let start = scc.into_iter().min_by(|a, b| self.graph[*a].cmp(&self.graph[*b]))?;
                Some(self.walk_cycle(start))
            })
            .collect();
        cycles.sort();
        cycles.into_iter().next()
    }

    fn walk_cycle(&self, start: NodeIndex) -> Vec<String> {
        let mut path = vec![self.graph[start].clone()];
        let mut current = start;
        while let Some(next) = self.base_of(current) {
            path.push(self.graph[next].clone());
            if next == start {
                break;
            }
            current = next;
        }
        path
    }

    fn base_of(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(idx, Direction::Outgoing).next()
    }

    /// All variant names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The inheritance chain of `name`, nearest first: `[release, debug]`.
    pub fn chain(&self, name: &str) -> Result<Vec<String>, AxleError> {
        let mut current = *self.index.get(name).ok_or_else(|| AxleError::UnknownVariant {
            name: name.to_string(),
        })?;
        let mut chain = vec![self.graph[current].clone()];
        while let Some(base) = self.base_of(current) {
            chain.push(self.graph[base].clone());
            current = base;
        }
        Ok(chain)
    }

    /// Variants that name `name` as their base, sorted.
    pub fn derived_from(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        let mut derived: Vec<&str> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].as_str())
            .collect();
        derived.sort_unstable();
        derived
    }

    /// Print the inheritance forest, one tree per root variant.
    pub fn print_tree(&self) -> String {
        let mut output = String::new();
        for root in self.names() {
            if self.base_of(self.index[root]).is_some() {
                continue;
            }
            output.push_str(root);
            output.push('\n');
            self.print_children(&mut output, root, "");
        }
        output
    }

    fn print_children(&self, output: &mut String, name: &str, prefix: &str) {
        let children = self.derived_from(name);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(&format!("{prefix}{connector}{child}\n"));
            let child_prefix = if is_last { "    " } else { "│   " };
            self.print_children(output, child, &format!("{prefix}{child_prefix}"));
        }
    }
}
