use std::fmt;

use crate::graph::RoadGraph;

/// Graphviz DOT rendering of a graph: one statement per node labelled with
/// its id and current distance, one statement per edge labelled with its
/// name and weight. Rendering only; the output is not meant to be parsed
/// back into a graph.
#[derive(Debug, Clone, Copy)]
pub struct Dot<'a> {
    graph: &'a RoadGraph,
}

impl RoadGraph {
    pub const fn dot(&self) -> Dot<'_> {
        Dot { graph: self }
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph{{")?;
        for node in self.graph.nodes() {
            writeln!(
                f,
                "{id} [label=\"{id} ({distance})\"] [shape=box];",
                id = node.id(),
                distance = node.distance()
            )?;
        }
        for edge in self.graph.edges() {
            writeln!(
                f,
                "{source} -> {sink} [label=\"{name} ({weight})\"];",
                source = self.graph.node_at(edge.source()).id(),
                sink = self.graph.node_at(edge.sink()).id(),
                name = edge.name(),
                weight = edge.weight()
            )?;
        }
        writeln!(f, "}}")
    }
}
