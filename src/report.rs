use std::fmt;

use crate::graph::RoadGraph;
use crate::graph::path::Path;

/// Turn-by-turn rendering of a path, one line per edge driven.
///
/// ```text
/// Drive for 100 meters on Liberty Ave
/// Drive for 50 meters on Stanwix St
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Directions<'a> {
    graph: &'a RoadGraph,
    path: &'a Path,
}

impl RoadGraph {
    /// Renders the path as driving directions.
    pub const fn directions<'a>(&'a self, path: &'a Path) -> Directions<'a> {
        Directions { graph: self, path }
    }
}

impl fmt::Display for Directions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &idx in &self.path.edges {
            let edge = self.graph.edge(idx);
            writeln!(f, "Drive for {} meters on {}", edge.weight(), edge.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Length, NodeId};

    #[test]
    fn directions_render_one_line_per_edge() {
        let mut graph = RoadGraph::new();
        for id in [1, 2, 3] {
            graph.add_node(NodeId(id)).unwrap();
        }
        graph
            .add_edge("Liberty Ave", Length::from_meters(100), NodeId(1), NodeId(2))
            .unwrap();
        graph
            .add_edge("Stanwix St", Length::from_meters(50), NodeId(2), NodeId(3))
            .unwrap();

        graph.compute_shortest_paths(NodeId(1)).unwrap();
        let path = graph.path_to(NodeId(3)).unwrap().unwrap();

        assert_eq!(
            graph.directions(&path).to_string(),
            "Drive for 100 meters on Liberty Ave\n\
             Drive for 50 meters on Stanwix St\n"
        );
    }

    #[test]
    fn empty_path_renders_nothing() {
        let graph = RoadGraph::new();
        let path = Path::default();

        assert_eq!(graph.directions(&path).to_string(), "");
    }
}
