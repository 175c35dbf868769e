use crate::graph::{EdgeIdx, RoadGraph};
use crate::{Length, NodeId, RoutingError};

/// Ordered edge sequence from the source of the latest computation to a
/// target node, with its summed length.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub length: Length,
    pub edges: Vec<EdgeIdx>,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            length: Length::ZERO,
            edges: vec![],
        }
    }
}

impl RoadGraph {
    /// Unpacks the shortest path from the target back to the source of the
    /// latest computation. Returns `None` if no path reaches the target; the
    /// source itself yields an empty path of length zero.
    pub fn path_to(&self, target: NodeId) -> Result<Option<Path>, RoutingError> {
        let target = self
            .index_of(target)
            .ok_or(RoutingError::NodeNotFound(target))?;

        let length = self.nodes[target.0].distance;
        if length == Length::MAX {
            return Ok(None);
        }

        let mut edges = vec![];
        let mut next = target;
        while let Some(edge) = self.nodes[next.0].parent {
            next = self.edges[edge.0].source;
            edges.push(edge);
        }
        edges.reverse();

        Ok(Some(Path { length, edges }))
    }
}
