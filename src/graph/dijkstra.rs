use tracing::debug;

use crate::graph::heap::MinHeap;
use crate::graph::{NodeIdx, RoadGraph};
use crate::{Length, NodeId, RoutingError};

impl RoadGraph {
    /// Computes the shortest path from the source to every node reachable in
    /// the graph (Dijkstra), recording on each node its minimum distance and
    /// the edge it was reached through. Results of a previous computation
    /// are discarded; unreachable nodes end with `Length::MAX` and no
    /// parent.
    ///
    /// Nodes whose current distances are equal are extracted in ascending
    /// insertion order.
    pub fn compute_shortest_paths(&mut self, source: NodeId) -> Result<(), RoutingError> {
        debug!("Computing shortest paths from {source} over {} nodes", self.num_nodes());

        let source = self
            .index_of(source)
            .ok_or(RoutingError::NodeNotFound(source))?;

        for node in &mut self.nodes {
            node.distance = Length::MAX;
            node.parent = None;
        }
        self.nodes[source.0].distance = Length::ZERO;

        let mut frontier = MinHeap::with_capacity(self.num_nodes());
        for at in 0..self.num_nodes() {
            frontier.push_unordered(NodeIdx(at));
        }
        frontier.heapify(|&idx| self.distance_key(idx));

        while !frontier.is_empty() {
            let from = frontier.pop_min();
            self.relax_exiting_edges(from);
            // no decrease-key on this heap: relaxation may have lowered keys
            // of nodes still queued, so the ordering is rebuilt before the
            // next extraction
            frontier.heapify(|&idx| self.distance_key(idx));
        }

        Ok(())
    }

    /// Heap key of a queued node: its current distance, with the arena index
    /// breaking ties in a deterministic way.
    fn distance_key(&self, idx: NodeIdx) -> (Length, NodeIdx) {
        (self.nodes[idx.0].distance, idx)
    }

    /// Relaxes every edge exiting the node: a sink whose recorded distance
    /// is beaten by the route through this node adopts that route.
    fn relax_exiting_edges(&mut self, from: NodeIdx) {
        let from_distance = self.nodes[from.0].distance;

        for at in 0..self.nodes[from.0].exiting.len() {
            let edge_idx = self.nodes[from.0].exiting[at];
            let edge = &self.edges[edge_idx.0];
            let (sink, candidate) = (edge.sink, from_distance + edge.weight);

            let sink_node = &mut self.nodes[sink.0];
            if candidate < sink_node.distance {
                sink_node.distance = candidate;
                sink_node.parent = Some(edge_idx);
            }
        }
    }
}
