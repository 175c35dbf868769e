use wayfinder::{Length, NodeId, RoadGraph};

/// The same network as [`network`], as a parseable listing.
pub const NETWORK_LISTING: &str = "\
# Oakland one-way test network
node 1
node 2
node 3
node 4
node 5
node 6
node 7
node 8

edge 1 2 217 Forbes Ave
edge 2 3 130 Forbes Ave
edge 1 4 150 Fifth Ave
edge 4 5 160 Fifth Ave
edge 2 5 120 Craig St
edge 5 3 90 Bellefield Ave
edge 3 6 300 Bigelow Blvd
edge 5 6 250 Bayard St
edge 6 7 110 Centre Ave
edge 7 4 140 Neville St
edge 8 1 500 Penn Ave
";

/// Small one-way street network around Oakland.
/// Node 8 reaches the rest of the network, but nothing reaches node 8.
pub fn network() -> RoadGraph {
    let mut graph = RoadGraph::new();
    for id in 1..=8 {
        graph.add_node(NodeId(id)).unwrap();
    }

    let mut street = |name: &str, meters: u64, from: u64, to: u64| {
        graph
            .add_edge(name, Length::from_meters(meters), NodeId(from), NodeId(to))
            .unwrap();
    };

    street("Forbes Ave", 217, 1, 2);
    street("Forbes Ave", 130, 2, 3);
    street("Fifth Ave", 150, 1, 4);
    street("Fifth Ave", 160, 4, 5);
    street("Craig St", 120, 2, 5);
    street("Bellefield Ave", 90, 5, 3);
    street("Bigelow Blvd", 300, 3, 6);
    street("Bayard St", 250, 5, 6);
    street("Centre Ave", 110, 6, 7);
    street("Neville St", 140, 7, 4);
    street("Penn Ave", 500, 8, 1);

    graph
}
