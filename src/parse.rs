use tracing::debug;

use crate::graph::RoadGraph;
use crate::{Length, NodeId, ParseError};

/// Builds a graph from a plain-text node/edge listing.
///
/// One statement per line:
/// - `node <id>`
/// - `edge <from> <to> <weight> <name>` where the name runs to the end of
///   the line
///
/// Blank lines and lines starting with `#` are skipped. Nodes must be
/// declared before the edges that use them.
pub fn parse_graph(input: &str) -> Result<RoadGraph, ParseError> {
    let mut graph = RoadGraph::new();

    for (at, line) in input.lines().enumerate() {
        let at = at + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (statement, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match statement {
            "node" => {
                let (id, _) = next_number(at, "node id", rest)?;
                graph
                    .add_node(NodeId(id))
                    .map_err(|e| ParseError::Graph(at, e))?;
            }
            "edge" => {
                let (from, rest) = next_number(at, "source node", rest)?;
                let (to, rest) = next_number(at, "sink node", rest)?;
                let (weight, name) = next_number(at, "weight", rest)?;

                let name = name.trim();
                if name.is_empty() {
                    return Err(ParseError::MissingField(at, "name"));
                }

                graph
                    .add_edge(name, Length::from_meters(weight), NodeId(from), NodeId(to))
                    .map_err(|e| ParseError::Graph(at, e))?;
            }
            _ => return Err(ParseError::UnknownStatement(at, statement.to_string())),
        }
    }

    debug!(
        "Parsed graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    Ok(graph)
}

/// Splits the next whitespace-delimited token off the input and parses it as
/// an unsigned number, returning it with the remainder of the line.
fn next_number<'a>(
    line: usize,
    field: &'static str,
    input: &'a str,
) -> Result<(u64, &'a str), ParseError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(ParseError::MissingField(line, field));
    }

    let (token, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
    let value = token
        .parse()
        .map_err(|_| ParseError::InvalidField(line, field, token.to_string()))?;

    Ok((value, rest))
}
