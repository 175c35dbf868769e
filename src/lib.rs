#![doc = include_str!("../README.md")]

mod error;
mod export;
mod graph;
mod model;
mod parse;
mod report;

pub use error::{BuildError, ParseError, RoutingError};
pub use export::Dot;
pub use graph::heap::MinHeap;
pub use graph::path::Path;
pub use graph::{Edge, EdgeIdx, Node, NodeIdx, RoadGraph};
pub use model::{Length, NodeId};
pub use parse::parse_graph;
pub use report::Directions;
