use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RoutingError {
    #[error("node {0} does not belong to the graph")]
    NodeNotFound(NodeId),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum BuildError {
    #[error("node {0} already belongs to the graph")]
    DuplicateNode(NodeId),
    #[error("edge endpoint {0} does not belong to the graph")]
    UnknownEndpoint(NodeId),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("line {0}: unknown statement {1:?}")]
    UnknownStatement(usize, String),
    #[error("line {0}: missing {1}")]
    MissingField(usize, &'static str),
    #[error("line {0}: invalid {1} {2:?}")]
    InvalidField(usize, &'static str, String),
    #[error("line {0}: {1}")]
    Graph(usize, BuildError),
}
