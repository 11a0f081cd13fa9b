use crate::types::NodeId;
use core_types::NodeType;
use std::fmt;

/// Failures raised by document operations.
///
/// These mirror the exceptions a DOM implementation throws; callers above the
/// document pass them through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    /// Tag or attribute name that is not a valid name.
    InvalidCharacter { name: String },
    /// Insertion that would give a node children it cannot have, or create a
    /// cycle.
    HierarchyRequest { parent: NodeId, child: NodeId },
    /// Handle unknown to this document, or a child that is not a child of the
    /// given parent.
    NotFound(NodeId),
    /// A value that is not a node was used where a node is required.
    NotANode,
    /// Operation that requires a particular node type.
    WrongNodeType { node: NodeId, expected: NodeType },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::InvalidCharacter { name } => {
                write!(f, "invalid character in name: {name:?}")
            }
            DomError::HierarchyRequest { parent, child } => {
                write!(f, "cannot insert node {child} into {parent}")
            }
            DomError::NotFound(id) => write!(f, "node {id} not found"),
            DomError::NotANode => f.write_str("value is not a node"),
            DomError::WrongNodeType { node, expected } => {
                write!(f, "node {node} is not of type {expected:?}")
            }
        }
    }
}

impl std::error::Error for DomError {}
