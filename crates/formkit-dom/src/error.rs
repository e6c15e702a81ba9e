//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id does not name a live node
    #[error("node {0} not found")]
    NotFound(NodeId),

    /// Operation needs an element
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Attribute write on a read-only element
    #[error("cannot modify attribute `{attribute}` on read-only element {node}")]
    NoModificationAllowed { node: NodeId, attribute: String },

    /// Insertion would create a cycle or attach under a non-container
    #[error("hierarchy request error")]
    HierarchyRequest,
}
