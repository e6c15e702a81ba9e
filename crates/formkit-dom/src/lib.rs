//! formkit DOM - Document Object Model
//!
//! Arena-allocated DOM tree with interned names, id lookup and the
//! [`DomAccess`] seam used by components that edit a live document.

mod access;
mod document;
mod error;
pub mod forms;
mod interner;
mod node;
mod tree;

pub use access::DomAccess;
pub use document::Document;
pub use error::{DomError, DomResult};
pub use forms::{FormEnctype, MULTIPART_FORM_DATA};
pub use interner::{InternedString, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData, QualName};
pub use tree::{Ancestors, Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Build an id from a raw arena index
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Check whether this id points at a node slot
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert a link into an `Option`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
