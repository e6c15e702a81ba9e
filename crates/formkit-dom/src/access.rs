//! Injected DOM capabilities
//!
//! Components that edit a live document receive a [`DomAccess`]
//! implementation instead of reaching for a global document.

use crate::{Document, DomResult, NodeId};

/// Lookup and attribute-write capabilities over a document
pub trait DomAccess {
    /// Resolve an element identifier; `None` when nothing carries it
    fn resolve(&self, element_id: &str) -> Option<NodeId>;

    /// Nearest ancestor of `start` with tag name `tag`, excluding `start`
    fn find_container(&self, start: NodeId, tag: &str) -> Option<NodeId>;

    /// Write a string attribute on an element
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()>;
}

impl DomAccess for Document {
    fn resolve(&self, element_id: &str) -> Option<NodeId> {
        self.get_element_by_id(element_id)
    }

    fn find_container(&self, start: NodeId, tag: &str) -> Option<NodeId> {
        Document::find_container(self, start, tag)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.tree.set_attribute(node, name, value)
    }
}

impl<T: DomAccess + ?Sized> DomAccess for &mut T {
    fn resolve(&self, element_id: &str) -> Option<NodeId> {
        (**self).resolve(element_id)
    }

    fn find_container(&self, start: NodeId, tag: &str) -> Option<NodeId> {
        (**self).find_container(start, tag)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        (**self).set_attribute(node, name, value)
    }
}
