//! DOM Tree (arena-based allocation)

use crate::{
    DomError, DomResult, ElementData, InternedString, Node, NodeData, NodeId, QualName,
    StringInterner,
};

/// Arena-based DOM tree
///
/// Slot 0 always holds the document node. Removed nodes are detached, not
/// freed, so ids stay stable for the lifetime of the tree.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::document());
        Self {
            nodes,
            interner: StringInterner::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut StringInterner {
        &mut self.interner
    }

    /// Resolve an interned name
    #[inline]
    pub fn resolve(&self, s: InternedString) -> &str {
        self.interner.get(s)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element in the null namespace
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let local = self.interner.intern(tag);
        self.push(Node::element(QualName::local(local)))
    }

    /// Create a detached element with its initial attributes
    pub fn create_element_with_attrs<I>(&mut self, name: QualName, attrs: I) -> NodeId
    where
        I: IntoIterator<Item = (QualName, String)>,
    {
        let id_name = self.interner.intern("id");
        let mut elem = ElementData::new(name);
        for (attr_name, value) in attrs {
            if attr_name.local == id_name {
                elem.id = (!value.is_empty()).then(|| value.clone());
            }
            elem.set_attr(attr_name, value);
        }
        self.push(Node::with_data(NodeData::Element(elem)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content.to_string()))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        let name = self.interner.intern(name);
        self.push(Node::doctype(
            name,
            public_id.to_string(),
            system_id.to_string(),
        ))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.nodes.get_mut(id.index()).ok_or(DomError::NotFound(id))
    }

    /// Check that `id` names a node able to hold children
    pub fn ensure_container(&self, id: NodeId) -> DomResult<()> {
        match &self.node(id)?.data {
            NodeData::Document | NodeData::Element(_) => Ok(()),
            _ => Err(DomError::HierarchyRequest),
        }
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.ensure_container(parent)?;
        self.node(child)?;
        if child == parent || child == NodeId::ROOT || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::HierarchyRequest);
        }

        self.remove(child);

        let last = self.node(parent)?.last_child;
        {
            let node = self.node_mut(child)?;
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.node_mut(last)?.next_sibling = child;
        }
        let parent_node = self.node_mut(parent)?;
        if !parent_node.first_child.is_valid() {
            parent_node.first_child = child;
        }
        parent_node.last_child = child;
        Ok(())
    }

    /// Detach a node from its parent; no-op for detached or unknown nodes
    pub fn remove(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if let Some(prev_node) = self.get_mut(prev) {
            prev_node.next_sibling = next;
        }
        if let Some(next_node) = self.get_mut(next) {
            next_node.prev_sibling = prev;
        }
        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child == id {
                parent_node.first_child = next;
            }
            if parent_node.last_child == id {
                parent_node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent.to_option()
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over parent, grandparent, ... up to the document node.
    /// The starting node itself is not yielded.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id).unwrap_or(NodeId::NONE),
        }
    }

    /// Local tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.resolve(elem.name.local))
    }

    /// Read an attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = self.interner.lookup(name)?;
        self.get(id)?.as_element()?.get_attr(name)
    }

    /// Set an attribute value, keeping the id cache in sync
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let elem = self
            .nodes
            .get(id.index())
            .ok_or(DomError::NotFound(id))?
            .as_element()
            .ok_or(DomError::NotAnElement(id))?;
        if elem.read_only {
            return Err(DomError::NoModificationAllowed {
                node: id,
                attribute: name.to_string(),
            });
        }

        let local = self.interner.intern(name);
        let elem = self
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;
        if name == "id" {
            elem.id = (!value.is_empty()).then(|| value.to_string());
        }
        elem.set_attr(QualName::local(local), value.to_string());
        Ok(())
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        let name_id = self.interner.lookup(name);
        let elem = self
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?;
        if elem.read_only {
            return Err(DomError::NoModificationAllowed {
                node: id,
                attribute: name.to_string(),
            });
        }
        let Some(name_id) = name_id else {
            return Ok(None);
        };
        if name == "id" {
            elem.id = None;
        }
        Ok(elem.remove_attr(name_id))
    }

    /// Freeze or thaw an element's attributes
    pub fn set_read_only(&mut self, id: NodeId, read_only: bool) -> DomResult<()> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))?
            .read_only = read_only;
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator over the ancestors of a node, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.to_option()?;
        self.next = self.tree.get(id)?.parent;
        Some(id)
    }
}
