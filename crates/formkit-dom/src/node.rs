//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId` indices rather than pointers,
//! so the whole tree lives in one `Vec`.

use crate::{InternedString, NodeId};

/// Qualified name (namespace + local name), both interned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QualName {
    pub ns: InternedString,
    pub local: InternedString,
}

impl QualName {
    pub fn new(ns: InternedString, local: InternedString) -> Self {
        Self { ns, local }
    }

    /// Name in the null namespace
    pub fn local(local: InternedString) -> Self {
        Self {
            ns: InternedString::EMPTY,
            local,
        }
    }
}

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: QualName) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a new comment node
    pub fn comment(content: String) -> Self {
        Self::with_data(NodeData::Comment(content))
    }

    /// Create a doctype node
    pub fn doctype(name: InternedString, public_id: String, system_id: String) -> Self {
        Self::with_data(NodeData::Doctype {
            name,
            public_id,
            system_id,
        })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype {
        name: InternedString,
        public_id: String,
        system_id: String,
    },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (qualified)
    pub name: QualName,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Cached non-empty id attribute (hot path for `get_element_by_id`)
    pub id: Option<String>,
    /// Attribute writes are rejected while set
    pub read_only: bool,
}

impl ElementData {
    pub fn new(name: QualName) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            id: None,
            read_only: false,
        }
    }

    /// Get an attribute value by local name
    pub fn get_attr(&self, name: InternedString) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.local == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: QualName, value: String) {
        match self.attrs.iter_mut().find(|a| a.name.local == name.local) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attribute { name, value }),
        }
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attr(&mut self, name: InternedString) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name.local == name)?;
        Some(self.attrs.remove(pos).value)
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut elem = ElementData::new(QualName::local(InternedString(1)));
        elem.set_attr(QualName::local(InternedString(10)), "post".into());
        elem.set_attr(QualName::local(InternedString(11)), "text/plain".into());
        elem.set_attr(QualName::local(InternedString(10)), "get".into());

        assert_eq!(elem.attrs.len(), 2);
        assert_eq!(elem.attrs[0].value, "get");
        assert_eq!(elem.get_attr(InternedString(11)), Some("text/plain"));
    }

    #[test]
    fn test_remove_attr() {
        let mut elem = ElementData::new(QualName::local(InternedString(1)));
        elem.set_attr(QualName::local(InternedString(10)), "x".into());
        assert_eq!(elem.remove_attr(InternedString(10)), Some("x".to_string()));
        assert_eq!(elem.remove_attr(InternedString(10)), None);
    }
}
