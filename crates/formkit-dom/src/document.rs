//! Document - High-level document API

use crate::{DomTree, FormEnctype, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Re-locate the <html>, <head> and <body> elements after the tree was
    /// built externally
    pub fn finalize(&mut self) {
        self.html_element = self.child_with_tag(self.tree.root(), "html");
        self.head_element = self.child_with_tag(self.html_element, "head");
        self.body_element = self.child_with_tag(self.html_element, "body");
    }

    fn child_with_tag(&self, parent: NodeId, tag: &str) -> NodeId {
        self.tree
            .children(parent)
            .map(|(id, _)| id)
            .find(|&id| self.tree.tag_name(id) == Some(tag))
            .unwrap_or(NodeId::NONE)
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get the first element in tree order carrying `id`.
    /// The empty string never matches.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.find_element_with_id(self.tree.root(), id)
    }

    fn find_element_with_id(&self, start: NodeId, target: &str) -> Option<NodeId> {
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            let Some(node) = self.tree.get(current) else {
                continue;
            };
            if node.as_element().and_then(|e| e.id.as_deref()) == Some(target) {
                return Some(current);
            }
            // Push last child first so the first child is visited first
            let mut child = node.last_child;
            while let Some(id) = child.to_option() {
                stack.push(id);
                child = self.tree.get(id).map_or(NodeId::NONE, |n| n.prev_sibling);
            }
        }
        None
    }

    /// Nearest ancestor of `start` whose tag name matches `tag`
    /// (ASCII case-insensitive). `start` itself is never a candidate.
    pub fn find_container(&self, start: NodeId, tag: &str) -> Option<NodeId> {
        self.tree.ancestors(start).find(|&ancestor| {
            self.tree
                .tag_name(ancestor)
                .is_some_and(|name| name.eq_ignore_ascii_case(tag))
        })
    }

    /// Encoding a form would submit with, per its `enctype` attribute
    pub fn form_enctype(&self, form: NodeId) -> Option<FormEnctype> {
        if !self.tree.get(form)?.is_element() {
            return None;
        }
        Some(
            self.tree
                .get_attribute(form, "enctype")
                .map(FormEnctype::parse)
                .unwrap_or_default(),
        )
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
