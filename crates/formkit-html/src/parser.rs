//! HTML5 Parser implementation
//!
//! Parses with html5ever's RcDom and copies the result into our arena.

use formkit_dom::{Document, DomResult, DomTree, NodeId, QualName};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::empty(url);
        if let Err(err) = self.convert_node(&dom.document, document.tree_mut(), NodeId::ROOT) {
            tracing::warn!("Dropped part of {}: {}", url, err);
        }
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }

    /// Parse `html` as body content and append the resulting nodes under
    /// `parent`, the way a partial-page update splices markup into a live
    /// document. Returns the ids of the top-level nodes inserted.
    pub fn inject_fragment(
        &self,
        document: &mut Document,
        parent: NodeId,
        html: &str,
    ) -> DomResult<Vec<NodeId>> {
        let tree = document.tree_mut();
        tree.ensure_container(parent)?;

        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        let Some(body) = find_body(&dom.document) else {
            return Ok(Vec::new());
        };

        let mut inserted = Vec::new();
        for child in body.children.borrow().iter() {
            if let Some(id) = self.convert_node(child, tree, parent)? {
                inserted.push(id);
            }
        }

        tracing::debug!("Injected {} nodes under {}", inserted.len(), parent);
        Ok(inserted)
    }

    /// Copy an RcDom node (and its subtree) under `parent`
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
    ) -> DomResult<Option<NodeId>> {
        let id = match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
                return Ok(None);
            }
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => tree.create_doctype(name, public_id, system_id),
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if text.trim().is_empty() {
                    return Ok(None);
                }
                tree.create_text(&text)
            }
            RcNodeData::Comment { contents } => tree.create_comment(contents),
            RcNodeData::Element { name, attrs, .. } => {
                let ns = tree.interner_mut().intern(&name.ns);
                let local = tree.interner_mut().intern(&name.local);

                let attrs: Vec<_> = attrs
                    .borrow()
                    .iter()
                    .map(|attr| {
                        let attr_ns = tree.interner_mut().intern(&attr.name.ns);
                        let attr_local = tree.interner_mut().intern(&attr.name.local);
                        (QualName::new(attr_ns, attr_local), attr.value.to_string())
                    })
                    .collect();

                tree.create_element_with_attrs(QualName::new(ns, local), attrs)
            }
            RcNodeData::ProcessingInstruction { .. } => return Ok(None),
        };

        tree.append_child(parent, id)?;
        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, id)?;
        }
        Ok(Some(id))
    }
}

/// Locate `<body>` under the RcDom document node
fn find_body(document: &Handle) -> Option<Handle> {
    let html = child_element(document, "html")?;
    child_element(&html, "body")
}

fn child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == tag))
        .cloned()
}
