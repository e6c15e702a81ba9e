//! HTML Serialization (innerHTML/outerHTML)

use formkit_dom::{DomTree, NodeData, NodeId};

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Raw text elements (content is not escaped)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// HTML serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the children of a node
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        for (child, _) in tree.children(node_id) {
            self.serialize_node(tree, child, &mut output);
        }
        output
    }

    /// Serialize a node including its own tag
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output);
        output
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                for (child, _) in tree.children(node_id) {
                    self.serialize_node(tree, child, output);
                }
            }
            NodeData::Element(elem) => {
                let tag = tree.resolve(elem.name.local);

                output.push('<');
                output.push_str(tag);
                for attr in &elem.attrs {
                    output.push(' ');
                    output.push_str(tree.resolve(attr.name.local));
                    output.push_str("=\"");
                    escape(&attr.value, true, output);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                let raw = RAW_TEXT_ELEMENTS.contains(&tag);
                for (child_id, child) in tree.children(node_id) {
                    match child.as_text() {
                        Some(text) if raw => output.push_str(text),
                        _ => self.serialize_node(tree, child_id, output),
                    }
                }

                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeData::Text(text) => escape(text, false, output),
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            NodeData::Doctype { name, .. } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(tree.resolve(*name));
                output.push('>');
            }
        }
    }
}

fn escape(text: &str, in_attribute: bool, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' if in_attribute => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            _ => output.push(c),
        }
    }
}

/// Utility: Get innerHTML of an element
pub fn get_inner_html(tree: &DomTree, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_inner(tree, node_id)
}

/// Utility: Get outerHTML of an element
pub fn get_outer_html(tree: &DomTree, node_id: NodeId) -> String {
    HtmlSerializer::new().serialize_outer(tree, node_id)
}
