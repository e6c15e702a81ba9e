//! formkit HTML
//!
//! HTML5 parsing on top of html5ever, converted into the formkit arena DOM,
//! plus fragment injection and serialization for partial-page updates.

mod parser;
mod serializer;

pub use formkit_dom::{Document, DomTree, Node, NodeId};
pub use parser::HtmlParser;
pub use serializer::{get_inner_html, get_outer_html, HtmlSerializer};

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Parse an HTML string with a base URL
pub fn parse_with_url(html: &str, url: &str) -> Document {
    HtmlParser::new().parse_with_url(html, url)
}
