//! Multipart encoding fixer
//!
//! A form rendered without an upload control is usually url-encoded. When a
//! partial-page update later splices a file input into it, the form has to
//! be switched to `multipart/form-data` or the file body is never sent.

use formkit_dom::{DomAccess, DomResult, NodeId, MULTIPART_FORM_DATA};

use crate::UploadConfig;

/// Rewrites the encoding of the form enclosing a freshly inserted element
#[derive(Debug)]
pub struct EnctypeFixer<D> {
    dom: D,
    config: UploadConfig,
}

impl<D: DomAccess> EnctypeFixer<D> {
    /// Create a fixer with the default configuration
    pub fn new(dom: D) -> Self {
        Self::with_config(dom, UploadConfig::default())
    }

    pub fn with_config(dom: D, config: UploadConfig) -> Self {
        Self { dom, config }
    }

    /// Make the form enclosing `element_id` submit as `multipart/form-data`.
    ///
    /// An identifier that resolves to nothing, or an element with no form
    /// ancestor, is a silent no-op. Attribute write failures are returned
    /// unchanged.
    pub fn ensure_multipart_encoding(&mut self, element_id: &str) -> DomResult<()> {
        let Some(start) = self.dom.resolve(element_id) else {
            return Ok(());
        };
        self.ensure_multipart_encoding_for(start)
    }

    /// Same as [`ensure_multipart_encoding`](Self::ensure_multipart_encoding)
    /// for a caller already holding the inserted node
    pub fn ensure_multipart_encoding_for(&mut self, start: NodeId) -> DomResult<()> {
        let Some(form) = self.dom.find_container(start, &self.config.container_tag) else {
            return Ok(());
        };

        for name in self.config.attribute_names() {
            self.dom.set_attribute(form, name, MULTIPART_FORM_DATA)?;
        }
        tracing::trace!("Set {} on form {} (from {})", MULTIPART_FORM_DATA, form, start);
        Ok(())
    }

    /// The form `ensure_multipart_encoding` would rewrite, if any
    pub fn find_form(&self, element_id: &str) -> Option<NodeId> {
        let start = self.dom.resolve(element_id)?;
        self.dom.find_container(start, &self.config.container_tag)
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Give back the DOM handle
    pub fn into_inner(self) -> D {
        self.dom
    }
}

/// One-shot [`EnctypeFixer::ensure_multipart_encoding`] with the default
/// configuration
pub fn ensure_multipart_encoding<D: DomAccess>(dom: D, element_id: &str) -> DomResult<()> {
    EnctypeFixer::new(dom).ensure_multipart_encoding(element_id)
}
