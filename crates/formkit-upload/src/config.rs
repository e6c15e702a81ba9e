//! Upload configuration

/// Options for [`EnctypeFixer`](crate::EnctypeFixer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// Tag name of the container whose encoding gets rewritten
    pub container_tag: String,

    /// Also write the legacy `encoding` attribute next to `enctype`
    pub legacy_encoding: bool,
}

impl UploadConfig {
    pub fn with_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    pub fn with_legacy_encoding(mut self, enabled: bool) -> Self {
        self.legacy_encoding = enabled;
        self
    }

    /// Attribute names written on the container, in write order
    pub fn attribute_names(&self) -> &'static [&'static str] {
        if self.legacy_encoding {
            &["enctype", "encoding"]
        } else {
            &["enctype"]
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            container_tag: "form".to_string(),
            legacy_encoding: true,
        }
    }
}
