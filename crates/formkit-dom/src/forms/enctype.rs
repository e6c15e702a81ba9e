//! Form encoding type

/// Content type that lets a form carry file bodies
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Form encoding type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormEnctype {
    #[default]
    UrlEncoded,
    Multipart,
    TextPlain,
}

impl FormEnctype {
    /// Parse an `enctype` attribute value; unknown values fall back to the
    /// url-encoded default, as browsers do
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case(MULTIPART_FORM_DATA) {
            Self::Multipart
        } else if s.eq_ignore_ascii_case("text/plain") {
            Self::TextPlain
        } else {
            Self::UrlEncoded
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::UrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => MULTIPART_FORM_DATA,
            Self::TextPlain => "text/plain",
        }
    }

    /// Whether file inputs are submitted with their contents
    pub fn carries_files(&self) -> bool {
        matches!(self, Self::Multipart)
    }
}

impl std::fmt::Display for FormEnctype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.content_type())
    }
}
