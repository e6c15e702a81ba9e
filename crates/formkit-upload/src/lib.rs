//! formkit upload
//!
//! Keeps a form able to submit file bodies when an upload control is
//! spliced into it after the page has loaded.
//!
//! # Example
//! ```rust,ignore
//! use formkit_upload::EnctypeFixer;
//!
//! let mut fixer = EnctypeFixer::new(&mut document);
//! fixer.ensure_multipart_encoding("upload-zone")?;
//! ```

mod config;
mod fixer;

pub use config::UploadConfig;
pub use fixer::{ensure_multipart_encoding, EnctypeFixer};
pub use formkit_dom::{DomAccess, DomError, DomResult, MULTIPART_FORM_DATA};
