//! Form Elements Module
//!
//! Submission encodings understood by `<form enctype=...>`.

mod enctype;

pub use enctype::{FormEnctype, MULTIPART_FORM_DATA};
