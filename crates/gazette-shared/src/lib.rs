//! # Gazette Shared
//!
//! Types shared between the HTTP layer and the rendered views:
//! the post submission form and its validation errors.

pub mod form;

pub use form::{FormErrors, PostForm};
