//! Askama templates for the rendered pages.

use askama::Template;

use gazette_core::domain::Post;
use gazette_shared::{FormErrors, PostForm};

/// The listing page - all posts, newest first.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<Post>,
}

/// A single post.
#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub post: Post,
}

/// The create form, either empty or re-rendered with field errors.
#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub form: PostForm,
    pub errors: FormErrors,
}

/// Error page for non-2xx responses.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}
