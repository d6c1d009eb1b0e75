//! Blog post handlers - listing, detail, and create.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use askama::Template;
use uuid::Uuid;

use gazette_core::DomainError;
use gazette_core::domain::Post;
use gazette_core::ports::{BaseRepository, PostRepository};
use gazette_shared::{FormErrors, PostForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::templates::{CreateTemplate, DetailTemplate, IndexTemplate};

/// GET / - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;

    let page = IndexTemplate { posts };
    Ok(html(page.render()?))
}

/// GET /posts/{id} - a single post, or the 404 page.
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state.posts.find_by_id(id).await?.ok_or(DomainError::NotFound {
        entity_type: "post",
        id,
    })?;

    let page = DetailTemplate { post };
    Ok(html(page.render()?))
}

/// GET /posts/new - the empty create form.
pub async fn create_form() -> AppResult<HttpResponse> {
    let page = CreateTemplate {
        form: PostForm::default(),
        errors: FormErrors::default(),
    };
    Ok(html(page.render()?))
}

/// POST /posts/new - validate the submission, then persist and redirect
/// to the new post, or re-render the form with field errors.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();

    if let Err(errors) = form.check() {
        let page = CreateTemplate { form, errors };
        return Ok(html(page.render()?));
    }

    let post = Post::new(form.title, form.content);
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/posts/{}", saved.id)))
        .finish())
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
