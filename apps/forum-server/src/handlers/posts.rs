//! Post handlers: feed, single post, publishing and voting.

use actix_web::{HttpResponse, web};

use forum_core::domain::NewPost;
use forum_shared::dto::{CreatePostRequest, UpvoteRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Post with id {} not found", id))
}

/// GET /api/posts - every post with author, comments and vote count.
pub async fn feed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.associations.post_feed().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .associations
        .post_view(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/{id}/voters
pub async fn voters(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .associations
        .post_with_voters(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost::new(req.title, req.post_url, identity.user_id))
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/upvote - returns the post with its refreshed vote count.
pub async fn upvote(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpvoteRequest>,
) -> AppResult<HttpResponse> {
    let post_id = body.into_inner().post_id;
    tracing::debug!(username = %identity.username, post_id, "Upvote requested");

    state.votes.cast(identity.user_id, post_id).await?;

    let post = state
        .associations
        .post_view(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    Ok(HttpResponse::Ok().json(post))
}
