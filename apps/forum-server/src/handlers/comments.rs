//! Comment handlers.

use actix_web::{HttpResponse, web};

use forum_core::domain::NewComment;
use forum_core::ports::BaseRepository;
use forum_shared::dto::CreateCommentRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/comments
pub async fn list_comments(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let comments = state.comments.find_all().await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let comment = state
        .comments
        .create(NewComment::new(req.comment_text, identity.user_id, req.post_id))
        .await?;

    Ok(HttpResponse::Created().json(comment))
}
