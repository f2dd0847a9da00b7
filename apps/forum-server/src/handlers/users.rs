//! User handlers: registration, login and profile.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use forum_core::domain::{NewUser, User, UserChanges};
use forum_core::ports::{BaseRepository, TokenService};
use forum_shared::dto::{
    AuthResponse, LoginRequest, RegisterUserRequest, UpdateUserRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
    }
}

fn auth_response(token_service: &dyn TokenService, user: &User) -> AppResult<AuthResponse> {
    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        user: user_response(user),
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds().max(0) as u64,
    })
}

/// GET /api/users
pub async fn list_users(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    let body: Vec<UserResponse> = users.iter().map(user_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/users/{id} - the user with the posts they voted on.
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let user = state
        .associations
        .user_with_voted_posts(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .create(NewUser::new(req.username, req.email, req.password))
        .await?;

    Ok(HttpResponse::Created().json(auth_response(token_service.get_ref().as_ref(), &user)?))
}

/// POST /api/users/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .authenticate(&req.email, &req.password)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(auth_response(token_service.get_ref().as_ref(), &user)?))
}

/// PUT /api/users/{id} - users may only update themselves.
pub async fn update_user(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i32>,
    body: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if identity.user_id != id {
        return Err(AppError::Forbidden);
    }

    let req = body.into_inner();
    let changes = UserChanges {
        username: req.username,
        email: req.email,
        password: req.password,
    };
    if changes.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let user = state.users.update(id, changes).await?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
