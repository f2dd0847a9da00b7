//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list_users))
                    .route("", web::post().to(users::register))
                    .route("/login", web::post().to(users::login))
                    .route("/{id}", web::get().to(users::get_user))
                    .route("/{id}", web::put().to(users::update_user)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::feed))
                    .route("", web::post().to(posts::create_post))
                    .route("/upvote", web::put().to(posts::upvote))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}/voters", web::get().to(posts::voters)),
            )
            .service(
                web::scope("/comments")
                    .route("", web::get().to(comments::list_comments))
                    .route("", web::post().to(comments::create_comment)),
            ),
    );
}
