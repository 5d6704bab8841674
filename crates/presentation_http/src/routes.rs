//! Route definitions

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};

use crate::{handlers, middleware::BearerAuthLayer, state::AppState};

/// Root route: hand off to the static index resource
async fn root_redirect() -> Redirect {
    Redirect::to("/index.html")
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Identity-scoped routes sit behind the bearer gate; everything else
    // is open.
    let gated = Router::new()
        .route("/users/me", get(handlers::users::current_user))
        .route(
            "/users/{id}",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        )
        .route_layer(BearerAuthLayer::new());

    Router::new()
        // Root and health
        .route("/", get(root_redirect))
        .route("/health", get(handlers::health::health_check))
        // Universities
        .route(
            "/universities",
            get(handlers::universities::list_universities)
                .post(handlers::universities::create_university),
        )
        .route(
            "/universities/{id}",
            get(handlers::universities::get_university)
                .put(handlers::universities::replace_university)
                .delete(handlers::universities::delete_university),
        )
        // Comments
        .route(
            "/comments",
            get(handlers::comments::list_comments).post(handlers::comments::create_comment),
        )
        .route(
            "/comments/{id}",
            get(handlers::comments::get_comment)
                .put(handlers::comments::replace_comment)
                .delete(handlers::comments::delete_comment),
        )
        // Users and authentication
        .route("/users", get(handlers::users::list_users))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .merge(gated)
        // Attach state
        .with_state(state)
}
