use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::me))
        .route("/api/auth/profile", put(handlers::update_profile))
        .route("/api/auth/password", put(handlers::update_password))
        .route(
            "/api/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/api/items/:id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .route("/api/items/:id/reset", post(handlers::reset_item))
        .route("/api/items/:id/increment", post(handlers::increment_item))
        .route("/api/items/:id/decrement", post(handlers::decrement_item))
        .with_state(state)
}
