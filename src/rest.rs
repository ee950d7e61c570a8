use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/validate", get(handlers::auth::validate))
        .route("/api/users/:id", get(handlers::users::get_user))
        .route("/dashboard", get(handlers::pages::dashboard))
        .route("/login", get(handlers::pages::login_page))
        .with_state(state)
}
