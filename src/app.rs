use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/online/toggle", post(handlers::toggle_online))
        .route("/tabs/:tab", post(handlers::set_tab))
        .route("/courses", post(handlers::submit_course))
        .route("/depenses", post(handlers::submit_depense))
        .route("/api/session", get(handlers::api_session))
        .route("/api/online", post(handlers::api_online))
        .route("/api/courses", post(handlers::api_course))
        .route("/api/depenses", post(handlers::api_depense))
        .with_state(state)
}
