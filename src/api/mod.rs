//! Axum handlers exposing the session's user actions.

pub mod firms;
pub mod search;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/options", get(search::options))
        .route("/api/search", post(search::search))
        .route("/api/results", get(search::results))
        .route("/api/suggest", get(search::suggest))
        .route("/api/filters/toggle", post(search::toggle_filter))
        .route("/api/filters", delete(search::clear_filters))
        .route("/api/firms/{id}/view", post(firms::view_firm))
        .route("/api/firms/{id}/favorite", post(firms::toggle_favorite))
        .route("/api/firms/{id}/note", get(firms::get_note).put(firms::set_note))
        .route("/api/favorites", get(firms::list_favorites))
        .route("/api/recent", get(firms::list_recent))
        .route("/api/session/login", put(firms::set_login))
        .with_state(state)
}
