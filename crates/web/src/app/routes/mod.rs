use axum::routing::{get, post};
use axum::Router;

use crate::app::AppState;

pub mod items;
pub mod system;

/// Full route tree for the inventory UI.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::index))
        .route("/add", get(items::add_form).post(items::add_submit))
        .route("/edit/:id", get(items::edit_form).post(items::edit_submit))
        .route("/delete/:id", post(items::delete))
        .route("/health", get(system::health))
}
