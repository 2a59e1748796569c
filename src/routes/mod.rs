use axum::Router;

use crate::state::AppState;

pub mod catalog;
pub mod comments;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod uploads;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(orders::router())
        .merge(comments::router())
        .merge(uploads::router())
}
