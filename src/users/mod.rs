pub mod dto;
pub mod handlers;
mod json;
pub mod repo;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(handlers::list_users))
}
