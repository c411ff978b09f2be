use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::news::{create_news, delete_news, get_news};
use crate::utils::state::AppState;

pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_news).post(create_news))
        .route("/{id}", delete(delete_news))
}
