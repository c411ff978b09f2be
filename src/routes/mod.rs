pub mod news;
use axum::{routing::get, Router};
pub use news::news_routes;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::handlers::news::{create_news, get_news};
use crate::utils::state::AppState;

/// Installs the global subscriber: crate events at `level`, HTTP traces and
/// extractor rejections always on, everything else at `info`.
pub fn init_tracing(level: Level) {
    let filter = filter::Targets::new()
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_target("tower_http::trace", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_default(Level::INFO);

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

pub fn make_app(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(welcome))
        .nest("/api/news", news_routes())
        // the nested "/" only matches without the trailing slash
        .route("/api/news/", get(get_news).post(create_news))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    app
}

async fn welcome() -> &'static str {
    "Welcome to the Tech News API"
}
