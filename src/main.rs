use std::{error::Error, sync::Arc};

use tech_news_backend::{
    make_app, routes::init_tracing, AppState, Config, MemoryNewsStore, MongoNewsStore, NewsStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init()?;
    init_tracing(config.log_level);
    info!("Configuration loaded, log level {}", config.log_level);

    let store: Arc<dyn NewsStore> = match config.mongo_uri.as_deref() {
        Some(uri) => Arc::new(MongoNewsStore::connect(uri, config.mongo_db.as_deref()).await?),
        None => {
            warn!("MONGO_URI not set, news will be kept in memory only");
            Arc::new(MemoryNewsStore::new())
        }
    };

    let app = make_app(AppState::new(store));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
