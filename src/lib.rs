pub mod db;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod utils;

pub use db::{MemoryNewsStore, MongoNewsStore, NewsStore, StoreError};
pub use routes::make_app;
pub use utils::{config::Config, state::AppState};
