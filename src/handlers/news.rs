use crate::{
    models::{error::Error, news::NewsDraft},
    utils::state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde_json::json;

pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let news = state.store.list_all().await?;
    Ok((StatusCode::OK, Json(news)))
}

pub async fn create_news(
    State(state): State<AppState>,
    payload: Result<Json<NewsDraft>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(draft) = payload?;
    let news = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    // No distinction between a removed record and one that never existed.
    state.store.delete_by_id(&id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({"message": "News deleted successfully"})),
    ))
}
