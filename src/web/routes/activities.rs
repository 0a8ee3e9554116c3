use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::Roster;
use crate::services::roster_service;
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Result<Json<Roster>, ApiError> {
    let roster = state.store.list().await?;
    Ok(Json(roster))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(missing_email)?;
    let message =
        roster_service::signup(state.store.as_ref(), &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(missing_email)?;
    let message =
        roster_service::unregister(state.store.as_ref(), &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}

fn missing_email(rejection: QueryRejection) -> ApiError {
    ApiError::new(
        StatusCode::BAD_REQUEST,
        format!("Missing or invalid email query parameter: {}", rejection.body_text()),
    )
}
