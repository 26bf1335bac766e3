use axum::{
    extract::State,
    Json,
    http::StatusCode,
};
use serde::Serialize;
use crate::server::AppState;
use crate::operation::{Operation, Outcome};
use crate::schema::SCHEMA_SDL;
use crate::Error;
use std::sync::Arc;

#[derive(Serialize)]
pub struct DataResponse {
    pub data: Outcome,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

fn error_response(e: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        Error::Conflict { .. } => StatusCode::CONFLICT,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorResponse { error: e.to_string(), kind: e.kind() }))
}

pub async fn execute(
    State(state): State<Arc<AppState>>,
    Json(operation): Json<Operation>,
) -> Result<Json<DataResponse>, (StatusCode, Json<ErrorResponse>)> {
    let name = operation.name();
    let mutation = operation.is_mutation();

    let mut catalog = state.catalog.lock().await;
    match operation.execute(&mut catalog) {
        Ok(data) => {
            if mutation {
                tracing::info!("{} applied", name);
            } else {
                tracing::debug!("{} answered", name);
            }
            Ok(Json(DataResponse { data }))
        }
        Err(e) => {
            tracing::warn!("{} rejected: {}", name, e);
            Err(error_response(e))
        }
    }
}

pub async fn get_schema() -> &'static str {
    SCHEMA_SDL
}
