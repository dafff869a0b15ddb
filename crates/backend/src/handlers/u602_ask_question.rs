use axum::extract::State;
use axum::Json;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_ask_question::{AskQuestion, QueryRequest, QueryResponse};

use crate::routes::AppState;
use crate::shared::error::GatewayError;

/// POST /api/query
pub async fn query(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, GatewayError> {
    let request = QueryRequest::from_input(&payload.question)
        .ok_or_else(|| GatewayError::BadRequest("question is empty".to_string()))?;
    tracing::info!("{}: {:?}", AskQuestion::full_name(), request.question);

    match state.upstream.query(&request).await {
        Ok(resp) => Ok(Json(resp)),
        Err(e) => {
            tracing::error!("{}: {}", AskQuestion::full_name(), e);
            Err(e)
        }
    }
}
