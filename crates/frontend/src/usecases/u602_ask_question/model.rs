//! Ask Question - Model (API functions)

use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_ask_question::{AskQuestion, QueryRequest, QueryResponse};
use gloo_net::http::Request;

/// Задать вопрос по проиндексированному документу
pub async fn ask(request: &QueryRequest) -> Result<QueryResponse, String> {
    let response = Request::post(&api_url(AskQuestion::endpoint()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Query failed: {}", response.status()));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
