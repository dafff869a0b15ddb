use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_index_document::IndexDocument;
use contracts::usecases::u602_ask_question::AskQuestion;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::ServerConfig;
use crate::shared::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // U601: PDF -> ingestor-service
        .route(
            IndexDocument::endpoint(),
            post(handlers::u601_index_document::ingest),
        )
        // U602: question -> query-service
        .route(
            AskQuestion::endpoint(),
            post(handlers::u602_ask_question::query),
        )
        .layer(DefaultBodyLimit::max(server.max_upload_bytes()))
        .with_state(state)
        .fallback_service(ServeDir::new(&server.static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::UpstreamConfig;
    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::Json;
    use contracts::usecases::common::UseCaseError;
    use contracts::usecases::u601_index_document::IngestResponse;
    use contracts::usecases::u602_ask_question::{QueryRequest, QueryResponse};
    use reqwest::multipart::{Form, Part};
    use std::time::Duration;
    use tokio::net::TcpListener;

    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Answers with the byte count of the `file` field as the chunk count.
    /// Rejects uploads that lost their filename or content type on the way.
    fn ingestor_stub() -> Router {
        Router::new().route(
            "/ingest",
            post(|mut multipart: Multipart| async move {
                while let Some(field) = multipart.next_field().await.unwrap() {
                    if field.name() != Some("file") {
                        continue;
                    }
                    if field.file_name() != Some("report.pdf")
                        || field.content_type() != Some("application/pdf")
                    {
                        return Err(StatusCode::UNPROCESSABLE_ENTITY);
                    }
                    let len = field.bytes().await.unwrap().len();
                    return Ok(Json(
                        serde_json::json!({ "status": "indexed", "chunks": len }),
                    ));
                }
                Err(StatusCode::UNPROCESSABLE_ENTITY)
            }),
        )
    }

    fn query_stub() -> Router {
        Router::new().route(
            "/query",
            post(|Json(req): Json<QueryRequest>| async move {
                Json(QueryResponse {
                    answer: format!("echo: {}\n(Page: 1)", req.question),
                })
            }),
        )
    }

    fn empty_answer_stub() -> Router {
        Router::new().route(
            "/query",
            post(|| async { Json(serde_json::json!({ "answer": null })) }),
        )
    }

    fn failing_stub() -> Router {
        Router::new()
            .route("/ingest", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/query", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
    }

    fn slow_stub() -> Router {
        Router::new().route(
            "/query",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(QueryResponse {
                    answer: "too late".to_string(),
                })
            }),
        )
    }

    async fn gateway(ingestor_url: &str, query_url: &str, timeout: Duration) -> String {
        let config = UpstreamConfig {
            ingestor_url: ingestor_url.to_string(),
            query_url: query_url.to_string(),
            timeout_secs: timeout.as_secs(),
        };
        let upstream = UpstreamClient::with_timeout(&config, timeout).unwrap();
        let state = AppState {
            upstream: Arc::new(upstream),
        };
        spawn(configure_routes(state, &ServerConfig::default())).await
    }

    fn pdf_form(field: &str, len: usize) -> Form {
        let part = Part::bytes(vec![7u8; len])
            .file_name("report.pdf")
            .mime_str("application/pdf")
            .unwrap();
        Form::new().part(field.to_string(), part)
    }

    #[tokio::test]
    async fn test_health() {
        let base = gateway("http://127.0.0.1:1", "http://127.0.0.1:1", Duration::from_secs(5)).await;
        let body = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_ingest_relays_file() {
        let ingestor = spawn(ingestor_stub()).await;
        let base = gateway(&ingestor, "http://127.0.0.1:1", Duration::from_secs(5)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/ingest", base))
            .multipart(pdf_form("file", 2048))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: IngestResponse = resp.json().await.unwrap();
        assert_eq!(body.chunks, 2048);
        assert_eq!(body.status.as_deref(), Some("indexed"));
    }

    #[tokio::test]
    async fn test_ingest_without_file_field_is_bad_request() {
        let ingestor = spawn(ingestor_stub()).await;
        let base = gateway(&ingestor, "http://127.0.0.1:1", Duration::from_secs(5)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/ingest", base))
            .multipart(pdf_form("document", 16))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: UseCaseError = resp.json().await.unwrap();
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_query_relays_trimmed_question() {
        let query = spawn(query_stub()).await;
        let base = gateway("http://127.0.0.1:1", &query, Duration::from_secs(5)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/query", base))
            .json(&serde_json::json!({ "question": "  what is RAG?  " }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: QueryResponse = resp.json().await.unwrap();
        assert_eq!(body.answer, "echo: what is RAG?\n(Page: 1)");
    }

    #[tokio::test]
    async fn test_null_answer_relays_as_empty() {
        let query = spawn(empty_answer_stub()).await;
        let base = gateway("http://127.0.0.1:1", &query, Duration::from_secs(5)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/query", base))
            .json(&serde_json::json!({ "question": "q" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: QueryResponse = resp.json().await.unwrap();
        assert_eq!(body.answer, "");
    }

    #[tokio::test]
    async fn test_blank_question_is_bad_request() {
        let query = spawn(query_stub()).await;
        let base = gateway("http://127.0.0.1:1", &query, Duration::from_secs(5)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/query", base))
            .json(&serde_json::json!({ "question": " \n " }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_error_is_bad_gateway() {
        let failing = spawn(failing_stub()).await;
        let base = gateway(&failing, &failing, Duration::from_secs(5)).await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/api/ingest", base))
            .multipart(pdf_form("file", 16))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = client
            .post(format!("{}/api/query", base))
            .json(&serde_json::json!({ "question": "q" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: UseCaseError = resp.json().await.unwrap();
        assert_eq!(body.message, "Upstream returned HTTP 500");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let base = gateway("http://127.0.0.1:1", "http://127.0.0.1:1", Duration::from_secs(5)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/query", base))
            .json(&serde_json::json!({ "question": "q" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let slow = spawn(slow_stub()).await;
        let base = gateway("http://127.0.0.1:1", &slow, Duration::from_millis(200)).await;

        let resp = reqwest::Client::new()
            .post(format!("{}/api/query", base))
            .json(&serde_json::json!({ "question": "q" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
        let body: UseCaseError = resp.json().await.unwrap();
        assert_eq!(body.code, "TIMEOUT");
    }
}
