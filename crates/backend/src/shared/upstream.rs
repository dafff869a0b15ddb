//! HTTP client for the ingestor and query microservices.

use super::config::UpstreamConfig;
use super::error::GatewayError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_index_document::{IndexDocument, IngestResponse, FILE_FIELD};
use contracts::usecases::u602_ask_question::{AskQuestion, QueryRequest, QueryResponse};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// File taken from the browser's multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct UpstreamClient {
    http: reqwest::Client,
    ingestor_url: String,
    query_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        Self::with_timeout(config, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(config: &UpstreamConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            ingestor_url: config.ingestor_url.clone(),
            query_url: config.query_url.clone(),
        })
    }

    /// POST {ingestor_url}/ingest
    pub async fn ingest(&self, file: UploadedFile) -> Result<IngestResponse, GatewayError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| GatewayError::BadRequest(format!("invalid content type: {}", e)))?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = join_url(&self.ingestor_url, IndexDocument::upstream_path());
        let response = self.http.post(&url).multipart(form).send().await?;
        decode(response).await
    }

    /// POST {query_url}/query
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, GatewayError> {
        let url = join_url(&self.query_url, AskQuestion::upstream_path());
        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::UpstreamStatus(status.as_u16()));
    }
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
