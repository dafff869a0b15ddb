use axum::extract::{Multipart, State};
use axum::Json;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_index_document::{
    IndexDocument, IngestResponse, FILE_FIELD, PDF_MEDIA_TYPE,
};

use crate::routes::AppState;
use crate::shared::error::GatewayError;
use crate::shared::upstream::UploadedFile;

/// POST /api/ingest
pub async fn ingest(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>, GatewayError> {
    let file = read_file_field(&mut multipart).await?;
    tracing::info!(
        "{}: relaying '{}' ({} bytes)",
        IndexDocument::full_name(),
        file.file_name,
        file.bytes.len()
    );

    match state.upstream.ingest(file).await {
        Ok(resp) => {
            tracing::info!("{}: {} chunks", IndexDocument::full_name(), resp.chunks);
            Ok(Json(resp))
        }
        Err(e) => {
            tracing::error!("{}: {}", IndexDocument::full_name(), e);
            Err(e)
        }
    }
}

/// Первое поле `file` из multipart; остальные поля пропускаются
async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("document.pdf").to_string();
        let content_type = field.content_type().unwrap_or(PDF_MEDIA_TYPE).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GatewayError::BadRequest(e.to_string()))?;
        if bytes.is_empty() {
            return Err(GatewayError::BadRequest(format!("'{}' is empty", file_name)));
        }
        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Err(GatewayError::BadRequest(format!(
        "missing '{}' field",
        FILE_FIELD
    )))
}
