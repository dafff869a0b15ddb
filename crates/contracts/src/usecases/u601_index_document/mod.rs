pub mod response;

pub use response::IngestResponse;

use crate::usecases::common::UseCaseMetadata;

/// Multipart field that carries the uploaded document.
pub const FILE_FIELD: &str = "file";

/// The only media type accepted by drag-and-drop.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

pub struct IndexDocument;

impl UseCaseMetadata for IndexDocument {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "index_document"
    }

    fn display_name() -> &'static str {
        "Upload Document"
    }

    fn endpoint() -> &'static str {
        "/api/ingest"
    }

    fn upstream_path() -> &'static str {
        "/ingest"
    }
}
