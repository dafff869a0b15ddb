use serde::{Deserialize, Serialize};

/// Ответ сервиса индексации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    /// Число созданных чанков
    pub chunks: u64,

    /// Статус от ingestor-сервиса ("indexed"); UI его не читает
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
