/// Метаданные UseCase для идентификации и маршрутизации
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u601")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "index_document")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (заголовок карточки)
    fn display_name() -> &'static str;

    /// Public path the browser calls, e.g. "/api/ingest"
    fn endpoint() -> &'static str;

    /// Path on the upstream microservice, e.g. "/ingest"
    fn upstream_path() -> &'static str;

    /// Полное имя вида "u601_index_document"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
