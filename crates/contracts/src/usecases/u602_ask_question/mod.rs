pub mod request;
pub mod response;

pub use request::QueryRequest;
pub use response::QueryResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "ask_question"
    }

    fn display_name() -> &'static str {
        "Ask a Question"
    }

    fn endpoint() -> &'static str {
        "/api/query"
    }

    fn upstream_path() -> &'static str {
        "/query"
    }
}
