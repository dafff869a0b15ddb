pub mod common;
pub mod u601_index_document;
pub mod u602_ask_question;
