pub mod config;
pub mod error;
pub mod request_logger;
pub mod upstream;
