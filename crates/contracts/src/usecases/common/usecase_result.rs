use serde::{Deserialize, Serialize};

/// Error body returned by the gateway for any failed relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let err: UseCaseError = serde_json::from_str(
            r#"{"code":"EXTERNAL_ERROR","message":"upstream failed","details":"HTTP 500"}"#,
        )
        .unwrap();
        assert_eq!(err.to_string(), "[EXTERNAL_ERROR] upstream failed: HTTP 500");
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_string(&UseCaseError::validation("empty question")).unwrap();
        assert_eq!(
            json,
            r#"{"code":"VALIDATION_ERROR","message":"empty question"}"#
        );
    }
}
