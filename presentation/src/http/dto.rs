//! Wire types for the tutor endpoint.

use serde::{Deserialize, Serialize};

/// Inbound request body. `action` stays a raw string so an unknown value
/// maps to the endpoint's own 400 response instead of a deserialize error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    pub action: String,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub user_input: Option<String>,
}

/// Error body returned for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_fields() {
        let request: TutorRequest = serde_json::from_str(
            r#"{"action": "vocabulary", "skillLevel": "Beginner", "userInput": "hi"}"#,
        )
        .unwrap();
        assert_eq!(request.action, "vocabulary");
        assert_eq!(request.skill_level.as_deref(), Some("Beginner"));
        assert_eq!(request.user_input.as_deref(), Some("hi"));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let request: TutorRequest =
            serde_json::from_str(r#"{"action": "fillerWords"}"#).unwrap();
        assert!(request.skill_level.is_none());
        assert!(request.user_input.is_none());
    }
}
