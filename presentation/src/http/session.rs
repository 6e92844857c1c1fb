//! Per-request session.
//!
//! Identity is explicit rather than ambient: a session is acquired at
//! dispatch start, scopes the request's log span, and is dropped at
//! request end. No cross-request state exists.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Request-scoped identity and correlation id.
#[derive(Debug, Clone)]
pub struct RequestSession {
    request_id: Uuid,
    user: Option<String>,
}

impl RequestSession {
    /// Acquire a session for an inbound request. The caller's identity, if
    /// the front end forwarded one, arrives in the `x-user-id` header.
    pub fn begin(headers: &HeaderMap) -> Self {
        let user = headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Self {
            request_id: Uuid::new_v4(),
            user,
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
