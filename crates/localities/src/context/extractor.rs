//! Axum extractor for RequestContext.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use localities_core::context::{RequestContext, RequestId};

use crate::state::AppState;

/// A per-request [`RequestContext`].
///
/// The deadline starts when the request is extracted and the cancellation
/// token is a child of the process shutdown token, so shutdown cancels every
/// in-flight adapter call.
#[derive(Debug, Clone)]
pub struct RequestScope(pub RequestContext);

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

impl FromRequestParts<AppState> for RequestScope {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = extract_request_id(&parts.headers);

        let ctx = RequestContext::new()
            .with_request_id(request_id)
            .with_timeout(state.request_timeout)
            .with_cancellation(state.shutdown.child_token());

        Ok(RequestScope(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_extract_request_id_from_header() {
        let mut headers = HeaderMap::new();
        let id = "550e8400-e29b-41d4-a716-446655440000";
        headers.insert("x-request-id", id.parse().unwrap());

        let request_id = extract_request_id(&headers);
        assert_eq!(request_id.to_string(), id);
    }

    #[test]
    fn test_extract_request_id_generates_when_missing() {
        let headers = HeaderMap::new();
        let request_id = extract_request_id(&headers);

        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }

    #[test]
    fn test_extract_request_id_generates_when_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "not-a-uuid".parse().unwrap());

        let request_id = extract_request_id(&headers);

        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }

    #[tokio::test]
    async fn test_scope_has_deadline_and_follows_shutdown() {
        let state = AppState::default();
        let (mut parts, _) = Request::builder()
            .uri("/localities")
            .body(())
            .unwrap()
            .into_parts();

        let RequestScope(ctx) = RequestScope::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert!(ctx.deadline().is_some());
        assert!(!ctx.is_cancelled());

        state.shutdown.cancel();
        assert!(ctx.is_cancelled());
    }
}
