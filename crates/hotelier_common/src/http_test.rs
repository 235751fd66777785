#[cfg(test)]
mod tests {
    use crate::error::{HotelierError, HttpStatusCode};
    use crate::{conflict, external_service_error, not_found, validation_error};
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::Value;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad").status_code(), 400);
        assert_eq!(not_found("gone").status_code(), 404);
        assert_eq!(conflict("taken").status_code(), 409);
        assert_eq!(external_service_error("rooms", "down").status_code(), 502);
        assert_eq!(HotelierError::InternalError("x".into()).status_code(), 500);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = conflict("Dates taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 409);
        assert_eq!(body["error"]["message"], "Conflict: Dates taken");
    }

    #[tokio::test]
    async fn test_external_service_error_message() {
        let response = external_service_error("availability", "timeout").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["error"]["message"],
            "External service error: availability - timeout"
        );
    }
}
