use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Whether 500 responses should echo error detail back to the client.
fn debug_enabled() -> bool {
    std::env::var("RUST_ENV").is_ok_and(|env| env == "development")
}

#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum CustomError {
    // Display is the bare message so it lands unchanged in the error envelope
    #[error("{0}")]
    ValidationError(String),

    #[error("Method not allowed. Use POST")]
    MethodNotAllowedError,

    #[error("{0}")]
    InternalServerError(String),
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
            CustomError::MethodNotAllowedError => StatusCode::METHOD_NOT_ALLOWED,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = match self {
            // 405 keeps the bare envelope without a success flag
            CustomError::MethodNotAllowedError => json!({
                "error": self.to_string(),
            }),
            CustomError::InternalServerError(detail) => {
                let mut body = json!({
                    "success": false,
                    "error": "Server error. Please try again.",
                });
                if debug_enabled() {
                    body["debug"] = json!(detail);
                }
                body
            }
            CustomError::ValidationError(..) => json!({
                "success": false,
                "error": self.to_string(),
            }),
        };

        HttpResponse::build(self.status_code()).json(error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let err = CustomError::ValidationError("bad input".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let err = CustomError::MethodNotAllowedError;
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.to_string(), "Method not allowed. Use POST");
    }

    #[test]
    fn internal_error_maps_to_500() {
        let err = CustomError::InternalServerError("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
