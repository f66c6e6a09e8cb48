use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Result, dev::ServiceResponse};
use log::error;
use serde_json::json;

/// Catch-all for 500s that did not come out of a handler as a typed
/// error, so unexpected failures still leave as the JSON envelope.
pub fn handle_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let detail = res
        .response()
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "Unknown error".to_string());

    error!("Unhandled server error: {}", detail);

    let mut body = json!({
        "success": false,
        "error": "Server error. Please try again.",
    });
    if std::env::var("RUST_ENV").is_ok_and(|env| env == "development") {
        body["debug"] = json!(detail);
    }

    let new_response = HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).json(body);
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CustomError;
    use actix_web::middleware::ErrorHandlers;
    use actix_web::{App, test, web};
    use serde_json::Value;

    async fn failing() -> Result<HttpResponse, CustomError> {
        Err(CustomError::InternalServerError(
            "database is down".to_string(),
        ))
    }

    // RUST_ENV is process-global, so both debug states are exercised
    // from a single test
    #[actix_web::test]
    async fn server_errors_leave_as_json_envelope() {
        let app = test::init_service(
            App::new().route("/boom", web::get().to(failing)).wrap(
                ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, handle_error),
            ),
        )
        .await;

        unsafe { std::env::remove_var("RUST_ENV") };
        let req = test::TestRequest::get().uri("/boom").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Server error. Please try again."));
        assert!(body.get("debug").is_none());

        unsafe { std::env::set_var("RUST_ENV", "development") };
        let req = test::TestRequest::get().uri("/boom").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Server error. Please try again."));
        assert_eq!(body["debug"], json!("database is down"));
        unsafe { std::env::remove_var("RUST_ENV") };

        // the typed error produces the same envelope without the wrapper
        let bare = test::init_service(App::new().route("/boom", web::get().to(failing))).await;
        let req = test::TestRequest::get().uri("/boom").to_request();
        let resp = test::call_service(&bare, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Server error. Please try again."));
        assert!(body.get("debug").is_none());
    }
}
