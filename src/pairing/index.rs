use super::controller::{generate_code, method_not_allowed, preflight, verify_code};
use actix_web::http::Method;
use actix_web::web;

pub fn pairing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/generate", web::post().to(generate_code))
            .route("/generate", web::method(Method::OPTIONS).to(preflight))
            .route("/generate", web::route().to(method_not_allowed))
            .route("/verify", web::post().to(verify_code))
            .route("/verify", web::method(Method::OPTIONS).to(preflight))
            .route("/verify", web::route().to(method_not_allowed)),
    );
}
