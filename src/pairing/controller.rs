use actix_web::{HttpResponse, Responder, web};

use crate::pairing::model::{PairingRequest, VerificationRequest};
use crate::pairing::service::PairingService;
use crate::utils::error::CustomError;

pub async fn generate_code(
    pairing_service: web::Data<PairingService>,
    request: web::Json<PairingRequest>,
) -> Result<HttpResponse, CustomError> {
    let result = pairing_service.generate(request.into_inner())?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn verify_code(
    pairing_service: web::Data<PairingService>,
    request: web::Json<VerificationRequest>,
) -> Result<HttpResponse, CustomError> {
    let result = pairing_service.verify(request.into_inner())?;
    Ok(HttpResponse::Ok().json(result))
}

/// CORS preflight: 200 with an empty body, headers come from the
/// DefaultHeaders middleware
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Fallback for every verb other than POST and OPTIONS
pub async fn method_not_allowed() -> Result<HttpResponse, CustomError> {
    Err(CustomError::MethodNotAllowedError)
}
