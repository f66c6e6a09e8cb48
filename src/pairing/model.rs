use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingRequest {
    // Option so a missing field fails with our validation message,
    // not the deserializer's
    pub phone_number: Option<String>,
    pub country_code: Option<String>,
}

/// Ephemeral pairing result, constructed and returned, never stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingResponse {
    pub success: bool,
    pub code: String,
    pub formatted_code: String,
    pub phone_number: String,
    pub session_id: String,
    pub country: String,
    pub expires_in: i64,
    pub generated_at: i64,
    pub instructions: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub code: Option<String>,
    pub session_id: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    pub success: bool,
    pub message: String,
    pub code: String,
    pub session_id: String,
    pub phone_number: String,
    pub linked_at: i64,
    pub features: Vec<String>,
    pub dashboard_url: String,
}
