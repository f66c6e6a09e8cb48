use chrono::Utc;
use regex::Regex;

use crate::pairing::model::{
    PairingRequest, PairingResponse, VerificationRequest, VerificationResponse,
};
use crate::utils::error::CustomError;
use crate::utils::helpers::{
    CODE_EXPIRES_IN_SECONDS, format_pairing_code, generate_pairing_code, generate_session_id,
};

/// Country code → international dial prefix
const COUNTRY_DIAL_PREFIXES: [(&str, &str); 20] = [
    ("UG", "+256"),
    ("US", "+1"),
    ("GB", "+44"),
    ("IN", "+91"),
    ("KE", "+254"),
    ("TZ", "+255"),
    ("RW", "+250"),
    ("NG", "+234"),
    ("ZA", "+27"),
    ("GH", "+233"),
    ("CM", "+237"),
    ("ET", "+251"),
    ("SS", "+211"),
    ("CD", "+243"),
    ("SO", "+252"),
    ("SD", "+249"),
    ("MW", "+265"),
    ("ZM", "+260"),
    ("ZW", "+263"),
    ("AO", "+244"),
];

const DEFAULT_COUNTRY: &str = "UG";
const DEFAULT_DIAL_PREFIX: &str = "+256";

const LINKED_FEATURES: [&str; 6] = [
    "Web WhatsApp Access",
    "Message History",
    "Send/Receive Messages",
    "Media Download",
    "Auto-Reply System",
    "Chat Export",
];

/// Stateless pairing flow: nothing survives a request, so concurrent
/// calls are fully independent.
pub struct PairingService {
    code_pattern: Regex,
}

impl PairingService {
    pub fn new() -> Self {
        PairingService {
            code_pattern: Regex::new(r"^[A-Z0-9]{8}$").expect("invalid code pattern"),
        }
    }

    fn dial_prefix(country_code: &str) -> &'static str {
        COUNTRY_DIAL_PREFIXES
            .iter()
            .find(|(code, _)| *code == country_code)
            .map(|(_, prefix)| *prefix)
            .unwrap_or(DEFAULT_DIAL_PREFIX)
    }

    /// Generate a pairing code for a phone number
    pub fn generate(&self, request: PairingRequest) -> Result<PairingResponse, CustomError> {
        let phone_number = request.phone_number.unwrap_or_default();

        // Keep only digits before checking the length
        let clean_phone: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
        if clean_phone.len() < 8 {
            return Err(CustomError::ValidationError(
                "Please enter a valid phone number (at least 8 digits)".to_string(),
            ));
        }

        let country = request
            .country_code
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        let full_number = format!("{}{}", Self::dial_prefix(&country), clean_phone);

        let code = generate_pairing_code();
        let formatted_code = format_pairing_code(&code);
        let session_id = generate_session_id();

        Ok(PairingResponse {
            success: true,
            instructions: format!(
                "Open WhatsApp → Settings → Linked Devices → Link with phone number → Enter: {}",
                formatted_code
            ),
            code,
            formatted_code,
            phone_number: full_number,
            session_id,
            country,
            expires_in: CODE_EXPIRES_IN_SECONDS,
            generated_at: Utc::now().timestamp_millis(),
        })
    }

    /// Validate a submitted code's format and report linkage success.
    /// There is no store of issued codes, so any well-formed code is
    /// accepted regardless of session id.
    pub fn verify(&self, request: VerificationRequest) -> Result<VerificationResponse, CustomError> {
        let code = request.code.unwrap_or_default();
        let session_id = request.session_id.unwrap_or_default();

        if code.is_empty() || session_id.is_empty() {
            return Err(CustomError::ValidationError(
                "Code and session ID are required".to_string(),
            ));
        }

        // Normalize: drop hyphens, uppercase
        let clean_code: String = code.chars().filter(|c| *c != '-').collect();
        let clean_code = clean_code.to_uppercase();

        if !self.code_pattern.is_match(&clean_code) {
            return Err(CustomError::ValidationError(
                "Invalid code format. Must be 8 characters (letters/numbers)".to_string(),
            ));
        }

        Ok(VerificationResponse {
            success: true,
            message: "✅ WhatsApp linked successfully!".to_string(),
            code: clean_code,
            session_id,
            phone_number: request
                .phone_number
                .unwrap_or_else(|| "Not provided".to_string()),
            linked_at: Utc::now().timestamp_millis(),
            features: LINKED_FEATURES.iter().map(|f| f.to_string()).collect(),
            dashboard_url: "/dashboard".to_string(),
        })
    }
}

impl Default for PairingService {
    fn default() -> Self {
        Self::new()
    }
}
