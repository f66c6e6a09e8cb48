use chrono::Utc;
use rand::Rng;

/// Pairing code expiry window in seconds
pub const CODE_EXPIRES_IN_SECONDS: i64 = 300;

const CODE_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SESSION_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Render a non-negative value in base-36 (lowercase digits)
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Generate an 8-character pairing code: the first 4 characters come from
/// the current epoch-millisecond timestamp in base-36 (uppercased), the
/// remaining 4 are uniformly random over [0-9A-Z]. Loosely time-ordered,
/// not a secret.
pub fn generate_pairing_code() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;

    // base-36 output is ASCII, so byte slicing is safe here
    let time_part = to_base36(millis).to_uppercase();
    let tail = &time_part[time_part.len().saturating_sub(4)..];

    let mut code = format!("{:0>4}", tail);

    let mut rng = rand::rng();
    for _ in 0..4 {
        code.push(CODE_CHARS[rng.random_range(0..CODE_CHARS.len())] as char);
    }

    code
}

/// Format an 8-character code as two groups of 4 joined by a hyphen
pub fn format_pairing_code(code: &str) -> String {
    format!("{}-{}", &code[..4], &code[4..8])
}

/// Build a session identifier: `wa_<epoch-ms>_<6 random base-36 chars>`.
/// Unique per call on a best-effort basis only; nothing is keyed on it.
pub fn generate_session_id() -> String {
    let millis = Utc::now().timestamp_millis();

    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| SESSION_CHARS[rng.random_range(0..SESSION_CHARS.len())] as char)
        .collect();

    format!("wa_{}_{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn base36_renders_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(9), "9");
        assert_eq!(to_base36(10), "a");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(46655), "zzz");
    }

    #[test]
    fn pairing_code_is_eight_alphanumeric_chars() {
        let pattern = Regex::new(r"^[A-Z0-9]{8}$").unwrap();
        for _ in 0..50 {
            let code = generate_pairing_code();
            assert!(pattern.is_match(&code), "unexpected code: {}", code);
        }
    }

    #[test]
    fn formatted_code_splits_four_four() {
        assert_eq!(format_pairing_code("ABCD1234"), "ABCD-1234");
    }

    #[test]
    fn session_ids_carry_prefix_and_suffix() {
        let pattern = Regex::new(r"^wa_\d+_[a-z0-9]{6}$").unwrap();
        let id = generate_session_id();
        assert!(pattern.is_match(&id), "unexpected session id: {}", id);
    }

    #[test]
    fn session_ids_do_not_repeat() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| generate_session_id()).collect();
        assert_eq!(ids.len(), 100);
    }
}
