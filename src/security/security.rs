use base64::prelude::*;
use rand::RngExt;

pub const MIN_PASSKEY_LENGTH: usize = 12;
pub const DEFAULT_PASSKEY_ENTROPY_BYTES: usize = 32;
pub const MAX_PASSKEY_LENGTH: usize = 1024;

pub fn generate_secure_passkey() -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..DEFAULT_PASSKEY_ENTROPY_BYTES).map(|_| rng.random()).collect();
    BASE64_URL_SAFE_NO_PAD.encode(&bytes)
}

/// A passkey is considered strong enough when it is long enough and mixes at least
/// two character classes.
pub fn validate_passkey_strength(passkey: &str) -> bool {
    if passkey.len() < MIN_PASSKEY_LENGTH || passkey.len() > MAX_PASSKEY_LENGTH {
        return false;
    }
    let has_lower = passkey.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = passkey.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = passkey.chars().any(|c| c.is_ascii_digit());
    let has_special = passkey.chars().any(|c| !c.is_alphanumeric());
    let variety_count = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&x| x)
        .count();
    variety_count >= 2
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes().iter()) {
        result |= x ^ y;
    }
    result == 0
}
