//! Salted PBKDF2-HMAC-SHA256 password hashing.
//!
//! Hashes and salts are stored as lowercase hex strings in `usuarios`
//! (`password_hash`, `sal`). The PBKDF2 salt input is the UTF-8 text of the
//! hex salt, which is how existing rows were written.

use once_cell::sync::Lazy;
use rand::RngCore;

/// Salt byte length before hex encoding (16 bytes = 32 hex chars).
const SALT_BYTES: usize = 16;

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derived key length (SHA-256 output size).
const KEY_BYTES: usize = 32;

/// Hash computed for unknown usernames so failed logins cost the same.
static DUMMY_HASH: Lazy<PasswordHash> = Lazy::new(|| PasswordHash::with_salt("", &generate_salt()));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    pub salt: String,
    pub hash: String,
}

impl PasswordHash {
    /// Hash a password with a fresh random salt.
    pub fn new(password: &str) -> Self {
        Self::with_salt(password, &generate_salt())
    }

    /// Hash a password with the given hex salt.
    pub fn with_salt(password: &str, salt: &str) -> Self {
        let mut key = [0u8; KEY_BYTES];
        pbkdf2::pbkdf2_hmac::<sha2::Sha256>(
            password.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ITERATIONS,
            &mut key,
        );
        Self {
            salt: salt.to_string(),
            hash: hex::encode(key),
        }
    }
}

/// Recompute the hash of `provided` with the stored salt and compare.
pub fn verify_password(salt: &str, stored_hash: &str, provided: &str) -> bool {
    if salt.is_empty() || stored_hash.is_empty() {
        return false;
    }
    let attempt = PasswordHash::with_salt(provided, salt);
    constant_time_eq(
        attempt.hash.as_bytes(),
        stored_hash.to_ascii_lowercase().as_bytes(),
    )
}

/// Burn the same PBKDF2 work as a real verification.
pub fn verify_against_dummy(provided: &str) {
    let _ = verify_password(&DUMMY_HASH.salt, &DUMMY_HASH.hash, provided);
}

fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic_for_a_salt() {
        let a = PasswordHash::with_salt("secreto123", "00112233445566778899aabbccddeeff");
        let b = PasswordHash::with_salt("secreto123", "00112233445566778899aabbccddeeff");
        assert_eq!(a, b);
        assert_eq!(a.hash.len(), 64);
    }

    #[test]
    fn fresh_salts_are_random_hex() {
        let a = PasswordHash::new("secreto123");
        let b = PasswordHash::new("secreto123");
        assert_eq!(a.salt.len(), 32);
        assert!(a.salt.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn verifies_correct_password_only() {
        let stored = PasswordHash::new("correct horse");
        assert!(verify_password(&stored.salt, &stored.hash, "correct horse"));
        assert!(!verify_password(&stored.salt, &stored.hash, "wrong horse"));
        assert!(!verify_password("", &stored.hash, "correct horse"));
        assert!(!verify_password(&stored.salt, "", "correct horse"));
    }

    #[test]
    fn salt_is_used_as_hex_text() {
        // PBKDF2 over the ASCII of the salt string, not its decoded bytes
        let salt = "0f0e0d0c0b0a09080706050403020100";
        let mut expected = [0u8; KEY_BYTES];
        pbkdf2::pbkdf2_hmac::<sha2::Sha256>(b"clave", salt.as_bytes(), PBKDF2_ITERATIONS, &mut expected);
        assert_eq!(PasswordHash::with_salt("clave", salt).hash, hex::encode(expected));
    }

    #[test]
    fn constant_time_eq_handles_lengths() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }
}
