pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::SecurityConfig;

pub use password::{verify_password, PasswordHash};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub full_name: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("JWT generation error: {0}")]
    Signing(String),

    #[error("JWT secret not configured")]
    InvalidSecret,

    #[error("unsupported JWT algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("token lifetime out of range: {0} hours")]
    InvalidLifetime(i64),
}

/// Issues and validates HMAC-signed bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, algorithm: Algorithm, ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }
        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(TokenError::UnsupportedAlgorithm(format!("{:?}", algorithm)));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            ttl,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, TokenError> {
        let algorithm = Algorithm::from_str(&security.jwt_algorithm)
            .map_err(|_| TokenError::UnsupportedAlgorithm(security.jwt_algorithm.clone()))?;
        let ttl = Duration::try_hours(security.jwt_expiry_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or(TokenError::InvalidLifetime(security.jwt_expiry_hours))?;
        Self::new(&security.jwt_secret, algorithm, ttl)
    }

    /// Token lifetime in seconds, as reported to clients.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn issue(&self, username: &str, full_name: Option<&str>) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::InvalidLifetime(self.ttl.num_hours()))?;
        let claims = Claims {
            username: username.to_string(),
            full_name: full_name.map(str::to_string),
            exp: expires.timestamp(),
            iat: now.timestamp(),
        };
        self.sign(&claims)
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Algorithm::HS256, Duration::hours(24)).unwrap()
    }

    #[test]
    fn issued_tokens_validate() {
        let tokens = service();
        let token = tokens.issue("jperez", Some("Juan Pérez")).unwrap();
        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.username, "jperez");
        assert_eq!(claims.full_name.as_deref(), Some("Juan Pérez"));
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn expired_tokens_are_reported_as_expired() {
        let tokens = service();
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&Claims {
                username: "jperez".into(),
                full_name: None,
                exp: now - 3600,
                iat: now - 7200,
            })
            .unwrap();
        assert!(matches!(tokens.validate(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn foreign_signatures_are_invalid() {
        let other = TokenService::new("other-secret", Algorithm::HS256, Duration::hours(1)).unwrap();
        let token = other.issue("admin", None).unwrap();
        assert!(matches!(service().validate(&token), Err(TokenError::Invalid(_))));
        assert!(matches!(service().validate("not-a-jwt"), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn tokens_without_iat_are_accepted() {
        let tokens = service();
        let exp = Utc::now().timestamp() + 600;
        let token = encode(
            &Header::default(),
            &serde_json::json!({"username": "admin", "full_name": "Administrador", "exp": exp}),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.iat, 0);
    }

    #[test]
    fn rejects_empty_secret_and_asymmetric_algorithms() {
        assert!(matches!(
            TokenService::new("", Algorithm::HS256, Duration::hours(1)),
            Err(TokenError::InvalidSecret)
        ));
        assert!(matches!(
            TokenService::new("s", Algorithm::RS256, Duration::hours(1)),
            Err(TokenError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn builds_from_config() {
        let mut security = crate::config::AppConfig::development().security;
        security.jwt_algorithm = "HS512".into();
        security.jwt_expiry_hours = 8760;
        let tokens = TokenService::from_config(&security).unwrap();
        assert_eq!(tokens.ttl_seconds(), 8760 * 3600);

        security.jwt_algorithm = "none".into();
        assert!(TokenService::from_config(&security).is_err());
    }

    #[test]
    fn out_of_range_lifetimes_are_errors() {
        let mut security = crate::config::AppConfig::development().security;
        for hours in [0, -1, i64::MAX] {
            security.jwt_expiry_hours = hours;
            assert!(matches!(
                TokenService::from_config(&security),
                Err(TokenError::InvalidLifetime(_))
            ));
        }

        // Representable as a duration, but past the end of the calendar
        let tokens = TokenService::new("test-secret", Algorithm::HS256, Duration::hours(3_000_000_000)).unwrap();
        assert!(matches!(tokens.issue("admin", None), Err(TokenError::InvalidLifetime(_))));
    }
}
