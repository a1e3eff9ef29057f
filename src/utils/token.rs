use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand_core::{OsRng, RngCore};

use crate::types::error::AppError;
use crate::types::token::Claims;

pub const VERIFICATION_TOKEN_TTL_HOURS: i64 = 24;
pub const SESSION_TTL_DAYS: i64 = 7;

/// Opaque single-use token for email verification links.
pub fn new_verification_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

pub fn verification_expiry() -> DateTime<Utc> {
    Utc::now() + Duration::hours(VERIFICATION_TOKEN_TTL_HOURS)
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Issue a 7-day HS256 session token.
pub fn issue_jwt(user_id: i32, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: (now + Duration::days(SESSION_TTL_DAYS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
}

/// Expired or otherwise malformed tokens all come back as Unauthorized.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_tokens_are_unique_and_url_safe() {
        let a = new_verification_token();
        let b = new_verification_token();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn password_hash_roundtrip() {
        let hash = hash_password("Secr3t!pw").unwrap();
        assert!(verify_password("Secr3t!pw", &hash).unwrap());
        assert!(!verify_password("wrong!pw1", &hash).unwrap());
    }

    #[test]
    fn jwt_roundtrip() {
        let token = issue_jwt(42, "unit-test-secret").unwrap();
        let claims = decode_jwt(&token, "unit-test-secret").unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let token = issue_jwt(7, "secret-a").unwrap();
        assert!(decode_jwt(&token, "secret-b").is_err());
    }
}
