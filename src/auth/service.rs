use crate::db::models::User;
use crate::error::DirectoryError;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, decode, Header, EncodingKey, DecodingKey, Validation, Algorithm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // User ID
    pub admin: bool,
    pub exp: i64,     // Expiration time
    pub iat: i64,     // Issued at
}

/// Signs HS256 session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    jwt_secret: String,
    expiry_hours: i64,
}

impl TokenIssuer {
    pub fn new(jwt_secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            expiry_hours,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, DirectoryError> {
        let now = Utc::now();
        let exp = Duration::try_hours(self.expiry_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(DirectoryError::TokenLifetime(self.expiry_hours))?
            .timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            admin: user.is_admin,
            exp,
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, DirectoryError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(claims.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("jwt_secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}
