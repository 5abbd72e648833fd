//! Session tokens.
//!
//! Tokens are stateless HS256 JWTs over the user's identity claims, signed
//! with the process-wide secret. There is no refresh mechanism; an expired
//! token requires a fresh login.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// The claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub(crate) email: String,
    pub(crate) name: String,
    #[serde(rename = "totalDonated")]
    pub(crate) total_donated: f64,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

impl Claims {
    /// Claims for a freshly authenticated user, expiring `expiry_secs` from now.
    ///
    /// A client holding an older token keeps seeing its stale claims until it
    /// logs in again; profile updates do not re-issue tokens.
    pub(crate) fn for_user(user: &User, expiry_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            total_donated: user.total_donated,
            iat: now,
            exp: now + expiry_secs,
        }
    }
}

pub(crate) fn issue_token(claims: &Claims, secret: &str) -> jsonwebtoken::errors::Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub(crate) fn decode_token(token: &str, secret: &str) -> jsonwebtoken::errors::Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-test-secret-test-secret";

    fn test_user() -> User {
        User {
            id: None,
            name: "A".to_owned(),
            email: "a@x.com".to_owned(),
            password: "$2b$10$hash".to_owned(),
            total_donated: 20.0,
        }
    }

    #[test]
    fn issued_token_decodes_to_the_same_claims() {
        let claims = Claims::for_user(&test_user(), 3600);
        let token = issue_token(&claims, SECRET).unwrap();

        let decoded = decode_token(&token, SECRET).unwrap();
        assert_eq!(decoded.email, "a@x.com");
        assert_eq!(decoded.name, "A");
        assert_eq!(decoded.total_donated, 20.0);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let claims = Claims::for_user(&test_user(), 3600);
        let token = issue_token(&claims, "some-other-secret").unwrap();

        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the validator's default leeway.
        let claims = Claims::for_user(&test_user(), -3600);
        let token = issue_token(&claims, SECRET).unwrap();

        assert!(decode_token(&token, SECRET).is_err());
    }
}
