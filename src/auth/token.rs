//! # Token Issuer/Verifier
//!
//! Stateless HS256 bearer tokens carrying the subject (username), role and expiry.
//! Tokens are never stored and never revoked; they are valid until `exp`.

use super::AuthError;
use crate::model::ADMIN_ROLE;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// JWT claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims for `username` expiring `expires_in` from now.
    ///
    /// Fails with [`AuthError::Signing`] when the expiry is not a representable date.
    ///
    /// ```
    /// use voice_orders::auth::Claims;
    /// use chrono::Duration;
    ///
    /// let claims = Claims::new("alice", "admin", Duration::minutes(60)).unwrap();
    /// assert_eq!(claims.exp - claims.iat, 3600);
    /// ```
    pub fn new(
        username: impl Into<String>,
        role: impl Into<String>,
        expires_in: Duration,
    ) -> Result<Self, AuthError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(expires_in)
            .ok_or_else(|| AuthError::Signing("token expiry out of range".into()))?;
        Ok(Self {
            sub: username.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }
}

/// The login response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(token: String) -> Self {
        Self {
            access_token: token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Signs and verifies tokens with the process-wide secret.
///
/// Built once at startup and shared read-only behind an `Arc`.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Lifetime given to tokens minted by [`TokenIssuer::issue`].
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mints a token for `username` with the configured lifetime.
    pub fn issue(&self, username: &str, role: &str) -> Result<String, AuthError> {
        self.issue_with_ttl(username, role, self.ttl)
    }

    pub fn issue_with_ttl(
        &self,
        username: &str,
        role: &str,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        self.encode(&Claims::new(username, role, ttl)?)
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Checks signature and expiry and returns the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            })
    }

    /// Verifies the token and additionally requires the admin role.
    pub fn authorize_admin(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self.verify(token)?;
        if claims.role != ADMIN_ROLE {
            warn!(sub = %claims.sub, role = %claims.role, "Role may not access admin routes");
            return Err(AuthError::Forbidden);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret", Duration::minutes(60))
    }

    #[test]
    fn issued_token_round_trips() {
        let issuer = issuer();
        let token = issuer.issue("alice", "admin").unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_is_rejected_even_with_valid_signature() {
        let issuer = issuer();
        let token = issuer
            .issue_with_ttl("alice", "admin", Duration::minutes(-5))
            .unwrap();

        assert_eq!(issuer.verify(&token), Err(AuthError::Expired));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let other = TokenIssuer::new(b"another-secret", Duration::minutes(60));
        let token = other.issue("alice", "admin").unwrap();

        assert_eq!(issuer().verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(issuer().verify("not-a-token"), Err(AuthError::Malformed));
        assert_eq!(issuer().verify(""), Err(AuthError::Malformed));
    }

    #[test]
    fn unrepresentable_expiry_is_an_error() {
        let result = issuer().issue_with_ttl("alice", "admin", Duration::days(365 * 1_000_000));
        assert!(matches!(result, Err(AuthError::Signing(_))));
    }

    #[test]
    fn non_admin_role_is_forbidden() {
        let issuer = issuer();
        let token = issuer.issue("carol", "staff").unwrap();

        assert!(issuer.verify(&token).is_ok());
        assert_eq!(issuer.authorize_admin(&token), Err(AuthError::Forbidden));
    }
}
