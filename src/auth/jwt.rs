//! JWT token issuance and verification
//!
//! Tokens are HS256-signed bearer strings carrying the user id as subject
//! plus issued-at and absolute expiry instants. Verification is stateless:
//! there is no session store and no revocation, expiry is the only
//! invalidation mechanism.

use crate::{
    config::AppConfig,
    error::{AppError, AuthError},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_exp_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        Ok(Self {
            encoding_key,
            decoding_key,
            access_token_exp_secs: config.security.access_token_exp_secs,
        })
    }

    /// Issue a token for a user with the configured TTL
    pub fn issue(&self, user_id: &Uuid) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now(), Duration::seconds(self.access_token_exp_secs as i64))
    }

    /// Issue a token with an explicit clock and TTL
    ///
    /// The token is valid for instants `t` with `now <= t < now + ttl`.
    pub fn issue_at(
        &self,
        user_id: &Uuid,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Verify a token against the current clock
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit clock and return the subject
    ///
    /// Signature is checked first; `sub` and `exp` must be present. Expiry
    /// is judged strictly against the supplied instant with no leeway, so
    /// a token is rejected from the moment `now >= exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock, not decode-time
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Malformed,
            })?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::Expired);
        }

        Uuid::parse_str(&token_data.claims.sub).map_err(|_| AuthError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig};
    use secrecy::Secret;

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                addr: "127.0.0.1:8000".to_string(),
            },
            database: DatabaseConfig {
                url: Secret::new("postgresql://localhost/test".to_string()),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
                access_token_exp_secs: 900,
            },
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = JwtService::from_config(&test_config()).unwrap();
        let user_id = Uuid::new_v4();

        let token = service.issue(&user_id).unwrap();
        let subject = service.verify(&token).unwrap();

        assert_eq!(subject, user_id);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = JwtService::from_config(&test_config()).unwrap();
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        let token = service.issue_at(&user_id, now, Duration::seconds(1)).unwrap();

        // Still valid one instant before expiry
        assert_eq!(service.verify_at(&token, now).unwrap(), user_id);

        // Expired exactly at now + ttl and after
        let err = service.verify_at(&token, now + Duration::seconds(1)).unwrap_err();
        assert_eq!(err, AuthError::Expired);
        let err = service.verify_at(&token, now + Duration::seconds(2)).unwrap_err();
        assert_eq!(err, AuthError::Expired);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = JwtService::from_config(&test_config()).unwrap();

        assert_eq!(service.verify("not-a-token").unwrap_err(), AuthError::Malformed);
        assert_eq!(service.verify("").unwrap_err(), AuthError::Malformed);
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let mut config = test_config();
        config.security.jwt_secret = Secret::new("short".to_string());

        assert!(JwtService::from_config(&config).is_err());
    }
}
