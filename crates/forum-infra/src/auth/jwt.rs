//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use forum_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";
const DEFAULT_EXPIRATION_HOURS: i64 = 24;
/// Upper bound on token lifetime: one year.
const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: DEFAULT_EXPIRATION_HOURS,
            issuer: "forum-api".to_string(),
        }
    }
}

impl JwtConfig {
    /// Load from `JWT_SECRET`, `JWT_EXPIRATION_HOURS` and `JWT_ISSUER`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        if secret == DEFAULT_SECRET {
            let is_production = std::env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        Self {
            secret,
            expiration_hours: parse_expiration_hours(
                std::env::var("JWT_EXPIRATION_HOURS").ok().as_deref(),
            ),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        }
    }
}

/// Parse `JWT_EXPIRATION_HOURS`, falling back to the default when it is
/// missing, malformed or outside `1..=MAX_EXPIRATION_HOURS`.
fn parse_expiration_hours(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_EXPIRATION_HOURS;
    };

    match raw.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_EXPIRATION_HOURS).contains(&hours) => hours,
        _ => {
            tracing::warn!(
                value = raw,
                max = MAX_EXPIRATION_HOURS,
                default = DEFAULT_EXPIRATION_HOURS,
                "Ignoring out-of-range JWT_EXPIRATION_HOURS"
            );
            DEFAULT_EXPIRATION_HOURS
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32, // user id
    username: String,
    exp: i64,
    iat: i64,
    iss: String,
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    /// Token lifetime is clamped to `1..=MAX_EXPIRATION_HOURS`.
    pub fn new(mut config: JwtConfig) -> Self {
        config.expiration_hours = config.expiration_hours.clamp(1, MAX_EXPIRATION_HOURS);
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let lifetime = TimeDelta::try_hours(self.config.expiration_hours)
            .ok_or_else(|| AuthError::InvalidToken("token lifetime out of range".to_string()))?;
        let exp = now + lifetime;

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(TokenClaims {
            user_id: token_data.claims.sub,
            username: token_data.claims.username,
            exp: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours.saturating_mul(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_validate_token_roundtrip() {
        let service = JwtTokenService::new(test_config());

        let token = service.generate_token(42, "alice").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_wrong_issuer_token() {
        let service1 = JwtTokenService::new(JwtConfig {
            issuer: "issuer1".to_string(),
            ..test_config()
        });
        let service2 = JwtTokenService::new(JwtConfig {
            issuer: "issuer2".to_string(),
            ..test_config()
        });

        let token = service1.generate_token(1, "alice").unwrap();

        assert!(service2.validate_token(&token).is_err());
    }

    #[test]
    fn test_expiration_seconds() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: 24,
            ..test_config()
        });

        assert_eq!(service.expiration_seconds(), 86400);
    }

    #[test]
    fn test_out_of_range_lifetime_is_clamped() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: i64::MAX,
            ..test_config()
        });

        assert_eq!(service.expiration_seconds(), MAX_EXPIRATION_HOURS * 3600);
        let token = service.generate_token(7, "alice").unwrap();
        assert_eq!(service.validate_token(&token).unwrap().user_id, 7);

        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: -5,
            ..test_config()
        });
        assert_eq!(service.expiration_seconds(), 3600);
    }

    #[test]
    fn test_parse_expiration_hours() {
        assert_eq!(parse_expiration_hours(None), DEFAULT_EXPIRATION_HOURS);
        assert_eq!(parse_expiration_hours(Some("48")), 48);
        assert_eq!(parse_expiration_hours(Some("0")), DEFAULT_EXPIRATION_HOURS);
        assert_eq!(parse_expiration_hours(Some("-1")), DEFAULT_EXPIRATION_HOURS);
        assert_eq!(
            parse_expiration_hours(Some("9223372036854775807")),
            DEFAULT_EXPIRATION_HOURS
        );
        assert_eq!(parse_expiration_hours(Some("soon")), DEFAULT_EXPIRATION_HOURS);
    }
}
