//! Authentication configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (HS256 token signing)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify tokens
    pub token_secret: String,

    /// Issuer claim stamped into tokens
    #[serde(default = "default_issuer")]
    pub token_issuer: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Get the token lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production the signing secret must be at least 32 bytes.
    /// Development tolerates shorter secrets for local convenience.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.token_secret.is_empty() {
            return Err(ValidationError::MissingRequired("TOKEN_SECRET"));
        }
        if self.token_issuer.is_empty() {
            return Err(ValidationError::MissingRequired("TOKEN_ISSUER"));
        }
        if *environment == Environment::Production && self.token_secret.len() < 32 {
            return Err(ValidationError::WeakTokenSecret);
        }

        // Between one minute and thirty days
        if self.token_ttl_secs < 60 || self.token_ttl_secs > 30 * 24 * 3600 {
            return Err(ValidationError::InvalidTokenTtl);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_issuer: default_issuer(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

fn default_issuer() -> String {
    "pawhaven".to_string()
}

fn default_token_ttl() -> u64 {
    86400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_issuer, "pawhaven");
        assert_eq!(config.token_ttl_secs, 86400);
    }

    #[test]
    fn test_token_ttl_duration() {
        let config = AuthConfig {
            token_ttl_secs: 7200,
            ..Default::default()
        };
        assert_eq!(config.token_ttl(), Duration::from_secs(7200));
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_production_requires_long_secret() {
        let config = AuthConfig {
            token_secret: "short".to_string(),
            ..Default::default()
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_ttl() {
        let config = AuthConfig {
            token_secret: "local-dev-secret".to_string(),
            token_ttl_secs: 5,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = AuthConfig {
            token_secret: "a-secret-long-enough-for-production-use".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }
}
