use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::{JwtClaims, ADMIN_ROLE};

use crate::jwt::sign_claims;

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

pub struct TestConfig {
    pub admin_password: String,
    pub token_secret: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::open()
    }
}

impl TestConfig {
    /// Config with the admin gate disabled.
    pub fn open() -> Self {
        Self {
            admin_password: String::new(),
            token_secret: String::new(),
        }
    }

    /// Config with the admin gate enabled.
    pub fn secured() -> Self {
        Self {
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
            token_secret: "test-secret-key-for-admin-tokens-must-be-long-enough".to_string(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            admin_password: self.admin_password.clone(),
            admin_token_secret: self.token_secret.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }

    pub fn admin_token(&self) -> String {
        JwtTestUtils::create_admin_token(&self.token_secret, 1)
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_token_with_role(secret: &str, role: &str, exp_hours: i64) -> String {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            role: Some(role.to_string()),
            iat: Some(now.timestamp() as u64),
            exp: Some((now + Duration::hours(exp_hours)).timestamp() as u64),
        };

        sign_claims(&claims, secret).expect("test secret must not be empty")
    }

    pub fn create_admin_token(secret: &str, exp_hours: i64) -> String {
        Self::create_token_with_role(secret, ADMIN_ROLE, exp_hours)
    }

    pub fn create_expired_token(secret: &str) -> String {
        Self::create_admin_token(secret, -1)
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::validate_token;

    #[test]
    fn test_config_creation() {
        let open = TestConfig::open().to_app_config();
        assert!(!open.is_admin_auth_enabled());

        let secured = TestConfig::secured().to_app_config();
        assert!(secured.is_admin_auth_enabled());
        assert_eq!(secured.admin_password, TEST_ADMIN_PASSWORD);
        assert_eq!(secured.business_start_hour, 9);
    }

    #[test]
    fn test_jwt_token_creation() {
        let config = TestConfig::secured();
        let token = config.admin_token();

        assert_eq!(token.split('.').count(), 3);
        assert!(validate_token(&token, &config.token_secret).unwrap().is_admin());
    }

    #[test]
    fn test_expired_and_malformed_tokens() {
        let config = TestConfig::secured();

        assert!(validate_token(&JwtTestUtils::create_expired_token(&config.token_secret), &config.token_secret).is_err());
        assert!(validate_token(&JwtTestUtils::create_malformed_token(), &config.token_secret).is_err());
    }
}
