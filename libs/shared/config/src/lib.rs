use std::env;
use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub admin_password: String,
    pub admin_token_secret: String,
    pub admin_session_hours: i64,
    pub business_start_hour: u32,
    pub business_end_hour: u32,
    pub slot_interval_minutes: u32,
    pub default_appointment_duration: i32,
    pub meeting_base_url: String,
    pub clinic_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            admin_password: String::new(),
            admin_token_secret: String::new(),
            admin_session_hours: 8,
            business_start_hour: 9,
            business_end_hour: 17,
            slot_interval_minutes: 60,
            default_appointment_duration: 45,
            meeting_base_url: "https://zoom.us/j".to_string(),
            clinic_name: "Telehealth Clinic".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mut config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| defaults.server_host.clone()),
            server_port: parse_or("SERVER_PORT", defaults.server_port),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_PASSWORD not set, admin routes are not protected");
                    String::new()
                }),
            admin_token_secret: env::var("ADMIN_TOKEN_SECRET").unwrap_or_default(),
            admin_session_hours: parse_or("ADMIN_SESSION_HOURS", defaults.admin_session_hours),
            business_start_hour: parse_or("BUSINESS_START_HOUR", defaults.business_start_hour),
            business_end_hour: parse_or("BUSINESS_END_HOUR", defaults.business_end_hour),
            slot_interval_minutes: parse_or("SLOT_INTERVAL_MINUTES", defaults.slot_interval_minutes),
            default_appointment_duration: parse_or(
                "DEFAULT_APPOINTMENT_DURATION",
                defaults.default_appointment_duration,
            ),
            meeting_base_url: env::var("MEETING_BASE_URL")
                .unwrap_or_else(|_| defaults.meeting_base_url.clone()),
            clinic_name: env::var("CLINIC_NAME")
                .unwrap_or_else(|_| defaults.clinic_name.clone()),
        };

        if config.is_admin_auth_enabled() && config.admin_token_secret.is_empty() {
            info!("ADMIN_TOKEN_SECRET not set, generating a per-process signing secret");
            config.admin_token_secret = generate_secret();
        }

        if !config.has_valid_business_hours() {
            warn!(
                "Business hours {}..{} are invalid, falling back to {}..{}",
                config.business_start_hour,
                config.business_end_hour,
                defaults.business_start_hour,
                defaults.business_end_hour
            );
            config.business_start_hour = defaults.business_start_hour;
            config.business_end_hour = defaults.business_end_hour;
        }

        config
    }

    /// Admin routes are only gated once a password has been configured.
    pub fn is_admin_auth_enabled(&self) -> bool {
        !self.admin_password.is_empty()
    }

    pub fn has_valid_business_hours(&self) -> bool {
        self.business_start_hour < self.business_end_hour && self.business_end_hour <= 24
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_business_hours() {
        let config = AppConfig::default();

        assert_eq!(config.business_start_hour, 9);
        assert_eq!(config.business_end_hour, 17);
        assert_eq!(config.default_appointment_duration, 45);
        assert!(config.has_valid_business_hours());
        assert!(!config.is_admin_auth_enabled());
    }

    #[test]
    fn test_generated_secret_is_not_empty() {
        let a = generate_secret();
        let b = generate_secret();
        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
    }

    #[test]
    fn test_inverted_business_hours_are_invalid() {
        let config = AppConfig {
            business_start_hour: 17,
            business_end_hour: 9,
            ..AppConfig::default()
        };
        assert!(!config.has_valid_business_hours());
        assert_eq!(AppConfig::default().bind_address(), "0.0.0.0:3000");
    }
}
