//! Login Page Configuration
//!
//! Timing and navigation settings for the login form. Every field has a
//! default, so a partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::errors::ConfigError;

/// Shortest simulated login delay accepted by [`LoginConfig::validate`]
pub const MIN_LOGIN_DELAY_MS: u64 = 1000;
/// Longest simulated login delay accepted by [`LoginConfig::validate`]
pub const MAX_LOGIN_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Lower bound of the simulated login delay
    pub login_delay_min_ms: u64,

    /// Upper bound of the simulated login delay
    pub login_delay_max_ms: u64,

    /// Pause between showing the success message and navigating away
    pub redirect_delay_ms: u64,

    /// Navigation target after a successful login
    pub redirect_href: String,

    /// How long the form keeps the `shake` class
    pub shake_duration_ms: u64,

    /// Delay before the success message fades in
    pub success_reveal_delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_delay_min_ms: 2000,
            login_delay_max_ms: 3000,
            redirect_delay_ms: 1500,
            redirect_href: "education.html".to_string(),
            shake_duration_ms: 500,
            success_reveal_delay_ms: 100,
        }
    }
}

impl LoginConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LoginConfig = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Collect every problem with the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.login_delay_min_ms < MIN_LOGIN_DELAY_MS {
            errors.push(format!(
                "login_delay_min_ms must be at least {}",
                MIN_LOGIN_DELAY_MS
            ));
        }

        if self.login_delay_max_ms > MAX_LOGIN_DELAY_MS {
            errors.push(format!(
                "login_delay_max_ms must be at most {}",
                MAX_LOGIN_DELAY_MS
            ));
        }

        if self.login_delay_min_ms > self.login_delay_max_ms {
            errors.push("login_delay_min_ms must not exceed login_delay_max_ms".to_string());
        }

        if self.redirect_href.trim().is_empty() {
            errors.push("redirect_href must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Map a uniform sample from `[0, 1)` onto the login delay range.
    pub fn login_delay(&self, unit: f64) -> Duration {
        let unit = unit.clamp(0.0, 1.0);
        let span = self
            .login_delay_max_ms
            .saturating_sub(self.login_delay_min_ms) as f64;
        let ms = self.login_delay_min_ms + (span * unit).round() as u64;
        Duration::from_millis(ms.min(self.login_delay_max_ms))
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_duration_ms)
    }

    pub fn success_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.success_reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LoginConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_config_reports_every_problem() {
        let config = LoginConfig {
            login_delay_min_ms: 500,
            login_delay_max_ms: 400,
            redirect_href: "  ".to_string(),
            ..LoginConfig::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LoginConfig::from_json(r#"{ "redirect_href": "home.html" }"#).unwrap();
        assert_eq!(config.redirect_href, "home.html");
        assert_eq!(config.login_delay_min_ms, 2000);
        assert_eq!(config.shake_duration_ms, 500);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_delay() {
        let err = LoginConfig::from_json(r#"{ "login_delay_max_ms": 9000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref problems) if problems.len() == 1));

        let err = LoginConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_login_delay_stays_in_range() {
        let config = LoginConfig::default();
        assert_eq!(config.login_delay(0.0), Duration::from_millis(2000));
        assert_eq!(config.login_delay(0.5), Duration::from_millis(2500));
        assert_eq!(config.login_delay(0.9999), Duration::from_millis(3000));
        assert_eq!(config.login_delay(7.0), Duration::from_millis(3000));
        assert_eq!(config.login_delay(-1.0), Duration::from_millis(2000));
    }
}
