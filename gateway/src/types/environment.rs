//! Environment configuration for different deployment stages

use std::env;

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Local development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an unknown value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Whether to expose the OpenAPI document
    #[must_use]
    pub const fn show_api_docs(self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Base URL of the messaging bridge daemon
    ///
    /// # Panics
    ///
    /// Panics if `WHATSAPP_BRIDGE_URL` is not set in production or staging
    #[must_use]
    pub fn bridge_url(self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("WHATSAPP_BRIDGE_URL")
                .expect("WHATSAPP_BRIDGE_URL environment variable is not set"),
            Self::Development => env::var("WHATSAPP_BRIDGE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        // Test development (default)
        env::remove_var("APP_ENV");
        assert_eq!(Environment::from_env(), Environment::Development);

        // Test explicit development
        env::set_var("APP_ENV", "development");
        assert_eq!(Environment::from_env(), Environment::Development);

        // Test staging
        env::set_var("APP_ENV", "staging");
        assert_eq!(Environment::from_env(), Environment::Staging);

        // Test production
        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    #[should_panic(expected = "Invalid environment: invalid")]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let _ = Environment::from_env();
    }

    #[test]
    #[serial]
    fn test_bridge_url_development_default() {
        env::remove_var("WHATSAPP_BRIDGE_URL");
        assert_eq!(
            Environment::Development.bridge_url(),
            "http://localhost:8081"
        );

        env::set_var("WHATSAPP_BRIDGE_URL", "http://bridge:9000");
        assert_eq!(Environment::Development.bridge_url(), "http://bridge:9000");

        env::remove_var("WHATSAPP_BRIDGE_URL");
    }

    #[test]
    fn test_docs_visibility() {
        assert!(Environment::Development.show_api_docs());
        assert!(Environment::Staging.show_api_docs());
        assert!(!Environment::Production.show_api_docs());
    }
}
