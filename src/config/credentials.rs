//! Credential resolution from configuration.
//!
//! The Gemini API key comes from `service.api_key` first, then from the
//! environment variables in [`API_KEY_ENV_VARS`], in order.

use super::types::ServiceConfig;

/// Environment variables consulted when the config carries no key.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ServiceConfig {
    /// Resolve the API key from config, then the process environment.
    ///
    /// Called on demand and not cached.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment access.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref key) = self.api_key {
            if !key.trim().is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }

        for name in API_KEY_ENV_VARS {
            if let Some(value) = lookup(name) {
                if !value.trim().is_empty() {
                    return CredentialStatus::Configured(SecureString::new(value));
                }
            }
        }

        CredentialStatus::Unconfigured {
            reason: format!(
                "service.api_key is not set and none of {} is present",
                API_KEY_ENV_VARS.join(", ")
            ),
        }
    }

    /// Check if a usable key is available.
    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn config_key_wins_over_environment() {
        let service = ServiceConfig {
            api_key: Some("from-config".to_string()),
            ..ServiceConfig::default()
        };
        let status = service.resolve_credential_with(|_| Some("from-env".to_string()));
        assert_eq!(
            status,
            CredentialStatus::Configured(SecureString::new("from-config".to_string()))
        );
    }

    #[test]
    fn gemini_env_var_is_preferred() {
        let service = ServiceConfig::default();
        let status = service.resolve_credential_with(|name| match name {
            "GEMINI_API_KEY" => Some("gemini".to_string()),
            "API_KEY" => Some("generic".to_string()),
            _ => None,
        });
        assert_eq!(
            status,
            CredentialStatus::Configured(SecureString::new("gemini".to_string()))
        );
    }

    #[test]
    fn falls_back_to_generic_env_var() {
        let service = ServiceConfig::default();
        let status = service.resolve_credential_with(|name| {
            (name == "API_KEY").then(|| "generic".to_string())
        });
        assert_eq!(
            status,
            CredentialStatus::Configured(SecureString::new("generic".to_string()))
        );
    }

    #[test]
    fn blank_values_are_unconfigured() {
        let service = ServiceConfig {
            api_key: Some("   ".to_string()),
            ..ServiceConfig::default()
        };
        let status = service.resolve_credential_with(|_| Some(String::new()));
        assert!(matches!(status, CredentialStatus::Unconfigured { .. }));
    }
}
