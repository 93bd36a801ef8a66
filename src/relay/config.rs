//! Relay settings read from the process environment.

pub const DEFAULT_TO_EMAIL: &str = "baxtiyaralizada1@gmail.com";
pub const DEFAULT_FROM_EMAIL: &str = "Portfolio <onboarding@resend.dev>";
pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Mail API credential. Absent means the relay answers every valid
    /// message with a configuration error.
    pub api_key: Option<String>,
    pub to_email: String,
    pub from_email: String,
    pub api_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            to_email: DEFAULT_TO_EMAIL.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl RelayConfig {
    /// Build the relay config from environment variables.
    ///
    /// Optional:
    /// - `RESEND_API_KEY`: mail API credential
    /// - `CONTACT_TO_EMAIL`: destination address
    /// - `CONTACT_FROM_EMAIL`: sender shown on delivered mail
    /// - `RESEND_API_URL`: mail API endpoint
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            api_key: var("RESEND_API_KEY"),
            to_email: var("CONTACT_TO_EMAIL").unwrap_or_else(|| DEFAULT_TO_EMAIL.to_string()),
            from_email: var("CONTACT_FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            api_url: var("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RelayConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RelayConfig::default());
        assert!(config.api_key.is_none());
        assert_eq!(config.to_email, DEFAULT_TO_EMAIL);
    }

    #[test]
    fn test_overrides() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_123"),
            ("CONTACT_TO_EMAIL", "me@example.com"),
            ("RESEND_API_URL", "http://localhost:9000/emails/"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("re_123"));
        assert_eq!(config.to_email, "me@example.com");
        assert_eq!(config.from_email, DEFAULT_FROM_EMAIL);
        assert_eq!(config.api_url, "http://localhost:9000/emails");
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "   "),
            ("CONTACT_TO_EMAIL", ""),
        ]));
        assert!(config.api_key.is_none());
        assert_eq!(config.to_email, DEFAULT_TO_EMAIL);
    }
}
