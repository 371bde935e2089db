use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces over OTLP.
    #[serde(default)]
    pub telemetry: bool,
}

/// An account the server is willing to open a session for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountEntry {
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

impl AppConfig {
    /// Look up a directory entry by exact username.
    pub fn account(&self, username: &str) -> Option<&AccountEntry> {
        self.accounts.iter().find(|a| a.username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_disables_everything() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn accounts_parse_with_default_role() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true

            [[accounts]]
            username = "admin1"
            role = "admin"

            [[accounts]]
            username = "al"
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.account("admin1").unwrap().role, "admin");
        assert_eq!(config.account("al").unwrap().role, "user");
    }

    #[test]
    fn account_lookup_is_exact() {
        let config = AppConfig {
            features: FeatureFlags::default(),
            accounts: vec![AccountEntry {
                username: "al".into(),
                role: "user".into(),
            }],
        };
        assert!(config.account("AL").is_none());
        assert!(config.account("al ").is_none());
        assert!(config.account("al").is_some());
    }

    #[test]
    fn flags_deserialize_from_empty_json() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(!flags.telemetry);
    }
}
