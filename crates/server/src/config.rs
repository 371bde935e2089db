use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Session lifetime when `SESSION_TTL_MINUTES` is unset or invalid.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 480;

/// Parse the contents of `config.toml`. Unparseable input yields the
/// all-off default.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, defaulting all flags off");
        AppConfig::default()
    })
}

/// Load `.env`, then read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// If the file is missing or unparseable, all flags default to `false` and
/// the account directory is empty.
pub fn load_config() {
    let _ = dotenvy::dotenv();
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(
                features = ?config.features,
                accounts = config.accounts.len(),
                "configuration loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, defaulting all flags off");
            AppConfig::default()
        }
    });
}

/// Install an already-built configuration. Used by tests and embedders that
/// do not read `config.toml`. Returns `false` if a configuration was already
/// installed.
pub fn install_config(config: AppConfig) -> bool {
    CONFIG.set(config).is_ok()
}

/// The loaded configuration, or the empty default if nothing was loaded.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

/// Session lifetime in minutes, from `SESSION_TTL_MINUTES`.
pub fn session_ttl_minutes() -> i64 {
    parse_ttl(std::env::var("SESSION_TTL_MINUTES").ok().as_deref())
}

fn parse_ttl(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|m| *m > 0)
        .unwrap_or(DEFAULT_SESSION_TTL_MINUTES)
}

/// Whether cookies carry the `Secure` attribute, from `COOKIE_SECURE`.
pub fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}
