use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite-latest";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process-wide settings, read from the environment once on first use.
pub static CONFIG: Lazy<RuntimeConfig> = Lazy::new(RuntimeConfig::from_env);

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub assistant_timeout: Duration,
    pub handshake_delay: Duration,
    pub tick_interval: Duration,
    pub data_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            assistant_timeout: Duration::from_secs(30),
            handshake_delay: Duration::from_millis(2000),
            tick_interval: Duration::from_millis(1000),
            data_dir: None,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("MUNDO_GEMINI_MODEL").unwrap_or(defaults.model),
            api_base: non_empty("MUNDO_GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            assistant_timeout: non_empty("MUNDO_ASSISTANT_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.assistant_timeout),
            handshake_delay: non_empty("MUNDO_HANDSHAKE_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.handshake_delay),
            tick_interval: non_empty("MUNDO_TICK_INTERVAL_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_interval),
            data_dir: non_empty("MUNDO_DATA_DIR").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let cfg = config_from(&[]);
        assert_eq!(cfg, RuntimeConfig::default());
        assert_eq!(cfg.model, "gemini-2.5-flash-lite-latest");
    }

    #[test]
    fn test_api_key_fallback() {
        assert_eq!(
            config_from(&[("API_KEY", "legacy")]).api_key.as_deref(),
            Some("legacy")
        );
        assert_eq!(
            config_from(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "primary")])
                .api_key
                .as_deref(),
            Some("primary")
        );
        assert_eq!(config_from(&[("GEMINI_API_KEY", "  ")]).api_key, None);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let cfg = config_from(&[
            ("MUNDO_GEMINI_API_BASE", "http://localhost:9000/v1/"),
            ("MUNDO_HANDSHAKE_DELAY_MS", "10"),
            ("MUNDO_TICK_INTERVAL_MS", "0"),
            ("MUNDO_ASSISTANT_TIMEOUT_SECS", "soon"),
        ]);
        assert_eq!(cfg.api_base, "http://localhost:9000/v1");
        assert_eq!(cfg.handshake_delay, Duration::from_millis(10));
        assert_eq!(cfg.tick_interval, Duration::from_millis(1000));
        assert_eq!(cfg.assistant_timeout, Duration::from_secs(30));
    }
}
