use std::path::PathBuf;

const ENV_INVENTORY_PATH: &str = "ASSET_VERIFY_INVENTORY_PATH";
const ENV_INVENTORY_URL: &str = "ASSET_VERIFY_INVENTORY_URL";
const ENV_SUBMISSION_URL: &str = "ASSET_VERIFY_SUBMISSION_URL";
const ENV_HTTP_TIMEOUT_MS: &str = "ASSET_VERIFY_HTTP_TIMEOUT_MS";
const ENV_PROFILE: &str = "ASSET_VERIFY_PROFILE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeProfile {
    #[default]
    Development,
    Production,
}

impl RuntimeProfile {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerifyAdapterConfig {
    pub inventory_path: Option<PathBuf>,
    pub inventory_url: Option<String>,
    pub submission_url: Option<String>,
    pub http_timeout_ms: u64,
    pub runtime_profile: RuntimeProfile,
}

impl Default for VerifyAdapterConfig {
    fn default() -> Self {
        Self {
            inventory_path: None,
            inventory_url: None,
            submission_url: None,
            http_timeout_ms: 15_000,
            runtime_profile: RuntimeProfile::Development,
        }
    }
}

impl VerifyAdapterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset and
    /// unparseable ones keep the default. A zero timeout is unparseable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            inventory_path: get(ENV_INVENTORY_PATH).map(PathBuf::from),
            inventory_url: get(ENV_INVENTORY_URL),
            submission_url: get(ENV_SUBMISSION_URL),
            http_timeout_ms: get(ENV_HTTP_TIMEOUT_MS)
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.http_timeout_ms),
            runtime_profile: get(ENV_PROFILE)
                .and_then(|v| RuntimeProfile::parse(&v))
                .unwrap_or(defaults.runtime_profile),
        }
    }

    pub fn strict_runtime_required(&self) -> bool {
        self.runtime_profile == RuntimeProfile::Production
    }

    pub fn http_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.http_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = VerifyAdapterConfig::from_lookup(lookup(&[]));
        assert!(cfg.inventory_path.is_none());
        assert!(cfg.submission_url.is_none());
        assert_eq!(cfg.http_timeout_ms, 15_000);
        assert_eq!(cfg.runtime_profile, RuntimeProfile::Development);
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let cfg = VerifyAdapterConfig::from_lookup(lookup(&[
            (ENV_INVENTORY_URL, " https://inventory.local/assets "),
            (ENV_SUBMISSION_URL, "https://inventory.local/verify"),
            (ENV_HTTP_TIMEOUT_MS, "2500"),
            (ENV_PROFILE, "Production"),
        ]));
        assert_eq!(
            cfg.inventory_url.as_deref(),
            Some("https://inventory.local/assets")
        );
        assert_eq!(cfg.http_timeout_ms, 2_500);
        assert!(cfg.strict_runtime_required());
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let cfg = VerifyAdapterConfig::from_lookup(lookup(&[
            (ENV_HTTP_TIMEOUT_MS, "soon"),
            (ENV_PROFILE, "staging"),
            (ENV_INVENTORY_PATH, "   "),
        ]));
        assert_eq!(cfg.http_timeout_ms, 15_000);
        assert_eq!(cfg.runtime_profile, RuntimeProfile::Development);
        assert!(cfg.inventory_path.is_none());
    }

    #[test]
    fn zero_timeout_keeps_default() {
        let cfg = VerifyAdapterConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_MS, "0")]));
        assert_eq!(cfg.http_timeout_ms, 15_000);
        assert!(!cfg.http_timeout().is_zero());
    }
}
