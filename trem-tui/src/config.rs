use std::{env, path::PathBuf};

pub const DEFAULT_PREFS_FILE: &str = "trem-prefs.json";
pub const DEFAULT_LOG_FILE: &str = "trem-debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub prefs_path: PathBuf,
    pub log_path: PathBuf,
    pub config_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            prefs_path: path("TREM_PREFS", DEFAULT_PREFS_FILE),
            log_path: path("TREM_LOG", DEFAULT_LOG_FILE),
            config_dir: path("TREM_CONFIG_DIR", "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.prefs_path, PathBuf::from(DEFAULT_PREFS_FILE));
        assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.config_dir, PathBuf::from("."));
    }

    #[test]
    fn environment_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TREM_PREFS", "/etc/trem/prefs.json"),
            ("TREM_CONFIG_DIR", "/var/lib/trem"),
            ("TREM_LOG", "  "),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.prefs_path, PathBuf::from("/etc/trem/prefs.json"));
        assert_eq!(config.config_dir, PathBuf::from("/var/lib/trem"));
        assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_FILE));
    }
}
