//! Server configuration from the environment

/// Listen address used when `UIGEN_ADDR` is unset
pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";
/// Log filter used when `UIGEN_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read `UIGEN_ADDR` and `UIGEN_LOG`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: lookup("UIGEN_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.addr),
            log_filter: lookup("UIGEN_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}
