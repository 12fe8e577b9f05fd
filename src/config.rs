use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8081/api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    pub connection_timeout_ms: u32,
    pub dashboard_config: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            enable_logging: true,
            connection_timeout_ms: 5000,
            dashboard_config: DashboardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub student_recent_limit: usize,
    pub admin_recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            student_recent_limit: 5,
            admin_recent_limit: 10,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .trim_end_matches('/')
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            connection_timeout_ms: option_env!("CONNECTION_TIMEOUT_MS")
                .unwrap_or("5000").parse().unwrap_or(5000),
            dashboard_config: DashboardConfig {
                student_recent_limit: option_env!("STUDENT_RECENT_LIMIT")
                    .unwrap_or("5").parse().unwrap_or(5),
                admin_recent_limit: option_env!("ADMIN_RECENT_LIMIT")
                    .unwrap_or("10").parse().unwrap_or(10),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Port the backend is expected on, used in "cannot connect" messages
    pub fn backend_port(&self) -> u16 {
        port_from_url(&self.backend_url)
    }
}

/// Extracts the port of an absolute URL, falling back to the scheme default.
pub fn port_from_url(url: &str) -> u16 {
    let (scheme, rest) = url.split_once("://").unwrap_or(("http", url));
    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host = authority.rsplit('@').next().unwrap_or(authority);

    let explicit = match host.rsplit_once(':') {
        // "[::1]" has colons but no port
        Some((_, port)) if !port.contains(']') => port.parse::<u16>().ok(),
        _ => None,
    };

    explicit.unwrap_or(if scheme.eq_ignore_ascii_case("https") { 443 } else { 80 })
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
