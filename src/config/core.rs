use serde::{Deserialize, Serialize};

use crate::table::DEFAULT_TURNOS_PAGE_SIZE;

/// Endpoint URLs for the remote data sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Turnos endpoint (GET, filter query parameters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnos_url: Option<String>,

    /// Generic view endpoint (GET `?view=<name>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views_url: Option<String>,
}

/// Display configuration for charts and tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Entries kept in the top-N especialidad and cobertura series (default: 10)
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Rows per page of the turnos table (default: 50)
    #[serde(default = "default_turnos_page_size")]
    pub turnos_page_size: usize,

    /// Rows per page of generic views (default: 100)
    #[serde(default = "default_view_page_size")]
    pub view_page_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            turnos_page_size: default_turnos_page_size(),
            view_page_size: default_view_page_size(),
        }
    }
}

fn default_top_n() -> usize {
    10
}

fn default_turnos_page_size() -> usize {
    DEFAULT_TURNOS_PAGE_SIZE
}

fn default_view_page_size() -> usize {
    100
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Root of `.turnos.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

impl DashboardConfig {
    pub fn with_turnos_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.endpoints.turnos_url = url;
        }
        self
    }

    pub fn with_views_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.endpoints.views_url = url;
        }
        self
    }

    /// Environment overrides: `TURNOS_API_URL`, `TURNOS_VIEWS_URL`.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn apply_env_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        self.with_turnos_url(non_blank(TURNOS_API_URL_ENV))
            .with_views_url(non_blank(TURNOS_VIEWS_URL_ENV))
    }
}

pub const TURNOS_API_URL_ENV: &str = "TURNOS_API_URL";
pub const TURNOS_VIEWS_URL_ENV: &str = "TURNOS_VIEWS_URL";

/// Contents written by `turnos init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Turnos dashboard configuration

[endpoints]
# turnos_url = "https://script.google.com/macros/s/.../exec"
# views_url = "https://script.google.com/macros/s/.../exec"

[display]
top_n = 10
turnos_page_size = 50
view_page_size = 100

[http]
timeout_secs = 30
"#;
