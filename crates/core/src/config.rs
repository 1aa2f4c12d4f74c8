use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    /// How long a success/error notification stays visible
    #[serde(default = "default_dismiss_ms")]
    pub notification_dismiss_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            notification_dismiss_ms: default_dismiss_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3333/users".to_string()
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_request_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("cadastro/{}", env!("CARGO_PKG_VERSION"))
}
fn default_dismiss_ms() -> u64 {
    1000
}
