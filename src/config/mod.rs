use secrecy::SecretString;
use serde::Deserialize;
use strum::{Display, EnumString};

/// Controls how much error detail is exposed to callers.
#[derive(Debug, Clone, Copy, Default, Deserialize, Display, EnumString, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    /// Traces and underlying error details are only sent outside production.
    pub fn exposes_error_detail(self) -> bool {
        self != RuntimeMode::Production
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Interface the listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// OpenAI API key
    pub open_ai_api_key: SecretString,

    /// OpenAI API base URL, without the trailing `/chat/completions`
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Vision-capable chat model used for analysis
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    #[serde(default)]
    pub app_env: RuntimeMode,

    /// Maximum accepted request body, in bytes.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,

    /// Prometheus exporter address (e.g., "0.0.0.0:9001"). Disabled when unset.
    #[serde(default)]
    pub metrics_addr: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_body_limit_bytes() -> usize {
    50 * 1024 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
