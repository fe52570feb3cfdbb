use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr, time::Duration};

use crate::constants::{
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_SWEEP_SECS, DEFAULT_RATE_LIMIT_WINDOW_SECS,
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Take the client address from `Forwarded` / `X-Forwarded-For`.
    /// Only safe behind a reverse proxy that overwrites those headers.
    #[serde(default)]
    pub trust_x_forwarded_for: bool,

    #[serde(default)]
    pub redis_url: Option<String>,

    #[serde(default = "default_rate_limit_max_requests")]
    pub rate_limit_max_requests: u32,

    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,

    #[serde(default = "default_rate_limit_sweep_secs")]
    pub rate_limit_sweep_secs: u64,

    #[serde(default = "default_delivery_delay_ms")]
    pub delivery_delay_ms: u64,

    #[serde(default = "default_delivery_timeout_secs")]
    pub delivery_timeout_secs: u64,

    #[serde(default)]
    pub delivery_webhook_url: Option<String>,

    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Contact-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_rate_limit_max_requests() -> u32 {
    DEFAULT_RATE_LIMIT_MAX_REQUESTS
}
fn default_rate_limit_window_secs() -> u64 {
    DEFAULT_RATE_LIMIT_WINDOW_SECS
}
fn default_rate_limit_sweep_secs() -> u64 {
    DEFAULT_RATE_LIMIT_SWEEP_SECS
}
fn default_delivery_delay_ms() -> u64 {
    1000
}
fn default_delivery_timeout_secs() -> u64 {
    10
}
fn default_max_payload_bytes() -> usize {
    16 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: default_worker_count(),
            cors_allowed_origins: default_cors_origins(),
            trust_x_forwarded_for: false,
            redis_url: None,
            rate_limit_max_requests: default_rate_limit_max_requests(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            rate_limit_sweep_secs: default_rate_limit_sweep_secs(),
            delivery_delay_ms: default_delivery_delay_ms(),
            delivery_timeout_secs: default_delivery_timeout_secs(),
            delivery_webhook_url: None,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            // APP_ENV is also picked up by the env source above; replace it
            // with the normalised name so any casing deserializes.
            .set_override("env", env_name.to_string())?;

        let config: Self = builder.build()?.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.rate_limit_max_requests == 0 {
            errors.push("RATE_LIMIT_MAX_REQUESTS must be greater than zero".to_string());
        }
        if self.rate_limit_window_secs == 0 {
            errors.push("RATE_LIMIT_WINDOW_SECS must be greater than zero".to_string());
        }
        if self.rate_limit_sweep_secs == 0 {
            errors.push("RATE_LIMIT_SWEEP_SECS must be greater than zero".to_string());
        }
        if self.delivery_timeout_secs == 0 {
            errors.push("DELIVERY_TIMEOUT_SECS must be greater than zero".to_string());
        }
        if let Some(url) = &self.delivery_webhook_url {
            match reqwest::Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => errors.push("DELIVERY_WEBHOOK_URL must be an http(s) URL".to_string()),
            }
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    pub fn rate_limit_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.rate_limit_sweep_secs)
    }

    pub fn delivery_delay(&self) -> Duration {
        Duration::from_millis(self.delivery_delay_ms)
    }

    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_secs)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for Option<String> {
    fn redact(&self) -> &str {
        match self.as_deref() {
            None => "[NOT SET]",
            Some(s) if s.trim().is_empty() => "[EMPTY]",
            Some(_) => "[REDACTED]",
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("trust_x_forwarded_for", &self.trust_x_forwarded_for)
            .field("redis_url", &self.redis_url.redact())
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .field("rate_limit_sweep_secs", &self.rate_limit_sweep_secs)
            .field("delivery_delay_ms", &self.delivery_delay_ms)
            .field("delivery_timeout_secs", &self.delivery_timeout_secs)
            .field("delivery_webhook_url", &self.delivery_webhook_url.redact())
            .field("max_payload_bytes", &self.max_payload_bytes)
            .finish()
    }
}
