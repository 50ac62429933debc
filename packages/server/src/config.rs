use common::config::{EvaluationAppConfig, ResultsAppConfig, RetryAppConfig, SandboxAppConfig};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable holding the path of the config file (without extension).
pub const CONFIG_PATH_ENV: &str = "SKILLCHECK_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/config";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub sandbox: SandboxAppConfig,
    #[serde(default)]
    pub retry: RetryAppConfig,
    #[serde(default)]
    pub evaluation: EvaluationAppConfig,
    #[serde(default)]
    pub results: ResultsAppConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::load_from(&path)
    }

    /// Load from the file at `path` (optional), then environment overrides
    /// such as `SKILLCHECK__SANDBOX__URL`.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.cors.allow_origins", vec!["http://localhost:3000"])?
            .set_default("server.cors.max_age", 3600)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("SKILLCHECK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors.allow_origins")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.retry.validate()?;
        Ok(config)
    }
}
