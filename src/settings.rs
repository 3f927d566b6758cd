use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr};

use crate::entities::resume::ResumeProfile;

const ENV_VAR: &str = "APP_ENV";
const DATABASE_URL_VAR: &str = "APP_DATABASE_URL";

/// Deployment profile, chosen by `APP_ENV` and used to pick `config/<env>.toml`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[default]
    Development,
    Testing,
    Production,
}

impl AppEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Testing => "testing",
            AppEnvironment::Production => "production",
        }
    }
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        [AppEnvironment::Development, AppEnvironment::Testing, AppEnvironment::Production]
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| ConfigError::Message(format!("Invalid {ENV_VAR} value: {raw}")))
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "num_cpus::get")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    /// Entries may themselves be comma-joined; see [`AppConfig::cors_origins`].
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Static résumé content, the `[resume]` table.
    #[serde(default)]
    pub resume: ResumeProfile,
}

fn default_name() -> String {
    "Portfolio-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl AppConfig {
    /// Layers `config/default`, `config/<env>` and `APP_*` variables, in
    /// that order, then validates the result.
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let env_name = match env::var(ENV_VAR) {
            Ok(raw) => raw.parse::<AppEnvironment>()?,
            Err(_) => AppEnvironment::default(),
        };

        let mut config: Self = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env_name}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true)
            )
            .build()?
            .try_deserialize()?;

        config.env = env_name;

        if config.database_url.trim().is_empty() {
            config.database_url = env::var(DATABASE_URL_VAR)
                .map_err(|_| ConfigError::Message(format!("{DATABASE_URL_VAR} must be set")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reports every problem at once rather than the first one found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.database_url.trim().is_empty(), "DATABASE_URL cannot be empty"),
            (self.worker_count == 0, "WORKER_COUNT must be at least 1"),
            (self.resume.name.trim().is_empty(), "RESUME name cannot be empty"),
            (
                self.is_production() && self.cors_origins().iter().any(|o| o == "*"),
                "Wildcard CORS (*) is not allowed in production",
            ),
        ];

        let problems: Vec<&str> = checks
            .iter()
            .filter(|(failed, _)| *failed)
            .map(|(_, message)| *message)
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(problems.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Flattened, trimmed origin list.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|entry| entry.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "[MISSING]" } else { "[REDACTED]" }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("listen", &format!("{}:{}", self.host, self.port))
            .field("worker_count", &self.worker_count)
            .field("database_url", &redacted(&self.database_url))
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_format", &self.log_format)
            .field("resume_owner", &self.resume.name)
            .finish()
    }
}
