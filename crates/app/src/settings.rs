//! Handles settings for the application. Configuration is written in
//! `settings.toml`, any key can be overridden from the environment with the
//! `WASHDESK` prefix and `__` as section separator (e.g.
//! `WASHDESK__SERVER__PORT=8080`).
//!
//! See `settings.toml` for the configuration.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use engine::Catalog;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const ENV_PREFIX: &str = "WASHDESK";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
    #[serde(default)]
    pub catalog: Catalog,
}

#[derive(Debug, Parser)]
#[command(name = "washdesk", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        Self::from_file(args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::with_name(path).required(false)))
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}
