//! Handles settings for the application.
//!
//! Values are read, in increasing priority, from built-in defaults, an optional
//! `settings.toml`, `SPENDCAST_*` environment variables and finally `PORT`.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "spendcast", version)]
struct Args {
    /// Optional settings file path (TOML, extension optional).
    #[arg(long)]
    config: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        Self::from_sources(
            args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
            std::env::var("PORT").ok(),
        )
    }

    fn from_sources(path: &str, port: Option<String>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("SPENDCAST").separator("__"))
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }
}
