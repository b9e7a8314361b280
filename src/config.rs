use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;
use crate::ui::LayoutTokens;

/// Prefix for environment overrides, e.g. `SHELLS_SERVER__PORT=8000`.
pub const ENV_PREFIX: &str = "SHELLS";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub layout: LayoutTokens,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Brand shown in the header and page titles.
    pub title: String,
    pub footer_text: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag / CLI env var > `SHELLS_` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = LayoutTokens::default();
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.static_dir", "static")?
            .set_default("site.title", "Prometheus")?
            .set_default("site.footer_text", "Powered by Axum")?
            .set_default("layout.breakpoint", defaults.breakpoint.prefix())?
            .set_default("layout.sidebar_width", defaults.sidebar_width)?
            .set_default("layout.max_content_width", defaults.max_content_width)?
            .set_default("layout.outer_padding", defaults.outer_padding)?;

        // An explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.layout.validate()?;
        Ok(cfg)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
