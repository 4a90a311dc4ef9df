use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::chat::{DEFAULT_GREETING, Mode, SessionDefaults};
use crate::ui::Theme;

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

    /// Base URL of the reply service
    #[arg(long, env = "REPLY_URL")]
    pub reply_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub reply: ReplyConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplyConfig {
    /// Base URL; requests go to `{base_url}/api/chat`.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub default_mode: Mode,
    pub default_theme: Theme,
    /// First assistant message of a new chat. Empty disables it.
    #[serde(default)]
    pub greeting: Option<String>,
    pub session_timeout_secs: u64,
}

impl UiConfig {
    #[must_use]
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }

    /// Settings for newly created chat sessions.
    #[must_use]
    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            mode: self.default_mode,
            greeting: self
                .greeting
                .as_ref()
                .filter(|text| !text.trim().is_empty())
                .cloned(),
        }
    }
}

impl ServerConfig {
    /// `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration.
    ///
    /// Priority, highest first: CLI flag (or its env alias), `ILMAI_*`
    /// environment variables, config file, defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?
            .set_default("reply.base_url", "http://127.0.0.1:5000")?
            .set_default("ui.default_mode", Mode::default().label())?
            .set_default("ui.default_theme", Theme::default().as_str())?
            .set_default("ui.greeting", DEFAULT_GREETING)?
            .set_default("ui.session_timeout_secs", 30 * 60)?;

        // An explicit file must exist; ./config.* is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. ILMAI_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("ILMAI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.reply_url {
            builder = builder.set_override("reply.base_url", url)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        url::Url::parse(&self.reply.base_url).map_err(|e| {
            config::ConfigError::Message(format!(
                "reply.base_url {:?} is not a valid URL: {e}",
                self.reply.base_url
            ))
        })?;
        Ok(())
    }
}
