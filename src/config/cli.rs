use crate::config::toml_config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH};
use crate::core::Locale;
use crate::utils::error::Result;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "revenue-explainer")]
#[command(about = "Serves revenue predictions with coefficient-based explanations")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Model artifact path, overrides [model].path
    #[arg(long)]
    pub model: Option<String>,

    /// Listen address, overrides [server].bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Explanation language (id or en)
    #[arg(long)]
    pub locale: Option<Locale>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the configuration file, then applies command line overrides.
    ///
    /// An explicit `--config` must exist; the default path is optional.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                AppConfig::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => AppConfig::default(),
        };

        if let Some(model) = &self.model {
            config.model.path = model.clone();
        }
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(locale) = self.locale {
            config.explanation.locale = locale;
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }

        Ok(config)
    }
}
