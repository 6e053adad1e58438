//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "philosphere",
    version,
    about = "Explore the lives and ideas of history's philosophers"
)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/philosphere/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the Gemini model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Number of philosophers to request
    #[arg(long, value_name = "N")]
    pub count: Option<u32>,

    /// Override the Gemini API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write logs to this file (also: PHILOSPHERE_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Config file to read: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.service.model = model.clone();
        }
        if let Some(count) = self.count {
            config.content.philosopher_count = count;
        }
        if let Some(base_url) = &self.base_url {
            config.service.base_url = base_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "philosphere",
            "--model",
            "gemini-test",
            "--count",
            "5",
            "--base-url",
            "http://localhost:9000",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.service.model, "gemini-test");
        assert_eq!(config.content.philosopher_count, 5);
        assert_eq!(config.service.base_url, "http://localhost:9000");
    }

    #[test]
    fn no_flags_keeps_config() {
        let cli = Cli::parse_from(["philosphere"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
        assert_eq!(cli.config_path(), Config::config_path());
    }
}
