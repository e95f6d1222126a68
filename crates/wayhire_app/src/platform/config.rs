use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use wayhire_core::{DEFAULT_COUNTRY, DEFAULT_PROXIMITY_THRESHOLD};
use wayhire_engine::{FetchSettings, FileStore, KeyValueStore, MemoryStore, DEFAULT_BASE_URL};
use wayhire_logging::LogDestination;

const API_KEY_VAR: &str = "RAPIDAPI_KEY";
const BASE_URL_VAR: &str = "WAYHIRE_API_BASE_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

/// Browse, save and apply to jobs from the terminal.
#[derive(Debug, Parser)]
#[command(name = "wayhire", version)]
pub struct Cli {
    /// Search submitted on startup.
    #[arg(long, default_value = "frontend developer")]
    pub query: String,

    /// Two-letter country code sent with every search.
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Directory holding saved and applied jobs.
    #[arg(long, env = "WAYHIRE_DATA_DIR", default_value = ".wayhire")]
    pub data_dir: PathBuf,

    /// Keep saved and applied jobs in memory only.
    #[arg(long)]
    pub ephemeral: bool,

    #[arg(long, value_enum, default_value = "file")]
    pub log: LogTarget,

    #[arg(long, default_value = "wayhire.log")]
    pub log_file: PathBuf,

    /// Distance from the bottom of the list that triggers loading the next page.
    #[arg(long, default_value_t = DEFAULT_PROXIMITY_THRESHOLD)]
    pub scroll_threshold: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub query: String,
    pub country: String,
    pub data_dir: PathBuf,
    pub ephemeral: bool,
    pub log: LogTarget,
    pub log_file: PathBuf,
    pub scroll_threshold: u32,
    pub api_key: Option<String>,
    pub api_base_url: String,
}

impl AppConfig {
    /// Parses the command line after loading `.env`, if present.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        let cli = Cli::parse();
        Self::from_parts(
            cli,
            env::var(API_KEY_VAR).ok(),
            env::var(BASE_URL_VAR).ok(),
        )
    }

    pub fn from_parts(cli: Cli, api_key: Option<String>, api_base_url: Option<String>) -> Self {
        Self {
            query: cli.query,
            country: cli.country.trim().to_ascii_lowercase(),
            data_dir: cli.data_dir,
            ephemeral: cli.ephemeral,
            log: cli.log,
            log_file: cli.log_file,
            scroll_threshold: cli.scroll_threshold,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_base_url: api_base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone().unwrap_or_default(),
            ..FetchSettings::default()
        }
    }

    pub fn open_store(&self) -> Arc<dyn KeyValueStore> {
        if self.ephemeral {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(FileStore::new(self.data_dir.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("wayhire").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("valid args")
    }

    #[test]
    fn defaults_match_upstream_expectations() {
        let config = AppConfig::from_parts(parse(&[]), None, None);
        assert_eq!(config.query, "frontend developer");
        assert_eq!(config.country, "us");
        assert_eq!(config.scroll_threshold, 300);
        assert_eq!(config.log, LogTarget::File);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fetch_settings().api_key, "");
    }

    #[test]
    fn overrides_are_applied() {
        let cli = parse(&["--country", " DE ", "--log", "both", "--ephemeral"]);
        let config = AppConfig::from_parts(
            cli,
            Some("secret".into()),
            Some("http://localhost:8080".into()),
        );
        assert_eq!(config.country, "de");
        assert!(config.ephemeral);
        assert_eq!(config.log_destination(), LogDestination::Both);
        let settings = config.fetch_settings();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.base_url, "http://localhost:8080");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = AppConfig::from_parts(parse(&[]), Some("  ".into()), Some(String::new()));
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }
}
