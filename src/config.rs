// Command-line configuration.
// Parses flags and environment variables and resolves cache and log locations.

use std::path::PathBuf;

use clap::Parser;

use crate::api::client::normalize_base_url;
use crate::cache;
use crate::error::{FaqError, Result};
use crate::logging::Verbosity;
use crate::store::CacheMode;

/// Server used when neither `--api-url` nor `FAQ_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// faqdesk - browse and add FAQ entries from the terminal
#[derive(Debug, Parser)]
#[command(name = "faqdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the FAQ server
    #[arg(long, env = "FAQ_API_URL", default_value = DEFAULT_API_URL, value_name = "URL")]
    pub api_url: String,

    /// Directory holding the cached FAQ list
    #[arg(long, env = "FAQ_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Mirror raw responses and submissions into the cache like the web client did
    #[arg(long)]
    pub legacy_cache: bool,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, env = "FAQ_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server base URL without a trailing slash.
    pub api_url: String,
    pub cache_dir: PathBuf,
    pub cache_mode: CacheMode,
    pub log_path: PathBuf,
    pub verbosity: Verbosity,
}

impl Config {
    /// Validate the parsed flags and fill in platform defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_url = normalize_base_url(&cli.api_url)?;

        let cache_dir = match &cli.cache_dir {
            Some(dir) => dir.clone(),
            None => cache::cache_dir()
                .ok_or_else(|| FaqError::Other("could not determine a cache directory".into()))?,
        };

        let log_path = cli
            .log_file
            .clone()
            .unwrap_or_else(|| cache::log_path(&cache_dir));

        let cache_mode = if cli.legacy_cache {
            CacheMode::Legacy
        } else {
            CacheMode::Snapshot
        };

        Ok(Self {
            api_url,
            cache_dir,
            cache_mode,
            log_path,
            verbosity: cli.verbosity(),
        })
    }
}
