//! Command-line arguments.
//!
//! Every option mirrors a [`Config`](crate::Config) key and, when given,
//! overrides the value loaded from `--config`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "portfolio-directory")]
#[command(about = "Browse a portfolio-company directory from the terminal", long_about = None)]
pub struct Cli {
    /// TOML configuration file loaded before the other options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Companies per listing page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Listing pages scanned when opening a company
    #[arg(long, value_name = "N")]
    pub max_lookup_pages: Option<u32>,

    /// Search to run on startup
    #[arg(long, short)]
    pub query: Option<String>,

    /// Location of the persisted search results
    #[arg(long, value_name = "PATH")]
    pub cache_file: Option<String>,

    /// Keep search results on disk between runs
    #[arg(long, value_name = "BOOL")]
    pub persist_cache: Option<bool>,

    /// Built-in theme: catppuccin-mocha or catppuccin-latte
    #[arg(long)]
    pub theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, value_name = "PATH")]
    pub theme_file: Option<String>,

    /// Trace filter directive, e.g. `debug`; tracing is off when unset
    #[arg(long, value_name = "FILTER")]
    pub trace_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typed_options() {
        let cli = Cli::try_parse_from([
            "portfolio-directory",
            "--page-size",
            "12",
            "-q",
            "fintech",
            "--persist-cache",
            "false",
        ])
        .unwrap();

        assert_eq!(cli.page_size, Some(12));
        assert_eq!(cli.query.as_deref(), Some("fintech"));
        assert_eq!(cli.persist_cache, Some(false));
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["portfolio-directory", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-directory", "--page-size", "six"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-directory", "--persist-cache", "maybe"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-directory", "--colour", "red"]).is_err());
    }
}
