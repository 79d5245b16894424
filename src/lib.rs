//! Portfolio Directory: a terminal client for a portfolio-company directory.
//!
//! The client browses a REST backend's company listing with:
//! - Paginated listing filtered by headquarters country and technology sector
//! - Committed free-text ("semantic") search whose results persist locally
//! - Last-request-wins reconciliation of overlapping fetches
//! - A single-company detail view keyed by display name

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← tokio event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Sans-IO state machine
//! │  - Event handling, request sequencing               │
//! │  - Filters, search, pagination                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Local store │   │ - Fetching    │
//! │ - Theming     │   │ - Result cache│   │ - Search      │
//! │ - Components  │   │               │   │ - Lookup      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                 │
//!                                     ┌───────────────────────┐
//!                                     │ Backend client (api/) │
//!                                     └───────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: REST client and query encoding
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Company, filters, errors)
//! - [`infrastructure`]: Data directory and terminal size
//! - [`storage`]: Search result cache backends
//! - [`worker`]: Backend I/O behind a message protocol
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! Defaults, then an optional TOML file, then command-line options:
//!
//! ```text
//! portfolio-directory --config ~/.config/portfolio-directory.toml --api-url https://api.example/api/ --query fintech
//! ```
//!
//! # Example
//!
//! ```rust
//! use portfolio_directory::storage::MemoryResultCache;
//! use portfolio_directory::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config, Box::new(MemoryResultCache::default()));
//!
//! let (_, actions) = handle_event(&mut state, &Event::Navigate { query: None })?;
//! assert!(actions.iter().all(|a| matches!(a, Action::PostToWorker(_))));
//! # Ok::<(), portfolio_directory::DirectoryError>(())
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, SearchPhase, ViewMode};
pub use cli::Cli;
pub use domain::{Company, DirectoryError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::{JsonStore, MemoryResultCache, ResultCache};

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// File name of the persisted local store inside the data directory.
pub const CACHE_FILE_NAME: &str = "local-storage.json";

/// Client configuration.
///
/// # Example
///
/// ```toml
/// api_url = "https://directory.example/api/"
/// page_size = 6
/// theme = "catppuccin-latte"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backend base URL. A trailing slash is enforced when the client is built.
    pub api_url: String,

    /// Companies per listing page. Must be positive.
    pub page_size: usize,

    /// Upper bound on pages walked by the detail lookup.
    pub max_lookup_pages: usize,

    /// Query that pre-seeds the search on startup.
    pub query: Option<String>,

    /// Location of the persisted store. `~` is expanded.
    pub cache_file: Option<String>,

    /// When `false` search results are kept in memory only.
    pub persist_cache: bool,

    /// Built-in theme: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for trace export. Tracing is off when unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: worker::DEFAULT_PAGE_SIZE,
            max_lookup_pages: worker::DEFAULT_MAX_LOOKUP_PAGES,
            query: None,
            cache_file: None,
            persist_cache: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from parsed command-line arguments.
    ///
    /// `--config` names a TOML file that is loaded first; every other option
    /// that was given overrides it.
    ///
    /// # Errors
    ///
    /// Fails on a missing or malformed config file or an empty `api_url`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clap::Parser;
    /// use portfolio_directory::{Cli, Config};
    ///
    /// let cli = Cli::parse_from(["portfolio-directory", "--page-size", "12", "--query", "fintech"]);
    /// let config = Config::from_cli(&cli)?;
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.query.as_deref(), Some("fintech"));
    /// # Ok::<(), portfolio_directory::DirectoryError>(())
    /// ```
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(infrastructure::expand_tilde(&path.to_string_lossy()))?,
            None => Self::default(),
        };
        config.apply(cli);
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DirectoryError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| DirectoryError::Config(format!("invalid {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, cli: &Cli) {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(api_url) = &cli.api_url {
            self.api_url = api_url.trim().to_string();
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size as usize;
        }
        if let Some(max_pages) = cli.max_lookup_pages {
            self.max_lookup_pages = max_pages as usize;
        }
        if cli.query.is_some() {
            self.query = non_blank(&cli.query);
        }
        if let Some(persist) = cli.persist_cache {
            self.persist_cache = persist;
        }
        self.cache_file = non_blank(&cli.cache_file).or_else(|| self.cache_file.take());
        self.theme_name = non_blank(&cli.theme).or_else(|| self.theme_name.take());
        self.theme_file = non_blank(&cli.theme_file).or_else(|| self.theme_file.take());
        self.trace_level = non_blank(&cli.trace_level).or_else(|| self.trace_level.take());
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DirectoryError::Config("page_size must be positive".to_string()));
        }
        if self.api_url.trim().is_empty() {
            return Err(DirectoryError::Config("api_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Resolved path of the persisted store.
    #[must_use]
    pub fn cache_path(&self) -> PathBuf {
        self.cache_file.as_deref().map_or_else(
            || infrastructure::data_dir().join(CACHE_FILE_NAME),
            infrastructure::expand_tilde,
        )
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Opens the result cache the configuration asks for.
///
/// A persisted store that cannot be opened is replaced by an in-memory cache
/// so that a corrupt file never prevents the client from starting.
#[must_use]
pub fn open_cache(config: &Config) -> Box<dyn ResultCache> {
    if !config.persist_cache {
        return Box::new(MemoryResultCache::default());
    }

    let path = config.cache_path();
    match JsonStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "cannot open local store, keeping results in memory");
            Box::new(MemoryResultCache::default())
        }
    }
}

/// Creates the application state for `config`.
///
/// The state starts empty; the runtime posts [`Event::Navigate`] to load the
/// reference lists and the first page.
pub fn initialize(config: &Config, cache: Box<dyn ResultCache>) -> AppState {
    tracing::debug!(api_url = %config.api_url, page_size = config.page_size, "initializing directory client");
    AppState::new(config.theme(), cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("portfolio-directory").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = Config::from_cli(&Cli::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.max_lookup_pages, 20);
        assert!(config.persist_cache);
        assert!(config.cache_path().ends_with(CACHE_FILE_NAME));
    }

    #[test]
    fn command_line_options_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "page_size = 9\ntheme = \"catppuccin-latte\"\npersist_cache = false\nquery = \"fintech\"\n",
        )
        .unwrap();

        let config = Config::from_cli(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--page-size",
            "3",
            "--query",
            "  ",
        ]))
        .unwrap();

        assert_eq!(config.page_size, 3);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert!(!config.persist_cache);
        assert_eq!(config.query, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_cli(&cli(&["--api-url", " "])),
            Err(DirectoryError::Config(_))
        ));
        assert!(Config::from_cli(&cli(&["--config", "/nonexistent/portfolio.toml"])).is_err());
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scan_depth = 4\n").unwrap();

        assert!(matches!(Config::from_file(&path), Err(DirectoryError::Config(_))));
    }

    #[test]
    fn open_cache_uses_the_configured_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");
        let config = Config {
            cache_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };

        let mut cache = open_cache(&config);
        cache
            .set(&storage::CachedSearch::new("fintech", vec!["Nium".to_string()]))
            .unwrap();

        assert!(path.exists());
    }
}
