//! Interactive terminal runtime and entry point.
//!
//! Thin shell around the library: it reads commands from stdin, feeds them
//! to [`handle_event`], runs the resulting worker messages on spawned tasks,
//! and redraws the whole frame after every state change.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  current-thread tokio runtime                │
//! │  ┌──────────────────┐    stdin lines         │
//! │  │  AppState        │ ◀──────────────────    │
//! │  │  (event loop)    │                        │
//! │  └──────────────────┘                        │
//! │     │ spawn      ▲ WorkerResponse (mpsc)     │
//! │     ▼            │                           │
//! │  ┌──────────────────┐                        │
//! │  │ DirectoryWorker  │ ──▶ REST backend       │
//! │  └──────────────────┘                        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```text
//! portfolio-directory [--config <PATH>] [--api-url <URL>] [--query <TEXT>] [OPTIONS]
//! ```
//!
//! `--help` lists every option.
//!
//! # Commands
//!
//! - `search <text>` / `search`: commit or clear the query
//! - `country <id|name>` / `sector <id|name>`: toggle a filter
//! - `clear`: remove all filters
//! - `next` / `prev` / `page <n>`: paginate
//! - `down` / `up`: scroll the grid by one screen
//! - `open <n>` / `back`: company detail
//! - `refresh`, `quit`

#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::Instrument;

use portfolio_directory::api::HttpDirectoryApi;
use portfolio_directory::app::parse_command;
use portfolio_directory::infrastructure::terminal_size;
use portfolio_directory::observability::init_tracing;
use portfolio_directory::ui::helpers::position_cursor;
use portfolio_directory::worker::{DirectoryWorker, WorkerResponse};
use portfolio_directory::{handle_event, initialize, open_cache, Action, AppState, Cli, Config, Event};

/// Runtime state wrapper.
///
/// Wraps the library's `AppState` with the I/O concerns: the shared worker,
/// the response channel, and the terminal geometry.
struct Runtime {
    app: AppState,
    worker: Arc<DirectoryWorker<HttpDirectoryApi>>,
    responses: mpsc::UnboundedSender<WorkerResponse>,
    rows: usize,
    cols: usize,
}

impl Runtime {
    /// Handles one event and executes its actions.
    ///
    /// Returns `Ok(false)` once a `Quit` action has been seen.
    async fn dispatch(&mut self, event: &Event) -> portfolio_directory::Result<bool> {
        self.sync_size()?;
        let (should_render, actions) = handle_event(&mut self.app, event)?;

        let mut keep_running = true;
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    let worker = Arc::clone(&self.worker);
                    let responses = self.responses.clone();
                    tokio::spawn(async move {
                        let response = worker.handle(message).await;
                        if responses.send(response).is_err() {
                            tracing::debug!("event loop gone, dropping worker response");
                        }
                    });
                }
                Action::Quit => keep_running = false,
            }
        }

        if should_render && keep_running {
            self.draw().await?;
        }
        Ok(keep_running)
    }

    /// Tells the state about a terminal resize since the last event.
    fn sync_size(&mut self) -> portfolio_directory::Result<()> {
        let (rows, cols) = terminal_size();
        if rows != self.rows {
            handle_event(&mut self.app, &Event::Resize { rows })?;
        }
        (self.rows, self.cols) = (rows, cols);
        Ok(())
    }

    async fn draw(&mut self) -> portfolio_directory::Result<()> {
        let mut frame = portfolio_directory::ui::render(&self.app, self.rows, self.cols);
        position_cursor(&mut frame, self.rows, 1);
        frame.push_str("> ");

        let mut stdout = tokio::io::stdout();
        stdout.write_all(frame.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

async fn run(config: Config) -> portfolio_directory::Result<()> {
    let mut app = initialize(&config, open_cache(&config));
    app.filters.subscribe(|selection| {
        tracing::debug!(
            countries = ?selection.countries,
            sectors = ?selection.sectors,
            "filter selection changed"
        );
    });

    let api = HttpDirectoryApi::new(config.api_url.clone());
    let worker = Arc::new(DirectoryWorker::new(api, config.page_size, config.max_lookup_pages));
    let (responses, mut incoming) = mpsc::unbounded_channel();

    let (rows, cols) = terminal_size();
    handle_event(&mut app, &Event::Resize { rows })?;
    let mut runtime = Runtime {
        app,
        worker,
        responses,
        rows,
        cols,
    };

    runtime
        .dispatch(&Event::Navigate {
            query: config.query.clone(),
        })
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let event = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match parse_command(&line, &runtime.app) {
                    Some(event) => event,
                    None => {
                        runtime.sync_size()?;
                        runtime.draw().await?;
                        continue;
                    }
                },
                None => break,
            },
            Some(response) = incoming.recv() => Event::WorkerResponse(response),
        };

        if !runtime.dispatch(&event).await? {
            break;
        }
    }

    tracing::debug!("event loop finished");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_cli(&Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let provider = init_tracing(&config);
    let span = tracing::info_span!("run", api_url = %config.api_url);
    let result = run(config).instrument(span).await;

    if let Some(provider) = provider {
        if let Err(e) = provider.shutdown() {
            eprintln!("failed to flush traces: {e}");
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
