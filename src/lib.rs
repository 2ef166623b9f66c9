pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod mode;
pub mod model;
pub mod providers;
pub mod report;
pub mod transport;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

use cli::Cli;
use config::Config;
use error::SearchError;
use model::ChatRequest;
use report::Report;
use transport::{ChatTransport, OpenRouterTransport};

/// Parses the command line and performs the search, translating handled
/// failures into a diagnostic on stderr and a failing exit code.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let client = Client::builder()
        .build()
        .context("Failed to initialize HTTP client")?;
    let transport = OpenRouterTransport::new(client);

    let mut stdout = io::stdout().lock();
    match search(&cli, Config::from_env, &transport, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast::<SearchError>() {
            Ok(search_err) => {
                stdout.flush().ok();
                eprintln!("{search_err}");
                Ok(ExitCode::FAILURE)
            }
            Err(other) => Err(other),
        },
    }
}

/// Runs one search: load config, send the request, print and optionally
/// persist the answer.
///
/// Handled failures come back as a [`SearchError`] inside the `anyhow::Error`;
/// I/O failures while printing or writing the report are passed through as-is.
pub async fn search<T, W>(
    cli: &Cli,
    load_config: impl FnOnce() -> Result<Config, SearchError>,
    transport: &T,
    out: &mut W,
) -> Result<()>
where
    T: ChatTransport,
    W: Write,
{
    let cfg = load_config()?;
    debug!(
        mode = cli.mode.as_str(),
        model = cli.mode.model_id(),
        api_url = %cfg.api_url,
        timeout_secs = cfg.request_timeout_secs,
        "loaded runtime configuration"
    );

    let request = ChatRequest::for_mode(cli.mode, &cli.query);
    console::print_progress(out, cli.mode, &cli.query)?;
    out.flush()?;

    let content = transport.send(&cfg, &request).await?;

    console::print_result(out, &content)?;
    if let Some(path) = &cli.output {
        Report::new(cli.mode, &cli.query, &content).write_to(path)?;
        console::print_saved(out, path)?;
        debug!(path = %path.display(), "saved search result");
    }
    Ok(())
}
