use anyhow::Result;
use std::process::ExitCode;

use perplexity_search::logging;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init();

    perplexity_search::run().await
}
