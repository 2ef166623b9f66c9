use std::path::PathBuf;

use clap::Parser;

use crate::mode::Mode;

const USAGE_EXAMPLES: &str = "Examples:
    # quick API usage lookup
    perplexity-search search \"How does tool calling work on OpenRouter?\"

    # search that needs a large context window
    perplexity-search context \"Complete Supabase Edge Functions tutorial\"

    # deep research report saved to a file
    perplexity-search research \"WebContainer internals and best practices\" -o report.md

Environment:
    OPENROUTER_KEY  OpenRouter API key (required)";

#[derive(Parser, Debug)]
#[command(
    name = "perplexity-search",
    version,
    about = "Search and research with Perplexity models through the OpenRouter API",
    after_help = USAGE_EXAMPLES
)]
pub struct Cli {
    /// Search mode
    #[arg(value_enum)]
    pub mode: Mode,
    /// Question or research topic
    pub query: String,
    /// Also write the result to this Markdown file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
