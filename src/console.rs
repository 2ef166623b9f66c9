use std::io::{self, Write};
use std::path::Path;

use crate::mode::Mode;

const RULE_WIDTH: usize = 60;

pub fn print_progress(out: &mut impl Write, mode: Mode, query: &str) -> io::Result<()> {
    writeln!(out, "\nSearching with {} ...\n", mode.description())?;
    writeln!(out, "Model: {}", mode.model_id())?;
    writeln!(out, "Query: {query}\n")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn print_result(out: &mut impl Write, content: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Search result:")?;
    writeln!(out, "{rule}\n")?;
    writeln!(out, "{content}")
}

pub fn print_saved(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "\nResult saved to: {}", path.display())
}
