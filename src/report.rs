use std::fs;
use std::io;
use std::path::Path;

use crate::mode::Mode;

/// Markdown document persisted by `--output`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub mode: Mode,
    pub query: &'a str,
    pub body: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(mode: Mode, query: &'a str, body: &'a str) -> Self {
        Self { mode, query, body }
    }

    pub fn header(&self) -> String {
        format!(
            "# Perplexity 搜索结果\n\n**模式**: {}\n\n**问题**: {}\n\n---\n\n",
            self.mode.description(),
            self.query
        )
    }

    pub fn render(&self) -> String {
        let mut content = self.header();
        content.push_str(self.body);
        content
    }

    /// Overwrites `path`. Errors are returned untouched.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}
