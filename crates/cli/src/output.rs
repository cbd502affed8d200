//! Result output.
//!
//! Every command prints one pretty-printed JSON document, to stdout or to
//! the file given with `--output-file`. Diagnostics never go to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct Output {
    file: Option<PathBuf>,
}

impl Output {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered =
            serde_json::to_string_pretty(value).context("Failed to serialize result")?;
        self.write(&rendered)
    }

    /// Plain lines, for output meant to be piped into other tools.
    pub fn lines<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.write(&rendered)
    }

    fn write(&self, rendered: &str) -> Result<()> {
        match &self.file {
            Some(path) => {
                let mut file = std::fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                writeln!(file, "{}", rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "Result written to file");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", rendered).context("Failed to write to stdout")?;
            }
        }
        Ok(())
    }
}
