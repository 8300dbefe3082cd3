//! Top-N ranking report for the console and the results file.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::zone::{ScoreWeights, Zone};

pub const DEFAULT_TOP_N: usize = 3;

pub const BANNER: &str = "🌿 Top Recommended Green Zones for Planting 🌿";

pub const CLOSING_MESSAGE: &str = "🌍 This project supports SDG 13 – Climate Action by identifying zones suitable for new planting, promoting campus sustainability and carbon reduction.";

#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct ReportError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl ReportError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Formats the first `count` entries of an already ranked sequence.
    pub fn top(ranked: &[Zone], count: usize, weights: &ScoreWeights) -> Self {
        let lines = ranked
            .iter()
            .take(count)
            .enumerate()
            .map(|(index, zone)| format_entry(index + 1, zone.name(), zone.score_with(weights)))
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn write_console(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n{BANNER}\n")?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Contents of the results file: the banner followed by one line per entry.
    pub fn render_file(&self) -> String {
        let mut text = String::with_capacity(BANNER.len() + 1 + self.lines.len() * 48);
        text.push_str(BANNER);
        text.push('\n');
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Creates or truncates `path` and writes the file rendering to it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        fs::write(path, self.render_file()).map_err(|source| ReportError {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn format_entry(rank: usize, name: &str, score: f64) -> String {
    format!("{rank}. {name} (Score: {score:.2})")
}
