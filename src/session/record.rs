//! Append-only match result log.
//!
//! One line per finished match, fields separated by `;`:
//!
//! ```text
//! 2026-10-19 14:03:11;Human vs Computer;White;Black ran out of pieces;23;12;4
//! ```
//!
//! timestamp, participants, winner, reason, turns, winner captures, loser
//! captures. Without a winner the capture columns hold White then Black.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::core::RecordError;
use crate::turn::{EndReason, GameSummary};

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "draughts_results.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLog {
    path: PathBuf,
}

impl Default for ResultLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render one log line.
    #[must_use]
    pub fn format_line(summary: &GameSummary, label: &str, at: NaiveDateTime) -> String {
        let winner = match (summary.winner, summary.reason) {
            (Some(player), _) => player.to_string(),
            (None, EndReason::Draw) => "Draw".to_string(),
            (None, _) => "None".to_string(),
        };
        format!(
            "{};{};{};{};{};{};{}",
            at.format(TIMESTAMP_FORMAT),
            label,
            winner,
            summary.reason_text(),
            summary.turns,
            summary.winner_captures(),
            summary.loser_captures(),
        )
    }

    /// Append a line stamped with the local time, creating the file if needed.
    pub fn append(&self, summary: &GameSummary, label: &str) -> Result<(), RecordError> {
        let line = Self::format_line(summary, label, Local::now().naive_local());
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        debug!(path = %self.path.display(), "result recorded");
        Ok(())
    }

    /// All recorded lines, oldest first. A missing file has no entries.
    pub fn entries(&self) -> Result<Vec<String>, RecordError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().filter(|l| !l.is_empty()).map(str::to_string).collect()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}
