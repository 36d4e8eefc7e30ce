//! Debug tracing infrastructure for development diagnostics
//!
//! The controller logs through the `tracing` facade; nothing is printed
//! unless the host installs a subscriber. These helpers install one.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=trace,edit=debug` - scoped filtering
//! - `RUST_LOG=textbox_core::editable=debug` - module-level filtering

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::CursorList;

/// Initialize a console subscriber that respects RUST_LOG (default `warn`)
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}

/// Initialize console logging plus a daily-rotated `textbox.log` in `logs_dir`
///
/// File logging uses debug level regardless of RUST_LOG.
pub fn init_with_log_dir(logs_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::daily(logs_dir, "textbox.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")
}

/// Lightweight snapshot of cursor state for diffing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub cursor_count: usize,
    pub cursors: Vec<CursorInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorInfo {
    pub caret: usize,
    pub start: usize,
    pub end: usize,
    pub selection_empty: bool,
}

impl SelectionSnapshot {
    pub fn from_selections(selections: &CursorList) -> Self {
        Self {
            cursor_count: selections.len(),
            cursors: selections
                .iter()
                .map(|c| {
                    let (start, end) = c.range();
                    CursorInfo {
                        caret: c.index,
                        start,
                        end,
                        selection_empty: c.is_caret(),
                    }
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        if self.cursor_count != other.cursor_count {
            return Some(format!(
                "cursor count: {} → {}",
                self.cursor_count, other.cursor_count
            ));
        }

        let mut changes = Vec::new();
        for (i, (before, after)) in self.cursors.iter().zip(&other.cursors).enumerate() {
            if before.caret != after.caret {
                changes.push(format!("#{}: {} → {}", i, before.caret, after.caret));
            }
            if before.selection_empty != after.selection_empty {
                let status = if after.selection_empty {
                    "cleared"
                } else {
                    "active"
                };
                changes.push(format!("#{}: selection {}", i, status));
            } else if !after.selection_empty
                && (before.start, before.end) != (after.start, after.end)
            {
                changes.push(format!(
                    "#{}: selection {}..{} → {}..{}",
                    i, before.start, before.end, after.start, after.end
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
