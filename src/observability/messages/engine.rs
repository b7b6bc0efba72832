// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for batch lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Output directory preparation
//! * Input directory listing
//! * Entries skipped because they are not regular files
//! * Batch totals

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Batch started over an input directory.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dir_upcase::observability::messages::engine::BatchStarted;
/// use std::path::Path;
///
/// let msg = BatchStarted {
///     input_dir: Path::new("inbox"),
///     output_dir: Path::new("outbox"),
///     entry_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BatchStarted<'a> {
    pub input_dir: &'a Path,
    pub output_dir: &'a Path,
    pub entry_count: usize,
}

impl Display for BatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing {} entries from '{}' into '{}'",
            self.entry_count,
            self.input_dir.display(),
            self.output_dir.display()
        )
    }
}

impl StructuredLog for BatchStarted<'_> {
    fn log(&self) {
        tracing::info!(
            input_dir = %self.input_dir.display(),
            output_dir = %self.output_dir.display(),
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch",
            span_name = name,
            input_dir = %self.input_dir.display(),
            output_dir = %self.output_dir.display(),
        )
    }
}

/// Batch finished; totals are final.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BatchCompleted {
    pub success_count: usize,
    pub failure_count: usize,
    pub skipped_count: usize,
    pub duration: std::time::Duration,
}

impl Display for BatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Batch completed: succeeded={}, failed={}, skipped={}, duration={:?}",
            self.success_count, self.failure_count, self.skipped_count, self.duration
        )
    }
}

impl StructuredLog for BatchCompleted {
    fn log(&self) {
        tracing::info!(
            success_count = self.success_count,
            failure_count = self.failure_count,
            skipped_count = self.skipped_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch_completed",
            span_name = name,
            success_count = self.success_count,
            failure_count = self.failure_count,
        )
    }
}

/// Input directory could not be listed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InputListingFailed<'a> {
    pub input_dir: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for InputListingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Aborting batch, input directory unavailable: {}", self.error)
    }
}

impl StructuredLog for InputListingFailed<'_> {
    fn log(&self) {
        tracing::error!(
            input_dir = %self.input_dir.display(),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "input_listing",
            span_name = name,
            input_dir = %self.input_dir.display(),
        )
    }
}

/// Directory entry ignored because it is not a regular file.
///
/// # Log Level
/// `debug!` - Skips are expected and never counted
pub struct EntrySkipped<'a> {
    pub filename: &'a str,
    pub reason: &'a str,
}

impl Display for EntrySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping '{}': {}", self.filename, self.reason)
    }
}

impl StructuredLog for EntrySkipped<'_> {
    fn log(&self) {
        tracing::debug!(filename = self.filename, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("entry_skipped", span_name = name, filename = self.filename)
    }
}

/// Output directory ensured before the batch runs.
///
/// # Log Level
/// `debug!` - Routine setup
pub struct OutputDirectoryReady<'a> {
    pub output_dir: &'a Path,
}

impl Display for OutputDirectoryReady<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Output directory '{}' is ready", self.output_dir.display())
    }
}

impl StructuredLog for OutputDirectoryReady<'_> {
    fn log(&self) {
        tracing::debug!(output_dir = %self.output_dir.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "output_directory",
            span_name = name,
            output_dir = %self.output_dir.display(),
        )
    }
}
