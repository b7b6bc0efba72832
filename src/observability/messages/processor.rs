// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for per-file processing events.
//!
//! This module contains message types for logging events related to:
//! * A file being picked up for processing
//! * A file written successfully
//! * A file that failed to read, transform or write

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// File processing started.
///
/// # Log Level
/// `debug!` - One per file, too noisy for `info!`
///
/// # Example
/// ```
/// use dir_upcase::observability::messages::processor::FileProcessingStarted;
///
/// let msg = FileProcessingStarted {
///     filename: "notes.txt",
///     transform: "uppercase",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct FileProcessingStarted<'a> {
    pub filename: &'a str,
    pub transform: &'a str,
}

impl Display for FileProcessingStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing file '{}' with '{}' transform",
            self.filename, self.transform
        )
    }
}

impl StructuredLog for FileProcessingStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            filename = self.filename,
            transform = self.transform,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "file_processing",
            span_name = name,
            filename = self.filename,
            transform = self.transform,
        )
    }
}

/// File processed and written.
///
/// # Log Level
/// `debug!` - One per file
///
/// # Example
/// ```
/// use dir_upcase::observability::messages::processor::FileProcessingCompleted;
/// use std::time::Duration;
///
/// let msg = FileProcessingCompleted {
///     filename: "notes.txt",
///     input_size: 12,
///     output_size: 12,
///     duration: Duration::from_millis(1),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct FileProcessingCompleted<'a> {
    pub filename: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: std::time::Duration,
}

impl Display for FileProcessingCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed file '{}': input={} bytes, output={} bytes, duration={:?}",
            self.filename, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for FileProcessingCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            filename = self.filename,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "file_processed",
            span_name = name,
            filename = self.filename,
        )
    }
}

/// File processing failed; the file is counted as a failure.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use dir_upcase::observability::messages::processor::FileProcessingFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
/// let msg = FileProcessingFailed {
///     filename: "notes.txt",
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "Error processing file notes.txt: gone");
/// ```
pub struct FileProcessingFailed<'a> {
    pub filename: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FileProcessingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Error processing file {}: {}", self.filename, self.error)
    }
}

impl StructuredLog for FileProcessingFailed<'_> {
    fn log(&self) {
        tracing::error!(
            filename = self.filename,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "file_failed",
            span_name = name,
            filename = self.filename,
        )
    }
}
