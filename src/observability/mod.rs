// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output of the crate goes through the message types in
//! [`messages`]. Each message is a plain struct with a `Display` impl for the
//! human-readable line and a [`messages::StructuredLog`] impl that emits the
//! same line with its fields attached as `tracing` key/values.
//!
//! # Usage
//!
//! ```rust
//! use dir_upcase::observability::messages::{processor::FileProcessingFailed, StructuredLog};
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! FileProcessingFailed {
//!     filename: "notes.txt",
//!     error: &error,
//! }
//! .log();
//! ```
//!
//! The subscriber itself is installed by the binary with [`init_logging`].

pub mod messages;

use crate::config::consts::DEFAULT_LOG_FILTER;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Logs are written to stderr so stdout carries nothing but the stats report.
/// The filter is read from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
