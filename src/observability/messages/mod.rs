// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `engine` - batch lifecycle: listing, skipping, totals
//! * `processor` - per-file lifecycle: start, completion, failure

use tracing::Span;

pub mod engine;
pub mod processor;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level with fields attached.
    fn log(&self);

    /// Open a span carrying the same fields.
    fn span(&self, name: &str) -> Span;
}
