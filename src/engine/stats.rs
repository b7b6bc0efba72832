// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// Counters for one batch, serialized as the run report.
///
/// `processed_files` only moves on the success path, so after a single batch
/// it equals `success_count`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    pub processed_files: usize,
    pub success_count: usize,
    pub failure_count: usize,
}

impl ProcessingStats {
    /// Number of regular files the batch attempted.
    pub fn attempted(&self) -> usize {
        self.success_count + self.failure_count
    }

    /// A run succeeds only if at least one file was written.
    pub fn is_success(&self) -> bool {
        self.success_count > 0
    }

    /// Pretty JSON with two-space indentation, keys in declaration order.
    pub fn to_report(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
