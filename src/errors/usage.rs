// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors in how the binary was invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Wrong number of positional arguments. Displays as the usage line.
    #[error("Usage: {program} <input_dir> <output_dir> (expected {expected} arguments, got {got})")]
    WrongArgumentCount {
        program: String,
        expected: usize,
        got: usize,
    },
}
