// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod directory_processor;
pub mod stats;

#[cfg(test)]
mod integration_tests;

pub use directory_processor::{DirectoryProcessor, ProcessedFile};
pub use stats::ProcessingStats;
