// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod processing;
mod usage;

pub use processing::ProcessingError;
pub use usage::UsageError;
