// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // paths + constants
pub mod engine;         // directory batch processor
pub mod errors;         // error handling
pub mod observability;  // structured logging
pub mod traits;         // transform abstraction
pub mod transforms;     // transform implementations
