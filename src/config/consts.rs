// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Prefix prepended to every input filename to form its output filename
pub const OUTPUT_FILE_PREFIX: &str = "processed_";
/// Number of positional arguments the binary expects (input dir, output dir)
pub const EXPECTED_ARG_COUNT: usize = 2;
/// Log filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "warn";
