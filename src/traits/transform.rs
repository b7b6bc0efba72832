// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A whole-content text transform applied to each input file.
pub trait TextTransform: Send + Sync {
    fn apply(&self, input: &str) -> String;

    fn name(&self) -> &'static str;
}
