// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::TextTransform;

/// Uppercase transform - converts every letter to its uppercase form.
///
/// Uses Unicode case mapping, which is locale-invariant; digits, punctuation
/// and whitespace pass through unchanged. Some characters expand (`ß` -> `SS`),
/// so the output may be longer than the input.
#[derive(Debug, Default, Clone, Copy)]
pub struct UppercaseTransform;

impl UppercaseTransform {
    pub fn new() -> Self {
        Self
    }
}

impl TextTransform for UppercaseTransform {
    fn apply(&self, input: &str) -> String {
        input.to_uppercase()
    }

    fn name(&self) -> &'static str {
        "uppercase"
    }
}
