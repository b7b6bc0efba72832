// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{EXPECTED_ARG_COUNT, OUTPUT_FILE_PREFIX};
use crate::errors::UsageError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Input and output locations for one batch run.
///
/// Neither path is checked for existence here; the input directory is only
/// touched when the batch lists it, and the output directory is created by
/// the binary before processing starts.
///
/// # Example
/// ```
/// use dir_upcase::config::ProcessorConfig;
///
/// let cfg = ProcessorConfig::new("inbox", "outbox");
/// assert_eq!(
///     cfg.output_path_for("notes.txt"),
///     std::path::Path::new("outbox/processed_notes.txt")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl ProcessorConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_dir: I, output_dir: O) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Build a config from the raw process arguments, program name included.
    ///
    /// Exactly two positional arguments are accepted: `<input_dir> <output_dir>`.
    /// Arguments are taken as `OsStr` so directory names need not be UTF-8.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Self, UsageError> {
        let program = args
            .first()
            .map(|a| Path::new(a).display().to_string())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        let positional = args.len().saturating_sub(1);

        match args {
            [_, input_dir, output_dir] => {
                Ok(Self::new(Path::new(input_dir), Path::new(output_dir)))
            }
            _ => Err(UsageError::WrongArgumentCount {
                program,
                expected: EXPECTED_ARG_COUNT,
                got: positional,
            }),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn input_path_for<S: AsRef<OsStr>>(&self, filename: S) -> PathBuf {
        self.input_dir.join(filename.as_ref())
    }

    /// `output_dir/processed_<filename>`
    pub fn output_path_for<S: AsRef<OsStr>>(&self, filename: S) -> PathBuf {
        let mut name = OsString::from(OUTPUT_FILE_PREFIX);
        name.push(filename.as_ref());
        self.output_dir.join(name)
    }
}
