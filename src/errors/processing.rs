// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while reading, transforming and writing input files.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while processing the input directory or one of its files.
///
/// `ListInput` aborts a batch. Every other variant is scoped to a single file
/// and is recovered at the file boundary.
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// The input directory could not be listed.
    #[error("cannot list input directory {}: {source}", .path.display())]
    ListInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text: {source}", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("cannot create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the output file failed.
    #[error("cannot write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessingError {
    /// Classify a read failure; `InvalidData` from `read_to_string` means bad UTF-8.
    pub fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            ProcessingError::InvalidEncoding { path, source }
        } else {
            ProcessingError::ReadInput { path, source }
        }
    }
}
