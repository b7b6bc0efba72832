// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Batch processor that transforms every regular file of a directory.
//!
//! The batch is strictly sequential: entries are listed, sorted by name, and
//! each regular file is read, transformed and written before the next one is
//! touched. A failure on one file is logged and counted but never stops the
//! batch.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ProcessorConfig;
use crate::engine::ProcessingStats;
use crate::errors::ProcessingError;
use crate::observability::messages::engine::{BatchCompleted, BatchStarted, EntrySkipped};
use crate::observability::messages::processor::{
    FileProcessingCompleted, FileProcessingFailed, FileProcessingStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::TextTransform;
use crate::transforms::UppercaseTransform;

const NOT_A_REGULAR_FILE: &str = "not a regular file";

/// Outcome of a single successfully processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub output_path: PathBuf,
    pub input_size: usize,
    pub output_size: usize,
}

/// Reads files from `input_dir`, transforms them and writes
/// `processed_<name>` files into `output_dir`.
///
/// # Example
/// ```no_run
/// use dir_upcase::config::ProcessorConfig;
/// use dir_upcase::engine::DirectoryProcessor;
///
/// let mut processor = DirectoryProcessor::new(ProcessorConfig::new("inbox", "outbox"));
/// let stats = processor.process_all()?;
/// println!("{}", stats.to_report()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DirectoryProcessor {
    config: ProcessorConfig,
    transform: Box<dyn TextTransform>,
    processed_files: usize,
}

impl DirectoryProcessor {
    /// Processor using the uppercase transform.
    pub fn new(config: ProcessorConfig) -> Self {
        Self::with_transform(config, Box::new(UppercaseTransform::new()))
    }

    pub fn with_transform(config: ProcessorConfig, transform: Box<dyn TextTransform>) -> Self {
        Self {
            config,
            transform,
            processed_files: 0,
        }
    }

    /// Files written successfully over the lifetime of this processor.
    pub fn processed_files(&self) -> usize {
        self.processed_files
    }

    /// Process one entry of the input directory by name.
    ///
    /// Returns `true` when the output file was written. Any failure is logged
    /// with the filename and reported as `false`; nothing propagates.
    pub fn process_one<S: AsRef<OsStr>>(&mut self, filename: S) -> bool {
        let filename = filename.as_ref();
        let display_name = filename.to_string_lossy();

        let start_msg = FileProcessingStarted {
            filename: &display_name,
            transform: self.transform.name(),
        };
        let span = start_msg.span("process_one");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        match self.try_process_one(filename) {
            Ok(processed) => {
                self.processed_files += 1;
                FileProcessingCompleted {
                    filename: &display_name,
                    input_size: processed.input_size,
                    output_size: processed.output_size,
                    duration: start_time.elapsed(),
                }
                .log();
                true
            }
            Err(e) => {
                FileProcessingFailed {
                    filename: &display_name,
                    error: &e,
                }
                .log();
                false
            }
        }
    }

    /// Same as [`process_one`](Self::process_one) but returns the error instead
    /// of logging it. Does not touch the counters.
    pub fn try_process_one(&self, filename: &OsStr) -> Result<ProcessedFile, ProcessingError> {
        let input_path = self.config.input_path_for(filename);
        let output_path = self.config.output_path_for(filename);

        let content = read_text(&input_path)?;
        let transformed = self.transform.apply(&content);
        write_text(&output_path, &transformed)?;

        Ok(ProcessedFile {
            output_path,
            input_size: content.len(),
            output_size: transformed.len(),
        })
    }

    /// Process every regular file directly inside the input directory.
    ///
    /// Entries are visited in file name order. Directories, broken symlinks
    /// and special files are skipped without being counted. Only a failure to
    /// list the input directory itself is returned as an error.
    pub fn process_all(&mut self) -> Result<ProcessingStats, ProcessingError> {
        let input_dir = self.config.input_dir().to_path_buf();
        let names = sorted_entry_names(&input_dir)?;

        let start_msg = BatchStarted {
            input_dir: &input_dir,
            output_dir: self.config.output_dir(),
            entry_count: names.len(),
        };
        let span = start_msg.span("process_all");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let mut success_count = 0;
        let mut failure_count = 0;
        let mut skipped_count = 0;

        for name in &names {
            if !is_regular_file(&self.config.input_path_for(name)) {
                EntrySkipped {
                    filename: &name.to_string_lossy(),
                    reason: NOT_A_REGULAR_FILE,
                }
                .log();
                skipped_count += 1;
                continue;
            }

            if self.process_one(name) {
                success_count += 1;
            } else {
                failure_count += 1;
            }
        }

        BatchCompleted {
            success_count,
            failure_count,
            skipped_count,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(ProcessingStats {
            processed_files: self.processed_files,
            success_count,
            failure_count,
        })
    }
}

fn sorted_entry_names(dir: &Path) -> Result<Vec<OsString>, ProcessingError> {
    let list_error = |source| ProcessingError::ListInput {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = fs::read_dir(dir)
        .map_err(list_error)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(list_error)?;
    names.sort();
    Ok(names)
}

/// Follows symlinks, so a link to a regular file counts and a dangling link does not.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

fn read_text(path: &Path) -> Result<String, ProcessingError> {
    let file = File::open(path).map_err(|source| ProcessingError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .map_err(|source| ProcessingError::from_read(path.to_path_buf(), source))?;
    Ok(content)
}

fn write_text(path: &Path, content: &str) -> Result<(), ProcessingError> {
    let write_error = |source| ProcessingError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| ProcessingError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
