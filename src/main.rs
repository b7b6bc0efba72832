// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use dir_upcase::config::ProcessorConfig;
use dir_upcase::engine::{DirectoryProcessor, ProcessingStats};
use dir_upcase::errors::ProcessingError;
use dir_upcase::observability::init_logging;
use dir_upcase::observability::messages::engine::{InputListingFailed, OutputDirectoryReady};
use dir_upcase::observability::messages::StructuredLog;

fn main() -> ExitCode {
    let args: Vec<OsString> = env::args_os().collect();

    // Argument errors exit before anything touches the filesystem
    let config = match ProcessorConfig::from_args(&args) {
        Ok(config) => config,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::FAILURE;
        }
    };

    init_logging();

    match run(config) {
        Ok(stats) if stats.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            match e.downcast_ref::<ProcessingError>() {
                Some(ProcessingError::ListInput { path, .. }) => InputListingFailed {
                    input_dir: path,
                    error: &*e,
                }
                .log(),
                _ => tracing::error!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Prepare the output directory, run the batch and print the report.
fn run(config: ProcessorConfig) -> anyhow::Result<ProcessingStats> {
    fs::create_dir_all(config.output_dir()).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            config.output_dir().display()
        )
    })?;
    OutputDirectoryReady {
        output_dir: config.output_dir(),
    }
    .log();

    let mut processor = DirectoryProcessor::new(config);
    let stats = processor.process_all()?;

    println!("{}", stats.to_report().context("failed to serialize stats")?);
    Ok(stats)
}
