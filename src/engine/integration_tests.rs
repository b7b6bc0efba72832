// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Batch-level scenarios for `DirectoryProcessor` against real directories.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::config::ProcessorConfig;
use crate::engine::{DirectoryProcessor, ProcessingStats};
use crate::errors::ProcessingError;
use crate::traits::TextTransform;

fn write_inputs(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn processor_for(input: &Path, output: &Path) -> DirectoryProcessor {
    DirectoryProcessor::new(ProcessorConfig::new(input, output))
}

/// Records the content it sees, in order, and passes it through unchanged.
struct RecordingTransform {
    seen: Arc<Mutex<Vec<String>>>,
}

impl TextTransform for RecordingTransform {
    fn apply(&self, input: &str) -> String {
        self.seen.lock().unwrap().push(input.to_string());
        input.to_string()
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[test]
fn test_counts_cover_every_regular_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(
        input.path(),
        &[("a.txt", "alpha"), ("b.md", "# beta"), ("c.csv", "x,y\n1,2\n")],
    );

    let stats = processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(
        stats,
        ProcessingStats {
            processed_files: 3,
            success_count: 3,
            failure_count: 0,
        }
    );
    assert_eq!(stats.attempted(), 3);
}

#[test]
fn test_output_content_is_uppercased_input() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(
        input.path(),
        &[
            ("mixed.txt", "Hello, World!\n\tline two: 123\n"),
            ("unicode.txt", "grüße aus köln"),
        ],
    );

    processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("processed_mixed.txt")).unwrap(),
        "HELLO, WORLD!\n\tLINE TWO: 123\n"
    );
    assert_eq!(
        fs::read_to_string(output.path().join("processed_unicode.txt")).unwrap(),
        "GRÜSSE AUS KÖLN"
    );
}

#[test]
fn test_second_run_overwrites_instead_of_appending() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(input.path(), &[("a.txt", "same input")]);
    fs::write(output.path().join("processed_a.txt"), "stale content that is longer").unwrap();

    processor_for(input.path(), output.path())
        .process_all()
        .unwrap();
    let first = fs::read_to_string(output.path().join("processed_a.txt")).unwrap();

    processor_for(input.path(), output.path())
        .process_all()
        .unwrap();
    let second = fs::read_to_string(output.path().join("processed_a.txt")).unwrap();

    assert_eq!(first, "SAME INPUT");
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_directory() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let stats = processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(stats, ProcessingStats::default());
    assert!(!stats.is_success());
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_one_unreadable_file_among_many() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(input.path(), &[("one.txt", "one"), ("three.txt", "three")]);
    fs::write(input.path().join("two.bin"), [0xc3u8, 0x28, 0xa0, 0xa1]).unwrap();

    let stats = processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(stats.success_count, 2);
    assert_eq!(stats.failure_count, 1);
    assert!(stats.is_success());
    assert!(output.path().join("processed_one.txt").exists());
    assert!(output.path().join("processed_three.txt").exists());
    assert!(!output.path().join("processed_two.bin").exists());
}

#[test]
fn test_processed_files_counts_successes_only() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(input.path(), &[("good.txt", "ok")]);
    fs::write(input.path().join("bad.bin"), [0xffu8]).unwrap();

    let stats = processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(stats.failure_count, 1);
    assert_eq!(stats.processed_files, stats.success_count);
    assert_eq!(stats.processed_files, 1);
}

#[test]
fn test_processed_files_accumulates_across_batches_on_one_instance() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(input.path(), &[("a.txt", "a"), ("b.txt", "b")]);

    let mut processor = processor_for(input.path(), output.path());
    let first = processor.process_all().unwrap();
    let second = processor.process_all().unwrap();

    assert_eq!(first.processed_files, 2);
    assert_eq!(second.success_count, 2);
    assert_eq!(second.processed_files, 4);
}

#[test]
fn test_subdirectories_are_skipped_and_not_counted() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(input.path(), &[("top.txt", "top")]);
    fs::create_dir(input.path().join("nested")).unwrap();
    fs::write(input.path().join("nested").join("deep.txt"), "deep").unwrap();

    let stats = processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(stats.attempted(), 1);
    assert_eq!(stats.failure_count, 0);
    assert!(!output.path().join("processed_nested").exists());
    assert!(!output.path().join("processed_deep.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinks_follow_their_target() {
    use std::os::unix::fs::symlink;

    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    fs::write(elsewhere.path().join("target.txt"), "linked").unwrap();
    symlink(elsewhere.path().join("target.txt"), input.path().join("link.txt")).unwrap();
    symlink(elsewhere.path().join("missing.txt"), input.path().join("dangling.txt")).unwrap();
    symlink(elsewhere.path(), input.path().join("dir_link")).unwrap();

    let stats = processor_for(input.path(), output.path())
        .process_all()
        .unwrap();

    assert_eq!(stats.success_count, 1);
    assert_eq!(stats.failure_count, 0);
    assert_eq!(
        fs::read_to_string(output.path().join("processed_link.txt")).unwrap(),
        "LINKED"
    );
}

#[test]
fn test_missing_output_directory_fails_every_file_without_aborting() {
    let input = TempDir::new().unwrap();
    write_inputs(input.path(), &[("a.txt", "a"), ("b.txt", "b")]);
    let output = input.path().join("never_created");

    let stats = processor_for(input.path(), &output).process_all().unwrap();

    assert_eq!(stats.success_count, 0);
    assert_eq!(stats.failure_count, 2);
    assert!(!stats.is_success());
}

#[test]
fn test_missing_input_directory_is_a_listing_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("no_such_dir");

    let err = processor_for(&missing, root.path())
        .process_all()
        .unwrap_err();

    assert!(matches!(err, ProcessingError::ListInput { .. }));
    assert!(err.to_string().contains("no_such_dir"));
}

#[test]
fn test_entries_are_processed_in_name_order() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_inputs(
        input.path(),
        &[("c.txt", "c"), ("a.txt", "a"), ("b.txt", "b"), ("Z.txt", "Z")],
    );

    let seen = Arc::new(Mutex::new(Vec::new()));
    let transform = RecordingTransform { seen: Arc::clone(&seen) };
    let mut processor = DirectoryProcessor::with_transform(
        ProcessorConfig::new(input.path(), output.path()),
        Box::new(transform),
    );

    processor.process_all().unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["Z", "a", "b", "c"]);
    assert_eq!(
        fs::read_to_string(output.path().join("processed_a.txt")).unwrap(),
        "a"
    );
}
