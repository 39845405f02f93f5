//! Integration tests for unarch-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use unarch_core::formats::CompressionCodec;
use unarch_core::test_utils::TarTestBuilder;
use unarch_core::test_utils::ZipTestBuilder;
use unarch_core::test_utils::compress;

fn unarch_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("unarch");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_fixture(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).expect("failed to write fixture");
    path
}

fn sample_zip(dir: &Path) -> PathBuf {
    let data = ZipTestBuilder::new()
        .add_file("a.txt", b"hello")
        .add_file("dir/b.txt", b"world")
        .build();
    write_fixture(dir, "archive.zip", &data)
}

#[test]
fn test_version_flag() {
    unarch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unarch"));
}

#[test]
fn test_help_flag() {
    unarch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detects and extracts archives"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_missing_argument_exits_one() {
    unarch_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ARCHIVE"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    unarch_cmd()
        .args(["a.zip", "--quiet", "--verbose"])
        .assert()
        .code(1);
}

#[test]
fn test_extract_zip() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_zip(temp.path());
    let out = temp.path().join("out");

    unarch_cmd()
        .arg(&archive)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("extraction complete."))
        .stdout(predicate::str::contains("Format: zip (container)"));

    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(out.join("dir/b.txt")).unwrap(), "world");
}

#[test]
fn test_extract_defaults_to_current_directory() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_zip(temp.path());
    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();

    unarch_cmd()
        .current_dir(&work)
        .arg(&archive)
        .assert()
        .success();

    assert!(work.join("a.txt").exists());
    assert!(work.join("dir/b.txt").exists());
}

#[test]
fn test_extract_tar_gz_by_magic() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let tar = TarTestBuilder::new()
        .add_directory("pkg/")
        .add_file("pkg/lib.rs", b"pub fn f() {}\n")
        .build();
    let archive = write_fixture(
        temp.path(),
        "download",
        &compress(CompressionCodec::Gzip, &tar),
    );
    let out = temp.path().join("out");

    unarch_cmd().arg(&archive).arg(&out).assert().success();

    assert_eq!(
        fs::read_to_string(out.join("pkg/lib.rs")).unwrap(),
        "pub fn f() {}\n"
    );
}

#[test]
fn test_extract_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_zip(temp.path());

    let output = unarch_cmd()
        .arg("--json")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "extract");
    assert_eq!(json["data"]["format"], "zip");
    assert_eq!(json["data"]["strategy"], "container");
    assert_eq!(json["data"]["files_extracted"], 2);
}

#[test]
fn test_quiet_prints_nothing() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_zip(temp.path());

    unarch_cmd()
        .arg("-q")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_format_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_fixture(temp.path(), "mystery.dat", &[0xDE, 0xAD, 0xBE, 0xEF]);
    let out = temp.path().join("out");

    unarch_cmd()
        .arg(&archive)
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown archive type"));

    assert!(!out.exists());
}

#[test]
fn test_unknown_format_json_error() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_fixture(temp.path(), "mystery.dat", b"????");

    let output = unarch_cmd()
        .arg("--json")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("mystery.dat"));
}

#[test]
fn test_nonexistent_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");

    unarch_cmd()
        .arg(temp.path().join("nonexistent.tar.gz"))
        .arg(temp.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_forced_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let tar = TarTestBuilder::new().add_file("inner.txt", b"inside").build();
    let archive = write_fixture(temp.path(), "blob.bin", &tar);
    let out = temp.path().join("out");

    unarch_cmd()
        .args(["--format", "TAR"])
        .arg(&archive)
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(out.join("inner.txt")).unwrap(), "inside");
}

#[test]
fn test_unsupported_forced_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_zip(temp.path());

    unarch_cmd()
        .args(["--format", "cpio"])
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported archive type 'cpio'"));
}

#[test]
fn test_lzma_single_file_unsupported() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_fixture(temp.path(), "data.lzma", b"\x5d\x00\x00\x80\x00");

    unarch_cmd()
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Unsupported single file compression type 'lzma'",
        ));
}

#[test]
fn test_missing_archiver() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_fixture(temp.path(), "bundle.rar", b"Rar!\x1a\x07\x00");

    unarch_cmd()
        .args(["--archiver", "unarch-test-no-such-7z"])
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "External tool 'unarch-test-no-such-7z' not found",
        ));
}

#[cfg(unix)]
#[test]
fn test_no_preserve_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("failed to create temp dir");
    let data = ZipTestBuilder::new()
        .add_file_with_mode("tool.sh", b"#!/bin/sh\n", 0o700)
        .build();
    let archive = write_fixture(temp.path(), "tool.zip", &data);
    let out = temp.path().join("out");

    unarch_cmd()
        .arg("--no-preserve-permissions")
        .arg(&archive)
        .arg(&out)
        .assert()
        .success();

    let mode = fs::metadata(out.join("tool.sh")).unwrap().permissions().mode();
    assert_ne!(mode & 0o777, 0o700);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = sample_zip(temp.path());

    unarch_cmd()
        .arg("--verbose")
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains("extracting archive"))
        .stdout(predicate::str::contains("Duration"));
}

#[cfg(unix)]
#[test]
fn test_json_output_survives_archiver_stdout() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("failed to create temp dir");
    let bin = TempDir::new().expect("failed to create temp dir");
    let archiver = bin.path().join("7z");
    fs::write(
        &archiver,
        "#!/bin/sh\necho 'Extracting archive: x'\necho 'Everything is Ok'\n",
    )
    .unwrap();
    fs::set_permissions(&archiver, fs::Permissions::from_mode(0o755)).unwrap();
    let archive = write_fixture(temp.path(), "bundle.7z", b"7z\xbc\xaf\x27\x1c\x00\x04");

    let assert = unarch_cmd()
        .arg("--json")
        .arg("--archiver")
        .arg(&archiver)
        .arg(&archive)
        .arg(temp.path().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Everything is Ok"));

    let json: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["format"], "7z");
    assert_eq!(json["data"]["strategy"], "external-archiver");
}
