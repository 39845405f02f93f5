//! Extraction through external programs.
//!
//! Two strategies live here:
//!
//! - **Single-file**: `<tool> -k -c <src>` with stdout redirected into
//!   `<dest>/<basename of src>`. Used for standalone gz, bz2, xz and zst.
//! - **Archiver**: `7z x <src> -o<dest> -y` for 7z and rar archives.
//!
//! Standard error is always inherited so the tool's own diagnostics reach
//! the user. The archiver's stdout is inherited too, unless the config
//! routes it to stderr. The calling thread blocks until the process exits.

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use tracing::debug;
use tracing::warn;

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::formats::ArchiveType;
use crate::formats::CompressionCodec;
use crate::types::DestDir;

/// Decompresses a standalone compressed file with its external tool.
///
/// The output keeps the source's file name, extension included.
///
/// # Errors
///
/// - `UnsupportedCompressionType` for formats without a mapped tool
/// - `OutputCollision` if the output path is the source file itself
/// - `ToolNotFound` / `ToolFailed` for subprocess failures
pub fn decompress_single_file(
    format: ArchiveType,
    src: &Path,
    dest: &DestDir,
    config: &ExtractionConfig,
    report: &mut ExtractionReport,
) -> Result<()> {
    let codec = CompressionCodec::for_single_file(format)
        .ok_or(ExtractionError::UnsupportedCompressionType(format))?;
    let program = codec.decompressor(&config.tools);
    let binary = resolve_program(program)?;

    let file_name = src.file_name().ok_or_else(|| {
        ExtractionError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("source has no file name: {}", src.display()),
        ))
    })?;
    let output_path = dest.join_path(Path::new(file_name));
    check_collision(src, &output_path)?;

    let output = File::create(&output_path)?;
    let mut command = Command::new(&binary);
    command
        .arg("-k")
        .arg("-c")
        .arg(src)
        .stdin(Stdio::null())
        .stdout(Stdio::from(output))
        .stderr(Stdio::inherit());

    run(program, &mut command)?;

    report.files_extracted = 1;
    report.bytes_written = std::fs::metadata(&output_path)?.len();
    Ok(())
}

/// Extracts a 7z or rar archive with the configured 7z-compatible archiver.
///
/// The archiver overwrites existing files (`-y`). Entry-level counts are not
/// available for this strategy.
///
/// # Errors
///
/// Returns `ToolNotFound` or `ToolFailed` for subprocess failures.
pub fn extract_with_archiver(src: &Path, dest: &DestDir, config: &ExtractionConfig) -> Result<()> {
    let program = config.tools.archiver.as_str();
    let binary = resolve_program(program)?;

    let mut output_flag = OsString::from("-o");
    output_flag.push(dest.as_path());

    let stdout = if config.tool_stdout_to_stderr {
        Stdio::from(std::io::stderr())
    } else {
        Stdio::inherit()
    };

    let mut command = Command::new(&binary);
    command
        .arg("x")
        .arg(src)
        .arg(output_flag)
        .arg("-y")
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(Stdio::inherit());

    run(program, &mut command)
}

/// Looks up `program` on `PATH` (or checks it directly if it is a path).
fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|err| {
        debug!(program, %err, "external tool lookup failed");
        ExtractionError::ToolNotFound {
            program: program.to_string(),
        }
    })
}

/// Refuses to truncate the source by opening it as the output.
fn check_collision(src: &Path, output_path: &Path) -> Result<()> {
    let Ok(existing) = output_path.canonicalize() else {
        return Ok(());
    };
    if src.canonicalize()? == existing {
        return Err(ExtractionError::OutputCollision {
            path: output_path.to_path_buf(),
        });
    }
    Ok(())
}

fn run(program: &str, command: &mut Command) -> Result<()> {
    debug!(program, command = ?command, "running external tool");

    let status = command.status().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ExtractionError::ToolNotFound {
                program: program.to_string(),
            }
        } else {
            ExtractionError::Io(err)
        }
    })?;

    if !status.success() {
        warn!(program, %status, "external tool failed");
        return Err(ExtractionError::ToolFailed {
            program: program.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ExternalTools;
    use tempfile::TempDir;

    fn missing_tools() -> ExtractionConfig {
        ExtractionConfig::default().with_tools(ExternalTools {
            archiver: "unarch-missing-7z".to_string(),
            gunzip: "unarch-missing-gunzip".to_string(),
            bunzip2: "unarch-missing-bunzip2".to_string(),
            unxz: "unarch-missing-unxz".to_string(),
            unzstd: "unarch-missing-unzstd".to_string(),
        })
    }

    #[test]
    fn test_unsupported_single_file_types() {
        let temp = TempDir::new().unwrap();
        let dest = DestDir::create(temp.path()).unwrap();
        let mut report = ExtractionReport::new();

        for format in [ArchiveType::Lz, ArchiveType::Lzma] {
            let result = decompress_single_file(
                format,
                Path::new("data.lz"),
                &dest,
                &ExtractionConfig::default(),
                &mut report,
            );
            assert!(matches!(
                result,
                Err(ExtractionError::UnsupportedCompressionType(f)) if f == format
            ));
        }
    }

    #[test]
    fn test_missing_decompressor() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("data.gz");
        std::fs::write(&src, b"ignored").unwrap();
        let dest = DestDir::create(temp.path().join("out")).unwrap();
        let mut report = ExtractionReport::new();

        let result =
            decompress_single_file(ArchiveType::Gz, &src, &dest, &missing_tools(), &mut report);
        assert!(matches!(
            result,
            Err(ExtractionError::ToolNotFound { program }) if program == "unarch-missing-gunzip"
        ));
        assert!(!dest.as_path().join("data.gz").exists());
    }

    #[test]
    fn test_missing_archiver() {
        let temp = TempDir::new().unwrap();
        let dest = DestDir::create(temp.path()).unwrap();
        let result = extract_with_archiver(Path::new("a.7z"), &dest, &missing_tools());
        assert!(matches!(result, Err(ExtractionError::ToolNotFound { .. })));
    }

    #[test]
    fn test_collision_detected() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("data.xz");
        std::fs::write(&src, b"compressed").unwrap();

        let result = check_collision(&src, &temp.path().join("data.xz"));
        assert!(matches!(result, Err(ExtractionError::OutputCollision { .. })));
        assert_eq!(std::fs::read(&src).unwrap(), b"compressed");
    }

    #[test]
    fn test_no_collision_for_new_output() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("data.xz");
        std::fs::write(&src, b"compressed").unwrap();

        assert!(check_collision(&src, &temp.path().join("out/data.xz")).is_ok());
    }
}
