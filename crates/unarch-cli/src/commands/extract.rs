//! Extract command implementation.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use std::env;
use unarch_core::ArchiveBuilder;
use unarch_core::ArchiveType;
use unarch_core::ExtractionConfig;
use unarch_core::NoopProgress;
use unarch_core::Strategy;
use unarch_core::detect_format;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &cli.destination {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let forced = add_archive_context(
        cli.format
            .as_deref()
            .map(str::parse::<ArchiveType>)
            .transpose(),
        &cli.archive,
    )?;
    let format = match forced {
        Some(format) => format,
        None => add_archive_context(detect_format(&cli.archive), &cli.archive)?,
    };

    let mut config = ExtractionConfig::default()
        .with_preserve_permissions(!cli.no_preserve_permissions)
        .with_tool_stdout_to_stderr(cli.json);
    if let Some(archiver) = &cli.archiver {
        config = config.with_archiver(archiver.as_str());
    }

    let builder = ArchiveBuilder::new(&cli.archive)
        .output_dir(&output_dir)
        .format(Some(format))
        .config(config);

    let report = if show_spinner(cli, format.strategy()) {
        let mut progress = CliProgress::new("Extracting");
        add_archive_context(builder.extract_with_progress(&mut progress), &cli.archive)?
    } else {
        add_archive_context(
            builder.extract_with_progress(&mut NoopProgress),
            &cli.archive,
        )?
    };

    formatter.format_extraction_result(&cli.archive, &output_dir, &report)?;

    Ok(())
}

/// Spinner only for in-process strategies on an interactive stdout with
/// human output. External tools write to the terminal themselves.
fn show_spinner(cli: &Cli, strategy: Strategy) -> bool {
    let in_process = matches!(strategy, Strategy::Container | Strategy::StreamingTar);
    in_process && !cli.quiet && !cli.json && CliProgress::should_show()
}
