use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};


/// Sets up console (stderr) and daily-rolling file output, each with its own filter.
///
/// The returned guard flushes the file writer when dropped, so it must be kept
/// alive until the program exits.
pub fn initialize_tracing<P>(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: P,
    log_file_name_prefix: &str,
) -> Result<WorkerGuard>
where
    P: AsRef<Path>,
{
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(log_file_name_prefix)
        .build(log_file_output_directory.as_ref())
        .into_diagnostic()
        .wrap_err_with(|| {
            format!(
                "Failed to initialize rolling log file appender in {}.",
                log_file_output_directory.as_ref().display()
            )
        })?;

    let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);


    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_level_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_file_writer)
        .with_filter(log_file_level_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to set up global tracing subscriber.")?;

    Ok(guard)
}
