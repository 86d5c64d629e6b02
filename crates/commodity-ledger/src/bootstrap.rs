use ledger_data::reader::SourceLayout;
use ledger_core::settings::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` value to an [`EnvFilter`] directive.
///
/// Unrecognised levels fall back to `"info"`.
pub fn filter_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}

/// Initialise the global `tracing` subscriber. Log output goes to stderr so
/// query results on stdout stay machine-readable.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter_directive(log_level))?;

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Source layout ──────────────────────────────────────────────────────────────

/// Where the monthly ledger files are read from.
pub fn source_layout(settings: &Settings) -> SourceLayout {
    SourceLayout::new(settings.data_dir.clone(), settings.extension.clone())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
