mod bootstrap;

use anyhow::Result;
use ledger_core::settings::Settings;
use ledger_data::report::run_query;
use ledger_data::Ledger;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;
    settings.validate()?;

    tracing::info!("Commodity Ledger v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Data dir: {}, extension: {}, format: {}",
        settings.data_dir.display(),
        settings.extension,
        settings.format
    );

    let mut ledger = Ledger::new(bootstrap::source_layout(&settings));
    let summary = ledger.load_with_summary();
    tracing::debug!("Load took {:.3}s", summary.load_time_seconds);
    tracing::info!("Data loaded – ready for queries");

    let command = settings.query();
    let output = run_query(&ledger.queries(), &command);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if settings.wants_json() {
        output.write_json(&mut out)?;
    } else {
        output.write_text(&mut out)?;
    }

    Ok(())
}
