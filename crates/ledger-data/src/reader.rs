//! Monthly ledger file loading.
//!
//! Reads one `Day,Commodity,Profit` file per month and writes every accepted
//! record into a [`ProfitTable`]. Nothing in here fails loudly: a missing
//! file, an undecodable line or a rejected record is logged at debug level
//! and skipped, and loading carries on with the next unit.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use ledger_core::catalog::MONTH_CATALOG;
use ledger_core::{Commodity, Day, LedgerError, Month, ProfitTable};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Optional first line of a ledger file.
pub const HEADER: &str = "Day,Commodity,Profit";

// ── SourceLayout ──────────────────────────────────────────────────────────────

/// Where the ledger file of each month lives: `<data_dir>/<Month>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub data_dir: PathBuf,
    pub extension: String,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self::new("Data_Files", "txt")
    }
}

impl SourceLayout {
    pub fn new(data_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            extension: extension.into(),
        }
    }

    /// Path of the ledger file for `month`, e.g. `Data_Files/March.txt`.
    pub fn path_for(&self, month: Month) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", month.name(), self.extension))
    }

    /// Fails with [`LedgerError::DataPathNotFound`] when the data directory
    /// is absent. Loading treats this as a warning only.
    pub fn ensure_exists(&self) -> ledger_core::Result<()> {
        if self.data_dir.is_dir() {
            Ok(())
        } else {
            Err(LedgerError::DataPathNotFound(self.data_dir.clone()))
        }
    }
}

// ── Record parsing ────────────────────────────────────────────────────────────

/// One accepted `Day,Commodity,Profit` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub day: Day,
    pub commodity: Commodity,
    pub profit: i32,
}

/// Why a data line was not written into the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordRejection {
    /// The line did not split into exactly three fields.
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),

    /// The day field is not an integer.
    #[error("day is not an integer: {0:?}")]
    InvalidDay(String),

    /// The profit field is not an integer.
    #[error("profit is not an integer: {0:?}")]
    InvalidProfit(String),

    /// The commodity is not in the catalog.
    #[error("unknown commodity: {0:?}")]
    UnknownCommodity(String),

    /// The day lies outside `1..=28`.
    #[error("day out of range: {0}")]
    DayOutOfRange(i32),
}

/// Parse one trimmed, non-empty data line.
///
/// Trailing empty fields are ignored, so `5,Gold,100,` parses like
/// `5,Gold,100`.
pub fn parse_record(line: &str) -> Result<Record, RecordRejection> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    let [day, commodity, profit] = fields[..] else {
        return Err(RecordRejection::FieldCount(fields.len()));
    };
    let (day, commodity, profit) = (day.trim(), commodity.trim(), profit.trim());

    let day_number: i32 = day
        .parse()
        .map_err(|_| RecordRejection::InvalidDay(day.to_string()))?;
    let profit: i32 = profit
        .parse()
        .map_err(|_| RecordRejection::InvalidProfit(profit.to_string()))?;
    let commodity = Commodity::from_name(commodity)
        .ok_or_else(|| RecordRejection::UnknownCommodity(commodity.to_string()))?;
    let day = Day::from_number(i64::from(day_number))
        .ok_or(RecordRejection::DayOutOfRange(day_number))?;

    Ok(Record {
        day,
        commodity,
        profit,
    })
}

// ── Load statistics ───────────────────────────────────────────────────────────

/// Counters for one month's source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthLoad {
    /// Records written into the table.
    pub accepted: usize,
    /// Non-empty data lines that were dropped.
    pub rejected: usize,
    /// Whether the first line was the column header.
    pub header_skipped: bool,
}

/// Counters for a whole [`load_with_summary`] run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadSummary {
    /// Months whose source could be opened.
    pub months_found: usize,
    /// Months skipped because their source could not be opened.
    pub months_missing: usize,
    pub records_accepted: usize,
    pub records_rejected: usize,
    /// Wall-clock seconds spent loading.
    pub load_time_seconds: f64,
}

impl LoadSummary {
    fn add_month(&mut self, month: &MonthLoad) {
        self.months_found += 1;
        self.records_accepted += month.accepted;
        self.records_rejected += month.rejected;
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Populate `table` from every month's ledger file under `layout`.
///
/// Cells that no file mentions keep their current value; the table is never
/// reset first.
pub fn load(table: &mut ProfitTable, layout: &SourceLayout) {
    load_with_summary(table, layout);
}

/// [`load`], additionally returning counters for logging.
pub fn load_with_summary(table: &mut ProfitTable, layout: &SourceLayout) -> LoadSummary {
    let start = std::time::Instant::now();
    let mut summary = LoadSummary::default();

    if let Err(e) = layout.ensure_exists() {
        warn!("{}", e);
    }

    for month in MONTH_CATALOG {
        let path = layout.path_for(month);
        let reader = match open_source(&path) {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping {}: {}", month.name(), e);
                summary.months_missing += 1;
                continue;
            }
        };

        let stats = load_month_from_reader(table, month, reader);
        debug!(
            "{} ({}): {} accepted, {} rejected",
            month.name(),
            path.display(),
            stats.accepted,
            stats.rejected,
        );
        summary.add_month(&stats);
    }

    summary.load_time_seconds = start.elapsed().as_secs_f64();
    info!(
        "Loaded {} records from {} month files ({} missing, {} lines rejected)",
        summary.records_accepted,
        summary.months_found,
        summary.months_missing,
        summary.records_rejected,
    );

    summary
}

/// Read one month's records from any line source into `table`.
pub fn load_month_from_reader<R: BufRead>(
    table: &mut ProfitTable,
    month: Month,
    reader: R,
) -> MonthLoad {
    let mut stats = MonthLoad::default();

    for (line_no, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(l) => l,
            // Invalid UTF-8 consumes the line, so reading can go on.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!("{} line {}: {}", month.name(), line_no + 1, e);
                continue;
            }
            Err(e) => {
                debug!("{}: stopped reading: {}", month.name(), e);
                break;
            }
        };
        let trimmed = line.trim();

        if line_no == 0 && trimmed == HEADER {
            stats.header_skipped = true;
            continue;
        }
        if trimmed.is_empty() {
            continue;
        }

        match parse_record(trimmed) {
            Ok(record) => {
                table.set(month, record.day, record.commodity, record.profit);
                stats.accepted += 1;
            }
            Err(reason) => {
                debug!("{} line {}: {}", month.name(), line_no + 1, reason);
                stats.rejected += 1;
            }
        }
    }

    stats
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn open_source(path: &Path) -> ledger_core::Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LedgerError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
