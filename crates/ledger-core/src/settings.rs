use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::{LedgerError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Profit analytics over monthly commodity ledgers
#[derive(Parser, Debug, Clone)]
#[command(
    name = "commodity-ledger",
    about = "Profit analytics over monthly commodity ledgers",
    version
)]
pub struct Settings {
    /// Directory holding one ledger file per month
    #[arg(long, default_value = "Data_Files")]
    pub data_dir: PathBuf,

    /// Extension of the monthly ledger files
    #[arg(long, default_value = "txt")]
    pub extension: String,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Query to run; prints the full report when omitted
    #[command(subcommand)]
    pub command: Option<QueryCommand>,
}

// ── QueryCommand ───────────────────────────────────────────────────────────────

/// One query against the loaded ledger. Months are zero-based (0 = January),
/// days are 1-based.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Full report over every month and commodity
    Summary,

    /// Most profitable commodity in a month
    BestCommodity {
        #[arg(long, allow_negative_numbers = true)]
        month: i32,
    },

    /// Total profit of all commodities on one day
    DayTotal {
        #[arg(long, allow_negative_numbers = true)]
        month: i32,
        #[arg(long, allow_negative_numbers = true)]
        day: i32,
    },

    /// Profit of a commodity over a day range, across all months
    RangeProfit {
        #[arg(long)]
        commodity: String,
        #[arg(long, allow_negative_numbers = true)]
        from: i32,
        #[arg(long, allow_negative_numbers = true)]
        to: i32,
    },

    /// Day of a month with the highest total profit
    BestDay {
        #[arg(long, allow_negative_numbers = true)]
        month: i32,
    },

    /// Month with the highest total profit for a commodity
    BestMonth {
        #[arg(long)]
        commodity: String,
    },

    /// Longest run of loss days for a commodity
    LossStreak {
        #[arg(long)]
        commodity: String,
    },

    /// Number of days a commodity earned more than a threshold
    DaysAbove {
        #[arg(long)]
        commodity: String,
        #[arg(long, allow_negative_numbers = true)]
        threshold: i32,
    },

    /// Largest change in total profit between consecutive days of a month
    Swing {
        #[arg(long, allow_negative_numbers = true)]
        month: i32,
    },

    /// Compare the yearly totals of two commodities
    Compare { first: String, second: String },

    /// Week of a month with the highest total profit
    BestWeek {
        #[arg(long, allow_negative_numbers = true)]
        month: i32,
    },
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        Self::resolve(Settings::parse_from(args))
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Reject values that cannot name a ledger file.
    pub fn validate(&self) -> Result<()> {
        let ext = self.extension.as_str();
        if ext.trim().is_empty() {
            return Err(LedgerError::Config(
                "extension must not be empty".to_string(),
            ));
        }
        if ext.starts_with('.') {
            return Err(LedgerError::Config(format!(
                "extension must be given without a leading dot: {}",
                ext
            )));
        }
        if ext.contains(['/', '\\', '\0']) {
            return Err(LedgerError::Config(format!(
                "extension must not contain path separators: {}",
                ext
            )));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(LedgerError::Config(
                "data directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The query to run, falling back to the full report.
    pub fn query(&self) -> QueryCommand {
        self.command.clone().unwrap_or(QueryCommand::Summary)
    }

    /// Whether results should be rendered as JSON.
    pub fn wants_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
