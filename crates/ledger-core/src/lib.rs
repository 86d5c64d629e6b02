//! Core types for the commodity ledger.
//!
//! Holds the fixed month and commodity catalogs, the dense [`table::ProfitTable`]
//! that every query reads from, the shared error type, CLI settings and the
//! number formatting used by the text report.

pub mod catalog;
pub mod error;
pub mod formatting;
pub mod settings;
pub mod table;

pub use catalog::{Commodity, Day, Month, COMMODITIES, DAYS, MONTHS, MONTH_CATALOG};
pub use error::{LedgerError, Result};
pub use table::ProfitTable;
