//! Data layer for the commodity ledger.
//!
//! Loads the monthly ledger files into a [`ProfitTable`], answers the fixed
//! set of profit queries over it, and assembles the full report.

pub mod queries;
pub mod reader;
pub mod report;

pub use ledger_core as core;

use ledger_core::ProfitTable;

use crate::queries::QueryEngine;
use crate::reader::{LoadSummary, SourceLayout};

/// A profit table together with the layout it is loaded from.
///
/// Loading needs `&mut self` and querying borrows `&self`, so no query can
/// observe a table that is halfway through a load.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    layout: SourceLayout,
    table: ProfitTable,
}

impl Ledger {
    /// An empty ledger reading from `layout`.
    pub fn new(layout: SourceLayout) -> Self {
        Self {
            layout,
            table: ProfitTable::new(),
        }
    }

    /// Read every month's file into the table. Missing files and bad lines
    /// are skipped; cells no file mentions keep their previous value.
    pub fn load(&mut self) {
        reader::load(&mut self.table, &self.layout);
    }

    /// [`Ledger::load`], additionally returning the load counters.
    pub fn load_with_summary(&mut self) -> LoadSummary {
        reader::load_with_summary(&mut self.table, &self.layout)
    }

    pub fn queries(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.table)
    }

    pub fn table(&self) -> &ProfitTable {
        &self.table
    }

    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }
}
