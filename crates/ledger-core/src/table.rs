//! Dense profit storage indexed by (month, day, commodity).

use chrono::Month;

use crate::catalog::{month_index, Commodity, Day, COMMODITIES, DAYS, MONTHS, MONTH_CATALOG};

/// Daily profits for every month, day and commodity of the ledger year.
///
/// Cells start at zero, so a day without a record reads the same as a
/// recorded break-even. The table is written through `&mut` while loading
/// and only read through `&` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitTable {
    cells: [[[i32; COMMODITIES]; DAYS]; MONTHS],
}

impl Default for ProfitTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfitTable {
    /// An all-zero table.
    pub fn new() -> Self {
        Self {
            cells: [[[0; COMMODITIES]; DAYS]; MONTHS],
        }
    }

    /// Profit recorded for one cell.
    pub fn get(&self, month: Month, day: Day, commodity: Commodity) -> i32 {
        self.cells[month_index(month)][day.index()][commodity.index()]
    }

    /// Overwrite one cell.
    pub fn set(&mut self, month: Month, day: Day, commodity: Commodity, profit: i32) {
        self.cells[month_index(month)][day.index()][commodity.index()] = profit;
    }

    /// Sum of every commodity's profit on one day.
    pub fn day_total(&self, month: Month, day: Day) -> i64 {
        self.cells[month_index(month)][day.index()]
            .iter()
            .map(|&p| i64::from(p))
            .sum()
    }

    /// Sum of every commodity's profit over the days `first..=last`.
    pub fn days_total(&self, month: Month, first: Day, last: Day) -> i64 {
        Day::all()
            .filter(|&day| first <= day && day <= last)
            .map(|day| self.day_total(month, day))
            .sum()
    }

    /// One commodity's profit summed over a whole month.
    pub fn month_total(&self, month: Month, commodity: Commodity) -> i64 {
        self.cells[month_index(month)]
            .iter()
            .map(|day| i64::from(day[commodity.index()]))
            .sum()
    }

    /// One commodity's profit summed over the whole year.
    pub fn year_total(&self, commodity: Commodity) -> i64 {
        MONTH_CATALOG
            .iter()
            .map(|&m| self.month_total(m, commodity))
            .sum()
    }

    /// One commodity's daily profits as a single 336-day timeline, month
    /// by month and day by day within each month.
    pub fn timeline(&self, commodity: Commodity) -> impl Iterator<Item = i32> + '_ {
        let c = commodity.index();
        self.cells
            .iter()
            .flat_map(move |month| month.iter().map(move |day| day[c]))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
