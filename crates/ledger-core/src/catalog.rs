//! Month and commodity catalogs.
//!
//! Both catalogs are closed and ordered: the position of an entry is its
//! index into the corresponding axis of [`crate::table::ProfitTable`].

use std::fmt;

pub use chrono::Month;
use serde::{Deserialize, Serialize};

/// Number of months in the table's first axis.
pub const MONTHS: usize = 12;
/// Number of days per month in the table's second axis.
pub const DAYS: usize = 28;
/// Number of tracked commodities in the table's third axis.
pub const COMMODITIES: usize = 5;

// ── Commodity ─────────────────────────────────────────────────────────────────

/// A tracked commodity. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Commodity {
    Gold,
    Oil,
    Silver,
    Wheat,
    Copper,
}

impl Commodity {
    /// Every commodity in catalog order.
    pub const ALL: [Commodity; COMMODITIES] = [
        Commodity::Gold,
        Commodity::Oil,
        Commodity::Silver,
        Commodity::Wheat,
        Commodity::Copper,
    ];

    /// Resolve a commodity by its exact, case-sensitive name.
    ///
    /// Returns `None` for any name outside the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Catalog name, e.g. `"Gold"`.
    pub const fn name(self) -> &'static str {
        match self {
            Commodity::Gold => "Gold",
            Commodity::Oil => "Oil",
            Commodity::Silver => "Silver",
            Commodity::Wheat => "Wheat",
            Commodity::Copper => "Copper",
        }
    }

    /// Position in the catalog.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Months ────────────────────────────────────────────────────────────────────

/// Every month in calendar order.
pub const MONTH_CATALOG: [Month; MONTHS] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Look up a month by its zero-based catalog index (`0` = January).
pub fn month_at(index: i32) -> Option<Month> {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTH_CATALOG.get(i).copied())
}

/// Zero-based catalog index of `month`.
pub fn month_index(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

// ── Day ───────────────────────────────────────────────────────────────────────

/// A zero-based day within a month, always below [`DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(usize);

impl Day {
    /// Day 1 of a month.
    pub const FIRST: Day = Day(0);

    /// Build a day from its 1-based calendar number.
    ///
    /// Returns `None` unless `number` lies in `1..=28`.
    pub fn from_number(number: i64) -> Option<Self> {
        Self::from_index(number.checked_sub(1)?)
    }

    /// Build a day from a zero-based index, `None` outside `0..28`.
    pub fn from_index(index: i64) -> Option<Self> {
        let index = usize::try_from(index).ok()?;
        (index < DAYS).then_some(Day(index))
    }

    /// Every day of a month in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Day> + ExactSizeIterator {
        (0..DAYS).map(Day)
    }

    /// Zero-based index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based calendar number.
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
