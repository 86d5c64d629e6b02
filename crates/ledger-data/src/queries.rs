//! Read-only profit queries over a loaded [`ProfitTable`].
//!
//! Every query comes in two layers. The typed methods (`best_commodity`,
//! `loss_streak`, ...) take already-resolved catalog values and cannot fail.
//! The primitive methods (`most_profitable_commodity_in_month`, ...) take raw
//! integers and names, resolve them once, and answer an invalid argument
//! with that query's sentinel value instead of an error.

use ledger_core::catalog::{month_at, MONTH_CATALOG};
use ledger_core::{Commodity, Day, Month, ProfitTable, DAYS};

/// Returned by string queries given a month outside `0..12`.
pub const INVALID_MONTH: &str = "INVALID_MONTH";
/// Returned by string queries given a name outside the commodity catalog.
pub const INVALID_COMMODITY: &str = "INVALID_COMMODITY";
/// Returned by sum queries given invalid arguments.
pub const INVALID_QUERY: i64 = -99999;
/// Returned by index and count queries given invalid arguments.
pub const NOT_FOUND: i64 = -1;

/// Number of 7-day weeks in a month.
pub const WEEKS: usize = 4;
const WEEK_LENGTH: usize = DAYS / WEEKS;

// ── QueryEngine ───────────────────────────────────────────────────────────────

/// Stateless view answering queries against a borrowed table.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    table: &'a ProfitTable,
}

impl<'a> QueryEngine<'a> {
    pub fn new(table: &'a ProfitTable) -> Self {
        Self { table }
    }

    // ── Typed queries ─────────────────────────────────────────────────────────

    /// Commodity with the highest total for `month`, with that total.
    pub fn best_commodity(&self, month: Month) -> (Commodity, i64) {
        first_max(Commodity::ALL, Commodity::Gold, |c| {
            self.table.month_total(month, c)
        })
    }

    /// Sum over every month of `commodity`'s profit on days `from..=to`.
    pub fn range_total(&self, commodity: Commodity, from: Day, to: Day) -> i64 {
        let mut total = 0;
        for month in MONTH_CATALOG {
            for day in Day::all().filter(|&day| from <= day && day <= to) {
                total += i64::from(self.table.get(month, day, commodity));
            }
        }
        total
    }

    /// Day of `month` with the highest cross-commodity total.
    pub fn best_day(&self, month: Month) -> Day {
        first_max(Day::all(), Day::FIRST, |day| self.table.day_total(month, day)).0
    }

    /// Month with the highest total for `commodity`.
    pub fn best_month(&self, commodity: Commodity) -> Month {
        first_max(MONTH_CATALOG, Month::January, |month| {
            self.table.month_total(month, commodity)
        })
        .0
    }

    /// Longest run of loss days for `commodity`.
    ///
    /// The year is one 336-day timeline: a run ending on day 28 continues
    /// into day 1 of the next month.
    pub fn loss_streak(&self, commodity: Commodity) -> usize {
        let mut longest = 0;
        let mut current = 0;
        for profit in self.table.timeline(commodity) {
            if profit < 0 {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }

    /// Number of days on which `commodity` earned strictly more than `threshold`.
    pub fn days_above(&self, commodity: Commodity, threshold: i32) -> usize {
        self.table
            .timeline(commodity)
            .filter(|&profit| profit > threshold)
            .count()
    }

    /// Largest absolute change in cross-commodity total between two
    /// consecutive days of `month`. Zero when every day is equal.
    pub fn biggest_swing(&self, month: Month) -> i64 {
        let totals: Vec<i64> = Day::all()
            .map(|day| self.table.day_total(month, day))
            .collect();
        totals
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .max()
            .unwrap_or(0)
    }

    /// 1-based week of `month` with the highest cross-commodity total.
    pub fn best_week(&self, month: Month) -> usize {
        first_max(1..=WEEKS, 1, |week| self.week_total(month, week)).0
    }

    /// Cross-commodity total of a 1-based week: days 1-7, 8-14, 15-21, 22-28.
    /// Weeks outside `1..=4` total zero.
    pub fn week_total(&self, month: Month, week: usize) -> i64 {
        let Some(offset) = week
            .checked_sub(1)
            .and_then(|w| w.checked_mul(WEEK_LENGTH))
        else {
            return 0;
        };
        let first = i64::try_from(offset).ok().and_then(Day::from_index);
        let last = offset
            .checked_add(WEEK_LENGTH - 1)
            .and_then(|i| i64::try_from(i).ok())
            .and_then(Day::from_index);
        match (first, last) {
            (Some(first), Some(last)) => self.table.days_total(month, first, last),
            _ => 0,
        }
    }

    /// Cross-commodity total of a whole month.
    pub fn month_total(&self, month: Month) -> i64 {
        Commodity::ALL
            .into_iter()
            .map(|c| self.table.month_total(month, c))
            .sum()
    }

    /// `commodity`'s total over the whole year.
    pub fn year_total(&self, commodity: Commodity) -> i64 {
        self.table.year_total(commodity)
    }

    // ── Primitive queries ─────────────────────────────────────────────────────

    /// `"<Commodity> <total>"` for the month's best commodity, or
    /// [`INVALID_MONTH`].
    pub fn most_profitable_commodity_in_month(&self, month: i32) -> String {
        let Some(month) = month_at(month) else {
            return INVALID_MONTH.to_string();
        };
        let (commodity, total) = self.best_commodity(month);
        format!("{} {}", commodity.name(), total)
    }

    /// Cross-commodity total for a 1-based `day`, or [`INVALID_QUERY`].
    pub fn total_profit_on_day(&self, month: i32, day: i32) -> i64 {
        match (month_at(month), Day::from_number(i64::from(day))) {
            (Some(month), Some(day)) => self.table.day_total(month, day),
            _ => INVALID_QUERY,
        }
    }

    /// `commodity`'s profit over 1-based days `from..=to` across all months,
    /// or [`INVALID_QUERY`] for an unknown commodity or bad range.
    pub fn commodity_profit_in_range(&self, commodity: &str, from: i32, to: i32) -> i64 {
        let Some(commodity) = Commodity::from_name(commodity) else {
            return INVALID_QUERY;
        };
        match (
            Day::from_number(i64::from(from)),
            Day::from_number(i64::from(to)),
        ) {
            (Some(from), Some(to)) if from <= to => self.range_total(commodity, from, to),
            _ => INVALID_QUERY,
        }
    }

    /// 1-based best day of `month`, or [`NOT_FOUND`].
    pub fn best_day_of_month(&self, month: i32) -> i64 {
        match month_at(month) {
            Some(month) => self.best_day(month).number() as i64,
            None => NOT_FOUND,
        }
    }

    /// Name of `commodity`'s best month, or [`INVALID_COMMODITY`].
    pub fn best_month_for_commodity(&self, commodity: &str) -> String {
        match Commodity::from_name(commodity) {
            Some(commodity) => self.best_month(commodity).name().to_string(),
            None => INVALID_COMMODITY.to_string(),
        }
    }

    /// Longest loss streak of `commodity`, or [`NOT_FOUND`].
    pub fn consecutive_loss_days(&self, commodity: &str) -> i64 {
        match Commodity::from_name(commodity) {
            Some(commodity) => self.loss_streak(commodity) as i64,
            None => NOT_FOUND,
        }
    }

    /// Days on which `commodity` beat `threshold`, or [`NOT_FOUND`].
    pub fn days_above_threshold(&self, commodity: &str, threshold: i32) -> i64 {
        match Commodity::from_name(commodity) {
            Some(commodity) => self.days_above(commodity, threshold) as i64,
            None => NOT_FOUND,
        }
    }

    /// Biggest day-to-day swing of `month`, or [`INVALID_QUERY`].
    pub fn biggest_daily_swing(&self, month: i32) -> i64 {
        match month_at(month) {
            Some(month) => self.biggest_swing(month),
            None => INVALID_QUERY,
        }
    }

    /// `"<Name> is better by <margin>"`, `"Equal"`, or [`INVALID_COMMODITY`]
    /// when either name is unknown.
    pub fn compare_two_commodities(&self, first: &str, second: &str) -> String {
        let (Some(a), Some(b)) = (Commodity::from_name(first), Commodity::from_name(second))
        else {
            return INVALID_COMMODITY.to_string();
        };
        let (total_a, total_b) = (self.year_total(a), self.year_total(b));
        match total_a.cmp(&total_b) {
            std::cmp::Ordering::Greater => format!("{} is better by {}", a, total_a - total_b),
            std::cmp::Ordering::Less => format!("{} is better by {}", b, total_b - total_a),
            std::cmp::Ordering::Equal => "Equal".to_string(),
        }
    }

    /// `"Week N"` for the best week of `month`, or [`INVALID_MONTH`].
    pub fn best_week_of_month(&self, month: i32) -> String {
        match month_at(month) {
            Some(month) => format!("Week {}", self.best_week(month)),
            None => INVALID_MONTH.to_string(),
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Highest-scoring candidate, scanning in order. A later candidate replaces
/// the current one only with a strictly greater score, so ties go to the
/// earliest. `fallback` is only returned when `candidates` is empty.
fn first_max<T: Copy>(
    candidates: impl IntoIterator<Item = T>,
    fallback: T,
    score: impl Fn(T) -> i64,
) -> (T, i64) {
    candidates
        .into_iter()
        .fold((fallback, i64::MIN), |best, next| {
            let total = score(next);
            if total > best.1 {
                (next, total)
            } else {
                best
            }
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> Day {
        Day::from_number(n).unwrap()
    }

    fn table_with(cells: &[(Month, i64, Commodity, i32)]) -> ProfitTable {
        let mut table = ProfitTable::new();
        for &(month, d, commodity, profit) in cells {
            table.set(month, day(d), commodity, profit);
        }
        table
    }

    // ── most_profitable_commodity_in_month ────────────────────────────────────

    #[test]
    fn test_most_profitable_commodity() {
        let table = table_with(&[
            (Month::March, 1, Commodity::Silver, 30),
            (Month::March, 2, Commodity::Silver, 30),
            (Month::March, 1, Commodity::Gold, 50),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.most_profitable_commodity_in_month(2), "Silver 60");
    }

    #[test]
    fn test_most_profitable_commodity_tie_goes_to_catalog_order() {
        let table = table_with(&[
            (Month::January, 1, Commodity::Oil, 50),
            (Month::January, 2, Commodity::Gold, 50),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.most_profitable_commodity_in_month(0), "Gold 50");
    }

    #[test]
    fn test_most_profitable_commodity_all_zero() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.most_profitable_commodity_in_month(5), "Gold 0");
    }

    #[test]
    fn test_most_profitable_commodity_all_losses() {
        let table = table_with(&[
            (Month::May, 1, Commodity::Gold, -10),
            (Month::May, 1, Commodity::Oil, -3),
            (Month::May, 1, Commodity::Silver, -10),
            (Month::May, 1, Commodity::Wheat, -10),
            (Month::May, 1, Commodity::Copper, -10),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.most_profitable_commodity_in_month(4), "Oil -3");
    }

    #[test]
    fn test_most_profitable_commodity_invalid_month() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.most_profitable_commodity_in_month(-1), INVALID_MONTH);
        assert_eq!(q.most_profitable_commodity_in_month(12), INVALID_MONTH);
    }

    // ── total_profit_on_day ───────────────────────────────────────────────────

    #[test]
    fn test_total_profit_on_day() {
        let table = table_with(&[
            (Month::January, 5, Commodity::Gold, 100),
            (Month::January, 5, Commodity::Oil, -30),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.total_profit_on_day(0, 5), 70);
        assert_eq!(q.total_profit_on_day(0, 6), 0);
    }

    #[test]
    fn test_total_profit_on_day_bounds() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        for m in 0..12 {
            assert_eq!(q.total_profit_on_day(m, 0), INVALID_QUERY);
            assert_eq!(q.total_profit_on_day(m, 29), INVALID_QUERY);
            assert_eq!(q.total_profit_on_day(m, 1), 0);
            assert_eq!(q.total_profit_on_day(m, 28), 0);
        }
        assert_eq!(q.total_profit_on_day(12, 1), INVALID_QUERY);
        assert_eq!(q.total_profit_on_day(-1, 1), INVALID_QUERY);
    }

    // ── commodity_profit_in_range ─────────────────────────────────────────────

    #[test]
    fn test_commodity_profit_in_range_spans_months() {
        let table = table_with(&[
            (Month::January, 3, Commodity::Wheat, 10),
            (Month::July, 4, Commodity::Wheat, 5),
            (Month::July, 6, Commodity::Wheat, 1000),
            (Month::July, 4, Commodity::Gold, 77),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.commodity_profit_in_range("Wheat", 3, 5), 15);
        assert_eq!(q.commodity_profit_in_range("Wheat", 1, 28), 1015);
        assert_eq!(q.commodity_profit_in_range("Wheat", 6, 6), 1000);
    }

    #[test]
    fn test_commodity_profit_in_range_invalid() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.commodity_profit_in_range("Platinum", 1, 5), INVALID_QUERY);
        assert_eq!(q.commodity_profit_in_range("Gold", 0, 5), INVALID_QUERY);
        assert_eq!(q.commodity_profit_in_range("Gold", 1, 29), INVALID_QUERY);
        assert_eq!(q.commodity_profit_in_range("Gold", 6, 5), INVALID_QUERY);
        assert_eq!(q.commodity_profit_in_range("Gold", 1, 28), 0);
    }

    // ── best_day_of_month ─────────────────────────────────────────────────────

    #[test]
    fn test_best_day_of_month() {
        let table = table_with(&[
            (Month::February, 10, Commodity::Gold, 5),
            (Month::February, 10, Commodity::Copper, 5),
            (Month::February, 20, Commodity::Gold, 10),
        ]);
        let q = QueryEngine::new(&table);
        // Days 10 and 20 tie at 10; the earlier wins.
        assert_eq!(q.best_day_of_month(1), 10);
    }

    #[test]
    fn test_best_day_of_month_all_zero_is_day_one() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.best_day_of_month(0), 1);
    }

    #[test]
    fn test_best_day_of_month_negative_days() {
        let mut table = ProfitTable::new();
        for d in Day::all() {
            table.set(Month::August, d, Commodity::Oil, -5);
        }
        table.set(Month::August, day(17), Commodity::Oil, -1);
        let q = QueryEngine::new(&table);
        assert_eq!(q.best_day_of_month(7), 17);
    }

    #[test]
    fn test_best_day_of_month_invalid() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.best_day_of_month(12), NOT_FOUND);
    }

    // ── best_month_for_commodity ──────────────────────────────────────────────

    #[test]
    fn test_best_month_for_commodity() {
        let table = table_with(&[
            (Month::April, 1, Commodity::Copper, 8),
            (Month::October, 1, Commodity::Copper, 9),
            (Month::December, 1, Commodity::Copper, 9),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.best_month_for_commodity("Copper"), "October");
        assert_eq!(q.best_month_for_commodity("Gold"), "January");
        assert_eq!(q.best_month_for_commodity("Platinum"), INVALID_COMMODITY);
    }

    // ── consecutive_loss_days ─────────────────────────────────────────────────

    #[test]
    fn test_consecutive_loss_days_within_month() {
        let table = table_with(&[
            (Month::March, 2, Commodity::Silver, -1),
            (Month::March, 3, Commodity::Silver, -1),
            (Month::March, 4, Commodity::Silver, 0),
            (Month::March, 5, Commodity::Silver, -1),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.consecutive_loss_days("Silver"), 2);
        assert_eq!(q.consecutive_loss_days("Gold"), 0);
    }

    #[test]
    fn test_consecutive_loss_days_crosses_month_boundary() {
        let table = table_with(&[
            (Month::January, 27, Commodity::Oil, -5),
            (Month::January, 28, Commodity::Oil, -5),
            (Month::February, 1, Commodity::Oil, -5),
            (Month::February, 2, Commodity::Oil, -5),
            (Month::February, 3, Commodity::Oil, -5),
            (Month::February, 4, Commodity::Oil, -5),
            (Month::February, 6, Commodity::Oil, -5),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.consecutive_loss_days("Oil"), 6);
    }

    #[test]
    fn test_consecutive_loss_days_run_to_year_end() {
        let mut table = ProfitTable::new();
        for d in Day::all() {
            table.set(Month::December, d, Commodity::Wheat, -2);
        }
        let q = QueryEngine::new(&table);
        assert_eq!(q.consecutive_loss_days("Wheat"), 28);
    }

    #[test]
    fn test_consecutive_loss_days_unknown() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.consecutive_loss_days("Platinum"), NOT_FOUND);
    }

    // ── days_above_threshold ──────────────────────────────────────────────────

    #[test]
    fn test_days_above_threshold_is_strict() {
        let table = table_with(&[
            (Month::January, 1, Commodity::Gold, 10),
            (Month::June, 1, Commodity::Gold, 11),
            (Month::November, 1, Commodity::Gold, 50),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.days_above_threshold("Gold", 10), 2);
        assert_eq!(q.days_above_threshold("Gold", 50), 0);
    }

    #[test]
    fn test_days_above_negative_threshold_counts_empty_days() {
        let table = table_with(&[(Month::January, 1, Commodity::Oil, -5)]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.days_above_threshold("Oil", -1), 335);
        assert_eq!(q.days_above_threshold("Platinum", 0), NOT_FOUND);
    }

    // ── biggest_daily_swing ───────────────────────────────────────────────────

    #[test]
    fn test_biggest_daily_swing() {
        let table = table_with(&[
            (Month::September, 3, Commodity::Gold, 40),
            (Month::September, 4, Commodity::Gold, -60),
            (Month::September, 4, Commodity::Oil, 10),
        ]);
        let q = QueryEngine::new(&table);
        // 40 -> -50 is a swing of 90.
        assert_eq!(q.biggest_daily_swing(8), 90);
    }

    #[test]
    fn test_biggest_daily_swing_stays_within_month() {
        let table = table_with(&[
            (Month::January, 28, Commodity::Gold, 500),
            (Month::February, 1, Commodity::Gold, -500),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.biggest_daily_swing(0), 500);
        assert_eq!(q.biggest_daily_swing(1), 500);
        assert_eq!(q.biggest_daily_swing(2), 0);
    }

    #[test]
    fn test_biggest_daily_swing_invalid() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.biggest_daily_swing(-1), INVALID_QUERY);
        assert_eq!(q.biggest_daily_swing(12), INVALID_QUERY);
    }

    // ── compare_two_commodities ───────────────────────────────────────────────

    #[test]
    fn test_compare_two_commodities() {
        let table = table_with(&[
            (Month::January, 1, Commodity::Gold, 50),
            (Month::May, 1, Commodity::Silver, 80),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.compare_two_commodities("Gold", "Silver"), "Silver is better by 30");
        assert_eq!(q.compare_two_commodities("Silver", "Gold"), "Silver is better by 30");
    }

    #[test]
    fn test_compare_two_commodities_equal() {
        let table = table_with(&[
            (Month::January, 1, Commodity::Gold, 50),
            (Month::March, 9, Commodity::Oil, 50),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.compare_two_commodities("Gold", "Oil"), "Equal");
        assert_eq!(q.compare_two_commodities("Wheat", "Wheat"), "Equal");
    }

    #[test]
    fn test_compare_two_commodities_invalid() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.compare_two_commodities("Gold", "Platinum"), INVALID_COMMODITY);
        assert_eq!(q.compare_two_commodities("Platinum", "Gold"), INVALID_COMMODITY);
    }

    // ── best_week_of_month ────────────────────────────────────────────────────

    #[test]
    fn test_best_week_of_month() {
        let table = table_with(&[
            (Month::June, 7, Commodity::Gold, 10),
            (Month::June, 15, Commodity::Gold, 6),
            (Month::June, 21, Commodity::Gold, 6),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.best_week_of_month(5), "Week 3");
    }

    #[test]
    fn test_best_week_of_month_tie_and_zero() {
        let table = table_with(&[
            (Month::July, 8, Commodity::Oil, 4),
            (Month::July, 28, Commodity::Oil, 4),
        ]);
        let q = QueryEngine::new(&table);
        assert_eq!(q.best_week_of_month(6), "Week 2");
        assert_eq!(q.best_week_of_month(0), "Week 1");
        assert_eq!(q.best_week_of_month(12), INVALID_MONTH);
    }

    #[test]
    fn test_week_total_outside_month_is_zero() {
        let mut table = ProfitTable::new();
        table.set(Month::March, day(1), Commodity::Gold, 9);
        let q = QueryEngine::new(&table);
        assert_eq!(q.week_total(Month::March, 0), 0);
        assert_eq!(q.week_total(Month::March, 5), 0);
        assert_eq!(q.week_total(Month::March, usize::MAX), 0);
    }

    #[test]
    fn test_week_totals_cover_month() {
        let mut table = ProfitTable::new();
        for d in Day::all() {
            table.set(Month::March, d, Commodity::Silver, d.number() as i32);
        }
        let q = QueryEngine::new(&table);
        let weeks: i64 = (1..=WEEKS).map(|w| q.week_total(Month::March, w)).sum();
        assert_eq!(weeks, q.month_total(Month::March));
        assert_eq!(q.week_total(Month::March, 1), 28);
    }

    // ── Platinum everywhere ───────────────────────────────────────────────────

    #[test]
    fn test_unknown_commodity_sentinels() {
        let table = ProfitTable::new();
        let q = QueryEngine::new(&table);
        assert_eq!(q.commodity_profit_in_range("Platinum", 1, 28), INVALID_QUERY);
        assert_eq!(q.best_month_for_commodity("Platinum"), INVALID_COMMODITY);
        assert_eq!(q.consecutive_loss_days("Platinum"), NOT_FOUND);
        assert_eq!(q.days_above_threshold("Platinum", 0), NOT_FOUND);
        assert_eq!(q.compare_two_commodities("Platinum", "Oil"), INVALID_COMMODITY);
    }
}
