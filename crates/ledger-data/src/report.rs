//! Query dispatch and report rendering.
//!
//! Turns a [`QueryCommand`] into a [`QueryOutput`] and writes it as text or
//! JSON. The full [`LedgerReport`] runs every per-month and per-commodity
//! query once.

use std::io::Write;

use ledger_core::formatting::{format_profit, format_signed_profit};
use ledger_core::settings::QueryCommand;
use ledger_core::{Commodity, Result, MONTH_CATALOG};
use serde::Serialize;

use crate::queries::QueryEngine;

// ── Report types ──────────────────────────────────────────────────────────────

/// Per-month figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub month: &'static str,
    /// Cross-commodity total of the month.
    pub total: i64,
    pub best_commodity: Commodity,
    pub best_commodity_total: i64,
    /// 1-based.
    pub best_day: usize,
    /// 1-based.
    pub best_week: usize,
    pub biggest_swing: i64,
}

/// Per-commodity figures over the whole year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommodityReport {
    pub commodity: Commodity,
    pub year_total: i64,
    pub best_month: &'static str,
    pub loss_streak: usize,
    /// Days with a strictly positive profit.
    pub profitable_days: usize,
}

/// Every month and every commodity, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerReport {
    pub months: Vec<MonthReport>,
    pub commodities: Vec<CommodityReport>,
}

impl LedgerReport {
    pub fn build(engine: &QueryEngine<'_>) -> Self {
        let months = MONTH_CATALOG
            .into_iter()
            .map(|month| {
                let (best_commodity, best_commodity_total) = engine.best_commodity(month);
                MonthReport {
                    month: month.name(),
                    total: engine.month_total(month),
                    best_commodity,
                    best_commodity_total,
                    best_day: engine.best_day(month).number(),
                    best_week: engine.best_week(month),
                    biggest_swing: engine.biggest_swing(month),
                }
            })
            .collect();

        let commodities = Commodity::ALL
            .into_iter()
            .map(|commodity| CommodityReport {
                commodity,
                year_total: engine.year_total(commodity),
                best_month: engine.best_month(commodity).name(),
                loss_streak: engine.loss_streak(commodity),
                profitable_days: engine.days_above(commodity, 0),
            })
            .collect();

        Self {
            months,
            commodities,
        }
    }

    /// Two aligned tables: months, then commodities.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{:<10} {:>12}  {:<22} {:>8} {:>9} {:>10}",
            "Month", "Total", "Best commodity", "Best day", "Best week", "Swing"
        )?;
        for m in &self.months {
            let best = format!(
                "{} ({})",
                m.best_commodity,
                format_signed_profit(m.best_commodity_total)
            );
            writeln!(
                out,
                "{:<10} {:>12}  {:<22} {:>8} {:>9} {:>10}",
                m.month,
                format_profit(m.total),
                best,
                m.best_day,
                m.best_week,
                format_profit(m.biggest_swing),
            )?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "{:<10} {:>12}  {:<10} {:>11} {:>15}",
            "Commodity", "Year total", "Best month", "Loss streak", "Profitable days"
        )?;
        for c in &self.commodities {
            writeln!(
                out,
                "{:<10} {:>12}  {:<10} {:>11} {:>15}",
                c.commodity.name(),
                format_profit(c.year_total),
                c.best_month,
                c.loss_streak,
                c.profitable_days,
            )?;
        }
        Ok(())
    }
}

// ── QueryOutput ───────────────────────────────────────────────────────────────

/// Result of one [`QueryCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Number(i64),
    Text(String),
    Report(LedgerReport),
}

impl QueryOutput {
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            QueryOutput::Number(n) => writeln!(out, "{}", n)?,
            QueryOutput::Text(s) => writeln!(out, "{}", s)?,
            QueryOutput::Report(report) => report.write_text(out)?,
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Run `command` against `engine`.
///
/// Invalid arguments come back as the query's sentinel, like any other
/// answer.
pub fn run_query(engine: &QueryEngine<'_>, command: &QueryCommand) -> QueryOutput {
    match command {
        QueryCommand::Summary => QueryOutput::Report(LedgerReport::build(engine)),
        QueryCommand::BestCommodity { month } => {
            QueryOutput::Text(engine.most_profitable_commodity_in_month(*month))
        }
        QueryCommand::DayTotal { month, day } => {
            QueryOutput::Number(engine.total_profit_on_day(*month, *day))
        }
        QueryCommand::RangeProfit {
            commodity,
            from,
            to,
        } => QueryOutput::Number(engine.commodity_profit_in_range(commodity, *from, *to)),
        QueryCommand::BestDay { month } => QueryOutput::Number(engine.best_day_of_month(*month)),
        QueryCommand::BestMonth { commodity } => {
            QueryOutput::Text(engine.best_month_for_commodity(commodity))
        }
        QueryCommand::LossStreak { commodity } => {
            QueryOutput::Number(engine.consecutive_loss_days(commodity))
        }
        QueryCommand::DaysAbove {
            commodity,
            threshold,
        } => QueryOutput::Number(engine.days_above_threshold(commodity, *threshold)),
        QueryCommand::Swing { month } => QueryOutput::Number(engine.biggest_daily_swing(*month)),
        QueryCommand::Compare { first, second } => {
            QueryOutput::Text(engine.compare_two_commodities(first, second))
        }
        QueryCommand::BestWeek { month } => {
            QueryOutput::Text(engine.best_week_of_month(*month))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
