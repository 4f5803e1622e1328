//! Stats module - the two aggregation paths over the cleaned table

mod calculator;
mod totals;

pub use calculator::{grouped_sum, product_stats, ProductStats, StatsError};
pub use totals::{sales_extremes, unit_totals, SalesExtremes, TotalsError, UnitTotals};
