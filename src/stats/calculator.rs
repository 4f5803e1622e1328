//! Statistics Calculator Module
//! Grouped descriptive statistics computed with the DataFrame machinery.

use polars::prelude::*;
use thiserror::Error;

use crate::data::{COL_PRODUCT, COL_QTY, COL_REVENUE};

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("failed to aggregate sales table: {0}")]
    Polars(#[from] PolarsError),
}

/// Descriptive statistics for one product group.
///
/// A statistic that is undefined for its group (every value missing, or a
/// single observation for the sample std/variance) is `f64::NAN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStats {
    pub produit: String,
    pub ca_mean: f64,
    pub ca_median: f64,
    pub qte_mean: f64,
    pub qte_median: f64,
    pub qte_std: f64,
    pub qte_var: f64,
}

/// Compute the per-product aggregates: mean and median of `ca`, mean,
/// median, sample standard deviation and sample variance of `qte`.
///
/// Missing values are excluded by the aggregate expressions themselves.
/// Output is sorted by product name so repeated runs are identical.
pub fn product_stats(df: &DataFrame) -> Result<Vec<ProductStats>, StatsError> {
    let out = df
        .clone()
        .lazy()
        .group_by([col(COL_PRODUCT)])
        .agg([
            col(COL_REVENUE).mean().alias("ca_moyenne"),
            col(COL_REVENUE).median().alias("ca_mediane"),
            col(COL_QTY).mean().alias("qte_moyenne"),
            col(COL_QTY).median().alias("qte_mediane"),
            col(COL_QTY).std(1).alias("qte_ecart_type"),
            col(COL_QTY).var(1).alias("qte_variance"),
        ])
        .sort([COL_PRODUCT], Default::default())
        .collect()?;

    let produit = out.column(COL_PRODUCT)?.str()?;
    let ca_mean = out.column("ca_moyenne")?.f64()?;
    let ca_median = out.column("ca_mediane")?.f64()?;
    let qte_mean = out.column("qte_moyenne")?.f64()?;
    let qte_median = out.column("qte_mediane")?.f64()?;
    let qte_std = out.column("qte_ecart_type")?.f64()?;
    let qte_var = out.column("qte_variance")?.f64()?;

    let mut rows = Vec::with_capacity(out.height());
    for i in 0..out.height() {
        let Some(name) = produit.get(i) else { continue };
        rows.push(ProductStats {
            produit: name.to_string(),
            ca_mean: ca_mean.get(i).unwrap_or(f64::NAN),
            ca_median: ca_median.get(i).unwrap_or(f64::NAN),
            qte_mean: qte_mean.get(i).unwrap_or(f64::NAN),
            qte_median: qte_median.get(i).unwrap_or(f64::NAN),
            qte_std: qte_std.get(i).unwrap_or(f64::NAN),
            qte_var: qte_var.get(i).unwrap_or(f64::NAN),
        });
    }
    Ok(rows)
}

/// Group-by sum of one numeric column keyed by a label column, sorted by
/// key. Null keys are skipped.
pub fn grouped_sum(
    df: &DataFrame,
    key: &str,
    value: &str,
) -> Result<Vec<(String, f64)>, StatsError> {
    let out = df
        .clone()
        .lazy()
        .group_by([col(key)])
        .agg([col(value).sum()])
        .sort([key], Default::default())
        .collect()?;

    let keys = out.column(key)?.str()?;
    let sums = out.column(value)?.cast(&DataType::Float64)?;
    let sums = sums.f64()?;

    let mut pairs = Vec::with_capacity(out.height());
    for i in 0..out.height() {
        let Some(k) = keys.get(i) else { continue };
        pairs.push((k.to_string(), sums.get(i).unwrap_or(0.0)));
    }
    Ok(pairs)
}
