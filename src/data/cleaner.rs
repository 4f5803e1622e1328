//! Data Cleaner Module
//! Numeric coercion and revenue derivation over the raw feed table.

use polars::prelude::*;
use thiserror::Error;

use super::record::{SaleRecord, COL_PRICE, COL_PRODUCT, COL_QTY, COL_REGION, COL_REVENUE};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Handles the best-effort cleaning pass over the raw feed.
pub struct DataCleaner;

impl DataCleaner {
    /// Coerce `qte` and `prix` to nullable floats and derive `ca = prix * qte`.
    ///
    /// Values that fail to parse become null instead of failing the run, and
    /// a null in either operand makes the derived revenue null as well.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let cleaned = df
            .clone()
            .lazy()
            .with_columns([
                col(COL_QTY).cast(DataType::Float64),
                col(COL_PRICE).cast(DataType::Float64),
            ])
            .with_column((col(COL_PRICE) * col(COL_QTY)).alias(COL_REVENUE))
            .collect()?;
        Ok(cleaned)
    }

    /// Extract the cleaned table as an ordered record sequence.
    ///
    /// Rows without a product label are dropped. A numeric cell that is
    /// null or NaN maps to `None`.
    pub fn to_records(df: &DataFrame) -> Result<Vec<SaleRecord>, CleanerError> {
        let produit = df.column(COL_PRODUCT)?.str()?;
        let region = df.column(COL_REGION)?.str()?;
        let qte = df.column(COL_QTY)?.f64()?;
        let prix = df.column(COL_PRICE)?.f64()?;
        let ca = df.column(COL_REVENUE)?.f64()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let Some(name) = produit.get(i) else { continue };
            records.push(SaleRecord {
                produit: name.to_string(),
                region: region.get(i).unwrap_or_default().to_string(),
                qte: non_missing(qte.get(i)),
                prix: non_missing(prix.get(i)),
                ca: non_missing(ca.get(i)),
            });
        }
        Ok(records)
    }
}

fn non_missing(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}
