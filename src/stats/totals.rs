//! Manual accumulation path.
//! Re-derives per-product unit totals by iterating records directly, without
//! the DataFrame machinery, and ranks products by units sold.

use std::collections::HashMap;

use thiserror::Error;

use crate::data::SaleRecord;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TotalsError {
    #[error("no sales data: every record is missing a usable quantity")]
    NoSalesData,
}

/// Per-product unit totals, iterable in the order products first appeared
/// in the feed.
#[derive(Debug, Clone, Default)]
pub struct UnitTotals {
    totals: HashMap<String, i64>,
    order: Vec<String>,
}

impl UnitTotals {
    fn add(&mut self, produit: &str, units: i64) {
        if !self.totals.contains_key(produit) {
            self.order.push(produit.to_string());
        }
        *self.totals.entry(produit.to_string()).or_insert(0) += units;
    }

    pub fn get(&self, produit: &str) -> Option<i64> {
        self.totals.get(produit).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate totals in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.order.iter().map(|p| (p.as_str(), self.totals[p]))
    }

    /// Sum of all accumulated units.
    pub fn grand_total(&self) -> i64 {
        self.totals.values().sum()
    }
}

/// Best and worst selling products by total units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesExtremes {
    pub top: (String, i64),
    pub bottom: (String, i64),
}

/// Accumulate units per product by iterating records in feed order.
///
/// A record with a missing quantity is skipped entirely; valid quantities
/// are truncated to whole units before being added.
pub fn unit_totals(records: &[SaleRecord]) -> UnitTotals {
    let mut totals = UnitTotals::default();
    for record in records {
        let Some(qte) = record.qte else { continue };
        totals.add(&record.produit, qte as i64);
    }
    totals
}

/// Find the best and worst seller.
///
/// The scan runs in first-seen order with strict comparisons, so the first
/// product encountered wins any tie. Errors when no record contributed a
/// usable quantity.
pub fn sales_extremes(totals: &UnitTotals) -> Result<SalesExtremes, TotalsError> {
    let mut iter = totals.iter();
    let first = iter.next().ok_or(TotalsError::NoSalesData)?;

    let (mut top, mut bottom) = (first, first);
    for entry in iter {
        if entry.1 > top.1 {
            top = entry;
        }
        if entry.1 < bottom.1 {
            bottom = entry;
        }
    }

    Ok(SalesExtremes {
        top: (top.0.to_string(), top.1),
        bottom: (bottom.0.to_string(), bottom.1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(produit: &str, qte: Option<f64>) -> SaleRecord {
        SaleRecord {
            produit: produit.to_string(),
            region: "Nord".to_string(),
            qte,
            prix: Some(1.0),
            ca: qte,
        }
    }

    #[test]
    fn accumulates_per_product() {
        let records = vec![
            record("Clavier", Some(2.0)),
            record("Souris", Some(5.0)),
            record("Clavier", Some(3.0)),
        ];
        let totals = unit_totals(&records);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("Clavier"), Some(5));
        assert_eq!(totals.get("Souris"), Some(5));
    }

    #[test]
    fn missing_quantities_are_skipped() {
        let records = vec![
            record("Clavier", Some(2.0)),
            record("Clavier", None),
            record("Souris", None),
        ];
        let totals = unit_totals(&records);

        assert_eq!(totals.get("Clavier"), Some(2));
        // Souris never contributed a valid quantity, so it has no entry.
        assert_eq!(totals.get("Souris"), None);
    }

    #[test]
    fn quantities_truncate_to_whole_units() {
        let records = vec![record("Clavier", Some(2.9)), record("Clavier", Some(3.1))];
        let totals = unit_totals(&records);
        assert_eq!(totals.get("Clavier"), Some(5));
    }

    #[test]
    fn totals_conserve_the_valid_quantity_sum() {
        let records = vec![
            record("Clavier", Some(2.0)),
            record("Souris", Some(5.0)),
            record("Ecran", None),
            record("Clavier", Some(4.0)),
        ];
        let totals = unit_totals(&records);
        assert_eq!(totals.grand_total(), 11);
    }

    #[test]
    fn iteration_order_is_first_seen() {
        let records = vec![
            record("Souris", Some(1.0)),
            record("Clavier", Some(1.0)),
            record("Ecran", Some(1.0)),
            record("Clavier", Some(1.0)),
        ];
        let totals = unit_totals(&records);
        let names: Vec<&str> = totals.iter().map(|(p, _)| p).collect();
        assert_eq!(names, ["Souris", "Clavier", "Ecran"]);
    }

    #[test]
    fn ties_resolve_to_the_first_seen_product() {
        // Clavier and Souris both total 5 units.
        let records = vec![
            record("Clavier", Some(2.0)),
            record("Clavier", Some(3.0)),
            record("Souris", Some(5.0)),
            record("Ecran", Some(9.0)),
        ];
        let totals = unit_totals(&records);
        let extremes = sales_extremes(&totals).unwrap();

        assert_eq!(extremes.top, ("Ecran".to_string(), 9));
        assert_eq!(extremes.bottom, ("Clavier".to_string(), 5));
    }

    #[test]
    fn full_tie_selects_one_consistent_winner() {
        let records = vec![
            record("Clavier", Some(2.0)),
            record("Clavier", Some(3.0)),
            record("Souris", Some(5.0)),
        ];
        let totals = unit_totals(&records);

        for _ in 0..10 {
            let extremes = sales_extremes(&totals).unwrap();
            assert_eq!(extremes.top, ("Clavier".to_string(), 5));
            assert_eq!(extremes.bottom, ("Clavier".to_string(), 5));
        }
    }

    #[test]
    fn extremes_rank_by_total() {
        let records = vec![
            record("Clavier", Some(2.0)),
            record("Souris", Some(9.0)),
            record("Ecran", Some(4.0)),
        ];
        let totals = unit_totals(&records);
        let extremes = sales_extremes(&totals).unwrap();

        assert_eq!(extremes.top, ("Souris".to_string(), 9));
        assert_eq!(extremes.bottom, ("Clavier".to_string(), 2));
    }

    #[test]
    fn no_usable_quantity_is_a_fatal_error() {
        let records = vec![record("Clavier", None), record("Souris", None)];
        let totals = unit_totals(&records);

        assert!(totals.is_empty());
        assert_eq!(sales_extremes(&totals), Err(TotalsError::NoSalesData));
    }
}
