//! Console report formatting.
//! Pure string builders so the printed summaries can be tested directly.

use std::fmt::Write as _;

use crate::stats::{ProductStats, SalesExtremes, UnitTotals};

/// Fixed-width table of the per-product statistics, one row per product.
pub fn product_stats_table(stats: &[ProductStats]) -> String {
    let mut out = String::new();
    out.push_str("=== Statistiques par produit ===\n");
    let _ = writeln!(
        out,
        "{:<20} {:>12} {:>12} {:>12} {:>12} {:>15} {:>13}",
        "produit", "ca_moyenne", "ca_mediane", "qte_moyenne", "qte_mediane", "qte_ecart_type",
        "qte_variance"
    );
    for row in stats {
        let _ = writeln!(
            out,
            "{:<20} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>15.2} {:>13.2}",
            row.produit, row.ca_mean, row.ca_median, row.qte_mean, row.qte_median, row.qte_std,
            row.qte_var
        );
    }
    out
}

/// Unit totals in first-seen order, followed by the best and worst seller.
pub fn unit_totals_summary(totals: &UnitTotals, extremes: &SalesExtremes) -> String {
    let mut out = String::new();
    out.push_str("=== Totaux unités par produit ===\n");
    for (produit, units) in totals.iter() {
        let _ = writeln!(out, "{produit}: {units}");
    }
    let _ = writeln!(
        out,
        "\nProduit le plus vendu : {} ({} unités)",
        extremes.top.0, extremes.top.1
    );
    let _ = writeln!(
        out,
        "Produit le moins vendu : {} ({} unités)",
        extremes.bottom.0, extremes.bottom.1
    );
    out
}
