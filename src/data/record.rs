//! Sale record type and feed column names.

/// Product category column.
pub const COL_PRODUCT: &str = "produit";
/// Sales region column.
pub const COL_REGION: &str = "region";
/// Quantity sold column.
pub const COL_QTY: &str = "qte";
/// Unit price column.
pub const COL_PRICE: &str = "prix";
/// Revenue column derived by the cleaner (`prix * qte`).
pub const COL_REVENUE: &str = "ca";

/// One sale transaction from the cleaned table.
///
/// Numeric fields are `None` when the source value was absent or failed to
/// parse; such values are excluded from every aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub produit: String,
    pub region: String,
    pub qte: Option<f64>,
    pub prix: Option<f64>,
    pub ca: Option<f64>,
}
