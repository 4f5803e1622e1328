//! Salescope - Sales Feed Analysis & Chart Generation
//!
//! A single-pass batch job: download the sales feed, clean it, aggregate it
//! through two independent paths, print the summaries, render the charts.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use salescope::charts::ChartRenderer;
use salescope::data::{DataCleaner, DataLoader, COL_PRODUCT, COL_QTY, COL_REGION, COL_REVENUE};
use salescope::report;
use salescope::stats::{grouped_sum, product_stats, sales_extremes, unit_totals};

/// Published CSV export of the sales spreadsheet.
const FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSC4KusfFzvOsr8WJRgozzsCxrELW4G4PopUkiDbvrrV2lg0S19-zeryp02MC9WYSVBuzGCUtn8ucZW/pub?output=csv";

/// Output artifacts, overwritten on every run.
const REGION_UNITS_CHART: &str = "ventes-par-region.png";
const PRODUCT_UNITS_CHART: &str = "ventes-par-produit.png";
const PRODUCT_REVENUE_CHART: &str = "chiffre-affaires-par-produit.png";

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let loader = DataLoader::new(FEED_URL);
    let raw = loader.fetch().context("failed to load the sales feed")?;
    info!(rows = raw.height(), "sales feed loaded");

    let table = DataCleaner::clean(&raw).context("failed to clean the sales table")?;

    let stats = product_stats(&table).context("failed to compute per-product statistics")?;
    println!("{}", report::product_stats_table(&stats));

    let records = DataCleaner::to_records(&table).context("failed to extract sale records")?;
    let totals = unit_totals(&records);
    let extremes = sales_extremes(&totals).context("failed to rank products by units sold")?;
    println!("{}", report::unit_totals_summary(&totals, &extremes));

    let region_units =
        grouped_sum(&table, COL_REGION, COL_QTY).context("failed to total units per region")?;
    ChartRenderer::render_pie(
        "Quantité vendue par région",
        &region_units,
        Path::new(REGION_UNITS_CHART),
    )
    .with_context(|| format!("failed to render {REGION_UNITS_CHART}"))?;
    info!(path = REGION_UNITS_CHART, "chart written");

    let product_units =
        grouped_sum(&table, COL_PRODUCT, COL_QTY).context("failed to total units per product")?;
    ChartRenderer::render_bar(
        "Ventes par produit (quantités)",
        "qte",
        &product_units,
        Path::new(PRODUCT_UNITS_CHART),
    )
    .with_context(|| format!("failed to render {PRODUCT_UNITS_CHART}"))?;
    info!(path = PRODUCT_UNITS_CHART, "chart written");

    let product_revenue = grouped_sum(&table, COL_PRODUCT, COL_REVENUE)
        .context("failed to total revenue per product")?;
    ChartRenderer::render_bar(
        "Chiffre d'affaires par produit",
        "ca",
        &product_revenue,
        Path::new(PRODUCT_REVENUE_CHART),
    )
    .with_context(|| format!("failed to render {PRODUCT_REVENUE_CHART}"))?;
    info!(path = PRODUCT_REVENUE_CHART, "chart written");

    Ok(())
}
