//! Static Chart Renderer
//! Writes the summary charts as standalone PNG files using plotters.

use std::path::Path;

use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;

/// Color cycle for chart series.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(255, 87, 34),   // Deep Orange
    RGBColor(121, 85, 72),   // Brown
    RGBColor(96, 125, 139),  // Blue Grey
];

const CHART_SIZE: (u32, u32) = (800, 600);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("chart has no data to draw")]
    EmptySeries,
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}

/// Renders the summary charts to PNG files, one file per chart.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Pie chart of one share per label.
    pub fn render_pie(
        title: &str,
        series: &[(String, f64)],
        path: &Path,
    ) -> Result<(), ChartError> {
        if !series.iter().any(|(_, v)| *v > 0.0) {
            return Err(ChartError::EmptySeries);
        }

        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(title, ("sans-serif", 28))?;

        let sizes: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
        let labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
        let colors: Vec<RGBColor> = (0..series.len())
            .map(|i| PALETTE[i % PALETTE.len()])
            .collect();

        let center = (CHART_SIZE.0 as i32 / 2, CHART_SIZE.1 as i32 / 2 + 10);
        let radius = 200.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 14).into_font().color(&BLACK));
        root.draw(&pie)?;

        root.present()?;
        Ok(())
    }

    /// Vertical bar chart of one bar per label.
    pub fn render_bar(
        title: &str,
        y_label: &str,
        series: &[(String, f64)],
        path: &Path,
    ) -> Result<(), ChartError> {
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let highest = series.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
        let y_max = if highest > 0.0 { highest * 1.1 } else { 1.0 };
        let n = series.len() as i32;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 28))
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(64)
            .build_cartesian_2d((0..n).into_segmented(), 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc(y_label)
            .x_label_formatter(&|position| match position {
                SegmentValue::CenterOf(i) if (*i as usize) < series.len() => {
                    series[*i as usize].0.clone()
                }
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(series.iter().enumerate().map(|(i, (_, value))| {
            let style = PALETTE[i % PALETTE.len()].filled();
            let i = i as i32;
            Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *value)],
                style,
            )
        }))?;

        root.present()?;
        Ok(())
    }
}
