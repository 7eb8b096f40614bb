use std::fs;

use plotters::prelude::*;

use crate::models::{Instrument, PriceSeries, SeriesPair};
use crate::utils::errors::TickerError;

const CHART_TITLE: &str = "Gold and Silver Price Movement Over Time";
const GOLD_LINE: RGBColor = RGBColor(255, 215, 0);
const SILVER_LINE: RGBColor = RGBColor(192, 192, 192);

fn line_color(instrument: Instrument) -> RGBColor {
    match instrument {
        Instrument::Gold => GOLD_LINE,
        Instrument::Silver => SILVER_LINE,
    }
}

/// Y axis range over every series, padded by 10% and floored at zero
pub fn price_range<'a>(series: impl IntoIterator<Item = &'a PriceSeries>) -> (f64, f64) {
    let (min_price, max_price) = series
        .into_iter()
        .flat_map(|s| s.prices())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        });

    let span = (max_price - min_price).max(1e-8);
    let padding = span * 0.1;
    ((min_price - padding).max(0.0), max_price + padding)
}

/// Render both series as a PNG line chart and return the image bytes
pub fn render_chart(series: &SeriesPair, width: u32, height: u32) -> Result<Vec<u8>, TickerError> {
    if series.len() < 2 {
        return Err(TickerError::Chart(
            "Not enough price data to generate chart (minimum 2 points required)".to_string(),
        ));
    }

    // BitMapBackend encodes PNG only when writing to a path
    let temp_file = std::env::temp_dir().join(format!("metals_chart_{}.png", uuid::Uuid::new_v4()));
    tracing::debug!("Rendering {} chart to {}", series.cadence.label(), temp_file.display());

    let drawn = draw(series, &temp_file, width, height);
    let image_data = drawn.and_then(|_| fs::read(&temp_file).map_err(TickerError::from));

    if let Err(e) = fs::remove_file(&temp_file) {
        tracing::warn!("Failed to delete temporary chart file {}: {}", temp_file.display(), e);
    }

    image_data
}

fn chart_err<E: std::fmt::Display>(e: E) -> TickerError {
    TickerError::Chart(e.to_string())
}

fn draw(
    series: &SeriesPair,
    path: &std::path::Path,
    width: u32,
    height: u32,
) -> Result<(), TickerError> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let (y_min, y_max) = price_range(series.iter());
    let x_min = series.gold.points[0].timestamp;
    let x_max = series.gold.points[series.len() - 1].timestamp;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Price in USD")
        .draw()
        .map_err(chart_err)?;

    for price_series in series.iter() {
        let color = line_color(price_series.instrument);
        let coords: Vec<_> = price_series
            .points
            .iter()
            .map(|p| (p.timestamp, p.price))
            .collect();

        chart
            .draw_series(LineSeries::new(coords.iter().copied(), color.stroke_width(2)))
            .map_err(chart_err)?
            .label(price_series.instrument.series_label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(coords.iter().map(|&point| Circle::new(point, 3, color.filled())))
            .map_err(chart_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
