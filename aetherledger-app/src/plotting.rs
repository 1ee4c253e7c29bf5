//! Renders report charts as PNG files.

use aetherledger_core::{bounds::GeoBounds, logger};
use aetherledger_schemas::{
    advisor::FilterEffectiveness, dashboard::EmissionSeries, footprint::FootprintResult,
    hotspot::LatLng,
};
use anyhow::Result;
use plotters::prelude::*;
use std::collections::BTreeMap;

const HORIZON_COLORS: [RGBColor; 4] = [
    RGBColor(0x22, 0xc5, 0x5e),
    RGBColor(0x07, 0x8d, 0xf4),
    RGBColor(0xf5, 0x9e, 0x0b),
    RGBColor(0xef, 0x44, 0x44),
];

/// Generates every chart of a full report run.
pub fn generate_all_plots(
    output_dir: &str,
    forecast_log_path: &str,
    footprint: &FootprintResult,
    series: &EmissionSeries,
    effectiveness: &[FilterEffectiveness],
) -> Result<()> {
    println!("[Plotting] Generating charts...");

    plot_footprint_breakdown(output_dir, footprint)?;
    plot_emission_series(output_dir, series)?;
    plot_filter_effectiveness(output_dir, effectiveness)?;
    plot_dispersion(output_dir, forecast_log_path)?;

    println!("[Plotting] Charts have been saved to '{}'.", output_dir);
    Ok(())
}

/// Bar chart of the four rounded footprint categories.
pub fn plot_footprint_breakdown(output_dir: &str, result: &FootprintResult) -> Result<()> {
    let path = format!("{}/1_footprint_breakdown.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels = ["Transportation", "Home Energy", "Work", "Lifestyle"];
    let b = &result.breakdown;
    let values = [b.transport, b.home, b.work, b.lifestyle];

    let y_max = values.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.1;
    let y_min = values.iter().copied().min().unwrap_or(0).min(0) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Carbon Footprint: {} kg CO2e/month", result.total),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(labels.len() as f64 - 0.5), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len() * 2 + 1)
        .x_label_formatter(&|x| label_at(&labels, *x))
        .y_desc("kg CO2e / month")
        .draw()?;

    let colors = [BLUE, RED, GREEN, MAGENTA];
    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        let x = i as f64;
        Rectangle::new([(x - 0.3, 0.0), (x + 0.3, *v as f64)], colors[i].mix(0.7).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Line chart of dashboard emissions for one time range.
pub fn plot_emission_series(output_dir: &str, series: &EmissionSeries) -> Result<()> {
    let path = format!("{}/2_emissions_{}.png", output_dir, series.range.as_str());
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    if series.values_kg.is_empty() {
        println!("[Plotting] Warning: No emission data to plot.");
        root.present()?;
        return Ok(());
    }

    let max_value = series.values_kg.iter().copied().fold(0.0, f64::max);
    let last_index = series.values_kg.len() as f64 - 1.0;
    let labels: Vec<&str> = series.labels.iter().map(String::as_str).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("CO2 Emissions per {}", series.range.as_str()),
            ("sans-serif", 50).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..last_index + 0.5, 0f64..max_value * 1.1)?;

    chart
        .configure_mesh()
        .x_labels(labels.len() * 2 + 1)
        .x_label_formatter(&|x| label_at(&labels, *x))
        .y_label_formatter(&|y| format!("{:.0} kg", y))
        .draw()?;

    let color = RGBColor(0x07, 0x8d, 0xf4);
    let points: Vec<(f64, f64)> = series
        .values_kg
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();

    chart
        .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))?
        .label("CO2 Emissions (kg)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    chart.draw_series(points.into_iter().map(|p| Circle::new(p, 4, color.filled())))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Grouped bars comparing PM2.5 and CO2 reduction per filter technology.
pub fn plot_filter_effectiveness(output_dir: &str, table: &[FilterEffectiveness]) -> Result<()> {
    let path = format!("{}/3_filter_effectiveness.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = table.iter().map(|f| f.name.as_str()).collect();
    let mut chart = ChartBuilder::on(&root)
        .caption("Filter Effectiveness Comparison", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(labels.len() as f64 - 0.5), 0f64..100f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len() * 2 + 1)
        .x_label_formatter(&|x| label_at(&labels, *x))
        .y_label_formatter(&|y| format!("{:.0}%", y))
        .draw()?;

    let pm_color = RGBColor(28, 174, 253);
    let co2_color = RGBColor(39, 173, 131);

    chart
        .draw_series(table.iter().enumerate().map(|(i, f)| {
            let x = i as f64;
            Rectangle::new([(x - 0.35, 0.0), (x, f.pm25_reduction_pct)], pm_color.mix(0.7).filled())
        }))?
        .label("PM 2.5 Reduction (%)")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], pm_color.filled()));

    chart
        .draw_series(table.iter().enumerate().map(|(i, f)| {
            let x = i as f64;
            Rectangle::new([(x, 0.0), (x + 0.35, f.co2_reduction_pct)], co2_color.mix(0.7).filled())
        }))?
        .label("CO2 Reduction (%)")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], co2_color.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Scatter of hotspot positions per forecast horizon, read back from the
/// forecast CSV log. Marker size follows the dispersion radius.
pub fn plot_dispersion(output_dir: &str, log_path: &str) -> Result<()> {
    let rows = logger::read_forecast_log(log_path)?;
    let Some(bounds) = GeoBounds::covering(rows.iter().map(|r| LatLng::new(r.lat, r.lng))) else {
        println!("[Plotting] Warning: No forecast data to plot.");
        return Ok(());
    };
    let view = bounds.padded(0.2);

    let path = format!("{}/4_dispersion_forecast.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Pollution Dispersion Forecast", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(
            view.south_west.lng..view.north_east.lng,
            view.south_west.lat..view.north_east.lat,
        )?;

    chart
        .configure_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .draw()?;

    let mut by_horizon: BTreeMap<u32, Vec<&logger::ForecastLogEntry>> = BTreeMap::new();
    for row in &rows {
        by_horizon.entry(row.horizon_hours).or_default().push(row);
    }

    for (i, (hours, entries)) in by_horizon.iter().enumerate() {
        let color = HORIZON_COLORS[i % HORIZON_COLORS.len()];
        chart
            .draw_series(entries.iter().map(|e| {
                let size = (e.radius_m / 1000.0).clamp(3.0, 60.0) as i32;
                Circle::new((e.lng, e.lat), size, color.mix(0.4).filled())
            }))?
            .label(format!("+{}h", hours))
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Category label for an x position that falls on a bar centre.
fn label_at(labels: &[&str], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).map(|s| s.to_string()).unwrap_or_default()
}
