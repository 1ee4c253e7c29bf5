use crate::config::KnowledgeBase;
use crate::plotting;
use aetherledger_core::{
    advisor::{self, AdvisorSelection},
    bounds::GeoBounds,
    builder, catalog,
    dashboard::{self, SeriesSummary},
    dispersion,
    footprint,
    logger::ForecastLogger,
};
use aetherledger_schemas::{
    advisor::{RecommendedLocation, ReductionMetric},
    dashboard::{EmissionSeries, TimeRange},
    footprint::{FootprintInput, FootprintResult},
    hotspot::{ForecastHorizon, HotspotRecord, LatLng},
};
use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::{fs, path::Path};

/// Validates the form, estimates it and prints the result.
pub fn run_footprint(input: &FootprintInput, output_dir: Option<&str>) -> Result<FootprintResult> {
    builder::validate(input).context("Footprint input rejected")?;
    let result = footprint::estimate(input);
    print_footprint_report(&result);

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir))?;
        plotting::plot_footprint_breakdown(dir, &result)?;
    }
    Ok(result)
}

/// Disperses the baseline hotspots for one horizon and prints them.
pub fn run_forecast(kb: &KnowledgeBase, hours: u32) -> Result<Vec<HotspotRecord>> {
    let hotspots = dispersion::disperse_hours(hours, &kb.hotspots)?;
    print_forecast(hours, &hotspots);
    Ok(hotspots)
}

/// Evaluates all four horizons, printing each and logging them to CSV.
pub fn run_forecast_timeline(kb: &KnowledgeBase, log_path: &str) -> Result<()> {
    let mut logger = ForecastLogger::new(log_path)
        .with_context(|| format!("Failed to create forecast log: {}", log_path))?;
    for (horizon, hotspots) in dispersion::forecast_timeline(&kb.hotspots) {
        print_forecast(horizon.hours(), &hotspots);
        logger.log_horizon(horizon, &hotspots)?;
    }
    println!("\nForecast log written to '{}'", log_path);
    Ok(())
}

pub fn run_advisor(kb: &KnowledgeBase, select: Option<u32>) -> Result<()> {
    let mut selection = AdvisorSelection::new();
    if let Some(id) = select {
        selection.toggle(id);
    }
    let active = selection.resolve(&kb.locations)?;
    print_advisor_report(kb, active);
    Ok(())
}

pub fn run_dashboard(range: TimeRange, seed: Option<u64>) -> Result<EmissionSeries> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let series = dashboard::emission_series(range, &mut rng);
    print_dashboard(&series, dashboard::summarize(&series));
    Ok(series)
}

/// Runs every workflow into a fresh timestamped directory under `output_root`.
pub fn run_report(
    kb: &KnowledgeBase,
    input: &FootprintInput,
    output_root: &Path,
    seed: Option<u64>,
) -> Result<String> {
    let output_dir = output_root
        .join(format!("run_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")))
        .to_string_lossy()
        .into_owned();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    println!("\n--- [Workflow] Footprint ---");
    let result = run_footprint(input, None)?;
    let input_yaml = serde_yaml::to_string(input)?;
    fs::write(Path::new(&output_dir).join("footprint_input.yaml"), input_yaml)?;

    println!("\n--- [Workflow] Dispersion Forecast ---");
    let log_path = Path::new(&output_dir).join("forecast.csv");
    let log_path = log_path.to_string_lossy().into_owned();
    run_forecast_timeline(kb, &log_path)?;

    println!("\n--- [Workflow] Filter Deployment ---");
    run_advisor(kb, None)?;
    let table = generate_deployment_table(&advisor::rank_locations(&kb.locations));
    fs::write(Path::new(&output_dir).join("deployment_plan.md"), table)?;

    println!("\n--- [Workflow] Dashboard ---");
    let series = run_dashboard(TimeRange::Month, seed)?;

    plotting::generate_all_plots(&output_dir, &log_path, &result, &series, &kb.filter_effectiveness)?;

    Ok(output_dir)
}

pub fn generate_deployment_table(ranked: &[&RecommendedLocation]) -> String {
    let mut table = String::from("| Rank | Location | Type | Risk | Population | Recommendation |\n");
    table.push_str("|------|----------|------|------|------------|----------------|\n");
    for (i, location) in ranked.iter().enumerate() {
        table.push_str(&format!(
            "| {} | {} | {} | {:?} | {} | {} |\n",
            i + 1,
            location.name,
            location.location_type,
            location.risk,
            location.population,
            location.recommendation
        ));
    }
    table
}

fn print_footprint_report(result: &FootprintResult) {
    println!("\n--- [Carbon Footprint Results] ---");
    println!("========================================");
    println!("  Total: {} kg CO2e/month", result.total);
    println!("  {}", result.comparison.message());
    println!("----------------------------------------");
    println!("  - Transportation: {:>6} kg", result.breakdown.transport);
    println!("  - Home Energy:    {:>6} kg", result.breakdown.home);
    println!("  - Work:           {:>6} kg", result.breakdown.work);
    println!("  - Lifestyle:      {:>6} kg", result.breakdown.lifestyle);
    println!("\nRecommendations:");
    for tip in &result.tips {
        println!("  * {}", tip);
    }
    println!("========================================");
}

/// Map view for a set of hotspots; an empty set shows the default map centre.
fn forecast_view(hotspots: &[HotspotRecord]) -> GeoBounds {
    GeoBounds::covering(hotspots.iter().map(|h| h.position))
        .unwrap_or_else(|| GeoBounds::from_point(catalog::MAP_CENTER))
}

/// Where the advisor map is centred: the selected site, or the overview.
fn advisor_focus(active: Option<&RecommendedLocation>) -> LatLng {
    active.map_or(catalog::ADVISOR_MAP_CENTER, |l| l.coordinates)
}

fn print_forecast(hours: u32, hotspots: &[HotspotRecord]) {
    let label = ForecastHorizon::try_from(hours).map_or("Custom", |h| h.label());
    println!("\nForecast: {} (+{}h)", label, hours);
    for h in hotspots {
        let level = dispersion::intensity_level(h.intensity);
        println!(
            "  - {:<28} | ({:>9.4}, {:>9.4}) | radius {:>8.0} m | intensity {:>5.1} [{} {}]",
            h.name,
            h.position.lat,
            h.position.lng,
            h.radius_m,
            h.intensity,
            level.as_str(),
            level.colour()
        );
    }
    let view = forecast_view(hotspots);
    println!(
        "  View: SW ({:.4}, {:.4}) NE ({:.4}, {:.4})",
        view.south_west.lat, view.south_west.lng, view.north_east.lat, view.north_east.lng
    );
}

fn print_advisor_report(kb: &KnowledgeBase, active: Option<&RecommendedLocation>) {
    println!("\nRecommended Locations:");
    for (i, location) in advisor::rank_locations(&kb.locations).iter().enumerate() {
        let marker = if active.map(|a| a.id) == Some(location.id) { ">" } else { " " };
        println!(
            "{} {}. {:<30} | {:<12} | {:?} Risk | {} people affected",
            marker,
            i + 1,
            location.name,
            location.location_type,
            location.risk,
            location.population
        );
    }

    let focus = advisor_focus(active);
    println!("\nMap centre: {:.4}, {:.4}", focus.lat, focus.lng);
    if let Some(location) = active {
        println!("Selected: {} ({})", location.name, location.risk.colour());
        println!("  Recommendation: {}", location.recommendation);
        println!("  Impact:         {}", location.impact);
        println!(
            "  Coordinates:    {:.4}, {:.4}",
            location.coordinates.lat, location.coordinates.lng
        );
    }

    println!("\nFilter Solutions:");
    for solution in &kb.filter_solutions {
        println!(
            "  - {} [{} effectiveness, {}]: {}",
            solution.name, solution.effectiveness, solution.cost_range, solution.description
        );
        println!("    Ideal for: {}", solution.ideal_for);
        println!("    Benefits:  {}", solution.benefits.join(", "));
    }

    for (metric, label) in [(ReductionMetric::Pm25, "PM2.5"), (ReductionMetric::Co2, "CO2")] {
        if let Some(best) = advisor::best_filter_for(&kb.filter_effectiveness, metric) {
            println!("  Best {} reduction: {}", label, best.name);
        }
    }
}

fn print_dashboard(series: &EmissionSeries, summary: Option<SeriesSummary>) {
    println!("\nDashboard ({})", series.range.as_str());
    for card in catalog::headline_metrics() {
        println!("  - {:<18} {:>10} ({})", card.title, card.value, card.change);
    }
    println!("\n  Emissions per period:");
    for (label, value) in series.labels.iter().zip(&series.values_kg) {
        println!("    {:>4}: {:>6.1} kg", label, value);
    }
    if let Some(s) = summary {
        println!(
            "  Total {:.0} kg, mean {:.1} kg, peak {:.0} kg ({})",
            s.total_kg, s.mean_kg, s.peak_kg, s.peak_label
        );
    }
}
