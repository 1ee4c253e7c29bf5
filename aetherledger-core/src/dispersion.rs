//! Time-parameterized spread of pollution hotspots.
//!
//! The model drifts every hotspot north-east, widens its radius and fades its
//! intensity linearly with the forecast horizon. Latitude and longitude use
//! different divisors (72 h and 48 h) so the drift is not diagonal.

use crate::error::AetherError;
use aetherledger_schemas::hotspot::{ForecastHorizon, HotspotRecord, IntensityLevel, LatLng};

const LAT_DRIFT_DEGREES: f64 = 0.5;
const LAT_DRIFT_HOURS: f64 = 72.0;
const LNG_DRIFT_DEGREES: f64 = 0.8;
const LNG_DRIFT_HOURS: f64 = 48.0;
const RADIUS_GROWTH_PER_DAY: f64 = 0.5;
const INTENSITY_DECAY_PER_DAY: f64 = 15.0;

/// Intensity never fades below this floor.
pub const INTENSITY_FLOOR: f64 = 20.0;

fn disperse_one(hotspot: &HotspotRecord, hours: f64) -> HotspotRecord {
    let days = hours / 24.0;
    HotspotRecord {
        position: LatLng {
            lat: hotspot.position.lat + (hours / LAT_DRIFT_HOURS) * LAT_DRIFT_DEGREES,
            lng: hotspot.position.lng + (hours / LNG_DRIFT_HOURS) * LNG_DRIFT_DEGREES,
        },
        radius_m: hotspot.radius_m * (1.0 + days * RADIUS_GROWTH_PER_DAY),
        intensity: (hotspot.intensity - days * INTENSITY_DECAY_PER_DAY).max(INTENSITY_FLOOR),
        ..hotspot.clone()
    }
}

/// Projects `baseline` forward by `hours`.
///
/// A zero horizon returns the baseline records as they are, without running
/// them through the arithmetic.
pub fn disperse(hours: f64, baseline: &[HotspotRecord]) -> Vec<HotspotRecord> {
    if hours == 0.0 {
        return baseline.to_vec();
    }
    baseline.iter().map(|h| disperse_one(h, hours)).collect()
}

pub fn disperse_horizon(horizon: ForecastHorizon, baseline: &[HotspotRecord]) -> Vec<HotspotRecord> {
    disperse(horizon.hours() as f64, baseline)
}

/// Like [`disperse_horizon`] but takes raw hours as supplied by a caller,
/// rejecting anything outside the four forecast points.
pub fn disperse_hours(hours: u32, baseline: &[HotspotRecord]) -> Result<Vec<HotspotRecord>, AetherError> {
    let horizon = ForecastHorizon::try_from(hours).map_err(AetherError::UnsupportedForecast)?;
    Ok(disperse_horizon(horizon, baseline))
}

/// Evaluates every forecast horizon in order.
pub fn forecast_timeline(baseline: &[HotspotRecord]) -> Vec<(ForecastHorizon, Vec<HotspotRecord>)> {
    ForecastHorizon::ALL
        .iter()
        .map(|&horizon| (horizon, disperse_horizon(horizon, baseline)))
        .collect()
}

pub fn intensity_level(intensity: f64) -> IntensityLevel {
    if intensity > 70.0 {
        IntensityLevel::High
    } else if intensity > 50.0 {
        IntensityLevel::Moderate
    } else {
        IntensityLevel::Low
    }
}
