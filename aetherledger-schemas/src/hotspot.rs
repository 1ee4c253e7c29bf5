use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantReadings {
    pub aqi: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
    pub o3: f64,
}

/// A simulated pollution source.
///
/// Only `position`, `radius_m` and `intensity` take part in dispersion; the
/// remaining fields (including anything captured in `extra`) are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotRecord {
    pub id: u32,
    pub name: String,
    pub source: String,
    pub category: String,
    pub position: LatLng,
    pub radius_m: f64,
    pub intensity: f64,
    pub population: u64,
    pub risk: RiskTier,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readings: Option<PollutantReadings>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The four forecast points offered by the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ForecastHorizon {
    Now,
    H24,
    H48,
    H72,
}

impl ForecastHorizon {
    pub const ALL: [ForecastHorizon; 4] = [
        ForecastHorizon::Now,
        ForecastHorizon::H24,
        ForecastHorizon::H48,
        ForecastHorizon::H72,
    ];

    pub fn hours(&self) -> u32 {
        match self {
            ForecastHorizon::Now => 0,
            ForecastHorizon::H24 => 24,
            ForecastHorizon::H48 => 48,
            ForecastHorizon::H72 => 72,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastHorizon::Now => "Now",
            ForecastHorizon::H24 => "24h",
            ForecastHorizon::H48 => "48h",
            ForecastHorizon::H72 => "72h",
        }
    }
}

impl TryFrom<u32> for ForecastHorizon {
    type Error = u32;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        match hours {
            0 => Ok(ForecastHorizon::Now),
            24 => Ok(ForecastHorizon::H24),
            48 => Ok(ForecastHorizon::H48),
            72 => Ok(ForecastHorizon::H72),
            other => Err(other),
        }
    }
}

impl From<ForecastHorizon> for u32 {
    fn from(horizon: ForecastHorizon) -> Self {
        horizon.hours()
    }
}

/// Display band used to colour a hotspot by its intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Moderate,
    High,
}

impl IntensityLevel {
    pub fn colour(&self) -> &'static str {
        match self {
            IntensityLevel::High => "#ef4444",
            IntensityLevel::Moderate => "#f59e0b",
            IntensityLevel::Low => "#22c55e",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityLevel::High => "high",
            IntensityLevel::Moderate => "moderate",
            IntensityLevel::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_horizon_accepts_only_the_four_offsets() {
        assert_eq!(ForecastHorizon::try_from(48), Ok(ForecastHorizon::H48));
        assert_eq!(ForecastHorizon::try_from(12), Err(12));
        let hours: Vec<u32> = ForecastHorizon::ALL.iter().map(|h| h.hours()).collect();
        assert_eq!(hours, vec![0, 24, 48, 72]);
    }

    #[test]
    fn hotspot_keeps_unknown_fields() {
        let yaml = r#"
id: 4
name: Jebel Ali Industrial Zone
source: Industrial emissions
category: Industrial
position: { lat: 25.0657, lng: 55.1713 }
radius_m: 12000
intensity: 80
population: 100000
risk: High
wind_direction: W
is_green_zone: false
"#;
        let record: HotspotRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.readings, None);
        assert_eq!(record.extra.get("wind_direction"), Some(&serde_json::json!("W")));
        assert_eq!(record.extra.get("is_green_zone"), Some(&serde_json::json!(false)));
    }
}
