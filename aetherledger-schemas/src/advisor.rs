use crate::hotspot::LatLng;
use serde::{Deserialize, Serialize};

/// Ordered from least to most severe so that `Ord` ranks `Critical` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn colour(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "#ef4444",
            RiskLevel::High => "#f59e0b",
            RiskLevel::Medium => "#3b82f6",
            RiskLevel::Low => "#22c55e",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedLocation {
    pub id: u32,
    pub name: String,
    pub location_type: String,
    pub risk: RiskLevel,
    pub population: u32,
    pub recommendation: String,
    pub impact: String,
    pub coordinates: LatLng,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSolution {
    pub name: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub ideal_for: String,
    pub effectiveness: String,
    pub cost_range: String,
}

/// Measured pollutant reduction for one filter technology, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEffectiveness {
    pub name: String,
    pub pm25_reduction_pct: f64,
    pub co2_reduction_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMetric {
    Pm25,
    Co2,
}
