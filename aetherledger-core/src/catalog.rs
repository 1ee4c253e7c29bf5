//! Built-in reference data used when no knowledge base is supplied.

use aetherledger_schemas::{
    advisor::{FilterEffectiveness, FilterSolution, RecommendedLocation, RiskLevel},
    dashboard::MetricCard,
    hotspot::{HotspotRecord, LatLng, PollutantReadings, RiskTier},
};
use serde_json::json;
use std::collections::BTreeMap;

const LAST_UPDATED: &str = "2025-05-10T11:49:32+04:00";

/// Centre of the emission map view.
pub const MAP_CENTER: LatLng = LatLng { lat: 24.774265, lng: 54.738937 };

/// Centre of the advisor map view.
pub const ADVISOR_MAP_CENTER: LatLng = LatLng { lat: 39.8283, lng: -98.5795 };

fn stamped(extra: impl IntoIterator<Item = (&'static str, serde_json::Value)>) -> BTreeMap<String, serde_json::Value> {
    let mut map: BTreeMap<String, serde_json::Value> =
        extra.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    map.insert("last_updated".to_string(), json!(LAST_UPDATED));
    map
}

/// Current-time emission hotspots across the UAE.
pub fn baseline_hotspots() -> Vec<HotspotRecord> {
    vec![
        HotspotRecord {
            id: 1,
            name: "Dubai Metropolitan Area".to_string(),
            source: "Urban & industrial emissions".to_string(),
            category: "Urban".to_string(),
            position: LatLng::new(25.276987, 55.296249),
            radius_m: 22_000.0,
            intensity: 70.0,
            population: 3_700_000,
            risk: RiskTier::Moderate,
            notes: "Expo 2025 preparations, increased monitoring".to_string(),
            readings: Some(PollutantReadings {
                aqi: 70.0,
                pm25: 35.0,
                pm10: 60.0,
                no2: 45.0,
                so2: 10.0,
                co: 0.7,
                o3: 25.0,
            }),
            extra: stamped([("district", json!("Metropolis"))]),
        },
        HotspotRecord {
            id: 2,
            name: "Abu Dhabi City".to_string(),
            source: "Urban emissions".to_string(),
            category: "Urban".to_string(),
            position: LatLng::new(24.453884, 54.3773438),
            radius_m: 18_000.0,
            intensity: 65.0,
            population: 1_500_000,
            risk: RiskTier::Moderate,
            notes: "Governmental and administrative center".to_string(),
            readings: Some(PollutantReadings {
                aqi: 65.0,
                pm25: 30.0,
                pm10: 50.0,
                no2: 40.0,
                so2: 8.0,
                co: 0.6,
                o3: 20.0,
            }),
            extra: stamped([("district", json!("Capital"))]),
        },
        HotspotRecord {
            id: 3,
            name: "Sharjah".to_string(),
            source: "Urban emissions".to_string(),
            category: "Urban".to_string(),
            position: LatLng::new(25.4052165, 55.5136433),
            radius_m: 15_000.0,
            intensity: 55.0,
            population: 1_400_000,
            risk: RiskTier::Low,
            notes: "Cultural capital of UAE".to_string(),
            readings: Some(PollutantReadings {
                aqi: 55.0,
                pm25: 25.0,
                pm10: 40.0,
                no2: 30.0,
                so2: 6.0,
                co: 0.5,
                o3: 18.0,
            }),
            extra: stamped([("district", json!("City"))]),
        },
        HotspotRecord {
            id: 4,
            name: "Jebel Ali Industrial Zone".to_string(),
            source: "Industrial emissions".to_string(),
            category: "Industrial".to_string(),
            position: LatLng::new(25.0657, 55.1713),
            radius_m: 12_000.0,
            intensity: 80.0,
            population: 100_000,
            risk: RiskTier::High,
            notes: "Major port and industrial hub".to_string(),
            readings: Some(PollutantReadings {
                aqi: 80.0,
                pm25: 50.0,
                pm10: 90.0,
                no2: 60.0,
                so2: 20.0,
                co: 1.2,
                o3: 35.0,
            }),
            extra: stamped([
                ("district", json!("Industrial Zone")),
                ("wind_speed_kmh", json!(22)),
                ("carbon_emissions_t_per_capita", json!(6.2)),
                ("humidity_pct", json!(48)),
                ("temperature_c", json!(38)),
                ("pressure_hpa", json!(1010)),
                ("visibility_km", json!(8)),
                ("wind_direction", json!("W")),
                ("precipitation_mm", json!(0)),
                ("filter_zones", json!(["Industrial"])),
                ("is_green_zone", json!(false)),
            ]),
        },
    ]
}

/// Vulnerable sites considered for filter deployment.
pub fn recommended_locations() -> Vec<RecommendedLocation> {
    vec![
        RecommendedLocation {
            id: 1,
            name: "Downtown School District".to_string(),
            location_type: "School Zone".to_string(),
            risk: RiskLevel::High,
            population: 1200,
            recommendation: "Install moss walls and industrial purifiers".to_string(),
            impact: "Protects 1,200+ children and 100+ staff".to_string(),
            coordinates: LatLng::new(40.7128, -74.006),
        },
        RecommendedLocation {
            id: 2,
            name: "Westside Community Hospital".to_string(),
            location_type: "Healthcare".to_string(),
            risk: RiskLevel::Critical,
            population: 850,
            recommendation: "Deploy HEPA filtration and green buffer zone".to_string(),
            impact: "Protects 850+ patients and 200+ medical staff".to_string(),
            coordinates: LatLng::new(34.0522, -118.2437),
        },
        RecommendedLocation {
            id: 3,
            name: "Riverdale Residential Area".to_string(),
            location_type: "Residential".to_string(),
            risk: RiskLevel::Medium,
            population: 5600,
            recommendation: "Community air purifiers and tree planting".to_string(),
            impact: "Improves air quality for 5,600+ residents".to_string(),
            coordinates: LatLng::new(41.8781, -87.6298),
        },
        RecommendedLocation {
            id: 4,
            name: "Eastside Senior Center".to_string(),
            location_type: "Elderly Care".to_string(),
            risk: RiskLevel::High,
            population: 350,
            recommendation: "Indoor filtration systems and outdoor ionizers".to_string(),
            impact: "Protects 350+ vulnerable seniors".to_string(),
            coordinates: LatLng::new(29.7604, -95.3698),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn filter_solutions() -> Vec<FilterSolution> {
    vec![
        FilterSolution {
            name: "Moss Walls".to_string(),
            description: "Vertical installations of moss that naturally filter air pollutants and improve urban aesthetics.".to_string(),
            benefits: strings(&["Natural filtration", "Aesthetically pleasing", "Low maintenance"]),
            ideal_for: "Urban areas, schools, hospitals".to_string(),
            effectiveness: "Medium".to_string(),
            cost_range: "$$ - $$$".to_string(),
        },
        FilterSolution {
            name: "HEPA Purifiers".to_string(),
            description: "High-efficiency particulate air filters that remove 99.97% of airborne particles.".to_string(),
            benefits: strings(&["Highly effective", "Indoor use", "Medical grade"]),
            ideal_for: "Hospitals, schools, elderly care".to_string(),
            effectiveness: "High".to_string(),
            cost_range: "$$ - $$$".to_string(),
        },
        FilterSolution {
            name: "Green Buffer Zones".to_string(),
            description: "Strategic planting of trees and vegetation to create natural air filtration barriers.".to_string(),
            benefits: strings(&["Long-term solution", "Carbon sequestration", "Community benefits"]),
            ideal_for: "Between industrial and residential areas".to_string(),
            effectiveness: "Medium - High".to_string(),
            cost_range: "$$ - $$$$".to_string(),
        },
    ]
}

pub fn filter_effectiveness() -> Vec<FilterEffectiveness> {
    [
        ("Moss Walls", 45.0, 25.0),
        ("HEPA Filters", 95.0, 5.0),
        ("Ionizers", 85.0, 15.0),
        ("Tree Barriers", 35.0, 40.0),
        ("Carbon Scrubbers", 80.0, 65.0),
    ]
    .into_iter()
    .map(|(name, pm25, co2)| FilterEffectiveness {
        name: name.to_string(),
        pm25_reduction_pct: pm25,
        co2_reduction_pct: co2,
    })
    .collect()
}

pub fn headline_metrics() -> Vec<MetricCard> {
    [
        ("Total Emissions", "1,248 kg", "-12%"),
        ("Carbon Intensity", "246 g/kWh", "-8%"),
        ("Protected People", "5,672", "+24%"),
        ("High Risk Zones", "3", "-2"),
    ]
    .into_iter()
    .map(|(title, value, change)| MetricCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        positive: true,
    })
    .collect()
}
