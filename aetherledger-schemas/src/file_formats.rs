use crate::{
    advisor::{FilterEffectiveness, FilterSolution, RecommendedLocation},
    footprint::FootprintInput,
    hotspot::HotspotRecord,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HotspotFile {
    pub schema_version: String,
    pub hotspots: Vec<HotspotRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LocationFile {
    pub schema_version: String,
    pub locations: Vec<RecommendedLocation>,
}

#[derive(Debug, Deserialize)]
pub struct FilterFile {
    pub schema_version: String,
    #[serde(default)]
    pub solutions: Vec<FilterSolution>,
    #[serde(default)]
    pub effectiveness: Vec<FilterEffectiveness>,
}

#[derive(Debug, Deserialize)]
pub struct FootprintFile {
    pub schema_version: String,
    pub footprint: FootprintInput,
}
