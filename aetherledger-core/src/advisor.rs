//! Filter deployment advisor: ranks vulnerable sites and picks filters.

use crate::error::AetherError;
use aetherledger_schemas::advisor::{FilterEffectiveness, RecommendedLocation, ReductionMetric};
use std::cmp::Reverse;

/// Orders locations by risk (most severe first), then by affected
/// population (largest first), then by id.
pub fn rank_locations(locations: &[RecommendedLocation]) -> Vec<&RecommendedLocation> {
    let mut ranked: Vec<&RecommendedLocation> = locations.iter().collect();
    ranked.sort_by_key(|l| (Reverse(l.risk), Reverse(l.population), l.id));
    ranked
}

pub fn find_location(
    locations: &[RecommendedLocation],
    id: u32,
) -> Result<&RecommendedLocation, AetherError> {
    locations
        .iter()
        .find(|l| l.id == id)
        .ok_or(AetherError::LocationNotFound(id))
}

/// Tracks which location, if any, is expanded in the advisor view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvisorSelection {
    active: Option<u32>,
}

impl AdvisorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<u32> {
        self.active
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn toggle(&mut self, id: u32) -> Option<u32> {
        self.active = if self.active == Some(id) { None } else { Some(id) };
        self.active
    }

    pub fn resolve<'a>(
        &self,
        locations: &'a [RecommendedLocation],
    ) -> Result<Option<&'a RecommendedLocation>, AetherError> {
        self.active.map(|id| find_location(locations, id)).transpose()
    }
}

fn reduction(entry: &FilterEffectiveness, metric: ReductionMetric) -> f64 {
    match metric {
        ReductionMetric::Pm25 => entry.pm25_reduction_pct,
        ReductionMetric::Co2 => entry.co2_reduction_pct,
    }
}

/// The filter with the largest reduction for `metric`; the first listed wins
/// a tie.
pub fn best_filter_for(
    table: &[FilterEffectiveness],
    metric: ReductionMetric,
) -> Option<&FilterEffectiveness> {
    let mut best: Option<&FilterEffectiveness> = None;
    for entry in table {
        if best.map_or(true, |b| reduction(entry, metric) > reduction(b, metric)) {
            best = Some(entry);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn ranks_by_risk_then_population() {
        let locations = catalog::recommended_locations();
        let names: Vec<&str> = rank_locations(&locations).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Westside Community Hospital",
                "Downtown School District",
                "Eastside Senior Center",
                "Riverdale Residential Area",
            ]
        );
    }

    #[test]
    fn toggling_twice_clears_selection() {
        let mut selection = AdvisorSelection::new();
        assert_eq!(selection.toggle(2), Some(2));
        assert_eq!(selection.toggle(3), Some(3));
        assert_eq!(selection.toggle(3), None);
        assert_eq!(selection.active(), None);
    }

    #[test]
    fn resolves_selected_location() {
        let locations = catalog::recommended_locations();
        let mut selection = AdvisorSelection::new();
        assert_eq!(selection.resolve(&locations).unwrap(), None);

        selection.toggle(4);
        let resolved = selection.resolve(&locations).unwrap().unwrap();
        assert_eq!(resolved.name, "Eastside Senior Center");

        selection.toggle(9);
        assert!(matches!(
            selection.resolve(&locations),
            Err(AetherError::LocationNotFound(9))
        ));
    }

    #[test]
    fn best_filters_per_metric() {
        let table = catalog::filter_effectiveness();
        assert_eq!(best_filter_for(&table, ReductionMetric::Pm25).unwrap().name, "HEPA Filters");
        assert_eq!(best_filter_for(&table, ReductionMetric::Co2).unwrap().name, "Carbon Scrubbers");
        assert!(best_filter_for(&[], ReductionMetric::Co2).is_none());
    }
}
