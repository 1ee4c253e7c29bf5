use aetherledger_schemas::dashboard::{EmissionSeries, TimeRange};
use rand::Rng;

const WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEK_VALUES: [f64; 7] = [42.0, 38.0, 45.0, 40.0, 35.0, 28.0, 30.0];

const YEAR_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const YEAR_VALUES: [f64; 12] = [
    120.0, 115.0, 105.0, 95.0, 90.0, 85.0, 80.0, 83.0, 90.0, 110.0, 100.0, 95.0,
];

const MONTH_DAYS: u32 = 30;
const MONTH_MIN_KG: u32 = 25;
const MONTH_MAX_KG: u32 = 54;

/// Emissions per period for the dashboard chart. Week and year figures are
/// fixed; the month is sampled from `rng`.
pub fn emission_series<R: Rng + ?Sized>(range: TimeRange, rng: &mut R) -> EmissionSeries {
    let (labels, values_kg) = match range {
        TimeRange::Week => (
            WEEK_LABELS.iter().map(|s| s.to_string()).collect(),
            WEEK_VALUES.to_vec(),
        ),
        TimeRange::Month => (
            (1..=MONTH_DAYS).map(|day| day.to_string()).collect(),
            (0..MONTH_DAYS)
                .map(|_| rng.gen_range(MONTH_MIN_KG..=MONTH_MAX_KG) as f64)
                .collect(),
        ),
        TimeRange::Year => (
            YEAR_LABELS.iter().map(|s| s.to_string()).collect(),
            YEAR_VALUES.to_vec(),
        ),
    };
    EmissionSeries {
        range,
        labels,
        values_kg,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub total_kg: f64,
    pub mean_kg: f64,
    pub peak_label: String,
    pub peak_kg: f64,
}

pub fn summarize(series: &EmissionSeries) -> Option<SeriesSummary> {
    let (peak_idx, peak_kg) = series
        .values_kg
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })?;
    let total_kg: f64 = series.values_kg.iter().sum();
    Some(SeriesSummary {
        total_kg,
        mean_kg: total_kg / series.values_kg.len() as f64,
        peak_label: series.labels.get(peak_idx).cloned().unwrap_or_default(),
        peak_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn week_and_year_are_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let week = emission_series(TimeRange::Week, &mut rng);
        assert_eq!(week.labels.first().map(String::as_str), Some("Mon"));
        assert_eq!(week.values_kg, WEEK_VALUES.to_vec());

        let year = emission_series(TimeRange::Year, &mut rng);
        assert_eq!(year.labels.len(), 12);
        assert_eq!(year.values_kg[9], 110.0);
    }

    #[test]
    fn seeded_month_is_reproducible_and_in_range() {
        let a = emission_series(TimeRange::Month, &mut StdRng::seed_from_u64(7));
        let b = emission_series(TimeRange::Month, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.labels.len(), 30);
        assert_eq!(a.labels[29], "30");
        assert!(a.values_kg.iter().all(|v| (25.0..=54.0).contains(v)));
    }

    #[test]
    fn summary_of_week() {
        let week = emission_series(TimeRange::Week, &mut StdRng::seed_from_u64(0));
        let summary = summarize(&week).unwrap();
        assert_eq!(summary.total_kg, 258.0);
        assert_eq!(summary.peak_label, "Wed");
        assert_eq!(summary.peak_kg, 45.0);
    }

    #[test]
    fn empty_series_has_no_summary() {
        let empty = EmissionSeries {
            range: TimeRange::Week,
            labels: vec![],
            values_kg: vec![],
        };
        assert_eq!(summarize(&empty), None);
    }
}
