//! Monthly carbon-footprint estimate from self-reported activity levels.
//!
//! Every rate below is a flat multiplier in kg CO2e. The estimator performs
//! no validation: an input that passed through
//! [`FootprintInputBuilder`](crate::builder::FootprintInputBuilder) or was
//! deserialized into the schema types is always computable, and anything odd
//! (a negative distance, say) simply flows through the arithmetic.

use aetherledger_schemas::footprint::{
    CarType, ComparisonBand, FootprintBreakdown, FootprintInput, FootprintResult,
    MeatConsumption, OfficeType, RawBreakdown, ShoppingHabit,
};

const PUBLIC_TRANSPORT_KG_PER_TRIP: f64 = 2.0;
const ELECTRICITY_KG_PER_KWH: f64 = 0.5;
const GAS_KG_PER_UNIT: f64 = 2.0;
const OFFICE_DAYS_PER_WEEK: f64 = 5.0;
const FLIGHT_KG: f64 = 500.0;

const MAX_TIPS: usize = 4;
const MIN_TIPS_BEFORE_FALLBACK: usize = 3;

pub fn car_rate(car_type: CarType) -> f64 {
    match car_type {
        CarType::Gas => 0.2,
        CarType::Diesel => 0.15,
        CarType::Hybrid => 0.1,
        CarType::Electric => 0.05,
        CarType::None => 0.0,
    }
}

pub fn office_day_rate(office_type: OfficeType) -> f64 {
    match office_type {
        OfficeType::Standard => 8.0,
        OfficeType::EnergyEfficient => 5.0,
        OfficeType::Leed => 3.0,
        OfficeType::CoWorking => 4.0,
    }
}

pub fn meat_rate(tier: MeatConsumption) -> f64 {
    match tier {
        MeatConsumption::High => 50.0,
        MeatConsumption::Medium => 30.0,
        MeatConsumption::Low => 15.0,
        MeatConsumption::None => 5.0,
    }
}

pub fn shopping_rate(tier: ShoppingHabit) -> f64 {
    match tier {
        ShoppingHabit::Excessive => 40.0,
        ShoppingHabit::Frequent => 25.0,
        ShoppingHabit::Moderate => 15.0,
        ShoppingHabit::Minimal => 5.0,
    }
}

/// Rounds half-way cases towards positive infinity (`-2.5` becomes `-2`),
/// which differs from [`f64::round`] for negative values.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    (if value - floor >= 0.5 { floor + 1.0 } else { floor }) as i64
}

/// Computes the unrounded emissions of each category.
pub fn raw_breakdown(input: &FootprintInput) -> RawBreakdown {
    let transport = input.transport.weekly_km * car_rate(input.transport.car_type)
        + input.transport.public_transport as f64 * PUBLIC_TRANSPORT_KG_PER_TRIP;

    let home = (input.home.electricity_kwh * ELECTRICITY_KG_PER_KWH
        + input.home.gas_usage * GAS_KG_PER_UNIT)
        * (1.0 - input.home.renewable_percentage / 100.0)
        / input.home.occupants.get() as f64;

    // Not clamped: more than five remote days yields a negative figure.
    let days_in_office = OFFICE_DAYS_PER_WEEK - input.work.work_from_home as f64;
    let work = days_in_office * office_day_rate(input.work.office_type);

    let lifestyle = meat_rate(input.lifestyle.meat_consumption)
        + shopping_rate(input.lifestyle.shopping)
        + input.lifestyle.flights as f64 * FLIGHT_KG;

    RawBreakdown {
        transport,
        home,
        work,
        lifestyle,
    }
}

/// Buckets a total into one of the four comparison messages. Each boundary
/// belongs to the band above it.
pub fn comparison_band(total: i64) -> ComparisonBand {
    if total < 600 {
        ComparisonBand::LowerThan85Percent
    } else if total < 1000 {
        ComparisonBand::LowerThan60Percent
    } else if total < 1500 {
        ComparisonBand::AboutAverage
    } else {
        ComparisonBand::HigherThan70Percent
    }
}

/// Selects up to four reduction tips. Rules fire independently and keep their
/// order; two general tips are appended when fewer than three rules fired.
pub fn select_tips(input: &FootprintInput) -> Vec<String> {
    let mut tips = Vec::new();

    if matches!(input.transport.car_type, CarType::Gas | CarType::Diesel) {
        tips.push("Consider switching to a hybrid or electric vehicle.");
    }
    if input.home.renewable_percentage < 50.0 {
        tips.push("Increase your renewable energy usage to reduce home emissions.");
    }
    if input.work.work_from_home < 2 {
        tips.push("Working from home even one additional day can significantly reduce emissions.");
    }
    if input.lifestyle.meat_consumption == MeatConsumption::High {
        tips.push("Reducing meat consumption, especially red meat, can lower your carbon footprint.");
    }
    if input.lifestyle.flights > 3 {
        tips.push("Consider alternatives to flying or offset your flight emissions.");
    }

    if tips.len() < MIN_TIPS_BEFORE_FALLBACK {
        tips.push("Use public transportation more often.");
        tips.push("Invest in energy-efficient appliances for your home.");
    }

    tips.into_iter().take(MAX_TIPS).map(String::from).collect()
}

/// Estimates monthly emissions for one person.
///
/// Each category is rounded on its own and the total is the sum of those
/// rounded figures, so `total` always equals the sum of the displayed
/// sub-totals.
pub fn estimate(input: &FootprintInput) -> FootprintResult {
    let raw = raw_breakdown(input);
    let breakdown = FootprintBreakdown {
        transport: round_half_up(raw.transport),
        home: round_half_up(raw.home),
        work: round_half_up(raw.work),
        lifestyle: round_half_up(raw.lifestyle),
    };
    let total = breakdown.transport + breakdown.home + breakdown.work + breakdown.lifestyle;

    tracing::debug!(?raw, total, "estimated footprint");

    FootprintResult {
        raw,
        breakdown,
        total,
        comparison: comparison_band(total),
        tips: select_tips(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn low_impact_input() -> FootprintInput {
        let mut input = FootprintInput::default();
        input.transport.car_type = CarType::Electric;
        input.home.renewable_percentage = 80.0;
        input.work.work_from_home = 3;
        input.lifestyle.meat_consumption = MeatConsumption::Low;
        input.lifestyle.flights = 0;
        input
    }

    #[test]
    fn default_form_scenario() {
        let result = estimate(&FootprintInput::default());
        assert_eq!(result.breakdown.transport, 40);
        // (250 * 0.5 + 50 * 2) * 0.8 / 2
        assert_eq!(result.breakdown.home, 90);
        assert_eq!(result.breakdown.work, 24);
        assert_eq!(result.breakdown.lifestyle, 1045);
        assert_eq!(result.total, 1199);
        assert_eq!(result.comparison, ComparisonBand::AboutAverage);
    }

    #[test]
    fn comparison_band_boundaries() {
        assert_eq!(comparison_band(599), ComparisonBand::LowerThan85Percent);
        assert_eq!(comparison_band(600), ComparisonBand::LowerThan60Percent);
        assert_eq!(comparison_band(999), ComparisonBand::LowerThan60Percent);
        assert_eq!(comparison_band(1000), ComparisonBand::AboutAverage);
        assert_eq!(comparison_band(1499), ComparisonBand::AboutAverage);
        assert_eq!(comparison_band(1500), ComparisonBand::HigherThan70Percent);
    }

    #[test]
    fn total_is_sum_of_rounded_categories() {
        let mut input = FootprintInput::default();
        // Two half-kilogram fractions: rounding each first adds 1 kg overall,
        // rounding the sum once would add nothing.
        input.transport.weekly_km = 152.5; // 30.5 + 10
        input.home.electricity_kwh = 251.0; // 125.5 + 100
        input.home.occupants = NonZeroU32::new(1).unwrap();
        input.home.renewable_percentage = 0.0;
        let raw = raw_breakdown(&input);
        let result = estimate(&input);

        let expected = round_half_up(raw.transport)
            + round_half_up(raw.home)
            + round_half_up(raw.work)
            + round_half_up(raw.lifestyle);
        assert_eq!(result.total, expected);
        assert_eq!(result.breakdown.transport, 41);
        assert_eq!(result.breakdown.home, 226);
    }

    #[test]
    fn rounds_half_towards_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(61.999), 62);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497);
    }

    #[test]
    fn home_just_below_half_rounds_down() {
        let mut input = FootprintInput::default();
        input.home.electricity_kwh = 0.9999999999999999;
        input.home.gas_usage = 0.0;
        input.home.renewable_percentage = 0.0;
        input.home.occupants = NonZeroU32::new(1).unwrap();
        assert_eq!(estimate(&input).breakdown.home, 0);
    }

    #[test]
    fn work_goes_negative_beyond_five_remote_days() {
        let mut input = FootprintInput::default();
        input.work.work_from_home = 7;
        input.work.office_type = OfficeType::Leed;
        assert_eq!(estimate(&input).breakdown.work, -6);
    }

    #[test]
    fn no_car_only_counts_public_transport() {
        let mut input = FootprintInput::default();
        input.transport.car_type = CarType::None;
        input.transport.weekly_km = 1000.0;
        input.transport.public_transport = 3;
        assert_eq!(estimate(&input).breakdown.transport, 6);
    }

    #[test]
    fn fully_renewable_home_emits_nothing() {
        let mut input = FootprintInput::default();
        input.home.renewable_percentage = 100.0;
        assert_eq!(estimate(&input).breakdown.home, 0);
    }

    #[test]
    fn non_negative_inputs_give_non_negative_categories() {
        for car in [CarType::Electric, CarType::Hybrid, CarType::Gas, CarType::Diesel, CarType::None] {
            for office in [
                OfficeType::Standard,
                OfficeType::EnergyEfficient,
                OfficeType::Leed,
                OfficeType::CoWorking,
            ] {
                let mut input = FootprintInput::default();
                input.transport.car_type = car;
                input.work.office_type = office;
                input.work.work_from_home = 5;
                let b = estimate(&input).breakdown;
                assert!(b.transport >= 0 && b.home >= 0 && b.work >= 0 && b.lifestyle >= 0);
            }
        }

        let meats = [
            MeatConsumption::None,
            MeatConsumption::Low,
            MeatConsumption::Medium,
            MeatConsumption::High,
        ];
        let habits = [
            ShoppingHabit::Minimal,
            ShoppingHabit::Moderate,
            ShoppingHabit::Frequent,
            ShoppingHabit::Excessive,
        ];
        for meat in meats {
            for shopping in habits {
                for renewable in [0.0, 100.0] {
                    let mut input = FootprintInput::default();
                    input.lifestyle.meat_consumption = meat;
                    input.lifestyle.shopping = shopping;
                    input.lifestyle.flights = 0;
                    input.home.renewable_percentage = renewable;
                    let b = estimate(&input).breakdown;
                    assert!(b.transport >= 0 && b.home >= 0 && b.work >= 0 && b.lifestyle >= 0);
                    if renewable == 100.0 {
                        assert_eq!(b.home, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn estimate_is_deterministic() {
        let input = FootprintInput::default();
        assert_eq!(estimate(&input), estimate(&input.clone()));
    }

    #[test]
    fn default_tips_include_fallbacks() {
        // gas car and 20% renewables fire; 2 remote days does not.
        let tips = select_tips(&FootprintInput::default());
        assert_eq!(
            tips,
            vec![
                "Consider switching to a hybrid or electric vehicle.",
                "Increase your renewable energy usage to reduce home emissions.",
                "Use public transportation more often.",
                "Invest in energy-efficient appliances for your home.",
            ]
        );
    }

    #[test]
    fn low_impact_profile_gets_only_fallback_tips() {
        let tips = select_tips(&low_impact_input());
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0], "Use public transportation more often.");
    }

    #[test]
    fn tips_truncate_to_four_in_rule_order() {
        let mut input = FootprintInput::default();
        input.transport.car_type = CarType::Diesel;
        input.work.work_from_home = 0;
        input.lifestyle.meat_consumption = MeatConsumption::High;
        input.lifestyle.flights = 6;
        let tips = select_tips(&input);
        assert_eq!(tips.len(), 4);
        assert!(tips[3].starts_with("Reducing meat consumption"));
        assert!(!tips.iter().any(|t| t.contains("flying")));
    }

    #[test]
    fn three_rules_suppress_fallbacks() {
        let mut input = low_impact_input();
        input.transport.car_type = CarType::Gas;
        input.work.work_from_home = 1;
        input.lifestyle.flights = 4;
        let tips = select_tips(&input);
        assert_eq!(tips.len(), 3);
        assert!(!tips.iter().any(|t| t.contains("public transportation")));
    }
}
