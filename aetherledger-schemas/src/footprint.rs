use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

const DEFAULT_OCCUPANTS: NonZeroU32 = match NonZeroU32::new(2) {
    Some(n) => n,
    None => panic!("occupant default must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarType {
    Electric,
    Hybrid,
    Gas,
    Diesel,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfficeType {
    Standard,
    EnergyEfficient,
    Leed,
    CoWorking,
}

/// Informational only; it does not contribute to any emission figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeatConsumption {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShoppingHabit {
    Minimal,
    Moderate,
    Frequent,
    Excessive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportInput {
    pub car_type: CarType,
    pub weekly_km: f64,
    pub public_transport: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeInput {
    pub electricity_kwh: f64,
    pub gas_usage: f64,
    pub renewable_percentage: f64,
    pub occupants: NonZeroU32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkInput {
    pub work_from_home: u32,
    pub office_type: OfficeType,
    pub company_size: CompanySize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInput {
    pub meat_consumption: MeatConsumption,
    pub shopping: ShoppingHabit,
    pub flights: u32,
}

/// Self-reported activity levels for one person, grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintInput {
    pub transport: TransportInput,
    pub home: HomeInput,
    pub work: WorkInput,
    pub lifestyle: LifestyleInput,
}

impl Default for FootprintInput {
    /// The calculator's initial form state.
    fn default() -> Self {
        Self {
            transport: TransportInput {
                car_type: CarType::Gas,
                weekly_km: 150.0,
                public_transport: 5,
            },
            home: HomeInput {
                electricity_kwh: 250.0,
                gas_usage: 50.0,
                renewable_percentage: 20.0,
                occupants: DEFAULT_OCCUPANTS,
            },
            work: WorkInput {
                work_from_home: 2,
                office_type: OfficeType::Standard,
                company_size: CompanySize::Medium,
            },
            lifestyle: LifestyleInput {
                meat_consumption: MeatConsumption::Medium,
                shopping: ShoppingHabit::Moderate,
                flights: 2,
            },
        }
    }
}

/// Unrounded per-category emissions in kg CO2e per month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawBreakdown {
    pub transport: f64,
    pub home: f64,
    pub work: f64,
    pub lifestyle: f64,
}

/// Per-category emissions rounded to whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FootprintBreakdown {
    pub transport: i64,
    pub home: i64,
    pub work: i64,
    pub lifestyle: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonBand {
    LowerThan85Percent,
    LowerThan60Percent,
    AboutAverage,
    HigherThan70Percent,
}

impl ComparisonBand {
    pub fn message(&self) -> &'static str {
        match self {
            ComparisonBand::LowerThan85Percent => {
                "Your carbon footprint is lower than 85% of people. Great job!"
            }
            ComparisonBand::LowerThan60Percent => {
                "Your carbon footprint is lower than 60% of people. Good work!"
            }
            ComparisonBand::AboutAverage => "Your carbon footprint is about average.",
            ComparisonBand::HigherThan70Percent => {
                "Your carbon footprint is higher than 70% of people. There's room for improvement."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub raw: RawBreakdown,
    pub breakdown: FootprintBreakdown,
    pub total: i64,
    pub comparison: ComparisonBand,
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM_YAML: &str = r#"
transport:
  car_type: diesel
  weekly_km: 80
  public_transport: 1
home:
  electricity_kwh: 300
  gas_usage: 20
  renewable_percentage: 55
  occupants: 3
work:
  work_from_home: 4
  office_type: energy-efficient
  company_size: large
lifestyle:
  meat_consumption: none
  shopping: excessive
  flights: 0
"#;

    #[test]
    fn deserializes_kebab_case_form_values() {
        let input: FootprintInput = serde_yaml::from_str(FORM_YAML).unwrap();
        assert_eq!(input.transport.car_type, CarType::Diesel);
        assert_eq!(input.work.office_type, OfficeType::EnergyEfficient);
        assert_eq!(input.lifestyle.shopping, ShoppingHabit::Excessive);
        assert_eq!(input.home.occupants.get(), 3);
    }

    #[test]
    fn rejects_zero_occupants_and_unknown_categories() {
        let zero = FORM_YAML.replace("occupants: 3", "occupants: 0");
        assert!(serde_yaml::from_str::<FootprintInput>(&zero).is_err());

        let unknown = FORM_YAML.replace("car_type: diesel", "car_type: hovercraft");
        assert!(serde_yaml::from_str::<FootprintInput>(&unknown).is_err());
    }

    #[test]
    fn default_matches_initial_form_state() {
        let input = FootprintInput::default();
        assert_eq!(input.transport.car_type, CarType::Gas);
        assert_eq!(input.transport.weekly_km, 150.0);
        assert_eq!(input.home.occupants.get(), 2);
        assert_eq!(input.work.company_size, CompanySize::Medium);
        assert_eq!(input.lifestyle.flights, 2);
    }
}
