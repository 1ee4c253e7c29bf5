use crate::error::AetherError;
use aetherledger_schemas::footprint::{
    CarType, CompanySize, FootprintInput, HomeInput, LifestyleInput, MeatConsumption,
    OfficeType, ShoppingHabit, TransportInput, WorkInput,
};
use std::num::NonZeroU32;

/// A fluent builder for a validated `FootprintInput`.
///
/// Fields not set explicitly keep the calculator's initial form values (see
/// `FootprintInput::default`). The estimator trusts its input; this builder is
/// where form values are checked before they reach it.
#[derive(Debug, Clone)]
pub struct FootprintInputBuilder {
    car_type: CarType,
    weekly_km: f64,
    public_transport: u32,
    electricity_kwh: f64,
    gas_usage: f64,
    renewable_percentage: f64,
    occupants: u32,
    work_from_home: u32,
    office_type: OfficeType,
    company_size: CompanySize,
    meat_consumption: MeatConsumption,
    shopping: ShoppingHabit,
    flights: u32,
}

impl Default for FootprintInputBuilder {
    fn default() -> Self {
        Self::from_input(&FootprintInput::default())
    }
}

impl FootprintInputBuilder {
    /// Creates a builder pre-filled with the initial form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from an existing input, e.g. to edit one
    /// field and re-validate.
    pub fn from_input(input: &FootprintInput) -> Self {
        Self {
            car_type: input.transport.car_type,
            weekly_km: input.transport.weekly_km,
            public_transport: input.transport.public_transport,
            electricity_kwh: input.home.electricity_kwh,
            gas_usage: input.home.gas_usage,
            renewable_percentage: input.home.renewable_percentage,
            occupants: input.home.occupants.get(),
            work_from_home: input.work.work_from_home,
            office_type: input.work.office_type,
            company_size: input.work.company_size,
            meat_consumption: input.lifestyle.meat_consumption,
            shopping: input.lifestyle.shopping,
            flights: input.lifestyle.flights,
        }
    }

    /// Sets the primary vehicle and the distance it covers each week.
    pub fn with_vehicle(mut self, car_type: CarType, weekly_km: f64) -> Self {
        self.car_type = car_type;
        self.weekly_km = weekly_km;
        self
    }

    pub fn with_public_transport_trips(mut self, trips_per_week: u32) -> Self {
        self.public_transport = trips_per_week;
        self
    }

    /// Sets monthly electricity (kWh) and heating/gas (units) consumption.
    pub fn with_home_energy(mut self, electricity_kwh: f64, gas_usage: f64) -> Self {
        self.electricity_kwh = electricity_kwh;
        self.gas_usage = gas_usage;
        self
    }

    pub fn with_renewable_percentage(mut self, percentage: f64) -> Self {
        self.renewable_percentage = percentage;
        self
    }

    pub fn with_occupants(mut self, occupants: u32) -> Self {
        self.occupants = occupants;
        self
    }

    pub fn with_work(mut self, work_from_home: u32, office_type: OfficeType) -> Self {
        self.work_from_home = work_from_home;
        self.office_type = office_type;
        self
    }

    pub fn with_company_size(mut self, company_size: CompanySize) -> Self {
        self.company_size = company_size;
        self
    }

    pub fn with_diet_and_shopping(mut self, meat: MeatConsumption, shopping: ShoppingHabit) -> Self {
        self.meat_consumption = meat;
        self.shopping = shopping;
        self
    }

    pub fn with_flights(mut self, flights_per_year: u32) -> Self {
        self.flights = flights_per_year;
        self
    }

    /// Consumes the builder and returns the validated input.
    ///
    /// # Errors
    ///
    /// Returns an `AetherError` if the household has no occupants, the
    /// renewable share is outside 0 to 100, more than seven remote days are
    /// given, or a distance or usage figure is negative or not finite.
    pub fn build(self) -> Result<FootprintInput, AetherError> {
        let occupants = NonZeroU32::new(self.occupants).ok_or(AetherError::InvalidOccupants)?;

        if !(0.0..=100.0).contains(&self.renewable_percentage) {
            return Err(AetherError::PercentageOutOfRange(self.renewable_percentage));
        }
        if self.work_from_home > 7 {
            return Err(AetherError::WorkFromHomeOutOfRange(self.work_from_home));
        }
        for (name, value) in [
            ("weekly_km", self.weekly_km),
            ("electricity_kwh", self.electricity_kwh),
            ("gas_usage", self.gas_usage),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AetherError::NegativeQuantity(name, value));
            }
        }

        Ok(FootprintInput {
            transport: TransportInput {
                car_type: self.car_type,
                weekly_km: self.weekly_km,
                public_transport: self.public_transport,
            },
            home: HomeInput {
                electricity_kwh: self.electricity_kwh,
                gas_usage: self.gas_usage,
                renewable_percentage: self.renewable_percentage,
                occupants,
            },
            work: WorkInput {
                work_from_home: self.work_from_home,
                office_type: self.office_type,
                company_size: self.company_size,
            },
            lifestyle: LifestyleInput {
                meat_consumption: self.meat_consumption,
                shopping: self.shopping,
                flights: self.flights,
            },
        })
    }
}

/// Checks an input that bypassed the builder, e.g. one read from a file.
pub fn validate(input: &FootprintInput) -> Result<(), AetherError> {
    FootprintInputBuilder::from_input(input).build().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_builder_yields_default_form() {
        assert_eq!(FootprintInputBuilder::new().build().unwrap(), FootprintInput::default());
    }

    #[test]
    fn sets_every_category() {
        let input = FootprintInputBuilder::new()
            .with_vehicle(CarType::Hybrid, 90.0)
            .with_public_transport_trips(0)
            .with_home_energy(400.0, 10.0)
            .with_renewable_percentage(60.0)
            .with_occupants(4)
            .with_work(1, OfficeType::CoWorking)
            .with_company_size(CompanySize::Small)
            .with_diet_and_shopping(MeatConsumption::High, ShoppingHabit::Frequent)
            .with_flights(5)
            .build()
            .unwrap();
        assert_eq!(input.transport.car_type, CarType::Hybrid);
        assert_eq!(input.home.occupants.get(), 4);
        assert_eq!(input.work.office_type, OfficeType::CoWorking);
        assert_eq!(input.lifestyle.flights, 5);
    }

    #[test]
    fn rejects_zero_occupants() {
        let err = FootprintInputBuilder::new().with_occupants(0).build().unwrap_err();
        assert!(matches!(err, AetherError::InvalidOccupants));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            FootprintInputBuilder::new().with_renewable_percentage(120.0).build(),
            Err(AetherError::PercentageOutOfRange(_))
        ));
        assert!(matches!(
            FootprintInputBuilder::new().with_work(8, OfficeType::Leed).build(),
            Err(AetherError::WorkFromHomeOutOfRange(8))
        ));
        assert!(matches!(
            FootprintInputBuilder::new().with_vehicle(CarType::Gas, -1.0).build(),
            Err(AetherError::NegativeQuantity("weekly_km", _))
        ));
        assert!(matches!(
            FootprintInputBuilder::new().with_home_energy(f64::NAN, 0.0).build(),
            Err(AetherError::NegativeQuantity("electricity_kwh", _))
        ));
    }

    #[test]
    fn validate_accepts_default() {
        assert!(validate(&FootprintInput::default()).is_ok());
    }
}
