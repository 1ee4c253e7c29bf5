use crate::{dispersion::intensity_level, error::AetherError};
use aetherledger_schemas::hotspot::{ForecastHorizon, HotspotRecord};
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// One dispersed hotspot at one forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastLogEntry {
    pub horizon_hours: u32,
    pub hotspot_id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub radius_m: f64,
    pub intensity: f64,
    pub intensity_level: String,
}

/// Writes forecast rows to a CSV file as they are produced.
pub struct ForecastLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl ForecastLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    pub fn log_horizon(
        &mut self,
        horizon: ForecastHorizon,
        hotspots: &[HotspotRecord],
    ) -> Result<(), AetherError> {
        for hotspot in hotspots {
            let entry = ForecastLogEntry {
                horizon_hours: horizon.hours(),
                hotspot_id: hotspot.id,
                name: hotspot.name.clone(),
                lat: hotspot.position.lat,
                lng: hotspot.position.lng,
                radius_m: hotspot.radius_m,
                intensity: hotspot.intensity,
                intensity_level: intensity_level(hotspot.intensity).as_str().to_string(),
            };
            self.writer
                .serialize(entry)
                .map_err(|e| AetherError::CsvError(self.path.clone(), e))?;
        }
        self.writer
            .flush()
            .map_err(|e| AetherError::FileIO(self.path.clone(), e))?;
        tracing::debug!(hours = horizon.hours(), rows = hotspots.len(), "logged forecast horizon");
        Ok(())
    }
}

pub fn read_forecast_log(path: &str) -> Result<Vec<ForecastLogEntry>, AetherError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| AetherError::CsvError(path.to_string(), e))?;
    reader
        .deserialize()
        .map(|row| row.map_err(|e| AetherError::CsvError(path.to_string(), e)))
        .collect()
}
