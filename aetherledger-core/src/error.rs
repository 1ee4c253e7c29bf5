use thiserror::Error;

#[derive(Debug, Error)]
pub enum AetherError {
    #[error("A household must have at least one occupant")]
    InvalidOccupants,

    #[error("Renewable energy share must be between 0 and 100, got {0}")]
    PercentageOutOfRange(f64),

    #[error("Work-from-home days must be between 0 and 7, got {0}")]
    WorkFromHomeOutOfRange(u32),

    #[error("'{0}' must be a finite, non-negative quantity, got {1}")]
    NegativeQuantity(&'static str, f64),

    #[error("Unsupported forecast horizon of {0} hours (expected 0, 24, 48 or 72)")]
    UnsupportedForecast(u32),

    #[error("Recommended location '{0}' not found")]
    LocationNotFound(u32),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
