pub mod advisor;
pub mod bounds;
pub mod builder;
pub mod catalog;
pub mod dashboard;
pub mod dispersion;
pub mod error;
pub mod footprint;
pub mod logger;
