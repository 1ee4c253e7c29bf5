pub mod advisor;
pub mod dashboard;
pub mod file_formats;
pub mod footprint;
pub mod hotspot;
