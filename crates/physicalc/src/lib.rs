//! physicalc library — application logic for the physique planner.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
