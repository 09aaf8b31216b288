pub mod config;
pub mod data_sources;
pub mod errors;
pub mod models;
pub mod notation;
pub mod protein;
pub mod scoring;
pub mod studio;
