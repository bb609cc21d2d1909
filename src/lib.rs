pub mod config;
pub mod export;
pub mod league;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;
